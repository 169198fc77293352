use std::fmt;
use std::rc::Rc;
use std::slice;

use seqkit_value::Value;
use tracing::trace;

use crate::error::{Error, Result};

/// A dynamically typed function: takes any number of values, produces one.
pub type Function = Rc<dyn Fn(&[Value]) -> Result<Value>>;

/// Wrap a closure as a [`Function`].
pub fn function<F>(f: F) -> Function
where
    F: Fn(&[Value]) -> Result<Value> + 'static,
{
    Rc::new(f)
}

/// Wrap a single-argument closure as a [`Function`]. Calling it with any
/// other number of arguments is an arity error.
pub fn unary<F>(f: F) -> Function
where
    F: Fn(Value) -> Result<Value> + 'static,
{
    Rc::new(move |arguments: &[Value]| match arguments {
        [argument] => f(argument.clone()),
        _ => Err(Error::Arity {
            expected: 1,
            found: arguments.len(),
        }),
    })
}

/// Right-to-left composition of functions.
///
/// The last function receives the arguments of the call. Every function to
/// its left receives a single argument: the result of the function to its
/// right.
#[derive(Clone)]
pub struct Composition {
    // never empty
    functions: Vec<Function>,
}

impl Composition {
    pub fn new(functions: Vec<Function>) -> Result<Self> {
        if functions.is_empty() {
            return Err(Error::EmptyComposition);
        }
        Ok(Self { functions })
    }

    pub(crate) fn from_nonempty(functions: Vec<Function>) -> Self {
        debug_assert!(!functions.is_empty());
        Self { functions }
    }

    /// The number of composed functions.
    pub fn steps(&self) -> usize {
        self.functions.len()
    }

    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        trace!(steps = self.functions.len(), "calling composition");
        let Some((innermost, rest)) = self.functions.split_last() else {
            return Err(Error::EmptyComposition);
        };
        let mut result = innermost(arguments)?;
        for function in rest.iter().rev() {
            result = function(slice::from_ref(&result))?;
        }
        Ok(result)
    }

    /// The composition as a function itself, so it can be composed further.
    pub fn into_function(self) -> Function {
        Rc::new(move |arguments: &[Value]| self.call(arguments))
    }
}

impl fmt::Debug for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composition")
            .field("steps", &self.functions.len())
            .finish()
    }
}

pub fn compose(functions: Vec<Function>) -> Result<Composition> {
    Composition::new(functions)
}

/// Statically typed right-to-left composition.
///
/// `compose!(f, g, h)` is a closure `x -> f(g(h(x)))`. Use a tuple to pass
/// several arguments to the innermost function.
///
/// ```
/// use seqkit::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let f = compose!(add_one, double);
/// assert_eq!(f(5), 11);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        compile_error!("compose! needs at least one function")
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |x| outer(inner(x))
    }};
}
