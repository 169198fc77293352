//! Small dynamic functions, ready to be composed.
//!
//! Each of these takes exactly one argument. The list functions expect
//! a `Value::List` argument and fail with a type error otherwise.
use seqkit_value::{Truthy, Value, ValueKind};

use crate::compose::{unary, Composition, Function};
use crate::error::{Error, Result};
use crate::quantifier;
use crate::sequence::{find, find_index};

fn expect_list(value: &Value) -> Result<&[Value]> {
    value.as_list().ok_or(Error::Type {
        expected: ValueKind::List,
        found: value.kind(),
    })
}

pub fn identity() -> Function {
    unary(Ok)
}

pub fn not() -> Function {
    unary(|value| Ok(Value::Boolean(!value.is_truthy())))
}

/// Curried strict equality: `equals(a)(b)` is `a === b`.
pub fn equals(expected: impl Into<Value>) -> Function {
    let expected = expected.into();
    unary(move |value| Ok(Value::Boolean(expected.strictly_equals(&value))))
}

/// The first truthy element of a list, or `Null`.
pub fn positive() -> Function {
    unary(|value| {
        let list = expect_list(&value)?;
        let found = find(list, |item, _, _| item.is_truthy())?;
        Ok(found.cloned().unwrap_or(Value::Null))
    })
}

/// The index of the first falsy element of a list, or `-1`.
pub fn negative_index() -> Function {
    unary(|value| {
        let list = expect_list(&value)?;
        let index = find_index(list, |item, _, _| !item.is_truthy())?;
        Ok(Value::Integer(index.map_or(-1, |index| index as i64)))
    })
}

pub fn some() -> Function {
    unary(|value| Ok(Value::Boolean(quantifier::some(expect_list(&value)?)?)))
}

pub fn every() -> Function {
    unary(|value| Ok(Value::Boolean(quantifier::every(expect_list(&value)?)?)))
}

/// `not ∘ not ∘ positive`: whether a list has a truthy element.
pub fn compose_some() -> Composition {
    Composition::from_nonempty(vec![not(), not(), positive()])
}

/// `equals(-1) ∘ negative_index`: whether a list has no falsy element.
pub fn compose_every() -> Composition {
    Composition::from_nonempty(vec![equals(-1), negative_index()])
}
