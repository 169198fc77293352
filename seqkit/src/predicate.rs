use seqkit_value::Truthy;

use crate::verdict::{BoxError, Verdict};

/// Return the argument unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Boolean negation of a value's truthiness.
#[inline]
pub fn not<T: Truthy + ?Sized>(value: &T) -> bool {
    !value.is_truthy()
}

/// A predicate that holds exactly where `predicate` doesn't.
///
/// Failures of the wrapped predicate are passed through unchanged.
pub fn negate<T, F, R>(
    mut predicate: F,
) -> impl FnMut(&T, usize, &[T]) -> std::result::Result<bool, BoxError>
where
    F: FnMut(&T, usize, &[T]) -> R,
    R: Verdict,
{
    move |item: &T, index: usize, sequence: &[T]| {
        predicate(item, index, sequence)
            .into_verdict()
            .map(|verdict| !verdict)
    }
}
