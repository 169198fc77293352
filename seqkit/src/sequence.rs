use seqkit_value::{Record, Value};
use tracing::trace;

use crate::error::{Error, Result};
use crate::matching::Matches;
use crate::verdict::{evaluate, BoxError, Verdict};

/// Keep the elements for which the predicate holds, in their original
/// order.
///
/// The input is not modified. If the predicate fails for any element,
/// nothing is returned but the error.
pub fn filter<T, F, R>(sequence: &[T], mut predicate: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> R,
    R: Verdict,
{
    let mut result = Vec::new();
    for (index, item) in sequence.iter().enumerate() {
        if evaluate(&mut predicate, sequence, index)? {
            result.push(item.clone());
        }
    }
    Ok(result)
}

/// Transform every element, one to one.
pub fn map<T, U, F>(sequence: &[T], mut transform: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut result = Vec::with_capacity(sequence.len());
    for (index, item) in sequence.iter().enumerate() {
        result.push(transform(item, index, sequence));
    }
    result
}

/// Transform every element with a transform that can fail.
///
/// The first failure aborts the transformation.
pub fn try_map<T, U, E, F>(sequence: &[T], mut transform: F) -> Result<Vec<U>>
where
    F: FnMut(&T, usize, &[T]) -> std::result::Result<U, E>,
    E: Into<BoxError>,
{
    let mut result = Vec::with_capacity(sequence.len());
    for (index, item) in sequence.iter().enumerate() {
        let value = transform(item, index, sequence).map_err(|source| {
            trace!(index, "transform failed, aborting");
            Error::Transform {
                index,
                source: source.into(),
            }
        })?;
        result.push(value);
    }
    Ok(result)
}

/// The position of the first element for which the predicate holds.
///
/// The scan goes left to right and stops at the first match; the predicate
/// isn't evaluated for any later element. `None` means no element matched.
pub fn find_index<T, F, R>(sequence: &[T], mut predicate: F) -> Result<Option<usize>>
where
    F: FnMut(&T, usize, &[T]) -> R,
    R: Verdict,
{
    for index in 0..sequence.len() {
        if evaluate(&mut predicate, sequence, index)? {
            trace!(index, len = sequence.len(), "scan stopped at match");
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// The first element for which the predicate holds.
///
/// Short-circuits like [`find_index`].
pub fn find<T, F, R>(sequence: &[T], predicate: F) -> Result<Option<&T>>
where
    F: FnMut(&T, usize, &[T]) -> R,
    R: Verdict,
{
    Ok(find_index(sequence, predicate)?.map(|index| &sequence[index]))
}

/// The first record whose field `key` is strictly equal to `value`.
pub fn find_by<'a>(
    sequence: &'a [Record],
    key: &str,
    value: impl Into<Value>,
) -> Option<&'a Record> {
    let matches = Matches::pair(key, value);
    sequence.iter().find(|record| matches.test(record))
}
