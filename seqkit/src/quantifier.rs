use seqkit_value::Truthy;

use crate::error::Result;
use crate::predicate::negate;
use crate::sequence::{find, find_index};
use crate::verdict::Verdict;

/// True if at least one element is truthy.
pub fn some<T: Truthy>(sequence: &[T]) -> Result<bool> {
    some_by(sequence, |item, _, _| item.is_truthy())
}

/// True if the predicate holds for at least one element.
///
/// Stops at the first element for which it holds.
pub fn some_by<T, F, R>(sequence: &[T], predicate: F) -> Result<bool>
where
    F: FnMut(&T, usize, &[T]) -> R,
    R: Verdict,
{
    Ok(find(sequence, predicate)?.is_some())
}

/// True if no element is falsy.
pub fn every<T: Truthy>(sequence: &[T]) -> Result<bool> {
    every_by(sequence, |item, _, _| item.is_truthy())
}

/// True if the predicate holds for every element, and so for the empty
/// sequence.
///
/// Looks for the first element where the predicate fails and stops there.
pub fn every_by<T, F, R>(sequence: &[T], predicate: F) -> Result<bool>
where
    F: FnMut(&T, usize, &[T]) -> R,
    R: Verdict,
{
    Ok(find_index(sequence, negate::<T, _, _>(predicate))?.is_none())
}

#[cfg(test)]
mod tests {
    use seqkit_value::Value;

    use super::*;

    fn values(values: Vec<Value>) -> Vec<Value> {
        values
    }

    #[test]
    fn test_every() {
        assert!(!every(&values(vec![0.into(), false.into()])).unwrap());
        assert!(every(&values(vec![1.into(), true.into()])).unwrap());
        assert!(every::<Value>(&[]).unwrap());
    }

    #[test]
    fn test_some() {
        assert!(!some(&values(vec![0.into(), false.into()])).unwrap());
        assert!(some(&values(vec![0.into(), 1.into()])).unwrap());
        assert!(!some::<Value>(&[]).unwrap());
    }

    #[test]
    fn test_some_by_coerces_to_bool() {
        // the element found is falsy, but something was found
        assert!(some_by(&[0, 1], |n, _, _| *n == 0).unwrap());
    }

    #[test]
    fn test_every_short_circuits() {
        let mut calls = 0;
        let all_small = every_by(&[1, 2, 30, 4, 50], |n, _, _| {
            calls += 1;
            *n < 10
        })
        .unwrap();
        assert!(!all_small);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_some_short_circuits() {
        let mut calls = 0;
        let any_big = some_by(&[1, 20, 30], |n, _, _| {
            calls += 1;
            *n > 10
        })
        .unwrap();
        assert!(any_big);
        assert_eq!(calls, 2);
    }
}
