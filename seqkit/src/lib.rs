//! Pure, synchronous higher-order functions over sequences.
//!
//! Sequences are plain slices. Predicates and transforms receive the
//! element, its index and the whole sequence, and are expected to be free
//! of side effects. A predicate may fail; the failure aborts the scan and
//! is reported as an [`Error`] without any partial result.
mod accessor;
mod compose;
pub mod error;
pub mod library;
mod matching;
mod predicate;
mod quantifier;
mod sequence;
mod verdict;

pub use accessor::{property_accessor, PropertyAccessor};
pub use compose::{compose, function, unary, Composition, Function};
pub use error::{Error, Result};
pub use matching::{matches, matches_pair, Matches};
pub use predicate::{identity, negate, not};
pub use quantifier::{every, every_by, some, some_by};
pub use sequence::{filter, find, find_by, find_index, map, try_map};
pub use verdict::{BoxError, Verdict};

pub use seqkit_value::{record, FieldNotFound, Record, Truthy, Value, ValueKind};
