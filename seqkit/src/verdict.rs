use tracing::trace;

use crate::error::{Error, Result};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The outcome of a predicate: either a plain `bool`, or a `Result` when
/// the predicate can fail.
pub trait Verdict {
    fn into_verdict(self) -> std::result::Result<bool, BoxError>;
}

impl Verdict for bool {
    #[inline]
    fn into_verdict(self) -> std::result::Result<bool, BoxError> {
        Ok(self)
    }
}

impl<E> Verdict for std::result::Result<bool, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn into_verdict(self) -> std::result::Result<bool, BoxError> {
        self.map_err(Into::into)
    }
}

// Run the predicate on the element at `index`, turning a failure into an
// error that carries the index.
pub(crate) fn evaluate<T, F, R>(predicate: &mut F, sequence: &[T], index: usize) -> Result<bool>
where
    F: FnMut(&T, usize, &[T]) -> R,
    R: Verdict,
{
    predicate(&sequence[index], index, sequence)
        .into_verdict()
        .map_err(|source| {
            trace!(index, "predicate failed, aborting scan");
            Error::Predicate { index, source }
        })
}
