/// Errors returned by [`crate::StickyHeaders`] queries.
///
/// Every variant is a caller contract violation; nothing here is retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An adapter position was not below the adapter's item count.
    #[error("position {position} is out of range (item count {count})")]
    IndexOutOfRange { position: usize, count: usize },
}
