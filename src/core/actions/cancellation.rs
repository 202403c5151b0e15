use std::fmt;

/// Returned by a render that gave up because its view went stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render superseded by a newer view")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by band workers before every row.
pub trait CancelToken: Sync {
    fn is_cancelled(&self) -> bool;
}
