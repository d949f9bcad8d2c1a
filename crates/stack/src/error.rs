/// Errors reported by [BoundedStack](crate::BoundedStack).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested capacity is negative or does not fit a `usize`.
    #[error("capacity {capacity} is out of range")]
    Config { capacity: String },

    /// The operation would grow the stack past its capacity.
    #[error("stack capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// Pop or peek on a stack with no elements.
    #[error("stack is empty")]
    Empty,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
