use thiserror::Error;

/// Error types for `StrideVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StrideVecError {
    /// Element size of zero was requested at construction
    #[error("Invalid element size")]
    BadElementSize,
    /// Item payload does not match the vector's element stride
    #[error("Bad pointer: item payload is {actual} bytes, expected {expected}")]
    BadPointer {
        /// Byte length the vector requires for one element
        expected: usize,
        /// Byte length the caller provided
        actual: usize,
    },
    /// Index or position is beyond the valid bound for the operation
    #[error("Index out of range: {index} is beyond length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Argument is outside the operation's domain
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of why the argument was rejected
        reason: &'static str,
    },
    /// The backing buffer could not be grown or allocated
    #[error("Allocation failure: could not obtain {requested} bytes")]
    AllocationFailure {
        /// Size of the allocation request in bytes
        requested: usize,
    },
}
