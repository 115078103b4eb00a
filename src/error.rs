//! Error values returned by every container operation.

use thiserror::Error;

/// Error returned by container operations.
///
/// Whenever an operation returns an error the container is left exactly as it
/// was before the call.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// An argument was malformed, e.g. an element slice of the wrong width.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A logical index was past the end of the container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// Size arithmetic would have wrapped around.
    #[error("size arithmetic overflowed")]
    RangeExceeded,

    /// Growth was needed but the element limit has been reached.
    #[error("capacity exhausted at {capacity} elements")]
    CapacityExhausted {
        /// The capacity that could not be grown.
        capacity: usize,
    },

    /// The allocator refused the request.
    #[error("allocation of {bytes} bytes failed")]
    OutOfMemory {
        /// Total size of the requested block.
        bytes: usize,
    },

    /// A caller supplied destructor, copier or comparator failed.
    #[error("element callback failed: {0}")]
    CallbackFailed(#[from] CallbackError),
}

impl Error {
    pub(crate) fn invalid_arg(name: &'static str, message: impl Into<String>) -> Error {
        Error::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Error {
        Error::IndexOutOfRange { index, len }
    }
}

/// Failure signal raised by an element callback.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    /// Creates a callback error with the given message.
    pub fn new(message: impl Into<String>) -> CallbackError {
        CallbackError {
            message: message.into(),
        }
    }

    /// The message the callback reported.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::out_of_range(4, 2).to_string(),
            "index 4 out of range for length 2"
        );
        let err: Error = CallbackError::new("boom").into();
        assert_eq!(err.to_string(), "element callback failed: boom");
        assert_eq!(
            Error::invalid_arg("element", "too short").to_string(),
            "invalid argument element: too short"
        );
    }
}
