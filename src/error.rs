//! Stable error codes shared by every subsystem error type.

/// Machine-readable classification for an error.
///
/// `retryable` answers whether the user may reasonably resubmit the same
/// action. Nothing in the crate retries automatically.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
