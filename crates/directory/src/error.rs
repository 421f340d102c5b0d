use thiserror::Error;

/// Failure raised by a directory call.
///
/// The gateway does not classify these further: every variant is surfaced to
/// the HTTP caller as a 500 whose body carries this error's display text.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request never produced a directory response (connect, timeout,
    /// or body decode failure).
    #[error("directory request failed: {0}")]
    Transport(String),

    /// The directory answered with a non-success status; `message` is the
    /// directory's own error text, forwarded verbatim.
    #[error("{message}")]
    Backend { status: u16, message: String },
}
