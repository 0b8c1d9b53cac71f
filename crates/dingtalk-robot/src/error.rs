use thiserror::Error;

/// Failure taxonomy for a single webhook call.
///
/// Every failure is returned to the immediate caller verbatim; nothing is
/// logged-and-swallowed, retried, or recovered at this layer. A response
/// that decodes cleanly is a success here even when the remote end reports
/// an application-level error code inside the JSON — interpreting the
/// decoded map is the caller's concern.
///
/// Passing a message outside the closed variant set is ruled out at compile
/// time by the [`Message`](crate::message::Message) enum, so no runtime
/// variant exists for it.
#[derive(Debug, Error)]
pub enum RobotError {
    /// The payload or envelope could not be encoded as JSON.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),
    /// The HTTP round trip failed: connect, timeout, or read error.
    #[error("webhook transport error")]
    Transport(#[source] reqwest::Error),
    /// The response body was not a JSON object; the partial body is discarded.
    #[error("failed to decode webhook response")]
    Decode(#[source] serde_json::Error),
}

pub type RobotResult<T> = Result<T, RobotError>;
