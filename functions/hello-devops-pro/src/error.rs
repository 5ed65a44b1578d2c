use thiserror::Error;

/// Anything that goes wrong while turning an event into a greeting.
///
/// The handler never lets one of these escape: it is rendered into the
/// `error` field of a 500 response instead.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("{0}")]
    InvalidEvent(#[source] serde_json::Error),

    /// Not reachable with today's all-string bodies; kept so a body that
    /// can fail to serialize still lands on the 500 path.
    #[error("failed to serialize response body: {0}")]
    Serialize(#[source] serde_json::Error),
}
