//! Remote feed loader error types.

/// Errors from the remote feed loader.
///
/// Transport failures and malformed responses are deliberately distinct:
/// `Connectivity` means the request never completed, `InvalidData` means the
/// endpoint answered but not with a status-200 well-formed feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The transport could not complete the request.
    #[error("connectivity: could not reach the feed endpoint")]
    Connectivity,

    /// The response was reachable but not a status-200 well-formed feed.
    #[error("invalid data: response was not a well-formed feed")]
    InvalidData,
}
