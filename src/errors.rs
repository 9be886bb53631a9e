//! The error kinds of the two workflows.
//!
//! All three kinds propagate unchanged to the top of the workflow that triggered them:
//! there is no retry and no local recovery anywhere in this crate.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// No master in the address list could be reached, or the http client could not be
    /// built from the connection parameters.
    #[error("connection error: {0}")]
    Connection(String),
    /// A master was reached, but the request or response exchange failed.
    #[error("rpc error: {0}")]
    Rpc(String),
    /// The cluster answered, but reported an inconsistent or invalid state.
    #[error("configuration error: {0}")]
    Configuration(String),
}
