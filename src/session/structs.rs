//! The structs
//!

/// TLS options for connecting to the masters.
///
/// Modeled after TlsOptionsPB: skip_host_verification, ca_cert_path, cert_path, key_path.
#[derive(Debug, Clone, Default)]
pub struct TlsOptions {
    pub skip_host_verification: bool,
    pub ca_cert_path: Option<String>,
    pub client_cert_path: Option<String>,
    pub client_key_path: Option<String>,
}

/// The connection parameters for one cluster.
///
/// Resolved once from options/environment/defaults; the consumer check derives one per
/// producer cluster, reusing timeout and TLS options with the producer's addresses.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub master_addresses: Vec<String>,
    pub timeout_seconds: u64,
    pub tls: TlsOptions,
}

/// A live connection to one cluster's master endpoint.
pub struct ClusterSession {
    pub(super) client: reqwest::blocking::Client,
    pub(super) endpoint: String,
    pub(super) scheme: &'static str,
    pub(super) tls_active: bool,
}
