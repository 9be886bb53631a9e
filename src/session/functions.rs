//! The impls and functions
//!
use std::{fs, time::Duration};
use log::*;
use serde::de::DeserializeOwned;
use crate::errors::CheckError;
use crate::session::{ClusterSession, ConnectionConfig, TlsOptions};

impl TlsOptions {
    /// TLS is considered active when any TLS option is set.
    pub fn is_active(&self) -> bool {
        self.skip_host_verification
            || self.ca_cert_path.is_some()
            || self.client_cert_path.is_some()
            || self.client_key_path.is_some()
    }
}

impl ConnectionConfig {
    /// Derive the configuration for another cluster: same timeout and TLS options,
    /// different master addresses.
    pub fn for_masters(&self, master_addresses: Vec<String>) -> ConnectionConfig {
        ConnectionConfig {
            master_addresses,
            timeout_seconds: self.timeout_seconds,
            tls: self.tls.clone(),
        }
    }
}

impl ClusterSession {
    /// Probe the master addresses in order; the first one that answers at all becomes
    /// the session endpoint. Any response counts: reachability is what is probed here,
    /// request failures on the established session are [CheckError::Rpc].
    pub fn connect(config: &ConnectionConfig) -> Result<ClusterSession, CheckError> {
        let client = build_client(config)?;
        let tls_active = config.tls.is_active();
        let scheme = if tls_active { "https" } else { "http" };
        for address in &config.master_addresses {
            match client.get(format!("{}://{}/api/v1/version", scheme, address)).send() {
                Ok(response) => {
                    debug!("connect probe {}: {}", address, response.status());
                    return Ok(ClusterSession {
                        client,
                        endpoint: address.clone(),
                        scheme,
                        tls_active,
                    });
                }
                Err(e) => {
                    debug!("connect probe {}: {}", address, e);
                }
            }
        }
        Err(CheckError::Connection(format!(
            "no master answered at any of [{}] within {} seconds",
            config.master_addresses.join(","),
            config.timeout_seconds
        )))
    }
    /// The address that answered the connect probe.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
    pub fn tls_active(&self) -> bool {
        self.tls_active
    }
    /// Issue one GET and deserialize the json response. A transport, status or parse
    /// failure is surfaced immediately as [CheckError::Rpc]; there are no retries.
    pub fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, CheckError> {
        let url = format!("{}://{}/{}", self.scheme, self.endpoint, path_and_query);
        let response = self.client.get(&url).send()
            .map_err(|e| CheckError::Rpc(format!("{}: {}", url, e)))?;
        if !response.status().is_success() {
            return Err(CheckError::Rpc(format!("{}: server returned {}", url, response.status())));
        }
        let body = response.text()
            .map_err(|e| CheckError::Rpc(format!("{}: error reading response: {}", url, e)))?;
        serde_json::from_str(&body)
            .map_err(|e| CheckError::Rpc(format!("{}: could not parse response: {}", url, e)))
    }
    /// Release the session. Dropping the session has the same effect; this exists so
    /// callers can make the release point explicit.
    pub fn close(self) {}
}

fn build_client(config: &ConnectionConfig) -> Result<reqwest::blocking::Client, CheckError> {
    let mut builder = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.timeout_seconds))
        .danger_accept_invalid_hostnames(config.tls.skip_host_verification);
    if let Some(ca_cert_path) = &config.tls.ca_cert_path {
        let pem = fs::read(ca_cert_path)
            .map_err(|e| CheckError::Connection(format!("cannot read CA certificate {}: {}", ca_cert_path, e)))?;
        let certificate = reqwest::Certificate::from_pem(&pem)
            .map_err(|e| CheckError::Connection(format!("invalid CA certificate {}: {}", ca_cert_path, e)))?;
        builder = builder.add_root_certificate(certificate);
    }
    if let (Some(cert_path), Some(key_path)) = (&config.tls.client_cert_path, &config.tls.client_key_path) {
        let cert_pem = fs::read(cert_path)
            .map_err(|e| CheckError::Connection(format!("cannot read client certificate {}: {}", cert_path, e)))?;
        let key_pem = fs::read(key_path)
            .map_err(|e| CheckError::Connection(format!("cannot read client key {}: {}", key_path, e)))?;
        let identity = reqwest::Identity::from_pkcs8_pem(&cert_pem, &key_pem)
            .map_err(|e| CheckError::Connection(format!("invalid client certificate/key: {}", e)))?;
        builder = builder.identity(identity);
    }
    builder.build()
        .map_err(|e| CheckError::Connection(format!("cannot build http client: {}", e)))
}
