//! yb_xcluster_check: inspect the xCluster (cross-cluster) replication topology of a
//! YugabyteDB cluster via the master HTTP endpoints.
//!
//! Two workflows are provided:
//! - `--init-consumer <KEYSPACE>`: generate the `yb-admin setup_universe_replication`
//!   command needed to initialize xCluster replication for a keyspace
//!   ([init_consumer::init_consumer]).
//! - `--consumer-check`: read the consumer cluster's replication configuration, connect
//!   to every configured producer cluster and report configuration problems
//!   ([consumer_check::consumer_check]).
//!
//! Both workflows are read-only: nothing on any cluster is mutated.
#[macro_use]
extern crate serde_derive;

use std::collections::HashMap;
use clap::Parser;
use anyhow::Result;

pub mod errors;
pub mod session;
pub mod cluster_config;
pub mod tables;
pub mod streams;
pub mod init_consumer;
pub mod consumer_check;
pub mod utility;

/// The default master addresses, used when neither `--masters` nor `YBXC_MASTERS` is set.
pub const DEFAULT_MASTERS: &str = "192.168.66.80:7000,192.168.66.81:7000,192.168.66.82:7000";
/// The default connect/request timeout in seconds.
pub const DEFAULT_TIMEOUT: &str = "30";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Comma separated list of master hostname:port entries of the consumer cluster
    #[arg(short, long, value_name = "host:port,host:port,..")]
    pub masters: Option<String>,
    /// Connect and request timeout in seconds
    #[arg(short, long, value_name = "seconds")]
    pub timeout: Option<String>,
    /// Do not verify the hostname in the master TLS certificate
    #[arg(long)]
    pub skip_host_verification: bool,
    /// Path to the CA certificate (PEM)
    #[arg(long, value_name = "path")]
    pub ca_cert: Option<String>,
    /// Path to the client certificate (PEM)
    #[arg(long, value_name = "path")]
    pub client_cert: Option<String>,
    /// Path to the client key (PEM)
    #[arg(long, value_name = "path")]
    pub client_key: Option<String>,
    /// Generate the command to initialize xCluster replication for a keyspace
    #[arg(long, value_name = "KEYSPACE")]
    pub init_consumer: Option<String>,
    /// Check the xCluster consumer configuration against all configured producers
    #[arg(long)]
    pub consumer_check: bool,
    /// Write the applied masters and timeout settings to .env
    #[arg(long)]
    pub write_dotenv: bool,
}

/// Resolve the connection parameters once at the boundary and dispatch the workflow.
pub fn run(options: Opts) -> Result<()> {
    let mut changed_options = HashMap::new();
    let masters = utility::set_masters(&options.masters, &mut changed_options);
    let timeout = utility::set_timeout(&options.timeout, &mut changed_options)?;
    utility::dotenv_writer(options.write_dotenv, changed_options)?;

    let config = session::ConnectionConfig {
        master_addresses: masters,
        timeout_seconds: timeout,
        tls: session::TlsOptions {
            skip_host_verification: options.skip_host_verification,
            ca_cert_path: options.ca_cert.clone(),
            client_cert_path: options.client_cert.clone(),
            client_key_path: options.client_key.clone(),
        },
    };

    if let Some(keyspace) = &options.init_consumer {
        init_consumer::init_consumer(&config, keyspace)?;
    } else if options.consumer_check {
        consumer_check::consumer_check(&config)?;
    } else {
        println!("Nothing to do: use --init-consumer <KEYSPACE> or --consumer-check.");
    }
    Ok(())
}
