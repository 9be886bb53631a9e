//! The impls and functions
//!
use std::time::Instant;
use anyhow::Result;
use itertools::Itertools;
use log::*;
use crate::cluster_config::SysClusterConfigEntryPB;
use crate::errors::CheckError;
use crate::session::{ClusterSession, ConnectionConfig};
use crate::streams::{single_stream_for, ListCDCStreamsResponsePB};
use crate::tables::ListTablesResponsePB;

/// Generate and print the `yb-admin setup_universe_replication` command for a keyspace.
///
/// The scanned cluster is the intended producer; the command is meant to be run against
/// the consumer cluster after filling in the placeholders.
pub fn init_consumer(config: &ConnectionConfig, keyspace: &str) -> Result<()> {
    info!("begin generating replication setup command for keyspace {}", keyspace);
    let timer = Instant::now();

    let session = ClusterSession::connect(config)?;
    let command = synthesize_command(&session, keyspace);
    session.close();
    let command = command?;

    info!("generating replication setup command took {:?}", timer.elapsed());
    println!("{}", command);
    Ok(())
}

/// Resolve the tables and streams of the keyspace into the setup command.
pub fn synthesize_command(session: &ClusterSession, keyspace: &str) -> Result<String, CheckError> {
    let table_list = ListTablesResponsePB::fetch(session, keyspace)?;
    let tables = table_list.replicable_tables();
    if tables.is_empty() {
        return Err(CheckError::Configuration(format!(
            "no replicable tables found in keyspace {}",
            keyspace
        )));
    }

    let cluster_config = SysClusterConfigEntryPB::fetch(session)?;

    let mut table_ids: Vec<&str> = Vec::new();
    let mut stream_ids: Vec<String> = Vec::new();
    for table in tables {
        let streams = ListCDCStreamsResponsePB::fetch(session, table)?;
        let stream = single_stream_for(table, &streams)?;
        debug!("table {} ({}) has stream {}", table.name, table.id, stream.stream_id);
        table_ids.push(&table.id);
        stream_ids.push(stream.stream_id.clone());
    }

    Ok(build_command(
        &cluster_config.cluster_uuid,
        session.tls_active(),
        &table_ids,
        &stream_ids,
    ))
}

/// Render the command text. Placeholders stand in for the settings a diagnostic scan
/// cannot know: the consumer master addresses, this cluster's master addresses as the
/// consumer should reach them, and the certificate directory when TLS is in play.
pub fn build_command(cluster_uuid: &str, tls_active: bool, table_ids: &[&str], stream_ids: &[String]) -> String {
    let certs_clause = if tls_active { "-certs_dir_name $CERTS_DIR " } else { "" };
    format!(
        "yb-admin -master_addresses $CONSUMER_MASTERS {}setup_universe_replication {} $PRODUCER_MASTERS {} {}",
        certs_clause,
        cluster_uuid,
        table_ids.iter().join(","),
        stream_ids.iter().join(","),
    )
}
