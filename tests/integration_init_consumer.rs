//! Integration tests for the replication setup command generation, against a fake
//! master serving canned json on a loopback port.
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use yb_xcluster_check::errors::CheckError;
use yb_xcluster_check::init_consumer::synthesize_command;
use yb_xcluster_check::session::{ClusterSession, ConnectionConfig, TlsOptions};

/// Serve the given path+query -> body routes over plain http/1.1 until the test ends.
/// Unknown paths get a 404, which still counts as answering the connect probe.
fn spawn_fake_master(routes: HashMap<String, String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());
    thread::spawn(move || {
        for stream in listener.incoming() {
            let mut stream = match stream {
                Ok(stream) => stream,
                Err(_) => break,
            };
            let mut request = String::new();
            let mut buffer = [0u8; 4096];
            loop {
                match stream.read(&mut buffer) {
                    Ok(0) | Err(_) => break,
                    Ok(bytes_read) => request.push_str(&String::from_utf8_lossy(&buffer[..bytes_read])),
                }
                if request.contains("\r\n\r\n") {
                    break;
                }
            }
            let path = request.split_whitespace().nth(1).unwrap_or("").to_string();
            let response = match routes.get(&path) {
                Some(body) => format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                ),
                None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
            };
            let _ = stream.write_all(response.as_bytes());
        }
    });
    address
}

fn config_for(address: &str) -> ConnectionConfig {
    ConnectionConfig {
        master_addresses: vec![address.to_string()],
        timeout_seconds: 5,
        tls: TlsOptions::default(),
    }
}

#[test]
fn generate_command_for_keyspace_with_mixed_table_types() {
    let mut routes = HashMap::new();
    routes.insert(
        "/api/v1/tables?keyspace_name=sales".to_string(),
        r#"{ "tables": [
            { "id":"t1", "name":"orders", "table_type":"YQL_TABLE_TYPE", "state":"RUNNING" },
            { "id":"t2", "name":"pg_class", "table_type":"PGSQL_TABLE_TYPE", "state":"RUNNING" }
        ] }"#.to_string(),
    );
    routes.insert(
        "/api/v1/cluster-config".to_string(),
        r#"{ "version":1, "cluster_uuid":"c-uuid-1" }"#.to_string(),
    );
    routes.insert(
        "/api/v1/cdc-streams?table_id=t1".to_string(),
        r#"{ "streams": [ { "stream_id":"s1", "table_id":"t1" } ] }"#.to_string(),
    );
    let address = spawn_fake_master(routes);

    let session = ClusterSession::connect(&config_for(&address)).unwrap();
    let command = synthesize_command(&session, "sales").unwrap();
    session.close();

    // pg_class is not replicable and must not appear in the command.
    assert_eq!(
        command,
        "yb-admin -master_addresses $CONSUMER_MASTERS setup_universe_replication c-uuid-1 $PRODUCER_MASTERS t1 s1"
    );
}

#[test]
fn multiple_streams_for_one_table_stops_generation() {
    let mut routes = HashMap::new();
    routes.insert(
        "/api/v1/tables?keyspace_name=sales".to_string(),
        r#"{ "tables": [ { "id":"t1", "name":"orders", "table_type":"YQL_TABLE_TYPE" } ] }"#.to_string(),
    );
    routes.insert(
        "/api/v1/cluster-config".to_string(),
        r#"{ "cluster_uuid":"c-uuid-1" }"#.to_string(),
    );
    routes.insert(
        "/api/v1/cdc-streams?table_id=t1".to_string(),
        r#"{ "streams": [
            { "stream_id":"s1", "table_id":"t1" },
            { "stream_id":"s2", "table_id":"t1" }
        ] }"#.to_string(),
    );
    let address = spawn_fake_master(routes);

    let session = ClusterSession::connect(&config_for(&address)).unwrap();
    let result = synthesize_command(&session, "sales");
    session.close();

    match result {
        Err(CheckError::Configuration(message)) => {
            assert!(message.contains("found 2 streams"));
            assert!(message.contains("orders"));
        }
        other => panic!("expected a configuration error, got: {:?}", other),
    }
}

#[test]
fn keyspace_without_replicable_tables_stops_generation() {
    let mut routes = HashMap::new();
    routes.insert(
        "/api/v1/tables?keyspace_name=postgres".to_string(),
        r#"{ "tables": [ { "id":"t2", "name":"pg_class", "table_type":"PGSQL_TABLE_TYPE" } ] }"#.to_string(),
    );
    let address = spawn_fake_master(routes);

    let session = ClusterSession::connect(&config_for(&address)).unwrap();
    let result = synthesize_command(&session, "postgres");
    session.close();

    match result {
        Err(CheckError::Configuration(message)) => {
            assert!(message.contains("no replicable tables"));
            assert!(message.contains("postgres"));
        }
        other => panic!("expected a configuration error, got: {:?}", other),
    }
}
