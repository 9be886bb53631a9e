//! The impls and functions
//!
use std::time::Instant;
use anyhow::Result;
use chrono::Local;
use colored::*;
use log::*;
use crate::cluster_config::{ProducerEntryPB, SysClusterConfigEntryPB};
use crate::consumer_check::ProducerReport;
use crate::errors::CheckError;
use crate::session::{ClusterSession, ConnectionConfig};

impl<'a> ProducerReport<'a> {
    pub fn new(consumer_cluster_uuid: &'a str, producer_id: &'a str, producer: &'a ProducerEntryPB) -> ProducerReport<'a> {
        ProducerReport {
            timestamp: Local::now(),
            consumer_cluster_uuid,
            producer_id,
            producer,
            errors: Vec::new(),
        }
    }
    /// Read the producer's cluster config over an established session and record
    /// findings. A failing request is returned unchanged: the caller decides whether
    /// that aborts the whole check.
    pub fn run_check(&mut self, producer_session: &ClusterSession) -> Result<(), CheckError> {
        let producer_config: SysClusterConfigEntryPB = producer_session.get_json("api/v1/cluster-config")?;
        self.record_producer_state(&producer_config);
        Ok(())
    }
    /// A master error embedded in the response and an empty cluster uuid are both
    /// findings, not request failures: the producer answered, its answer is suspect.
    fn record_producer_state(&mut self, producer_config: &SysClusterConfigEntryPB) {
        if let Some(error) = &producer_config.error {
            self.errors.push(format!("producer returned an error reading its cluster config: {:?}", error));
        }
        if producer_config.cluster_uuid.is_empty() {
            self.errors.push("producer cluster config carries no cluster uuid".to_string());
        }
    }
}

/// Check the consumer's replication configuration against every configured producer.
/// Only producers with findings are printed; a fully healthy topology prints nothing.
pub fn consumer_check(config: &ConnectionConfig) -> Result<()> {
    info!("begin consumer check");
    let timer = Instant::now();

    let session = ClusterSession::connect(config)?;
    let cluster_config = SysClusterConfigEntryPB::fetch(&session);
    session.close();
    let cluster_config = cluster_config?;

    let reports = collect_producer_reports(config, &cluster_config)?;
    for report in reports.iter().filter(|report| !report.errors.is_empty()) {
        let rendered = serde_json::to_string_pretty(report)?;
        println!("{}", format!("Replication problems for producer {}", report.producer_id).red().bold());
        println!("{}", rendered);
    }

    info!("consumer check took {:?}", timer.elapsed());
    Ok(())
}

/// Visit every producer of the consumer's producer map in sorted-by-id order and
/// build one [ProducerReport] per producer. A producer that cannot be reached aborts
/// the whole collection: a partial result could be misread as a clean one.
pub fn collect_producer_reports<'a>(
    config: &ConnectionConfig,
    cluster_config: &'a SysClusterConfigEntryPB,
) -> Result<Vec<ProducerReport<'a>>, CheckError> {
    let mut reports = Vec::new();
    for producer in cluster_config.sorted_producers() {
        debug!("checking producer {}", producer.key);
        let mut report = ProducerReport::new(&cluster_config.cluster_uuid, &producer.key, &producer.value);

        let producer_config = config.for_masters(producer.value.master_addresses());
        let producer_session = ClusterSession::connect(&producer_config)?;
        let check_result = report.run_check(&producer_session);
        producer_session.close();
        check_result?;

        reports.push(report);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SysClusterConfigEntryPB {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn unit_clean_producer_has_no_findings() {
        let producer = ProducerEntryPB::default();
        let mut report = ProducerReport::new("c-uuid", "p1", &producer);
        report.record_producer_state(&parse(r#"{ "cluster_uuid":"p-uuid" }"#));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn unit_embedded_error_is_a_finding() {
        let producer = ProducerEntryPB::default();
        let mut report = ProducerReport::new("c-uuid", "p1", &producer);
        let producer_config = parse(r#"
{
    "cluster_uuid":"p-uuid",
    "error":
    {
        "code":"UNKNOWN_ERROR",
        "status": { "code":"INTERNAL_ERROR", "message":"catalog manager is not initialized" }
    }
}
        "#);
        report.record_producer_state(&producer_config);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("catalog manager is not initialized"));
    }

    #[test]
    fn unit_empty_cluster_uuid_is_a_finding() {
        let producer = ProducerEntryPB::default();
        let mut report = ProducerReport::new("c-uuid", "p1", &producer);
        report.record_producer_state(&parse(r#"{ "cluster_uuid":"" }"#));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("no cluster uuid"));
    }

    #[test]
    fn unit_report_serializes_with_producer_details() {
        let producer: ProducerEntryPB = serde_json::from_str(r#"
{
    "master_addrs": [ {"host":"10.0.0.1","port":7100} ]
}
        "#).unwrap();
        let mut report = ProducerReport::new("c-uuid", "p1", &producer);
        report.record_producer_state(&parse(r#"{ "cluster_uuid":"" }"#));
        let rendered = serde_json::to_string_pretty(&report).unwrap();
        assert!(rendered.contains("\"producer_id\": \"p1\""));
        assert!(rendered.contains("10.0.0.1"));
        assert!(rendered.contains("no cluster uuid"));
    }
}
