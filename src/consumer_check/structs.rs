//! The structs
//!
use chrono::{DateTime, Local};
use crate::cluster_config::ProducerEntryPB;

/// The findings for one producer entry of the consumer's producer map.
#[derive(Serialize, Debug)]
pub struct ProducerReport<'a> {
    pub timestamp: DateTime<Local>,
    pub consumer_cluster_uuid: &'a str,
    pub producer_id: &'a str,
    pub producer: &'a ProducerEntryPB,
    pub errors: Vec<String>,
}
