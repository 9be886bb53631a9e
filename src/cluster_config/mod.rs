//! Module for reading `/api/v1/cluster-config` on the masters.
//!
//! The cluster config contains the cluster UUID (always set) and, when xCluster
//! replication is configured, the consumer registry ([ConsumerRegistryPB]) with one
//! [ProducerEntryPB] per producer cluster this cluster consumes from.
//!
//! The cluster-config functionality is called from:
//! - [crate::init_consumer::synthesize_command] (consumer cluster UUID for the command)
//! - [crate::consumer_check::consumer_check] (producer discovery and per-producer state)
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
