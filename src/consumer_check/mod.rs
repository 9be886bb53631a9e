//! Module for checking the xCluster consumer configuration against all configured producers.
//!
//! The consumer cluster's replication config is read once, and for every producer in
//! its producer map a session to that producer is opened and a [ProducerReport] is
//! built. A report with findings is printed as json; a clean producer prints nothing,
//! so a fully healthy topology produces no output at all.
//!
//! A producer that cannot be reached aborts the whole check: a partial report could be
//! misread as a clean one.
//!
//! Checks not performed here (yet), each a concrete extension point for
//! [ProducerReport::run_check]:
//! - producer/consumer table schemas match
//! - producer master addresses match the producer's actual master membership
//! - every producer master in the config is individually reachable
//! - the stream ids in the stream map exist on the producer
//! - cdc retention gflags on the producer are set high enough
//! - the same table is not replicated from two producers
//! - streams referring to deleted tables
//! - a producer entry pointing back at the consumer cluster itself
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
