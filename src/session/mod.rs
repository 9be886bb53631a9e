//! Module for the connection to a cluster's masters.
//!
//! A [ClusterSession] is opened explicitly with [ClusterSession::connect], used for a
//! bounded sequence of requests, and released when it goes out of scope (an explicit
//! [ClusterSession::close] exists for symmetry). Connecting probes the master address
//! list in order; the first address that answers becomes the session endpoint.
//!
//! The connection parameters are carried in a [ConnectionConfig], resolved once at the
//! command-line boundary, and derived per producer cluster in the consumer check via
//! [ConnectionConfig::for_masters].
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
