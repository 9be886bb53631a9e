//! Module for resolving the change (CDC) stream bound to a table.
//!
//! In a correctly configured cluster every replicable table has exactly one stream.
//! Zero or more than one stream is a configuration error, not a transient condition:
//! [single_stream_for] is a hard stop in that case, naming the table and the full set
//! of stream ids observed.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
