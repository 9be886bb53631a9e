//! Module for listing the tables of a keyspace on the masters.
//!
//! Only tables of type [TableType::YQL_TABLE_TYPE] support change streams; all other
//! table types are silently excluded from replication by
//! [ListTablesResponsePB::replicable_tables].
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
