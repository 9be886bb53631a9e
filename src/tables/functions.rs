//! The impls and functions
//!
use log::*;
use crate::errors::CheckError;
use crate::session::ClusterSession;
use crate::tables::{ListTablesResponsePB, TableInfoPB, TableType};

impl ListTablesResponsePB {
    /// List the tables of a keyspace over the session.
    pub fn fetch(session: &ClusterSession, keyspace: &str) -> Result<ListTablesResponsePB, CheckError> {
        debug!("listing tables of keyspace {} from {}", keyspace, session.endpoint());
        let response: ListTablesResponsePB = session.get_json(&format!("api/v1/tables?keyspace_name={}", keyspace))?;
        if let Some(error) = &response.error {
            return Err(CheckError::Configuration(format!("failed to list tables of keyspace {}: {:?}", keyspace, error)));
        }
        Ok(response)
    }
    /// The tables eligible for replication, in the order the master returned them.
    /// Only YQL tables have change streams; the other kinds are excluded, not errors.
    pub fn replicable_tables(&self) -> Vec<&TableInfoPB> {
        self.tables
            .iter()
            .filter(|table| table.table_type == TableType::YQL_TABLE_TYPE)
            .collect()
    }
}
