//! The impls and functions
//!
use itertools::Itertools;
use log::*;
use crate::errors::CheckError;
use crate::session::ClusterSession;
use crate::streams::{CDCStreamInfoPB, ListCDCStreamsResponsePB};
use crate::tables::TableInfoPB;

impl ListCDCStreamsResponsePB {
    /// List the change streams bound to a table over the session.
    pub fn fetch(session: &ClusterSession, table: &TableInfoPB) -> Result<ListCDCStreamsResponsePB, CheckError> {
        debug!("listing streams of table {} from {}", table.id, session.endpoint());
        let response: ListCDCStreamsResponsePB = session.get_json(&format!("api/v1/cdc-streams?table_id={}", table.id))?;
        if let Some(error) = &response.error {
            return Err(CheckError::Configuration(format!(
                "error getting stream for table {} ({}): {:?}",
                table.name, table.id, error
            )));
        }
        Ok(response)
    }
}

/// Enforce the one-stream-per-table invariant.
pub fn single_stream_for<'a>(
    table: &TableInfoPB,
    response: &'a ListCDCStreamsResponsePB,
) -> Result<&'a CDCStreamInfoPB, CheckError> {
    match response.streams.len() {
        1 => Ok(&response.streams[0]),
        0 => Err(CheckError::Configuration(format!(
            "no stream found for table {} ({})",
            table.name, table.id
        ))),
        stream_count => Err(CheckError::Configuration(format!(
            "found {} streams for table {} ({}): [{}]",
            stream_count,
            table.name,
            table.id,
            response.streams.iter().map(|stream| stream.stream_id.as_str()).join(",")
        ))),
    }
}
