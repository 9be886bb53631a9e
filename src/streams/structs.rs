//! The structs
//!
use crate::cluster_config::MasterErrorPB;

// src/yb/master/master_replication.proto
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ListCDCStreamsResponsePB {
    // an empty repeated field can be left out of the json rendering entirely.
    #[serde(default)]
    pub streams: Vec<CDCStreamInfoPB>,
    pub error: Option<MasterErrorPB>,
}

// src/yb/master/master_replication.proto
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CDCStreamInfoPB {
    pub stream_id: String,
    pub table_id: Option<String>,
}
