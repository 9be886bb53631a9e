//! The structs
//!

// src/yb/master/catalog_entity_info.proto
// error: added; set by the master when reading the config failed semantically,
// while the request itself succeeded.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SysClusterConfigEntryPB {
    pub version: Option<i32>,
    pub cluster_uuid: String,
    pub consumer_registry: Option<ConsumerRegistryPB>,
    pub error: Option<MasterErrorPB>,
}

// src/yb/master/master_types.proto
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MasterErrorPB {
    pub code: Option<String>,
    pub status: Option<AppStatusPB>,
}

// src/yb/common/wire_protocol.proto
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppStatusPB {
    pub code: Option<String>,
    pub message: Option<String>,
}

// src/yb/cdc/cdc_consumer.proto
// producer_map is a protobuf map field; its json rendering is a list of
// key/value entries, which requires an extra entry struct.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ConsumerRegistryPB {
    pub producer_map: Vec<ProducerMapEntry>,
}

// custom: see above.
#[derive(Serialize, Deserialize, Debug)]
pub struct ProducerMapEntry {
    pub key: String,
    pub value: ProducerEntryPB,
}

// src/yb/cdc/cdc_consumer.proto
// disable_stream has to be optional, not in PB definition.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ProducerEntryPB {
    pub stream_map: Option<Vec<StreamMapEntry>>,
    pub master_addrs: Option<Vec<HostPortPB>>,
    pub disable_stream: Option<bool>,
}

// custom: see above.
#[derive(Serialize, Deserialize, Debug)]
pub struct StreamMapEntry {
    pub key: String,
    pub value: StreamEntryPB,
}

// src/yb/cdc/cdc_consumer.proto
#[derive(Serialize, Deserialize, Debug)]
pub struct StreamEntryPB {
    pub consumer_table_id: Option<String>,
    pub producer_table_id: Option<String>,
    pub local_tserver_optimized: Option<bool>,
}

// src/yb/common/common_net.proto
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HostPortPB {
    pub host: String,
    pub port: u32,
}
