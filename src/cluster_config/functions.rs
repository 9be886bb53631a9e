//! The impls and functions
//!
use log::*;
use crate::cluster_config::{ProducerEntryPB, ProducerMapEntry, SysClusterConfigEntryPB};
use crate::errors::CheckError;
use crate::session::ClusterSession;

impl SysClusterConfigEntryPB {
    /// Read the cluster config over the session. An embedded error field means the
    /// request itself succeeded but the master reports a semantic problem, which is a
    /// [CheckError::Configuration], distinct from a transport failure.
    ///
    /// The config is a read-only snapshot: it is fetched per operation and never cached.
    pub fn fetch(session: &ClusterSession) -> Result<SysClusterConfigEntryPB, CheckError> {
        debug!("reading cluster-config from {}", session.endpoint());
        let cluster_config: SysClusterConfigEntryPB = session.get_json("api/v1/cluster-config")?;
        Self::validated(cluster_config)
    }
    fn validated(cluster_config: SysClusterConfigEntryPB) -> Result<SysClusterConfigEntryPB, CheckError> {
        if let Some(error) = &cluster_config.error {
            return Err(CheckError::Configuration(format!("failed to get cluster config: {:?}", error)));
        }
        Ok(cluster_config)
    }
    /// The producer map entries in deterministic, sorted-by-producer-id order.
    /// Map iteration order on the cluster side is unspecified; the contract here is
    /// only "every producer exactly once", the sort makes runs reproducible.
    pub fn sorted_producers(&self) -> Vec<&ProducerMapEntry> {
        let mut producers: Vec<&ProducerMapEntry> = self.consumer_registry
            .as_ref()
            .map(|registry| registry.producer_map.iter().collect())
            .unwrap_or_default();
        producers.sort_by(|a, b| a.key.cmp(&b.key));
        producers
    }
}

impl ProducerEntryPB {
    /// The producer master addresses as `host:port` strings, in declared order.
    pub fn master_addresses(&self) -> Vec<String> {
        self.master_addrs
            .as_ref()
            .map(|addresses| addresses.iter().map(|hp| format!("{}:{}", hp.host, hp.port)).collect())
            .unwrap_or_default()
    }
}
