//! The structs
//!
#![allow(non_camel_case_types)]

use crate::cluster_config::MasterErrorPB;

// src/yb/master/master_ddl.proto
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ListTablesResponsePB {
    // an empty repeated field can be left out of the json rendering entirely.
    #[serde(default)]
    pub tables: Vec<TableInfoPB>,
    pub error: Option<MasterErrorPB>,
}

// src/yb/master/master_ddl.proto ListTablesResponsePB.TableInfo
// name is carried for error messages only; the id is the table identity.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TableInfoPB {
    pub id: String,
    pub name: String,
    pub table_type: TableType,
    pub state: Option<String>,
}

// src/yb/common/common_types.proto
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableType {
    YQL_TABLE_TYPE = 2,
    REDIS_TABLE_TYPE = 3,
    PGSQL_TABLE_TYPE = 4,
    TRANSACTION_STATUS_TABLE_TYPE = 5,
}
