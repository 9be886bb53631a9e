//! Module for generating the `yb-admin setup_universe_replication` command for a keyspace.
//!
//! The generated command is printed, never executed: the cluster remains untouched.
//! For every replicable table of the keyspace the bound change stream is resolved;
//! a table with zero or multiple streams stops the generation, so the printed command
//! is either complete for the keyspace or absent.
//!
//! The consumer and producer master addresses are not known here and are emitted as
//! the `$CONSUMER_MASTERS` and `$PRODUCER_MASTERS` placeholders for the operator to
//! fill in. With TLS active on the scanned cluster a `-certs_dir_name $CERTS_DIR`
//! placeholder is added as well.
mod functions;

pub use functions::*;
