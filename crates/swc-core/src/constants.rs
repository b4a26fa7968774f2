/// Parent identifier that marks a node as a tree root.
pub const ROOT_MARKER: i64 = -1;

/// Engine version stamped into every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column order of an SWC record.
pub const SWC_COLUMNS: [&str; 7] = ["node_id", "compartment", "x", "y", "z", "r", "parent"];

/// Environment variable read by [`crate::logging::init_tracing`].
pub const LOG_ENV_VAR: &str = "SWC_LOG";
