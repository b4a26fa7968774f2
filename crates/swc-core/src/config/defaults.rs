// Single source of truth for all default values.

// --- QC rules ---
pub const DEFAULT_SOMA_CHILDREN_DISTANCE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_ALLOW_SOMA_CHILDREN_TO_BRANCH: bool = false;

// --- IO ---
pub const DEFAULT_SEPARATOR: &str = " ";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
