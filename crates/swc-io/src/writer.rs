//! SWC text output with the canonical relabeling applied.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use swc_core::config::IoConfig;
use swc_core::constants::ENGINE_VERSION;
use swc_core::errors::{SwcError, SwcResult};
use swc_core::models::NodeRecord;
use swc_graph::{apply_mapping, CanonicalMapping};

/// Write `records` relabeled through `mapping`. An empty mapping writes the
/// records unchanged, in input order.
pub fn write_swc<W: Write>(
    out: &mut W,
    records: &[NodeRecord],
    mapping: &CanonicalMapping,
    config: &IoConfig,
) -> std::io::Result<()> {
    let sep = if config.splits_on_whitespace() {
        " "
    } else {
        config.separator.as_str()
    };

    writeln!(out, "# Standardized by swc-standardizer {ENGINE_VERSION}")?;
    writeln!(out, "# id type x y z r parent")?;
    for r in apply_mapping(records, mapping) {
        let fields = [
            r.node_id.to_string(),
            r.compartment.code().to_string(),
            r.x.to_string(),
            r.y.to_string(),
            r.z.to_string(),
            r.r.to_string(),
            r.parent.to_string(),
        ];
        writeln!(out, "{}", fields.join(sep))?;
    }
    out.flush()
}

/// Write to a file, replacing any existing content.
pub fn write_swc_path(
    path: impl AsRef<Path>,
    records: &[NodeRecord],
    mapping: &CanonicalMapping,
    config: &IoConfig,
) -> SwcResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SwcError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_swc(&mut out, records, mapping, config).map_err(|e| SwcError::io(path, e))?;
    debug!(path = %path.display(), records = records.len(), relabeled = !mapping.is_empty(), "wrote swc");
    Ok(())
}
