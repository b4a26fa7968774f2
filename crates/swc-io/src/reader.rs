//! SWC text parsing.
//!
//! One record per line, `node_id compartment x y z r parent`. Blank lines
//! and `#` comments (whole-line or trailing) are skipped. Columns past the
//! seventh are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use swc_core::config::IoConfig;
use swc_core::constants::SWC_COLUMNS;
use swc_core::errors::{InputError, RecordLocation, SwcError, SwcResult};
use swc_core::models::NodeRecord;

/// Parse SWC text held in memory.
pub fn read_swc(text: &str, config: &IoConfig) -> Result<Vec<NodeRecord>, InputError> {
    let mut parser = Parser::new(config);
    for (idx, line) in text.lines().enumerate() {
        parser.line(idx + 1, line)?;
    }
    Ok(parser.finish())
}

/// Parse SWC text from any buffered reader.
pub fn read_swc_from<R: BufRead>(reader: R, config: &IoConfig) -> SwcResult<Vec<NodeRecord>> {
    let mut parser = Parser::new(config);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SwcError::io("<reader>", e))?;
        parser.line(idx + 1, &line)?;
    }
    Ok(parser.finish())
}

/// Read and parse an SWC file.
pub fn read_swc_path(path: impl AsRef<Path>, config: &IoConfig) -> SwcResult<Vec<NodeRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SwcError::io(path, e))?;
    let mut parser = Parser::new(config);
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| SwcError::io(path, e))?;
        parser.line(idx + 1, &line)?;
    }
    let records = parser.finish();
    debug!(path = %path.display(), records = records.len(), "read swc");
    Ok(records)
}

struct Parser<'a> {
    config: &'a IoConfig,
    records: Vec<NodeRecord>,
    seen: HashMap<i64, usize>,
}

impl<'a> Parser<'a> {
    fn new(config: &'a IoConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            seen: HashMap::new(),
        }
    }

    fn line(&mut self, number: usize, line: &str) -> Result<(), InputError> {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if content.trim().is_empty() {
            return Ok(());
        }

        let location = RecordLocation::Line(number);
        let columns = self.split(content);
        let record = parse_record(&columns, location)?;
        if let Some(&first) = self.seen.get(&record.node_id) {
            return Err(InputError::DuplicateNodeId {
                node_id: record.node_id,
                location,
                first: RecordLocation::Line(first),
            });
        }
        self.seen.insert(record.node_id, number);
        self.records.push(record);
        Ok(())
    }

    fn split<'l>(&self, content: &'l str) -> Vec<&'l str> {
        if self.config.splits_on_whitespace() {
            content.split_whitespace().collect()
        } else {
            content
                .trim()
                .split(self.config.separator.as_str())
                .map(str::trim)
                .collect()
        }
    }

    fn finish(self) -> Vec<NodeRecord> {
        self.records
    }
}

fn parse_record(columns: &[&str], location: RecordLocation) -> Result<NodeRecord, InputError> {
    let column = |i: usize| -> Result<&str, InputError> {
        match columns.get(i) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(InputError::MissingField {
                location,
                field: SWC_COLUMNS[i],
            }),
        }
    };

    let record = NodeRecord::new(
        parse_int(column(0)?, location, SWC_COLUMNS[0])?,
        parse_int(column(1)?, location, SWC_COLUMNS[1])?,
        [
            parse_float(column(2)?, location, SWC_COLUMNS[2])?,
            parse_float(column(3)?, location, SWC_COLUMNS[3])?,
            parse_float(column(4)?, location, SWC_COLUMNS[4])?,
        ],
        parse_float(column(5)?, location, SWC_COLUMNS[5])?,
        parse_int(column(6)?, location, SWC_COLUMNS[6])?,
    );
    record.check(location)?;
    Ok(record)
}

/// Integers may be written as `3` or `3.0`; anything with a fractional part
/// is rejected.
fn parse_int(value: &str, location: RecordLocation, field: &'static str) -> Result<i64, InputError> {
    if let Ok(parsed) = value.parse::<i64>() {
        return Ok(parsed);
    }
    match value.parse::<f64>() {
        // `as` saturates, so anything outside the i64 range is refused here.
        Ok(parsed)
            if parsed.is_finite()
                && parsed.fract() == 0.0
                && parsed >= i64::MIN as f64
                && parsed < i64::MAX as f64 =>
        {
            Ok(parsed as i64)
        }
        _ => Err(InputError::InvalidField {
            location,
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_float(value: &str, location: RecordLocation, field: &'static str) -> Result<f64, InputError> {
    value.parse::<f64>().map_err(|_| InputError::InvalidField {
        location,
        field,
        value: value.to_string(),
    })
}
