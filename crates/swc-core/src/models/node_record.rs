use serde::{Deserialize, Serialize};

use super::Compartment;
use crate::constants::ROOT_MARKER;
use crate::errors::{InputError, RecordLocation};

/// One SWC row: a node of the reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub node_id: i64,
    pub compartment: Compartment,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub r: f64,
    pub parent: i64,
}

impl NodeRecord {
    pub fn new(
        node_id: i64,
        compartment: i64,
        position: [f64; 3],
        r: f64,
        parent: i64,
    ) -> Self {
        Self {
            node_id,
            compartment: Compartment::from_code(compartment),
            x: position[0],
            y: position[1],
            z: position[2],
            r,
            parent,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent == ROOT_MARKER
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance between two nodes' positions.
    pub fn distance_to(&self, other: &NodeRecord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Check the field values that the type alone cannot guarantee.
    pub fn check(&self, location: RecordLocation) -> Result<(), InputError> {
        if self.node_id <= 0 {
            return Err(invalid(location, "node_id", self.node_id));
        }
        for (field, value) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !value.is_finite() {
                return Err(invalid(location, field, value));
            }
        }
        if !self.r.is_finite() || self.r < 0.0 {
            return Err(invalid(location, "r", self.r));
        }
        Ok(())
    }
}

fn invalid(location: RecordLocation, field: &'static str, value: impl ToString) -> InputError {
    InputError::InvalidField {
        location,
        field,
        value: value.to_string(),
    }
}

/// A loosely-typed row as it may arrive from JSON or a table with optional
/// columns. Converted into a [`NodeRecord`] once, at the model boundary.
/// Accepts the `struct_type`, `radius` and `parent_id` column names as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNodeRecord {
    pub node_id: Option<i64>,
    #[serde(alias = "struct_type")]
    pub compartment: Option<i64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    #[serde(alias = "radius")]
    pub r: Option<f64>,
    #[serde(alias = "parent_id")]
    pub parent: Option<i64>,
}

impl RawNodeRecord {
    /// Convert into a fully-populated record, naming the first missing field.
    pub fn into_record(self, location: RecordLocation) -> Result<NodeRecord, InputError> {
        let missing = |field: &'static str| InputError::MissingField { location, field };
        let record = NodeRecord {
            node_id: self.node_id.ok_or_else(|| missing("node_id"))?,
            compartment: Compartment::from_code(self.compartment.ok_or_else(|| missing("compartment"))?),
            x: self.x.ok_or_else(|| missing("x"))?,
            y: self.y.ok_or_else(|| missing("y"))?,
            z: self.z.ok_or_else(|| missing("z"))?,
            r: self.r.ok_or_else(|| missing("r"))?,
            parent: self.parent.ok_or_else(|| missing("parent"))?,
        };
        record.check(location)?;
        Ok(record)
    }
}

impl From<&NodeRecord> for RawNodeRecord {
    fn from(record: &NodeRecord) -> Self {
        Self {
            node_id: Some(record.node_id),
            compartment: Some(record.compartment.code()),
            x: Some(record.x),
            y: Some(record.y),
            z: Some(record.z),
            r: Some(record.r),
            parent: Some(record.parent),
        }
    }
}
