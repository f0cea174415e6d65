use serde::{Deserialize, Serialize};

use crate::error::{BrushError, BrushResult};

use super::BrushSnapshot;

pub const BRUSH_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: BrushSnapshot,
}

impl BrushSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> BrushResult<String> {
        let payload = BrushSnapshotJsonContractV1 {
            schema_version: BRUSH_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            BrushError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> BrushResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<Self>(input) {
            return Ok(snapshot);
        }
        let payload: BrushSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            BrushError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != BRUSH_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(BrushError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
