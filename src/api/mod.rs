mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod snapshot_controller;
mod validation;

pub use engine::BrushEngine;
pub use engine_config::{BrushEngineConfig, BrushRenderStyle};
pub use engine_snapshot::BrushSnapshot;
pub use json_contract::{BRUSH_SNAPSHOT_JSON_SCHEMA_V1, BrushSnapshotJsonContractV1};

pub use crate::extensions::{BrushContext, BrushEvent, BrushPlugin};
