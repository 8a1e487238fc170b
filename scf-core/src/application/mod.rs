// scf-core/src/application/mod.rs

pub mod query;
pub mod service;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI fait simplement :
// `use scf_core::application::{ControlService, QueryEngine};`

pub use query::{
    FrameworkControlRow, FrameworkGroup, Mapping, QueryEngine, SearchHit, Statistics,
};
pub use service::{
    ControlService, ControlView, FrameworkControlsResponse, FrameworkListResponse, HealthReport,
    InfoResponse, MappingResponse, ResolveResponse, SearchResponse,
};
