//! shove: 2D AABB collision engine (priority push-apart resolution, per-tick contact flags)

pub mod types;
pub mod api;
pub mod context;
pub mod narrowphase;

pub use crate::api::*;
pub use crate::context::Context;
pub use crate::types::*;
