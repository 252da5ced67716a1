//! Core-Domänentypen: Handles, Segmente, DivePlan, Plan-Raum, Spatial-Index.

pub mod deco;
pub mod dive_plan;
pub mod handle;
pub mod plan_space;
pub mod segment;
pub mod spatial;

pub use deco::{DecoModel, DecoSegment, DirectAscentModel};
pub use dive_plan::DivePlan;
pub use handle::DiveHandle;
pub use plan_space::{PlanRect, PlanSpace};
pub use segment::{Segment, SegmentEnd};
pub use spatial::{SpatialIndex, SpatialMatch};
