//! Dive-Planner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CrosshairState, DragState, ViewState,
};
pub use core::{
    DecoModel, DecoSegment, DirectAscentModel, DiveHandle, DivePlan, Segment, SegmentEnd,
};
pub use core::{PlanRect, PlanSpace, SpatialIndex, SpatialMatch};
pub use shared::{PlannerOptions, RenderScene};
