//! dotplot-rs: selection and interaction behavior for a dot plot visual.
//!
//! The host shell renders the chart columns, then binds a [`DotPlotBehavior`]
//! to them. The behavior forwards pointer and keyboard input to a host-owned
//! [`SelectionHandler`] and restyles column opacity when selection or
//! highlight state changes.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BehaviorOptions, DotPlotBehavior, InteractivityService, SelectionHandler, SelectionService,
};
pub use error::{BehaviorError, BehaviorResult};
