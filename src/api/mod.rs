mod behavior;
mod behavior_config;
mod host;
mod listeners;
mod opacity;
mod selection_service;

pub use behavior::{BehaviorOptions, DotPlotBehavior};
pub use behavior_config::{
    BEHAVIOR_CONFIG_JSON_SCHEMA_V1, BehaviorConfig, BehaviorConfigJsonContractV1,
};
pub use host::{ContextMenuPosition, InteractivityService, SelectionHandler};
pub use opacity::{
    DEFAULT_OPACITY, DIMMED_OPACITY, OpacityInputs, OpacityTier, OpacityTiers, opacity,
    resolve_opacity_tier,
};
pub use selection_service::{ContextMenuRequest, SelectionService};
