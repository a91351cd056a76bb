mod animation_controller;
mod data_controller;
mod engine;
mod engine_config;
mod interaction_controller;
mod invalidation;
mod listeners;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use invalidation::{
    InvalidationLevel, InvalidationMask, InvalidationTopic, InvalidationTopics,
};
pub use listeners::{RedrawHost, ValueSelectListener};
