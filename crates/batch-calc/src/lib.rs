//! # Batch Calculation Engine
//!
//! 需求彙總、完工日期估算與批次規劃

pub mod aggregator;
pub mod estimator;
pub mod planner;
pub mod routing;

// Re-export 主要類型
pub use aggregator::{DemandAggregation, DemandAggregator};
pub use estimator::{hours_to_duration, CompletionEstimator};
pub use planner::BatchPlanner;
pub use routing::{DefaultRouting, LeafRoutingPolicy, Routing, RoutingTable, DEFAULT_OPERATION};
