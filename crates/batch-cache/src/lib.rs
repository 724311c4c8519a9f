//! # Batch Cache
//!
//! 單張訂單需求快取，避免每次加入訂單都重新展開整個批次

pub mod dirty_tracking;
pub mod incremental;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use incremental::CachedAggregator;
