//! # Batch Core
//!
//! 批次規劃的核心資料模型與類型定義

pub mod bom;
pub mod config;
pub mod demand;
pub mod order;
pub mod plan;
pub mod snapshot;
pub mod workcenter;

// Re-export 主要類型
pub use bom::{Bom, BomLine, BomSource};
pub use config::{EstimationModel, PlanningConfig};
pub use demand::{DemandKey, DemandTable};
pub use order::{OrderLine, SalesOrder};
pub use plan::{Batch, BatchPlan, WizardAction};
pub use snapshot::{ManufacturingCatalog, PlanningSnapshot};
pub use workcenter::{Workcenter, WorkcenterSource};

/// 批次規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("無效的規劃配置: {0}")]
    InvalidConfiguration(String),

    #[error("BOM 循環引用: {}", .0.join(" → "))]
    BomCycle(Vec<String>),

    #[error("工作中心 {workcenter_id} 產能無效: {capacity_per_hour}")]
    InvalidCapacity {
        workcenter_id: String,
        capacity_per_hour: rust_decimal::Decimal,
    },

    #[error("訂單ID重複: {0}")]
    DuplicateOrder(String),

    #[error("找不到工作中心: {0}")]
    MissingWorkcenter(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("快照載入失敗: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, PlanningError>;
