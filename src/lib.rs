//! # Batch Planner
//!
//! 依承諾交期將銷售訂單分批，並以 BOM 展開後的工作中心需求估算每批完工日期。
//!
//! ```no_run
//! use batch_planner::{plan_snapshot, PlanningSnapshot};
//!
//! let snapshot = PlanningSnapshot::from_json_file("snapshot.json").unwrap();
//! let now = chrono::Local::now().naive_local();
//! let plan = plan_snapshot(&snapshot, now).unwrap();
//! println!("批次數量: {}", plan.batches.len());
//! ```

pub mod logging;

pub use batch_cache::{CachedAggregator, DirtyTracker};
pub use batch_calc::{
    BatchPlanner, CompletionEstimator, DefaultRouting, DemandAggregation, DemandAggregator,
    LeafRoutingPolicy, Routing, RoutingTable, DEFAULT_OPERATION,
};
pub use batch_core::{
    Batch, BatchPlan, Bom, BomLine, BomSource, DemandKey, DemandTable, EstimationModel,
    ManufacturingCatalog, OrderLine, PlanningConfig, PlanningError, PlanningSnapshot, Result,
    SalesOrder, WizardAction, Workcenter, WorkcenterSource,
};

use chrono::NaiveDateTime;

/// 以快照內的配置規劃整份快照
///
/// 末階物料使用預設路由（系統中第一個工作中心），需求以單張訂單為單位快取。
pub fn plan_snapshot(snapshot: &PlanningSnapshot, start: NaiveDateTime) -> Result<BatchPlan> {
    let catalog = snapshot.catalog();
    let routing = DefaultRouting::from_workcenters(&catalog);
    plan_with_routing(snapshot, &catalog, &routing, start)
}

/// 使用自訂路由策略規劃
pub fn plan_with_routing(
    snapshot: &PlanningSnapshot,
    catalog: &ManufacturingCatalog,
    routing: &dyn LeafRoutingPolicy,
    start: NaiveDateTime,
) -> Result<BatchPlan> {
    let mut aggregator = CachedAggregator::new(DemandAggregator::new(catalog, routing));

    BatchPlanner::new(snapshot.config).plan(&snapshot.orders, start, &mut aggregator, catalog)
}
