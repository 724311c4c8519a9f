//! 末階物料的工序/工作中心決定策略

use batch_core::{PlanningError, Result, WorkcenterSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 預設工序標籤
pub const DEFAULT_OPERATION: &str = "default operation";

/// 工序與工作中心
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routing {
    pub operation: String,
    pub workcenter_id: String,
}

impl Routing {
    pub fn new(operation: String, workcenter_id: String) -> Self {
        Self {
            operation,
            workcenter_id,
        }
    }
}

/// 末階物料（沒有 BOM）的需求要記在哪個工序/工作中心
pub trait LeafRoutingPolicy {
    fn resolve(&self, product_id: &str) -> Result<Routing>;
}

/// 預設策略：固定工序標籤 + 系統中第一個工作中心
#[derive(Debug, Clone)]
pub struct DefaultRouting {
    routing: Option<Routing>,
}

impl DefaultRouting {
    /// 使用指定的工作中心
    pub fn new(workcenter_id: String) -> Self {
        Self {
            routing: Some(Routing::new(DEFAULT_OPERATION.to_string(), workcenter_id)),
        }
    }

    /// 取系統中第一個工作中心；沒有任何工作中心時，解析會失敗
    pub fn from_workcenters<W: WorkcenterSource + ?Sized>(workcenters: &W) -> Self {
        Self {
            routing: workcenters
                .first_workcenter()
                .map(|wc| Routing::new(DEFAULT_OPERATION.to_string(), wc.id.clone())),
        }
    }
}

impl LeafRoutingPolicy for DefaultRouting {
    fn resolve(&self, product_id: &str) -> Result<Routing> {
        self.routing.clone().ok_or_else(|| {
            PlanningError::MissingWorkcenter(format!("系統中沒有工作中心可承接物料 {}", product_id))
        })
    }
}

/// 指定物料路由表，未登錄的物料交給後備策略
#[derive(Debug, Clone)]
pub struct RoutingTable<F> {
    routes: HashMap<String, Routing>,
    fallback: F,
}

impl<F: LeafRoutingPolicy> RoutingTable<F> {
    pub fn new(fallback: F) -> Self {
        Self {
            routes: HashMap::new(),
            fallback,
        }
    }

    /// 建構器模式：指定物料的工序/工作中心
    pub fn with_route(mut self, product_id: String, routing: Routing) -> Self {
        self.routes.insert(product_id, routing);
        self
    }
}

impl<F: LeafRoutingPolicy> LeafRoutingPolicy for RoutingTable<F> {
    fn resolve(&self, product_id: &str) -> Result<Routing> {
        match self.routes.get(product_id) {
            Some(routing) => Ok(routing.clone()),
            None => self.fallback.resolve(product_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batch_core::Workcenter;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_routing_uses_first_workcenter() {
        let workcenters = vec![
            Workcenter::new("ASSY".to_string(), Decimal::from(10)),
            Workcenter::new("PAINT".to_string(), Decimal::from(5)),
        ];
        let policy = DefaultRouting::from_workcenters(workcenters.as_slice());

        let routing = policy.resolve("SCREW").unwrap();
        assert_eq!(routing.operation, DEFAULT_OPERATION);
        assert_eq!(routing.workcenter_id, "ASSY");
    }

    #[test]
    fn test_default_routing_without_workcenter() {
        let workcenters: Vec<Workcenter> = Vec::new();
        let policy = DefaultRouting::from_workcenters(workcenters.as_slice());

        let result = policy.resolve("SCREW");
        assert!(matches!(result, Err(PlanningError::MissingWorkcenter(_))));
    }

    #[test]
    fn test_routing_table_fallback() {
        let policy = RoutingTable::new(DefaultRouting::new("ASSY".to_string())).with_route(
            "FRAME".to_string(),
            Routing::new("weld".to_string(), "WELD".to_string()),
        );

        assert_eq!(policy.resolve("FRAME").unwrap().workcenter_id, "WELD");
        assert_eq!(policy.resolve("SCREW").unwrap().workcenter_id, "ASSY");
    }
}
