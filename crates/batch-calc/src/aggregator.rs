//! 需求彙總（遞迴 BOM 展開）

use batch_core::{BomSource, DemandKey, DemandTable, PlanningError, Result, SalesOrder};
use rust_decimal::Decimal;

use crate::routing::LeafRoutingPolicy;

/// 批次需求彙總介面
///
/// 規劃器每加入一張訂單就會對整個批次重新彙總一次，
/// 實作可以自行快取單張訂單的需求。
pub trait DemandAggregation {
    fn aggregate(&mut self, orders: &[&SalesOrder]) -> Result<DemandTable>;
}

/// 需求彙總器
pub struct DemandAggregator<'a> {
    /// BOM 查詢
    boms: &'a dyn BomSource,

    /// 末階物料路由策略
    routing: &'a dyn LeafRoutingPolicy,
}

impl<'a> DemandAggregator<'a> {
    /// 創建新的需求彙總器
    pub fn new(boms: &'a dyn BomSource, routing: &'a dyn LeafRoutingPolicy) -> Self {
        Self { boms, routing }
    }

    /// 彙總一組訂單的需求
    pub fn aggregate_orders(&self, orders: &[&SalesOrder]) -> Result<DemandTable> {
        let mut table = DemandTable::new();
        for order in orders {
            self.collect_order(order, &mut table)?;
        }

        tracing::debug!("訂單 {} 筆，需求項目 {} 筆", orders.len(), table.len());

        Ok(table)
    }

    /// 單張訂單的需求
    pub fn order_demand(&self, order: &SalesOrder) -> Result<DemandTable> {
        let mut table = DemandTable::new();
        self.collect_order(order, &mut table)?;
        Ok(table)
    }

    /// 展開單一物料需求並累加到需求表
    pub fn explode_line(
        &self,
        product_id: &str,
        quantity: Decimal,
        table: &mut DemandTable,
    ) -> Result<()> {
        let mut path = Vec::new();
        self.explode(product_id, quantity, &mut path, table)
    }

    fn collect_order(&self, order: &SalesOrder, table: &mut DemandTable) -> Result<()> {
        for line in &order.lines {
            self.explode_line(&line.product_id, line.quantity, table)?;
        }
        Ok(())
    }

    /// 遞迴展開；`path` 為目前的展開路徑，用來偵測循環
    fn explode(
        &self,
        product_id: &str,
        quantity: Decimal,
        path: &mut Vec<String>,
        table: &mut DemandTable,
    ) -> Result<()> {
        if path.iter().any(|p| p == product_id) {
            let mut cycle = path.clone();
            cycle.push(product_id.to_string());
            return Err(PlanningError::BomCycle(cycle));
        }

        let Some(bom) = self.boms.find_bom(product_id) else {
            let routing = self.routing.resolve(product_id)?;
            table.add(
                DemandKey::new(product_id.to_string(), routing.operation, routing.workcenter_id),
                quantity,
            );
            return Ok(());
        };

        if bom.lines.is_empty() {
            tracing::debug!("物料 {} 的 BOM 沒有子件", product_id);
        }

        path.push(product_id.to_string());
        for line in &bom.lines {
            let child_quantity = line.quantity * quantity;

            tracing::debug!(
                "BOM 展開: {} → {} (數量: {})",
                product_id,
                line.component_id,
                child_quantity
            );

            self.explode(&line.component_id, child_quantity, path, table)?;
        }
        path.pop();

        Ok(())
    }
}

impl DemandAggregation for DemandAggregator<'_> {
    fn aggregate(&mut self, orders: &[&SalesOrder]) -> Result<DemandTable> {
        self.aggregate_orders(orders)
    }
}
