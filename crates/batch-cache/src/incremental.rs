//! 增量需求彙總

use batch_calc::{DemandAggregation, DemandAggregator};
use batch_core::{DemandTable, Result, SalesOrder};
use std::collections::HashMap;

use crate::dirty_tracking::DirtyTracker;

/// 帶快取的需求彙總器
///
/// 以訂單ID快取每張訂單展開後的需求，批次需求 = 各訂單需求相加。
/// 訂單內容或 BOM 變更後需呼叫 `invalidate` / `invalidate_all`。
pub struct CachedAggregator<'a> {
    inner: DemandAggregator<'a>,
    contributions: HashMap<String, DemandTable>,
    dirty: DirtyTracker,
    hits: usize,
    misses: usize,
}

impl<'a> CachedAggregator<'a> {
    pub fn new(inner: DemandAggregator<'a>) -> Self {
        Self {
            inner,
            contributions: HashMap::new(),
            dirty: DirtyTracker::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// 標記訂單需要重新展開
    pub fn invalidate(&mut self, order_id: &str) {
        if self.contributions.contains_key(order_id) {
            self.dirty.mark_dirty(order_id.to_string());
        }
    }

    /// 清空快取（BOM 或工作中心變更時）
    pub fn invalidate_all(&mut self) {
        self.contributions.clear();
        self.dirty.clear();
    }

    /// 快取命中次數
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// 重新展開次數
    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn cached_orders(&self) -> usize {
        self.contributions.len()
    }

    fn contribution(&mut self, order: &SalesOrder) -> Result<&DemandTable> {
        let stale = self.dirty.clear_order(&order.id) || !self.contributions.contains_key(&order.id);

        if stale {
            self.misses += 1;
            let table = self.inner.order_demand(order)?;
            self.contributions.insert(order.id.clone(), table);
        } else {
            self.hits += 1;
        }

        Ok(&self.contributions[&order.id])
    }
}

impl DemandAggregation for CachedAggregator<'_> {
    fn aggregate(&mut self, orders: &[&SalesOrder]) -> Result<DemandTable> {
        let mut table = DemandTable::new();
        for order in orders {
            table.merge(self.contribution(order)?);
        }

        tracing::debug!(
            "快取彙總：訂單 {} 筆，命中 {}，展開 {}",
            orders.len(),
            self.hits,
            self.misses
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batch_calc::DefaultRouting;
    use batch_core::{Bom, DemandKey, ManufacturingCatalog, Workcenter};
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn catalog() -> ManufacturingCatalog {
        ManufacturingCatalog::new()
            .with_workcenter(Workcenter::new("WC-1".to_string(), Decimal::from(10)))
            .with_bom(Bom::new("P".to_string()).with_component("C".to_string(), Decimal::from(3)))
    }

    #[test]
    fn test_cached_matches_direct() {
        let catalog = catalog();
        let routing = DefaultRouting::from_workcenters(&catalog);
        let direct = DemandAggregator::new(&catalog, &routing);
        let mut cached = CachedAggregator::new(DemandAggregator::new(&catalog, &routing));

        let first = SalesOrder::new("SO-1".to_string(), date()).with_line("P".to_string(), Decimal::from(2));
        let second = SalesOrder::new("SO-2".to_string(), date()).with_line("C".to_string(), Decimal::from(1));

        let expected = direct.aggregate_orders(&[&first, &second]).unwrap();

        assert_eq!(cached.aggregate(&[&first]).unwrap(), direct.aggregate_orders(&[&first]).unwrap());
        assert_eq!(cached.aggregate(&[&first, &second]).unwrap(), expected);
        assert_eq!(cached.misses(), 2);
        assert_eq!(cached.hits(), 1);
        assert_eq!(cached.cached_orders(), 2);
    }

    #[test]
    fn test_invalidate_recomputes() {
        let catalog = catalog();
        let routing = DefaultRouting::from_workcenters(&catalog);
        let mut cached = CachedAggregator::new(DemandAggregator::new(&catalog, &routing));

        let original = SalesOrder::new("SO-1".to_string(), date()).with_line("P".to_string(), Decimal::from(2));
        cached.aggregate(&[&original]).unwrap();

        let edited = SalesOrder::new("SO-1".to_string(), date()).with_line("P".to_string(), Decimal::from(5));

        // 未失效前仍使用舊的展開結果
        let key = DemandKey::new("C".to_string(), "default operation".to_string(), "WC-1".to_string());
        assert_eq!(cached.aggregate(&[&edited]).unwrap().get(&key), Some(Decimal::from(6)));

        cached.invalidate("SO-1");
        assert_eq!(cached.aggregate(&[&edited]).unwrap().get(&key), Some(Decimal::from(15)));
        assert_eq!(cached.misses(), 2);
    }

    #[test]
    fn test_invalidate_all() {
        let catalog = catalog();
        let routing = DefaultRouting::from_workcenters(&catalog);
        let mut cached = CachedAggregator::new(DemandAggregator::new(&catalog, &routing));

        let order = SalesOrder::new("SO-1".to_string(), date()).with_line("P".to_string(), Decimal::ONE);
        cached.aggregate(&[&order]).unwrap();
        cached.invalidate_all();

        assert_eq!(cached.cached_orders(), 0);
        cached.aggregate(&[&order]).unwrap();
        assert_eq!(cached.misses(), 2);
    }
}
