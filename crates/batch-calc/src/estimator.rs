//! 完工日期估算

use batch_core::{DemandTable, EstimationModel, PlanningError, Result, WorkcenterSource};
use chrono::{Duration, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// 完工日期估算器
pub struct CompletionEstimator<'a> {
    workcenters: &'a dyn WorkcenterSource,
    model: EstimationModel,
}

impl<'a> CompletionEstimator<'a> {
    /// 創建新的估算器
    pub fn new(workcenters: &'a dyn WorkcenterSource, model: EstimationModel) -> Self {
        Self { workcenters, model }
    }

    pub fn model(&self) -> EstimationModel {
        self.model
    }

    /// 從開始日期推算預計完工日期
    pub fn estimate(&self, demand: &DemandTable, start: NaiveDateTime) -> Result<NaiveDateTime> {
        let hours = self.required_hours(demand)?;
        let elapsed = hours_to_duration(hours)?;

        start.checked_add_signed(elapsed).ok_or_else(|| {
            PlanningError::InvalidDate(format!("{} 加上 {} 小時溢出", start, hours))
        })
    }

    /// 需求表所需工時（小時）
    ///
    /// - `Serial`: 每個需求項目的工時直接相加
    /// - `Parallel`: 先按工作中心累計，再取最大值
    pub fn required_hours(&self, demand: &DemandTable) -> Result<Decimal> {
        let mut per_workcenter: HashMap<&str, Decimal> = HashMap::new();

        for (key, quantity) in demand.iter() {
            let hours = self.hours_for(&key.workcenter_id, *quantity)?;
            let total = per_workcenter
                .entry(key.workcenter_id.as_str())
                .or_insert(Decimal::ZERO);
            *total = checked_sum(*total, hours)?;
        }

        match self.model {
            EstimationModel::Serial => per_workcenter
                .values()
                .try_fold(Decimal::ZERO, |acc, hours| checked_sum(acc, *hours)),
            EstimationModel::Parallel => Ok(per_workcenter
                .values()
                .copied()
                .max()
                .unwrap_or(Decimal::ZERO)),
        }
    }

    fn hours_for(&self, workcenter_id: &str, quantity: Decimal) -> Result<Decimal> {
        let workcenter = self
            .workcenters
            .workcenter(workcenter_id)
            .ok_or_else(|| PlanningError::MissingWorkcenter(workcenter_id.to_string()))?;

        if !workcenter.has_valid_capacity() {
            return Err(PlanningError::InvalidCapacity {
                workcenter_id: workcenter.id.clone(),
                capacity_per_hour: workcenter.capacity_per_hour,
            });
        }

        quantity
            .checked_div(workcenter.capacity_per_hour)
            .ok_or_else(|| PlanningError::InvalidDate(format!("工作中心 {} 工時溢出", workcenter_id)))
    }
}

fn checked_sum(left: Decimal, right: Decimal) -> Result<Decimal> {
    left.checked_add(right)
        .ok_or_else(|| PlanningError::InvalidDate("工時累計溢出".to_string()))
}

/// 小時數轉為時間長度（精度到毫秒）
pub fn hours_to_duration(hours: Decimal) -> Result<Duration> {
    let millis = hours
        .checked_mul(Decimal::from(MILLIS_PER_HOUR))
        .map(|ms| ms.round())
        .and_then(|ms| ms.to_i64())
        .ok_or_else(|| PlanningError::InvalidDate(format!("工時 {} 小時無法換算", hours)))?;

    Duration::try_milliseconds(millis)
        .ok_or_else(|| PlanningError::InvalidDate(format!("工時 {} 小時超出範圍", hours)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use batch_core::{DemandKey, ManufacturingCatalog, Workcenter};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 3)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn key(product: &str, workcenter: &str) -> DemandKey {
        DemandKey::new(
            product.to_string(),
            "default operation".to_string(),
            workcenter.to_string(),
        )
    }

    fn catalog() -> ManufacturingCatalog {
        ManufacturingCatalog::new()
            .with_workcenter(Workcenter::new("WC-1".to_string(), Decimal::from(10)))
            .with_workcenter(Workcenter::new("WC-2".to_string(), Decimal::from(4)))
    }

    #[test]
    fn test_half_hour_scenario() {
        let catalog = catalog();
        let estimator = CompletionEstimator::new(&catalog, EstimationModel::Serial);

        let mut demand = DemandTable::new();
        demand.add(key("P", "WC-1"), Decimal::from(5));

        assert_eq!(estimator.required_hours(&demand).unwrap(), Decimal::new(5, 1));
        assert_eq!(
            estimator.estimate(&demand, start()).unwrap(),
            start() + Duration::minutes(30)
        );
    }

    #[rstest]
    #[case(EstimationModel::Serial, 5)]
    #[case(EstimationModel::Parallel, 3)]
    fn test_estimation_models(#[case] model: EstimationModel, #[case] expected_hours: i64) {
        let catalog = catalog();
        let estimator = CompletionEstimator::new(&catalog, model);

        // WC-1: 10 + 10 = 20 單位 → 2 小時；WC-2: 12 單位 → 3 小時
        let mut demand = DemandTable::new();
        demand.add(key("A", "WC-1"), Decimal::from(10));
        demand.add(key("B", "WC-1"), Decimal::from(10));
        demand.add(key("C", "WC-2"), Decimal::from(12));

        assert_eq!(estimator.required_hours(&demand).unwrap(), Decimal::from(expected_hours));
        assert_eq!(
            estimator.estimate(&demand, start()).unwrap(),
            start() + Duration::hours(expected_hours)
        );
    }

    #[test]
    fn test_empty_demand_keeps_start() {
        let catalog = catalog();
        let estimator = CompletionEstimator::new(&catalog, EstimationModel::Serial);

        assert_eq!(estimator.estimate(&DemandTable::new(), start()).unwrap(), start());
    }

    #[rstest]
    #[case(Decimal::ZERO)]
    #[case(Decimal::from(-3))]
    fn test_invalid_capacity(#[case] capacity: Decimal) {
        let catalog = ManufacturingCatalog::new()
            .with_workcenter(Workcenter::new("BROKEN".to_string(), capacity));
        let estimator = CompletionEstimator::new(&catalog, EstimationModel::Serial);

        let mut demand = DemandTable::new();
        demand.add(key("P", "BROKEN"), Decimal::ONE);

        match estimator.estimate(&demand, start()) {
            Err(PlanningError::InvalidCapacity { workcenter_id, capacity_per_hour }) => {
                assert_eq!(workcenter_id, "BROKEN");
                assert_eq!(capacity_per_hour, capacity);
            }
            other => panic!("預期 InvalidCapacity，實際 {:?}", other),
        }
    }

    #[test]
    fn test_unknown_workcenter() {
        let catalog = catalog();
        let estimator = CompletionEstimator::new(&catalog, EstimationModel::Serial);

        let mut demand = DemandTable::new();
        demand.add(key("P", "GHOST"), Decimal::ONE);

        assert!(matches!(
            estimator.estimate(&demand, start()),
            Err(PlanningError::MissingWorkcenter(id)) if id == "GHOST"
        ));
    }

    #[test]
    fn test_hours_to_duration_rounds_to_millis() {
        // 1/3 小時 = 1_200_000 毫秒
        let third = Decimal::ONE / Decimal::from(3);
        assert_eq!(hours_to_duration(third).unwrap(), Duration::milliseconds(1_200_000));
    }

    #[test]
    fn test_hours_overflow() {
        assert!(matches!(
            hours_to_duration(Decimal::MAX),
            Err(PlanningError::InvalidDate(_))
        ));
    }
}
