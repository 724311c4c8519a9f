//! 批次規劃主流程

use batch_core::{
    Batch, BatchPlan, PlanningConfig, PlanningError, Result, SalesOrder, WorkcenterSource,
};
use chrono::NaiveDateTime;
use std::collections::HashSet;

use crate::aggregator::DemandAggregation;
use crate::estimator::CompletionEstimator;

/// 批次規劃器
pub struct BatchPlanner {
    config: PlanningConfig,
}

impl BatchPlanner {
    /// 創建新的批次規劃器
    pub fn new(config: PlanningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// 以目前時間為起點進行規劃
    pub fn plan_from_now<A: DemandAggregation + ?Sized>(
        &self,
        orders: &[SalesOrder],
        aggregation: &mut A,
        workcenters: &dyn WorkcenterSource,
    ) -> Result<BatchPlan> {
        let now = chrono::Local::now().naive_local();
        self.plan(orders, now, aggregation, workcenters)
    }

    /// 主規劃入口
    ///
    /// 訂單依承諾交期排序後逐張加入目前批次，每次都重新估算整個批次的完工日期。
    /// 完工日期超過「參考日期 + 批次天數」時關閉目前批次，觸發的訂單開啟新批次；
    /// 關閉的批次數達到上限時立即停止，其餘訂單列為未處理。
    /// 完工日期依配置中的估算模型換算。
    pub fn plan<A: DemandAggregation + ?Sized>(
        &self,
        orders: &[SalesOrder],
        start: NaiveDateTime,
        aggregation: &mut A,
        workcenters: &dyn WorkcenterSource,
    ) -> Result<BatchPlan> {
        self.config.validate()?;
        check_unique_ids(orders)?;
        let estimator = CompletionEstimator::new(workcenters, self.config.estimation_model);

        if orders.is_empty() {
            tracing::info!("沒有選取任何訂單，直接關閉");
            return Ok(BatchPlan::empty());
        }

        tracing::info!(
            "開始批次規劃：訂單 {} 筆，批次天數 {}，批次上限 {}，起始 {}",
            orders.len(),
            self.config.days_group,
            self.config.n_groups,
            start
        );

        let mut sorted: Vec<&SalesOrder> = orders.iter().collect();
        sorted.sort_by_key(|order| order.commitment_date);

        let span = self.config.batch_span();
        let mut plan = BatchPlan::empty();
        let mut reference = start;
        let mut current: Vec<&SalesOrder> = Vec::new();
        let mut batch = Batch::new(start);
        let mut closed: u32 = 0;

        for (index, order) in sorted.iter().copied().enumerate() {
            current.push(order);
            let demand = aggregation.aggregate(&current)?;
            let end = estimator.estimate(&demand, reference)?;
            let limit = reference.checked_add_signed(span).ok_or_else(|| {
                PlanningError::InvalidDate(format!("{} 加上 {} 天溢出", reference, self.config.days_group))
            })?;

            if end <= limit {
                tracing::debug!("訂單 {} 加入批次，預計完工 {}", order.id, end);
                batch.push(order.id.clone(), end);
                reference = end;
                continue;
            }

            // 單獨一張訂單就超過期限時仍保留在批次中
            let overflow_alone = current.len() == 1;
            if overflow_alone {
                batch.push(order.id.clone(), end);
            } else {
                current.pop();
            }

            tracing::debug!(
                "訂單 {} 使批次超出期限 ({} > {})，關閉批次 ({} 筆訂單)",
                order.id,
                end,
                limit,
                batch.len()
            );

            closed += 1;
            plan.batches.push(std::mem::replace(&mut batch, Batch::new(end)));
            current.clear();

            if closed >= self.config.n_groups {
                let next = if overflow_alone { index + 1 } else { index };
                plan.unprocessed = sorted[next..].iter().map(|o| o.id.clone()).collect();
                plan.reached_group_limit = true;
                tracing::info!(
                    "已達批次上限 {}，剩餘 {} 筆訂單未處理",
                    self.config.n_groups,
                    plan.unprocessed.len()
                );
                break;
            }

            reference = end;
            if !overflow_alone {
                current.push(order);
                let demand = aggregation.aggregate(&current)?;
                let single_end = estimator.estimate(&demand, reference)?;
                batch.push(order.id.clone(), single_end);
            }
        }

        if !batch.is_empty() {
            plan.batches.push(batch);
        }

        tracing::info!(
            "批次規劃完成：批次 {} 個，已規劃訂單 {} 筆",
            plan.batches.len(),
            plan.planned_order_count()
        );

        Ok(plan)
    }
}

/// 訂單ID必須唯一（需求快取與批次結果都以ID識別訂單）
fn check_unique_ids(orders: &[SalesOrder]) -> Result<()> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(order.id.as_str()) {
            return Err(PlanningError::DuplicateOrder(order.id.clone()));
        }
    }
    Ok(())
}
