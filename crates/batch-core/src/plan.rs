//! 批次規劃結果模型

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 精靈結束動作（規劃完成後回傳給呼叫端）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// 關閉視窗
    CloseWindow,
}

/// 批次（一起規劃的一組訂單）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// 批次ID
    pub id: Uuid,

    /// 訂單ID（依承諾交期排序）
    pub orders: Vec<String>,

    /// 批次開始時的參考日期
    pub start_date: NaiveDateTime,

    /// 預計完工日期
    pub projected_end_date: NaiveDateTime,
}

impl Batch {
    /// 創建空批次
    pub fn new(start_date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            orders: Vec::new(),
            start_date,
            projected_end_date: start_date,
        }
    }

    /// 加入訂單並更新預計完工日期
    pub fn push(&mut self, order_id: String, projected_end_date: NaiveDateTime) {
        self.orders.push(order_id);
        self.projected_end_date = projected_end_date;
    }

    pub fn contains(&self, order_id: &str) -> bool {
        self.orders.iter().any(|id| id == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// 批次規劃結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchPlan {
    /// 已規劃的批次
    pub batches: Vec<Batch>,

    /// 因達到批次上限而未處理的訂單
    pub unprocessed: Vec<String>,

    /// 是否因達到批次上限而提前結束
    pub reached_group_limit: bool,
}

impl BatchPlan {
    /// 創建空的規劃結果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 規劃完成後的結束動作
    pub fn action(&self) -> WizardAction {
        WizardAction::CloseWindow
    }

    /// 已規劃的訂單數量
    pub fn planned_order_count(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }

    /// 查找訂單所屬批次
    pub fn batch_of(&self, order_id: &str) -> Option<&Batch> {
        self.batches.iter().find(|b| b.contains(order_id))
    }
}
