//! 銷售訂單模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 銷售訂單（規劃輸入，不可變）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    /// 訂單ID（如 SO-0001）
    pub id: String,

    /// 承諾交期
    pub commitment_date: NaiveDateTime,

    /// 訂單明細
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl SalesOrder {
    /// 創建沒有明細的訂單
    pub fn new(id: String, commitment_date: NaiveDateTime) -> Self {
        Self {
            id,
            commitment_date,
            lines: Vec::new(),
        }
    }

    /// 建構器模式：添加訂單明細
    pub fn with_line(mut self, product_id: String, quantity: Decimal) -> Self {
        self.lines.push(OrderLine::new(product_id, quantity));
        self
    }

    /// 訂單總數量（不區分物料）
    pub fn total_quantity(&self) -> Decimal {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// 訂單明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// 物料ID
    pub product_id: String,

    /// 訂購數量
    pub quantity: Decimal,
}

impl OrderLine {
    pub fn new(product_id: String, quantity: Decimal) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_order_builder() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let order = SalesOrder::new("SO-001".to_string(), date)
            .with_line("BIKE-001".to_string(), Decimal::from(2))
            .with_line("WHEEL-001".to_string(), Decimal::from(4));

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].product_id, "BIKE-001");
        assert_eq!(order.total_quantity(), Decimal::from(6));
    }

    #[test]
    fn test_order_deserialize_without_lines() {
        let order: SalesOrder =
            serde_json::from_str(r#"{"id":"SO-9","commitment_date":"2025-11-01T00:00:00"}"#)
                .unwrap();

        assert_eq!(order.id, "SO-9");
        assert!(order.lines.is_empty());
    }
}
