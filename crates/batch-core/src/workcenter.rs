//! 工作中心模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 工作中心
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workcenter {
    /// 工作中心ID
    pub id: String,

    /// 名稱
    #[serde(default)]
    pub name: String,

    /// 每小時產能（需求單位/小時）
    pub capacity_per_hour: Decimal,
}

impl Workcenter {
    pub fn new(id: String, capacity_per_hour: Decimal) -> Self {
        Self {
            name: id.clone(),
            id,
            capacity_per_hour,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 產能是否可用於工時換算（必須大於零）
    pub fn has_valid_capacity(&self) -> bool {
        self.capacity_per_hour > Decimal::ZERO
    }
}

/// 工作中心查詢能力
pub trait WorkcenterSource {
    fn workcenter(&self, id: &str) -> Option<&Workcenter>;

    /// 系統中的第一個工作中心（依登錄順序）
    fn first_workcenter(&self) -> Option<&Workcenter>;
}

impl WorkcenterSource for [Workcenter] {
    fn workcenter(&self, id: &str) -> Option<&Workcenter> {
        self.iter().find(|wc| wc.id == id)
    }

    fn first_workcenter(&self) -> Option<&Workcenter> {
        self.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_validity() {
        assert!(Workcenter::new("WC-1".to_string(), Decimal::from(10)).has_valid_capacity());
        assert!(!Workcenter::new("WC-2".to_string(), Decimal::ZERO).has_valid_capacity());
        assert!(!Workcenter::new("WC-3".to_string(), Decimal::from(-1)).has_valid_capacity());
    }

    #[test]
    fn test_slice_source() {
        let workcenters = vec![
            Workcenter::new("ASSY".to_string(), Decimal::from(10)).with_name("組裝線".to_string()),
            Workcenter::new("PAINT".to_string(), Decimal::from(5)),
        ];

        assert_eq!(workcenters.first_workcenter().unwrap().id, "ASSY");
        assert_eq!(workcenters.workcenter("PAINT").unwrap().name, "PAINT");
        assert!(workcenters.workcenter("WELD").is_none());
    }
}
