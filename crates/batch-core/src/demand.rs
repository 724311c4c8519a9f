//! 需求彙總表

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 需求鍵（物料、工序、工作中心）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DemandKey {
    /// 物料ID
    pub product_id: String,

    /// 工序標籤
    pub operation: String,

    /// 工作中心ID
    pub workcenter_id: String,
}

impl DemandKey {
    pub fn new(product_id: String, operation: String, workcenter_id: String) -> Self {
        Self {
            product_id,
            operation,
            workcenter_id,
        }
    }
}

/// 需求彙總表：每個批次重新建立，用完即棄
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemandTable {
    entries: HashMap<DemandKey, Decimal>,
}

impl DemandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加需求
    pub fn add(&mut self, key: DemandKey, quantity: Decimal) {
        *self.entries.entry(key).or_insert(Decimal::ZERO) += quantity;
    }

    /// 合併另一張需求表（逐鍵相加）
    pub fn merge(&mut self, other: &DemandTable) {
        for (key, quantity) in &other.entries {
            self.add(key.clone(), *quantity);
        }
    }

    pub fn get(&self, key: &DemandKey) -> Option<Decimal> {
        self.entries.get(key).copied()
    }

    /// 某物料在所有工序/工作中心的需求總和
    pub fn total_for_product(&self, product_id: &str) -> Decimal {
        self.entries
            .iter()
            .filter(|(key, _)| key.product_id == product_id)
            .map(|(_, qty)| *qty)
            .sum()
    }

    pub fn contains_product(&self, product_id: &str) -> bool {
        self.entries.keys().any(|key| key.product_id == product_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DemandKey, &Decimal)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(DemandKey, Decimal)> for DemandTable {
    fn from_iter<I: IntoIterator<Item = (DemandKey, Decimal)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, quantity) in iter {
            table.add(key, quantity);
        }
        table
    }
}
