//! BOM 模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料清單（單一成品的配方）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    /// 成品物料ID
    pub product_id: String,

    /// BOM 明細（依序展開）
    #[serde(default)]
    pub lines: Vec<BomLine>,
}

impl Bom {
    pub fn new(product_id: String) -> Self {
        Self {
            product_id,
            lines: Vec::new(),
        }
    }

    /// 建構器模式：添加子件
    pub fn with_component(mut self, component_id: String, quantity: Decimal) -> Self {
        self.lines.push(BomLine {
            component_id,
            quantity,
        });
        self
    }
}

/// BOM 明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    /// 子件物料ID
    pub component_id: String,

    /// 單位用量（每一個父件所需數量）
    pub quantity: Decimal,
}

/// BOM 查詢能力
///
/// 找不到 BOM 不是錯誤：代表該物料的需求直接記錄。
pub trait BomSource {
    fn find_bom(&self, product_id: &str) -> Option<&Bom>;
}

impl BomSource for std::collections::HashMap<String, Bom> {
    fn find_bom(&self, product_id: &str) -> Option<&Bom> {
        self.get(product_id)
    }
}
