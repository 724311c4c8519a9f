//! 規劃輸入快照
//!
//! 一次規劃所需的全部唯讀資料（訂單、BOM、工作中心），
//! 由宿主系統一次性提供，規劃期間不會被修改。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::{
    Bom, BomSource, PlanningConfig, PlanningError, Result, SalesOrder, Workcenter,
    WorkcenterSource,
};

/// 製造主檔目錄（BOM + 工作中心）
#[derive(Debug, Clone, Default)]
pub struct ManufacturingCatalog {
    boms: HashMap<String, Bom>,
    workcenters: Vec<Workcenter>,
}

impl ManufacturingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：登錄 BOM（同一物料以第一份 BOM 為準）
    pub fn with_bom(mut self, bom: Bom) -> Self {
        self.add_bom(bom);
        self
    }

    /// 建構器模式：登錄工作中心
    pub fn with_workcenter(mut self, workcenter: Workcenter) -> Self {
        self.add_workcenter(workcenter);
        self
    }

    pub fn add_bom(&mut self, bom: Bom) {
        self.boms.entry(bom.product_id.clone()).or_insert(bom);
    }

    pub fn add_workcenter(&mut self, workcenter: Workcenter) {
        if self.workcenter(&workcenter.id).is_none() {
            self.workcenters.push(workcenter);
        }
    }

    pub fn bom_count(&self) -> usize {
        self.boms.len()
    }

    pub fn workcenters(&self) -> &[Workcenter] {
        &self.workcenters
    }
}

impl BomSource for ManufacturingCatalog {
    fn find_bom(&self, product_id: &str) -> Option<&Bom> {
        self.boms.get(product_id)
    }
}

impl WorkcenterSource for ManufacturingCatalog {
    fn workcenter(&self, id: &str) -> Option<&Workcenter> {
        self.workcenters.workcenter(id)
    }

    fn first_workcenter(&self) -> Option<&Workcenter> {
        self.workcenters.first()
    }
}

/// 規劃快照（JSON 交換格式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningSnapshot {
    /// 規劃參數
    #[serde(default)]
    pub config: PlanningConfig,

    /// 選取的銷售訂單
    #[serde(default)]
    pub orders: Vec<SalesOrder>,

    /// BOM 主檔
    #[serde(default)]
    pub boms: Vec<Bom>,

    /// 工作中心主檔（順序即系統登錄順序）
    #[serde(default)]
    pub workcenters: Vec<Workcenter>,
}

impl PlanningSnapshot {
    /// 從 JSON 字串載入
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlanningError::Snapshot(e.to_string()))
    }

    /// 從 JSON 檔案載入
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlanningError::Snapshot(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// 建立製造主檔目錄
    pub fn catalog(&self) -> ManufacturingCatalog {
        let mut catalog = ManufacturingCatalog::new();
        for bom in &self.boms {
            catalog.add_bom(bom.clone());
        }
        for workcenter in &self.workcenters {
            catalog.add_workcenter(workcenter.clone());
        }
        catalog
    }
}
