//! 批次規劃配置模型

use serde::{Deserialize, Serialize};

use crate::{PlanningError, Result};

/// 批次規劃參數（對應規劃精靈的輸入欄位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// 每個批次允許的天數跨度
    pub days_group: u32,

    /// 最多規劃的批次數量
    pub n_groups: u32,

    /// 完工日期估算模型
    pub estimation_model: EstimationModel,
}

impl PlanningConfig {
    /// 創建新的規劃配置
    pub fn new(days_group: u32, n_groups: u32) -> Self {
        Self {
            days_group,
            n_groups,
            estimation_model: EstimationModel::Serial,
        }
    }

    /// 從外部整數輸入創建配置（負數或零會在 validate 時被拒絕）
    pub fn try_from_signed(days_group: i64, n_groups: i64) -> Result<Self> {
        let days_group = u32::try_from(days_group).map_err(|_| {
            PlanningError::InvalidConfiguration(format!("daysgroup 必須為正整數: {}", days_group))
        })?;
        let n_groups = u32::try_from(n_groups).map_err(|_| {
            PlanningError::InvalidConfiguration(format!("ngroups 必須為正整數: {}", n_groups))
        })?;

        let config = Self::new(days_group, n_groups);
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置估算模型
    pub fn with_estimation_model(mut self, model: EstimationModel) -> Self {
        self.estimation_model = model;
        self
    }

    /// 規劃前檢查參數
    pub fn validate(&self) -> Result<()> {
        if self.days_group == 0 {
            return Err(PlanningError::InvalidConfiguration(
                "daysgroup 必須為正整數: 0".to_string(),
            ));
        }
        if self.n_groups == 0 {
            return Err(PlanningError::InvalidConfiguration(
                "ngroups 必須為正整數: 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 批次跨度
    pub fn batch_span(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.days_group))
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// 完工日期估算模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EstimationModel {
    /// 串行：所有工作中心的工時相加（不考慮並行）
    #[default]
    Serial,

    /// 並行：各工作中心獨立累計工時，取最大值
    Parallel,
}
