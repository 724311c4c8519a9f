//! Python 綁定實現

use batch_cache::CachedAggregator;
use batch_calc::{BatchPlanner, DefaultRouting, DemandAggregator};
use batch_core::{
    Batch, BatchPlan, Bom, EstimationModel, ManufacturingCatalog, PlanningConfig, PlanningError,
    SalesOrder, WizardAction, Workcenter,
};
use chrono::NaiveDateTime;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::Decimal;

fn to_py_err(err: PlanningError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_decimal(value: f64) -> PyResult<Decimal> {
    Decimal::try_from(value)
        .map_err(|e| PyValueError::new_err(format!("無效的數量 {}: {}", value, e)))
}

/// 對應宿主系統的視窗動作類型
fn action_type(action: WizardAction) -> &'static str {
    match action {
        WizardAction::CloseWindow => "ir.actions.act_window_close",
    }
}

/// Python 銷售訂單
#[pyclass(name = "Order")]
#[derive(Clone)]
pub struct PyOrder {
    inner: SalesOrder,
}

#[pymethods]
impl PyOrder {
    /// lines: [(product_id, quantity), ...]
    #[new]
    #[pyo3(signature = (id, commitment_date, lines = Vec::new()))]
    fn new(id: String, commitment_date: NaiveDateTime, lines: Vec<(String, f64)>) -> PyResult<Self> {
        let mut inner = SalesOrder::new(id, commitment_date);
        for (product_id, quantity) in lines {
            inner = inner.with_line(product_id, to_decimal(quantity)?);
        }
        Ok(Self { inner })
    }

    #[getter]
    fn id(&self) -> &str {
        &self.inner.id
    }

    #[getter]
    fn commitment_date(&self) -> NaiveDateTime {
        self.inner.commitment_date
    }

    fn __repr__(&self) -> String {
        format!(
            "Order(id={:?}, commitment_date={}, lines={})",
            self.inner.id,
            self.inner.commitment_date,
            self.inner.lines.len()
        )
    }
}

/// Python BOM
#[pyclass(name = "Bom")]
#[derive(Clone)]
pub struct PyBom {
    inner: Bom,
}

#[pymethods]
impl PyBom {
    /// lines: [(component_id, quantity_per_unit), ...]
    #[new]
    #[pyo3(signature = (product_id, lines = Vec::new()))]
    fn new(product_id: String, lines: Vec<(String, f64)>) -> PyResult<Self> {
        let mut inner = Bom::new(product_id);
        for (component_id, quantity) in lines {
            inner = inner.with_component(component_id, to_decimal(quantity)?);
        }
        Ok(Self { inner })
    }

    #[getter]
    fn product_id(&self) -> &str {
        &self.inner.product_id
    }
}

/// Python 工作中心
#[pyclass(name = "Workcenter")]
#[derive(Clone)]
pub struct PyWorkcenter {
    inner: Workcenter,
}

#[pymethods]
impl PyWorkcenter {
    #[new]
    #[pyo3(signature = (id, capacity_per_hour, name = None))]
    fn new(id: String, capacity_per_hour: f64, name: Option<String>) -> PyResult<Self> {
        let mut inner = Workcenter::new(id, to_decimal(capacity_per_hour)?);
        if let Some(name) = name {
            inner = inner.with_name(name);
        }
        Ok(Self { inner })
    }

    #[getter]
    fn id(&self) -> &str {
        &self.inner.id
    }
}

/// Python 批次結果
#[pyclass(name = "Batch", get_all)]
#[derive(Clone)]
pub struct PyBatch {
    pub id: String,
    pub orders: Vec<String>,
    pub start_date: NaiveDateTime,
    pub projected_end_date: NaiveDateTime,
}

impl From<Batch> for PyBatch {
    fn from(batch: Batch) -> Self {
        Self {
            id: batch.id.to_string(),
            orders: batch.orders,
            start_date: batch.start_date,
            projected_end_date: batch.projected_end_date,
        }
    }
}

/// Python 規劃結果
#[pyclass(name = "BatchPlan", get_all)]
#[derive(Clone)]
pub struct PyBatchPlan {
    pub batches: Vec<PyBatch>,
    pub unprocessed: Vec<String>,
    pub reached_group_limit: bool,
    /// 精靈結束動作（"ir.actions.act_window_close"）
    pub action: String,
}

impl From<BatchPlan> for PyBatchPlan {
    fn from(plan: BatchPlan) -> Self {
        let action = action_type(plan.action()).to_string();
        Self {
            batches: plan.batches.into_iter().map(PyBatch::from).collect(),
            unprocessed: plan.unprocessed,
            reached_group_limit: plan.reached_group_limit,
            action,
        }
    }
}

/// Python 批次規劃器
#[pyclass(name = "BatchPlanner")]
pub struct PyBatchPlanner {
    config: PlanningConfig,
    catalog: ManufacturingCatalog,
}

#[pymethods]
impl PyBatchPlanner {
    #[new]
    #[pyo3(signature = (daysgroup = 1, ngroups = 1, boms = Vec::new(), workcenters = Vec::new(), parallel = false))]
    fn new(
        daysgroup: i64,
        ngroups: i64,
        boms: Vec<PyBom>,
        workcenters: Vec<PyWorkcenter>,
        parallel: bool,
    ) -> PyResult<Self> {
        let model = if parallel {
            EstimationModel::Parallel
        } else {
            EstimationModel::Serial
        };
        let config = PlanningConfig::try_from_signed(daysgroup, ngroups)
            .map_err(to_py_err)?
            .with_estimation_model(model);

        let mut catalog = ManufacturingCatalog::new();
        for bom in boms {
            catalog.add_bom(bom.inner);
        }
        for workcenter in workcenters {
            catalog.add_workcenter(workcenter.inner);
        }

        Ok(Self { config, catalog })
    }

    #[getter]
    fn daysgroup(&self) -> u32 {
        self.config.days_group
    }

    #[getter]
    fn ngroups(&self) -> u32 {
        self.config.n_groups
    }

    /// 執行批次規劃；未指定 start 時以目前時間為起點
    #[pyo3(signature = (orders, start = None))]
    fn plan(&self, orders: Vec<PyOrder>, start: Option<NaiveDateTime>) -> PyResult<PyBatchPlan> {
        let orders: Vec<SalesOrder> = orders.into_iter().map(|o| o.inner).collect();

        let routing = DefaultRouting::from_workcenters(&self.catalog);
        let mut aggregator = CachedAggregator::new(DemandAggregator::new(&self.catalog, &routing));
        let planner = BatchPlanner::new(self.config);

        let plan = match start {
            Some(start) => planner.plan(&orders, start, &mut aggregator, &self.catalog),
            None => planner.plan_from_now(&orders, &mut aggregator, &self.catalog),
        }
        .map_err(to_py_err)?;

        Ok(PyBatchPlan::from(plan))
    }
}
