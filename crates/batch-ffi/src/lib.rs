//! # Batch FFI
//!
//! Python 綁定層（PyO3），供 ERP 規劃精靈呼叫

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn batch_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyBatchPlanner>()?;
    m.add_class::<python::PyOrder>()?;
    m.add_class::<python::PyBom>()?;
    m.add_class::<python::PyWorkcenter>()?;
    m.add_class::<python::PyBatch>()?;
    m.add_class::<python::PyBatchPlan>()?;
    Ok(())
}
