//! 批次規劃命令列工具
//!
//! 讀取 JSON 規劃快照，輸出批次規劃結果（JSON）。

use anyhow::Context;
use batch_planner::{logging, plan_snapshot, BatchPlan, EstimationModel, PlanningSnapshot, WizardAction};
use chrono::NaiveDateTime;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "batch-planner", version, about = "依承諾交期分批並估算完工日期")]
struct Cli {
    /// 規劃快照（訂單、BOM、工作中心）
    #[arg(short, long)]
    snapshot: PathBuf,

    /// 每批天數（覆蓋快照配置）
    #[arg(long, env = "BATCH_DAYS_GROUP")]
    days_group: Option<u32>,

    /// 批次上限（覆蓋快照配置）
    #[arg(long, env = "BATCH_N_GROUPS")]
    n_groups: Option<u32>,

    /// 各工作中心並行估算
    #[arg(long)]
    parallel: bool,

    /// 規劃起點，如 2025-11-03T08:00:00（預設為目前時間）
    #[arg(long)]
    start: Option<NaiveDateTime>,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    plan: &'a BatchPlan,
    action: WizardAction,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut snapshot = PlanningSnapshot::from_json_file(&cli.snapshot)
        .with_context(|| format!("無法載入快照 {}", cli.snapshot.display()))?;

    tracing::info!(
        "載入快照 {}：訂單 {} 筆，BOM {} 份，工作中心 {} 個",
        cli.snapshot.display(),
        snapshot.orders.len(),
        snapshot.boms.len(),
        snapshot.workcenters.len()
    );

    if let Some(days_group) = cli.days_group {
        snapshot.config.days_group = days_group;
    }
    if let Some(n_groups) = cli.n_groups {
        snapshot.config.n_groups = n_groups;
    }
    if cli.parallel {
        snapshot.config.estimation_model = EstimationModel::Parallel;
    }

    let start = cli
        .start
        .unwrap_or_else(|| chrono::Local::now().naive_local());

    let plan = plan_snapshot(&snapshot, start).context("批次規劃失敗")?;

    let output = Output {
        plan: &plan,
        action: plan.action(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
