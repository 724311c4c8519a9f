//! 腳踏車訂單分批範例
//!
//! 展示從銷售訂單到批次完工日期的完整規劃流程

use batch_planner::*;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("===== Bike Batch Planning Example =====\n");

    // 步驟 1: 建立工作中心與 BOM
    println!("[1] Create Catalog");
    let catalog = ManufacturingCatalog::new()
        .with_workcenter(Workcenter::new("ASSY".to_string(), Decimal::from(40)).with_name("組裝線".to_string()))
        .with_workcenter(Workcenter::new("WELD".to_string(), Decimal::from(25)).with_name("焊接站".to_string()))
        .with_bom(
            Bom::new("BIKE-001".to_string())
                .with_component("FRAME-001".to_string(), Decimal::ONE)
                .with_component("WHEEL-001".to_string(), Decimal::from(2)),
        )
        .with_bom(Bom::new("FRAME-001".to_string()).with_component("TUBE-001".to_string(), Decimal::from(3)));
    println!("    BIKE-001 → FRAME-001 x1 (→ TUBE-001 x3), WHEEL-001 x2");
    println!("    ASSY 40/h, WELD 25/h\n");

    // 步驟 2: 鋼管走焊接站，其餘末階物料走第一個工作中心
    println!("[2] Configure Leaf Routing");
    let routing = RoutingTable::new(DefaultRouting::from_workcenters(&catalog)).with_route(
        "TUBE-001".to_string(),
        Routing::new("weld".to_string(), "WELD".to_string()),
    );
    println!("    TUBE-001: weld @ WELD, others: {} @ ASSY\n", DEFAULT_OPERATION);

    // 步驟 3: 建立銷售訂單
    println!("[3] Create Sales Orders");
    let orders: Vec<SalesOrder> = [(5, 120), (6, 80), (8, 300), (9, 60), (12, 200)]
        .iter()
        .enumerate()
        .map(|(i, &(day, qty))| {
            let date = NaiveDate::from_ymd_opt(2025, 11, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            SalesOrder::new(format!("SO-{:03}", i + 1), date)
                .with_line("BIKE-001".to_string(), Decimal::from(qty))
        })
        .collect();
    for order in &orders {
        println!("    {}: {} bikes, commit {}", order.id, order.total_quantity(), order.commitment_date);
    }
    println!();

    // 步驟 4: 執行規劃
    println!("[4] Run Planner (daysgroup=1, ngroups=3)");
    let config = PlanningConfig::new(1, 3);
    let mut aggregator = CachedAggregator::new(DemandAggregator::new(&catalog, &routing));
    let start = NaiveDate::from_ymd_opt(2025, 11, 3)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let plan = BatchPlanner::new(config).plan(&orders, start, &mut aggregator, &catalog)?;

    // 步驟 5: 輸出結果
    println!("\n[5] Results");
    for (i, batch) in plan.batches.iter().enumerate() {
        println!(
            "    Batch {}: {:?} | {} → {}",
            i + 1,
            batch.orders,
            batch.start_date,
            batch.projected_end_date
        );
    }
    if !plan.unprocessed.is_empty() {
        println!("    Unprocessed: {:?}", plan.unprocessed);
    }
    println!(
        "\n    Cache hits: {}, explosions: {}, action: {:?}",
        aggregator.hits(),
        aggregator.misses(),
        plan.action()
    );

    Ok(())
}
