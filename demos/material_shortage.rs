//! 物料缺料彙總範例
//!
//! 展示多張工單的物料需求彙總與缺料分級

use rust_decimal::Decimal;
use shopfloor::*;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    println!("===== Material Shortage Example =====\n");

    // 步驟 1: 物料主檔
    println!("[1] Material Master");
    let materials = vec![
        Material::new("ALU-SHEET", Decimal::from(8))
            .with_name("Aluminium sheet 4x8")
            .with_safety_stock(Decimal::from(2))
            .with_lead_time(14),
        Material::new("LED-STRIP", Decimal::from(30))
            .with_name("LED strip 5m")
            .with_safety_stock(Decimal::from(10))
            .with_lead_time(7),
        Material::new("VINYL-WRAP", Decimal::from(3))
            .with_name("Vinyl wrap roll")
            .with_safety_stock(Decimal::from(4))
            .with_lead_time(5),
    ];
    for material in &materials {
        println!("    {:<10} stock {:>4}", material.id, material.available_stock);
    }
    println!();

    // 步驟 2: 生產工單
    println!("[2] Production Orders");
    let orders = vec![
        ProductionOrder::new()
            .with_project_id("PRJ-001")
            .with_line("ALU-SHEET", Decimal::from(5))
            .with_line("LED-STRIP", Decimal::from(12))
            .with_line("VINYL-WRAP", Decimal::from(2)),
        ProductionOrder::new()
            .with_project_id("PRJ-002")
            .with_line("ALU-SHEET", Decimal::from(7))
            .with_line("VINYL-WRAP", Decimal::from(4))
            .with_line("HINGE-KIT", Decimal::from(6)),
    ];
    let allocations = vec![Allocation::new(orders[0].id, "LED-STRIP", Decimal::from(12))];
    println!("    {} orders, {} allocation(s)\n", orders.len(), allocations.len());

    // 步驟 3: 彙總
    println!("[3] Aggregate Requirements");
    let report = RequirementsAggregator::run(&orders, &materials, &allocations);
    for requirement in report.critical_first() {
        println!(
            "    {:<10} required {:>4} available {:>4} shortage {:>4} -> {:?}",
            requirement.material_id,
            requirement.required,
            requirement.available,
            requirement.shortage,
            requirement.status
        );
    }

    for substitution in &report.substitutions {
        println!("    default applied: {:?}", substitution);
    }

    let summary = report.summary();
    println!(
        "\n    ok {}, warning {}, critical {}, total shortage {}",
        summary.ok, summary.warning, summary.critical, summary.total_shortage
    );

    println!("\n{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
