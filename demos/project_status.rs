//! 專案狀態判定範例
//!
//! 展示從文件資料庫載入專案、判定狀態與批次寫回的流程

use chrono::NaiveDate;
use shopfloor::*;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    println!("===== Project Status Example =====\n");

    // 步驟 1: 載入配置
    println!("[1] Load Derivation Config");
    let config = DerivationConfig::from_json_str(r#"{ "referenceUtcOffsetMinutes": -300 }"#)?;
    println!("    UTC offset: {} min, today: {}\n", config.reference_utc_offset_minutes, config.today());

    // 步驟 2: 載入專案
    println!("[2] Load Projects");
    let mut projects = vec![
        Project::from_json_str(
            r#"{
                "id": "PRJ-001",
                "name": "Mobile showroom",
                "fabricationStart": "2025-01-01",
                "assemblyStart": "2025-01-10",
                "ship": "2025-02-01"
            }"#,
        )?,
        Project::new("PRJ-002", "Kiosk")
            .with_milestone(Milestone::FabricationStart, "2025-01-05")
            .with_milestone(Milestone::WrapGraphics, "2025-01-12")
            .with_milestone(Milestone::QcStart, "2025-01-20"),
        Project::new("PRJ-003", "Trade booth")
            .with_milestone(Milestone::Ship, "2025-01-08")
            .with_manual_status(ProjectStatus::InQc),
    ];
    println!("    {} projects loaded\n", projects.len());

    // 步驟 3: 判定狀態
    let as_of = NaiveDate::from_ymd_opt(2025, 1, 15).ok_or_else(|| anyhow::anyhow!("無效的日期"))?;
    println!("[3] Derive Status as of {}", as_of);
    let deriver = StatusDeriver::with_config(&config);
    for project in &projects {
        let decision = deriver.explain(project, as_of);
        println!("    {}: {:<14} ({:?})", project.id, decision.status.as_str(), decision.reason);

        if let Some(timeline) = ProjectTimeline::from_project(project) {
            println!("        timeline progress: {}%", timeline.position_of(as_of));
        }
    }
    println!();

    // 步驟 4: 批次寫回
    println!("[4] Refresh and Persist");
    let refresher = StatusRefresher::new(deriver);
    for change in refresher.plan(&projects, as_of) {
        println!("    {}: {} -> {}", change.project_id, change.from, change.to);
    }
    let changed = refresher.apply(&mut projects, as_of);
    println!("    {} project(s) updated\n", changed);

    println!("{}", serde_json::to_string_pretty(&projects)?);

    Ok(())
}
