//! # Shopfloor Calculation Engine
//!
//! 專案狀態判定與物料需求彙總

pub mod refresh;
pub mod requirements;
pub mod status;
pub mod timeline;

// Re-export 主要類型
pub use refresh::{StatusChange, StatusRefresher};
pub use requirements::{aggregate_requirements, RequirementsAggregator};
pub use status::{DecisionReason, StatusDecision, StatusDeriver};
pub use timeline::{timeline_position, ProjectTimeline, TimelineMarker};

use rust_decimal::Decimal;
use serde::Serialize;
use shopfloor_core::{MaterialRequirement, RequirementStatus};

/// 需求彙總結果
#[derive(Debug, Clone, Serialize)]
pub struct RequirementsReport {
    /// 物料需求（依首次出現順序）
    pub requirements: Vec<MaterialRequirement>,

    /// 套用預設值的紀錄
    pub substitutions: Vec<DefaultSubstitution>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl RequirementsReport {
    /// 創建空的彙總結果
    pub fn empty() -> Self {
        Self {
            requirements: Vec::new(),
            substitutions: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 各等級統計
    pub fn summary(&self) -> RequirementsSummary {
        let mut summary = RequirementsSummary::default();
        for requirement in &self.requirements {
            match requirement.status {
                RequirementStatus::Ok => summary.ok += 1,
                RequirementStatus::Warning => summary.warning += 1,
                RequirementStatus::Critical => summary.critical += 1,
            }
            summary.total_shortage = summary.total_shortage.saturating_add(requirement.shortage);
        }
        summary
    }

    /// 依嚴重度排序（同等級保留原順序）
    pub fn critical_first(&self) -> Vec<&MaterialRequirement> {
        let mut sorted: Vec<_> = self.requirements.iter().collect();
        sorted.sort_by_key(|r| std::cmp::Reverse(r.status.severity()));
        sorted
    }

    /// 缺料的物料
    pub fn shortages(&self) -> impl Iterator<Item = &MaterialRequirement> {
        self.requirements.iter().filter(|r| r.has_shortage())
    }
}

/// 需求彙總統計
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequirementsSummary {
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
    pub total_shortage: Decimal,
}

/// 缺少關聯資料時套用的預設值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DefaultSubstitution {
    /// 物料主檔不存在：庫存與提前期以 0 計
    #[serde(rename_all = "camelCase")]
    UnknownMaterial { material_id: String },
}
