//! 時間軸位置計算

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shopfloor_core::{Milestone, Project};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// 日期在時間軸上的位置（百分比，0–100，小數兩位）
///
/// 區間長度為 0 或負值時，起點當天（含之前）為 0，之後為 100。
pub fn timeline_position(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> Decimal {
    let span = (end - start).num_days();
    if span <= 0 {
        return if date <= start { Decimal::ZERO } else { HUNDRED };
    }

    let offset = (date - start).num_days();
    let position = Decimal::from(offset) * HUNDRED / Decimal::from(span);
    position.clamp(Decimal::ZERO, HUNDRED).round_dp(2)
}

/// 時間軸標記
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineMarker {
    pub milestone: Milestone,
    pub date: NaiveDate,
    pub position: Decimal,
}

/// 專案時間軸（由最早到最晚的里程碑）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectTimeline {
    pub project_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    markers: Vec<TimelineMarker>,
}

impl ProjectTimeline {
    /// 從專案建立時間軸；沒有可解析的里程碑時回傳 None
    pub fn from_project(project: &Project) -> Option<Self> {
        let dates = project.milestone_dates();
        let start = dates.iter().map(|(_, d)| *d).min()?;
        let end = dates.iter().map(|(_, d)| *d).max()?;

        let markers = dates
            .into_iter()
            .map(|(milestone, date)| TimelineMarker {
                milestone,
                date,
                position: timeline_position(date, start, end),
            })
            .collect();

        Some(Self {
            project_id: project.id.clone(),
            start,
            end,
            markers,
        })
    }

    /// 里程碑標記（依生產順序）
    pub fn markers(&self) -> &[TimelineMarker] {
        &self.markers
    }

    /// 指定日期在時間軸上的位置
    pub fn position_of(&self, as_of: NaiveDate) -> Decimal {
        timeline_position(as_of, self.start, self.end)
    }

    /// 總天數
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
