//! 專案狀態判定

use chrono::NaiveDate;
use serde::Serialize;
use shopfloor_core::{DerivationConfig, Milestone, Project, ProjectStatus};

/// 判定依據
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DecisionReason {
    /// 人工指定，不重算
    ManualOverride,
    /// 已達到的最後段里程碑
    MilestoneReached(Milestone, NaiveDate),
    /// 沒有任何里程碑到期
    NothingReached,
}

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDecision {
    pub status: ProjectStatus,
    pub reason: DecisionReason,
}

/// 專案狀態判定器
///
/// 純函數：判定日期由呼叫端傳入，不讀取系統時鐘。
#[derive(Debug, Clone, Copy)]
pub struct StatusDeriver {
    warn_on_out_of_order: bool,
}

impl StatusDeriver {
    /// 創建判定器（預設警告倒序里程碑）
    pub fn new() -> Self {
        Self {
            warn_on_out_of_order: true,
        }
    }

    /// 依配置創建判定器
    pub fn with_config(config: &DerivationConfig) -> Self {
        Self {
            warn_on_out_of_order: config.warn_on_out_of_order,
        }
    }

    /// 判定專案狀態
    pub fn derive(&self, project: &Project, as_of: NaiveDate) -> ProjectStatus {
        self.explain(project, as_of).status
    }

    /// 以配置時區的今天判定
    pub fn derive_today(&self, project: &Project, config: &DerivationConfig) -> ProjectStatus {
        self.derive(project, config.today())
    }

    /// 判定專案狀態並附上依據
    ///
    /// 1. 人工指定時直接回傳現有狀態
    /// 2. 由出貨往回檢查里程碑，第一個已到期者決定狀態
    /// 3. 出貨當天為 `SHIPPING`，之後為 `COMPLETED`
    /// 4. 皆未到期（或皆未設定）為 `NOT_STARTED`
    pub fn explain(&self, project: &Project, as_of: NaiveDate) -> StatusDecision {
        if project.manual_status {
            tracing::debug!(
                "專案 {} 為人工指定狀態 {}，不重算",
                project.id,
                project.status
            );
            return StatusDecision {
                status: project.status,
                reason: DecisionReason::ManualOverride,
            };
        }

        if self.warn_on_out_of_order {
            let disorder = project.out_of_order_milestones();
            if !disorder.is_empty() {
                tracing::warn!("專案 {} 里程碑日期倒序: {:?}", project.id, disorder);
            }
        }

        for milestone in Milestone::REVERSE_PRIORITY {
            let Some(date) = project.milestone_date(milestone) else {
                continue;
            };

            if as_of >= date {
                let status = milestone.reached_status(as_of == date);
                tracing::debug!(
                    "專案 {} 已達里程碑 {} ({})，狀態: {}",
                    project.id,
                    milestone,
                    date,
                    status
                );
                return StatusDecision {
                    status,
                    reason: DecisionReason::MilestoneReached(milestone, date),
                };
            }
        }

        tracing::debug!("專案 {} 尚無到期里程碑", project.id);
        StatusDecision {
            status: ProjectStatus::NotStarted,
            reason: DecisionReason::NothingReached,
        }
    }
}

impl Default for StatusDeriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn full_schedule() -> Project {
        Project::new("P-1", "Full schedule")
            .with_milestone(Milestone::FabricationStart, "2025-01-01")
            .with_milestone(Milestone::AssemblyStart, "2025-01-10")
            .with_milestone(Milestone::WrapGraphics, "2025-01-15")
            .with_milestone(Milestone::NtcTesting, "2025-01-20")
            .with_milestone(Milestone::QcStart, "2025-01-25")
            .with_milestone(Milestone::Ship, "2025-02-01")
    }

    #[rstest]
    #[case(date(2024, 12, 31), ProjectStatus::NotStarted)]
    #[case(date(2025, 1, 1), ProjectStatus::InFab)]
    #[case(date(2025, 1, 9), ProjectStatus::InFab)]
    #[case(date(2025, 1, 10), ProjectStatus::InAssembly)]
    #[case(date(2025, 1, 15), ProjectStatus::InWrap)]
    #[case(date(2025, 1, 22), ProjectStatus::InNtcTesting)]
    #[case(date(2025, 1, 31), ProjectStatus::InQc)]
    #[case(date(2025, 2, 1), ProjectStatus::Shipping)]
    #[case(date(2025, 2, 2), ProjectStatus::Completed)]
    #[case(date(2026, 6, 1), ProjectStatus::Completed)]
    fn test_progression(#[case] as_of: NaiveDate, #[case] expected: ProjectStatus) {
        let deriver = StatusDeriver::new();
        assert_eq!(deriver.derive(&full_schedule(), as_of), expected);
    }

    #[rstest]
    #[case(date(2025, 1, 15), ProjectStatus::InAssembly)]
    #[case(date(2025, 2, 1), ProjectStatus::Shipping)]
    #[case(date(2025, 2, 2), ProjectStatus::Completed)]
    fn test_sparse_schedule(#[case] as_of: NaiveDate, #[case] expected: ProjectStatus) {
        let project = Project::new("P-2", "Sparse")
            .with_milestone(Milestone::FabricationStart, "2025-01-01")
            .with_milestone(Milestone::AssemblyStart, "2025-01-10")
            .with_milestone(Milestone::Ship, "2025-02-01");

        assert_eq!(StatusDeriver::new().derive(&project, as_of), expected);
    }

    #[test]
    fn test_manual_override_wins() {
        let project = full_schedule().with_manual_status(ProjectStatus::InWrap);
        let deriver = StatusDeriver::new();

        let decision = deriver.explain(&project, date(2030, 1, 1));
        assert_eq!(decision.status, ProjectStatus::InWrap);
        assert_eq!(decision.reason, DecisionReason::ManualOverride);

        let bare = Project::new("P-3", "Bare").with_manual_status(ProjectStatus::Completed);
        assert_eq!(deriver.derive(&bare, date(2020, 1, 1)), ProjectStatus::Completed);
    }

    #[test]
    fn test_no_milestones() {
        let decision = StatusDeriver::new().explain(&Project::new("P-4", "Empty"), date(2025, 1, 1));

        assert_eq!(decision.status, ProjectStatus::NotStarted);
        assert_eq!(decision.reason, DecisionReason::NothingReached);
    }

    #[test]
    fn test_malformed_date_is_absent() {
        // 出貨日期無法解析，退回到較早的階段
        let project = Project::new("P-5", "Typo")
            .with_milestone(Milestone::FabricationStart, "2025-01-01")
            .with_milestone(Milestone::Ship, "2025-02-30");

        let decision = StatusDeriver::new().explain(&project, date(2025, 3, 1));
        assert_eq!(decision.status, ProjectStatus::InFab);
        assert_eq!(
            decision.reason,
            DecisionReason::MilestoneReached(Milestone::FabricationStart, date(2025, 1, 1))
        );
    }

    #[test]
    fn test_ship_timestamp_compares_calendar_date() {
        let project = Project::new("P-6", "Timestamp")
            .with_milestone(Milestone::Ship, "2025-02-01T18:45:00-05:00");

        let deriver = StatusDeriver::new();
        assert_eq!(deriver.derive(&project, date(2025, 2, 1)), ProjectStatus::Shipping);
        assert_eq!(deriver.derive(&project, date(2025, 2, 2)), ProjectStatus::Completed);
    }

    #[test]
    fn test_out_of_order_last_milestone_wins() {
        // 日期倒序不做校驗：依優先順序，出貨已到期即為完成
        let project = Project::new("P-7", "Disorder")
            .with_milestone(Milestone::FabricationStart, "2025-03-01")
            .with_milestone(Milestone::Ship, "2025-01-01");

        let deriver = StatusDeriver::with_config(&DerivationConfig::new());
        assert_eq!(deriver.derive(&project, date(2025, 2, 1)), ProjectStatus::Completed);
    }

    #[test]
    fn test_derive_today_matches_explicit_date() {
        let config = DerivationConfig::default();
        let project = full_schedule();
        let deriver = StatusDeriver::with_config(&config);

        let today = config.today();
        assert_eq!(deriver.derive_today(&project, &config), deriver.derive(&project, today));
    }
}
