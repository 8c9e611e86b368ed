//! 批次狀態重算

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use shopfloor_core::{Project, ProjectStatus};

use crate::StatusDeriver;

/// 狀態變更
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub project_id: String,
    pub from: ProjectStatus,
    pub to: ProjectStatus,
}

/// 批次狀態重算器
///
/// 各專案互相獨立，以 rayon 平行判定；輸出保留輸入順序。
pub struct StatusRefresher {
    deriver: StatusDeriver,
}

impl StatusRefresher {
    /// 創建新的重算器
    pub fn new(deriver: StatusDeriver) -> Self {
        Self { deriver }
    }

    /// 列出需要更新的專案（人工指定的專案不會出現）
    pub fn plan(&self, projects: &[Project], as_of: NaiveDate) -> Vec<StatusChange> {
        tracing::info!("開始狀態重算：專案 {} 筆，判定日期 {}", projects.len(), as_of);

        let changes: Vec<StatusChange> = projects
            .par_iter()
            .filter_map(|project| {
                let derived = self.deriver.derive(project, as_of);
                (derived != project.status).then(|| StatusChange {
                    project_id: project.id.clone(),
                    from: project.status,
                    to: derived,
                })
            })
            .collect();

        tracing::info!("狀態重算完成，需更新 {} 筆", changes.len());
        changes
    }

    /// 重算並寫回狀態，回傳變更筆數
    pub fn apply(&self, projects: &mut [Project], as_of: NaiveDate) -> usize {
        let changed: usize = projects
            .par_iter_mut()
            .map(|project| {
                let derived = self.deriver.derive(project, as_of);
                if derived == project.status {
                    return 0;
                }
                tracing::debug!("專案 {}: {} → {}", project.id, project.status, derived);
                project.status = derived;
                1
            })
            .sum();

        tracing::info!("狀態寫回完成，變更 {} 筆", changed);
        changed
    }
}

impl Default for StatusRefresher {
    fn default() -> Self {
        Self::new(StatusDeriver::new())
    }
}
