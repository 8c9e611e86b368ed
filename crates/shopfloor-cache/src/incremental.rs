//! 增量狀態重算

use chrono::NaiveDate;
use shopfloor_calc::StatusDeriver;
use shopfloor_core::{Project, ProjectStatus};
use std::collections::HashMap;

use crate::DirtyTracker;

/// 專案狀態緩存
///
/// 同一判定日期且未被編輯的專案直接回傳上次結果。
#[derive(Debug)]
pub struct StatusCache {
    deriver: StatusDeriver,
    entries: HashMap<String, (NaiveDate, ProjectStatus)>,
    dirty: DirtyTracker,
}

impl StatusCache {
    /// 創建新的緩存
    pub fn new(deriver: StatusDeriver) -> Self {
        Self {
            deriver,
            entries: HashMap::new(),
            dirty: DirtyTracker::new(),
        }
    }

    /// 記錄專案已被編輯（里程碑或人工狀態變更）
    pub fn record_edit(&mut self, project_id: impl Into<String>) {
        self.dirty.mark_dirty(project_id);
    }

    /// 取得專案狀態，必要時重算
    pub fn status_for(&mut self, project: &Project, as_of: NaiveDate) -> ProjectStatus {
        let is_dirty = self.dirty.is_dirty(&project.id);

        if !is_dirty {
            if let Some(&(cached_as_of, status)) = self.entries.get(&project.id) {
                if cached_as_of == as_of {
                    tracing::debug!("專案 {} 命中緩存: {}", project.id, status);
                    return status;
                }
            }
        }

        let status = self.deriver.derive(project, as_of);
        tracing::debug!("專案 {} 重算狀態: {}", project.id, status);
        self.entries.insert(project.id.clone(), (as_of, status));
        self.dirty.mark_clean(&project.id);
        status
    }

    /// 清除所有緩存
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.dirty.clear();
    }

    /// 待重算的專案
    pub fn pending(&self) -> Vec<String> {
        self.dirty.dirty_projects()
    }

    /// 緩存筆數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StatusCache {
    fn default() -> Self {
        Self::new(StatusDeriver::new())
    }
}
