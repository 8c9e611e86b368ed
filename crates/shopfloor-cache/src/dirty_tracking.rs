//! 髒標記追蹤

use std::collections::HashSet;

/// 髒標記追蹤器（待重算的專案）
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    dirty_projects: HashSet<String>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記專案為髒
    pub fn mark_dirty(&mut self, project_id: impl Into<String>) {
        self.dirty_projects.insert(project_id.into());
    }

    /// 清除單一專案的髒標記，回傳原本是否為髒
    pub fn mark_clean(&mut self, project_id: &str) -> bool {
        self.dirty_projects.remove(project_id)
    }

    /// 檢查專案是否為髒
    pub fn is_dirty(&self, project_id: &str) -> bool {
        self.dirty_projects.contains(project_id)
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_projects.clear();
    }

    /// 獲取所有髒專案（排序後）
    pub fn dirty_projects(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.dirty_projects.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// 髒專案數量
    pub fn len(&self) -> usize {
        self.dirty_projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirty_projects.is_empty()
    }
}
