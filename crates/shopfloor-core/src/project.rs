//! 專案模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{parse_milestone_date, Milestone, ProjectStatus};

/// 專案（僅含狀態判定相關欄位）
///
/// 里程碑保留資料庫中的原始字串；無法解析的日期在判定時視為未設定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 專案ID
    pub id: String,

    /// 專案名稱
    #[serde(default)]
    pub name: String,

    /// 目前狀態
    #[serde(default)]
    pub status: ProjectStatus,

    /// 是否為人工指定狀態（不自動重算）
    #[serde(default)]
    pub manual_status: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabrication_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_graphics: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntc_testing: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qc_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<String>,
}

impl Project {
    /// 創建新的專案（自動狀態，尚未開始）
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: ProjectStatus::NotStarted,
            manual_status: false,
            fabrication_start: None,
            assembly_start: None,
            wrap_graphics: None,
            ntc_testing: None,
            qc_start: None,
            ship: None,
        }
    }

    /// 從 JSON 文件載入
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 建構器模式：設置里程碑日期
    pub fn with_milestone(mut self, milestone: Milestone, value: impl Into<String>) -> Self {
        *self.milestone_slot(milestone) = Some(value.into());
        self
    }

    /// 建構器模式：設置人工狀態
    pub fn with_manual_status(mut self, status: ProjectStatus) -> Self {
        self.override_status(status);
        self
    }

    /// 里程碑原始值
    pub fn milestone_raw(&self, milestone: Milestone) -> Option<&str> {
        let slot = match milestone {
            Milestone::FabricationStart => &self.fabrication_start,
            Milestone::AssemblyStart => &self.assembly_start,
            Milestone::WrapGraphics => &self.wrap_graphics,
            Milestone::NtcTesting => &self.ntc_testing,
            Milestone::QcStart => &self.qc_start,
            Milestone::Ship => &self.ship,
        };
        slot.as_deref()
    }

    /// 里程碑日期（無法解析視為未設定）
    pub fn milestone_date(&self, milestone: Milestone) -> Option<NaiveDate> {
        self.milestone_raw(milestone).and_then(parse_milestone_date)
    }

    /// 所有可解析的里程碑（依生產順序）
    pub fn milestone_dates(&self) -> Vec<(Milestone, NaiveDate)> {
        Milestone::ALL
            .iter()
            .filter_map(|&m| self.milestone_date(m).map(|d| (m, d)))
            .collect()
    }

    /// 更新里程碑，回傳原始值是否有變更
    pub fn set_milestone(&mut self, milestone: Milestone, value: Option<String>) -> bool {
        let slot = self.milestone_slot(milestone);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// 人工指定狀態
    pub fn override_status(&mut self, status: ProjectStatus) {
        self.status = status;
        self.manual_status = true;
    }

    /// 取消人工指定，恢復自動重算
    pub fn clear_override(&mut self) {
        self.manual_status = false;
    }

    /// 找出日期倒序的相鄰里程碑（僅供診斷，不影響狀態判定）
    pub fn out_of_order_milestones(&self) -> Vec<(Milestone, Milestone)> {
        self.milestone_dates()
            .windows(2)
            .filter(|pair| pair[1].1 < pair[0].1)
            .map(|pair| (pair[0].0, pair[1].0))
            .collect()
    }

    fn milestone_slot(&mut self, milestone: Milestone) -> &mut Option<String> {
        match milestone {
            Milestone::FabricationStart => &mut self.fabrication_start,
            Milestone::AssemblyStart => &mut self.assembly_start,
            Milestone::WrapGraphics => &mut self.wrap_graphics,
            Milestone::NtcTesting => &mut self.ntc_testing,
            Milestone::QcStart => &mut self.qc_start,
            Milestone::Ship => &mut self.ship,
        }
    }
}
