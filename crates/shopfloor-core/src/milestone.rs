//! 生產里程碑

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ProjectStatus, ShopfloorError};

/// 專案里程碑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Milestone {
    /// 製造開始
    FabricationStart,
    /// 組裝開始
    AssemblyStart,
    /// 包膜/圖案
    WrapGraphics,
    /// NTC 測試
    NtcTesting,
    /// 品檢開始
    QcStart,
    /// 出貨
    Ship,
}

impl Milestone {
    /// 依生產順序排列
    pub const ALL: [Milestone; 6] = [
        Milestone::FabricationStart,
        Milestone::AssemblyStart,
        Milestone::WrapGraphics,
        Milestone::NtcTesting,
        Milestone::QcStart,
        Milestone::Ship,
    ];

    /// 狀態判定的檢查順序：越後段的里程碑越優先
    pub const REVERSE_PRIORITY: [Milestone; 6] = [
        Milestone::Ship,
        Milestone::QcStart,
        Milestone::NtcTesting,
        Milestone::WrapGraphics,
        Milestone::AssemblyStart,
        Milestone::FabricationStart,
    ];

    /// 文件資料庫中的欄位名稱
    pub fn field_name(&self) -> &'static str {
        match self {
            Milestone::FabricationStart => "fabricationStart",
            Milestone::AssemblyStart => "assemblyStart",
            Milestone::WrapGraphics => "wrapGraphics",
            Milestone::NtcTesting => "ntcTesting",
            Milestone::QcStart => "qcStart",
            Milestone::Ship => "ship",
        }
    }

    /// 達到此里程碑後的專案狀態
    ///
    /// 出貨里程碑依是否為同一天區分 `SHIPPING` 與 `COMPLETED`。
    pub fn reached_status(&self, same_day: bool) -> ProjectStatus {
        match self {
            Milestone::FabricationStart => ProjectStatus::InFab,
            Milestone::AssemblyStart => ProjectStatus::InAssembly,
            Milestone::WrapGraphics => ProjectStatus::InWrap,
            Milestone::NtcTesting => ProjectStatus::InNtcTesting,
            Milestone::QcStart => ProjectStatus::InQc,
            Milestone::Ship if same_day => ProjectStatus::Shipping,
            Milestone::Ship => ProjectStatus::Completed,
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Milestone {
    type Err = ShopfloorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Milestone::ALL
            .iter()
            .copied()
            .find(|m| m.field_name() == s)
            .ok_or_else(|| ShopfloorError::InvalidMilestone(s.to_string()))
    }
}

/// 解析里程碑日期
///
/// 接受 `YYYY-MM-DD`、RFC 3339 時間戳（取字面上的日曆日期）與無時區的
/// `YYYY-MM-DDTHH:MM:SS`／`YYYY-MM-DD HH:MM:SS`。無法解析的值視為未設定。
pub fn parse_milestone_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date())
}
