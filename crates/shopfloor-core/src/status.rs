//! 專案生命週期狀態

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ShopfloorError;

/// 專案狀態
///
/// 序列化字串與文件資料庫中保存的值一致（含空白）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// 尚未開始
    #[default]
    #[serde(rename = "NOT_STARTED")]
    NotStarted,
    /// 製造中
    #[serde(rename = "IN FAB")]
    InFab,
    /// 組裝中
    #[serde(rename = "IN ASSEMBLY")]
    InAssembly,
    /// 包膜/圖案
    #[serde(rename = "IN WRAP")]
    InWrap,
    /// NTC 測試中
    #[serde(rename = "IN NTC TESTING")]
    InNtcTesting,
    /// 品檢中
    #[serde(rename = "IN QC")]
    InQc,
    /// 出貨當日
    #[serde(rename = "SHIPPING")]
    Shipping,
    /// 已完成
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl ProjectStatus {
    /// 所有狀態（依生命週期順序）
    pub const ALL: [ProjectStatus; 8] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InFab,
        ProjectStatus::InAssembly,
        ProjectStatus::InWrap,
        ProjectStatus::InNtcTesting,
        ProjectStatus::InQc,
        ProjectStatus::Shipping,
        ProjectStatus::Completed,
    ];

    /// 字串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "NOT_STARTED",
            ProjectStatus::InFab => "IN FAB",
            ProjectStatus::InAssembly => "IN ASSEMBLY",
            ProjectStatus::InWrap => "IN WRAP",
            ProjectStatus::InNtcTesting => "IN NTC TESTING",
            ProjectStatus::InQc => "IN QC",
            ProjectStatus::Shipping => "SHIPPING",
            ProjectStatus::Completed => "COMPLETED",
        }
    }

    /// 生命週期階段序號（0 = 尚未開始）
    pub fn stage(&self) -> u8 {
        match self {
            ProjectStatus::NotStarted => 0,
            ProjectStatus::InFab => 1,
            ProjectStatus::InAssembly => 2,
            ProjectStatus::InWrap => 3,
            ProjectStatus::InNtcTesting => 4,
            ProjectStatus::InQc => 5,
            ProjectStatus::Shipping => 6,
            ProjectStatus::Completed => 7,
        }
    }

    /// 檢查是否為終態
    pub fn is_terminal(&self) -> bool {
        *self == ProjectStatus::Completed
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ShopfloorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ShopfloorError::InvalidStatus(s.to_string()))
    }
}
