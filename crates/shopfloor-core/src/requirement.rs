//! 物料需求彙總結果

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 缺料等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementStatus {
    /// 庫存足夠
    Ok,
    /// 缺料但在安全庫存內
    Warning,
    /// 缺料超過安全庫存
    Critical,
}

impl RequirementStatus {
    /// 依缺料量與安全庫存分級
    pub fn classify(shortage: Decimal, safety_stock: Decimal) -> Self {
        if shortage <= Decimal::ZERO {
            RequirementStatus::Ok
        } else if shortage > safety_stock {
            RequirementStatus::Critical
        } else {
            RequirementStatus::Warning
        }
    }

    /// 嚴重度（排序用，越大越嚴重）
    pub fn severity(&self) -> u8 {
        match self {
            RequirementStatus::Ok => 0,
            RequirementStatus::Warning => 1,
            RequirementStatus::Critical => 2,
        }
    }
}

/// 單一物料的需求彙總（不落地，僅供畫面呈現）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequirement {
    /// 物料ID
    pub material_id: String,

    /// 總需求
    pub required: Decimal,

    /// 彙總當下的可用庫存
    pub available: Decimal,

    /// 已分配給工單的數量（僅供參考）
    pub allocated: Decimal,

    /// 缺料量 = max(0, 需求 - 可用)
    pub shortage: Decimal,

    /// 提前期（天）
    #[serde(rename = "leadTime")]
    pub lead_time_days: u32,

    /// 安全庫存
    pub safety_stock: Decimal,

    /// 缺料等級
    pub status: RequirementStatus,
}

impl MaterialRequirement {
    /// 創建累加器（數量尚未結算）
    pub fn new(
        material_id: String,
        required: Decimal,
        available: Decimal,
        safety_stock: Decimal,
        lead_time_days: u32,
    ) -> Self {
        Self {
            material_id,
            required,
            available,
            allocated: Decimal::ZERO,
            shortage: Decimal::ZERO,
            lead_time_days,
            safety_stock,
            status: RequirementStatus::Ok,
        }
    }

    /// 結算缺料量與等級
    ///
    /// 數量溢位時取飽和值，不中斷彙總。
    pub fn settle(&mut self) {
        self.shortage = self.required.saturating_sub(self.available).max(Decimal::ZERO);
        self.status = RequirementStatus::classify(self.shortage, self.safety_stock);
    }

    /// 檢查是否缺料
    pub fn has_shortage(&self) -> bool {
        self.shortage > Decimal::ZERO
    }
}
