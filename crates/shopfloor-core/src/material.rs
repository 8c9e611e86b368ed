//! 物料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料主檔（需求彙總所需欄位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// 物料ID
    pub id: String,

    /// 物料名稱
    #[serde(default)]
    pub name: String,

    /// 目前可用庫存
    #[serde(default)]
    pub available_stock: Decimal,

    /// 安全庫存（未設定視為 0）
    #[serde(default)]
    pub safety_stock: Option<Decimal>,

    /// 提前期（天，未設定視為 0）
    #[serde(default, rename = "leadTime")]
    pub lead_time_days: Option<u32>,
}

impl Material {
    /// 創建新的物料
    pub fn new(id: impl Into<String>, available_stock: Decimal) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            available_stock,
            safety_stock: None,
            lead_time_days: None,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 建構器模式：設置安全庫存
    pub fn with_safety_stock(mut self, safety_stock: Decimal) -> Self {
        self.safety_stock = Some(safety_stock);
        self
    }

    /// 建構器模式：設置提前期
    pub fn with_lead_time(mut self, days: u32) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    /// 有效安全庫存
    pub fn effective_safety_stock(&self) -> Decimal {
        self.safety_stock.unwrap_or(Decimal::ZERO)
    }

    /// 有效提前期
    pub fn effective_lead_time(&self) -> u32 {
        self.lead_time_days.unwrap_or(0)
    }
}
