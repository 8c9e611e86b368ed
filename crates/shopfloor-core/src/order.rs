//! 生產工單與物料分配

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 工單物料需求行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMaterialLine {
    /// 物料ID
    pub material_id: String,

    /// 需求數量
    pub required_quantity: Decimal,
}

impl OrderMaterialLine {
    pub fn new(material_id: impl Into<String>, required_quantity: Decimal) -> Self {
        Self {
            material_id: material_id.into(),
            required_quantity,
        }
    }
}

/// 生產工單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOrder {
    /// 工單ID
    pub id: Uuid,

    /// 所屬專案
    #[serde(default)]
    pub project_id: Option<String>,

    /// 物料需求
    #[serde(default)]
    pub materials: Vec<OrderMaterialLine>,
}

impl ProductionOrder {
    /// 創建新的工單
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id: None,
            materials: Vec::new(),
        }
    }

    /// 建構器模式：設置專案
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// 建構器模式：添加物料需求行
    pub fn with_line(mut self, material_id: impl Into<String>, quantity: Decimal) -> Self {
        self.materials.push(OrderMaterialLine::new(material_id, quantity));
        self
    }

    /// 需求總數量（不分物料）
    pub fn total_quantity(&self) -> Decimal {
        self.materials
            .iter()
            .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.required_quantity))
    }
}

impl Default for ProductionOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// 物料分配（已鎖定給工單的庫存）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    /// 分配ID
    pub id: Uuid,

    /// 工單ID
    pub order_id: Uuid,

    /// 物料ID
    pub material_id: String,

    /// 分配數量
    pub quantity: Decimal,
}

impl Allocation {
    pub fn new(order_id: Uuid, material_id: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            material_id: material_id.into(),
            quantity,
        }
    }
}
