//! # Shopfloor Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod material;
pub mod milestone;
pub mod order;
pub mod project;
pub mod requirement;
pub mod status;

// Re-export 主要類型
pub use config::DerivationConfig;
pub use material::Material;
pub use milestone::{parse_milestone_date, Milestone};
pub use order::{Allocation, OrderMaterialLine, ProductionOrder};
pub use project::Project;
pub use requirement::{MaterialRequirement, RequirementStatus};
pub use status::ProjectStatus;

/// 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ShopfloorError {
    #[error("無效的專案狀態: {0}")]
    InvalidStatus(String),

    #[error("無效的里程碑: {0}")]
    InvalidMilestone(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ShopfloorError>;
