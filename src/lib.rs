//! # Shopfloor
//!
//! 製造專案狀態判定與物料缺料彙總函式庫。
//!
//! 本 crate 僅重新匯出各子 crate，傳輸、持久化與驗證由呼叫端負責。
//!
//! ```
//! use shopfloor::{Milestone, NaiveDate, Project, ProjectStatus, StatusDeriver};
//!
//! let project = Project::new("P-1", "Trailer")
//!     .with_milestone(Milestone::FabricationStart, "2025-01-01")
//!     .with_milestone(Milestone::AssemblyStart, "2025-01-10")
//!     .with_milestone(Milestone::Ship, "2025-02-01");
//!
//! let as_of = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! assert_eq!(StatusDeriver::new().derive(&project, as_of), ProjectStatus::InAssembly);
//! ```

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;

pub use shopfloor_cache::{DirtyTracker, StatusCache};
pub use shopfloor_calc::{
    aggregate_requirements, timeline_position, DecisionReason, DefaultSubstitution,
    ProjectTimeline, RequirementsAggregator, RequirementsReport, RequirementsSummary,
    StatusChange, StatusDecision, StatusDeriver, StatusRefresher, TimelineMarker,
};
pub use shopfloor_core::{
    parse_milestone_date, Allocation, DerivationConfig, Material, MaterialRequirement, Milestone,
    OrderMaterialLine, ProductionOrder, Project, ProjectStatus, RequirementStatus, Result,
    ShopfloorError,
};
