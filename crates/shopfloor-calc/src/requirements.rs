//! 物料需求彙總

use indexmap::IndexMap;
use rust_decimal::Decimal;
use shopfloor_core::{Allocation, Material, MaterialRequirement, OrderMaterialLine, ProductionOrder};
use std::collections::HashMap;

use crate::{DefaultSubstitution, RequirementsReport};

/// 彙總工單物料需求
///
/// 輸出順序為物料首次出現的順序。找不到物料主檔時以庫存 0、提前期 0 計算。
pub fn aggregate_requirements<'a, I>(
    lines: I,
    materials: &[Material],
    allocations: &[Allocation],
) -> Vec<MaterialRequirement>
where
    I: IntoIterator<Item = &'a OrderMaterialLine>,
{
    RequirementsAggregator::fold(lines, materials, allocations).0
}

/// 需求彙總計算器
pub struct RequirementsAggregator;

impl RequirementsAggregator {
    /// 彙總所有工單的物料需求
    pub fn run(
        orders: &[ProductionOrder],
        materials: &[Material],
        allocations: &[Allocation],
    ) -> RequirementsReport {
        tracing::info!(
            "開始需求彙總：工單 {} 筆，物料 {} 筆，分配 {} 筆",
            orders.len(),
            materials.len(),
            allocations.len()
        );

        let start_time = std::time::Instant::now();

        let lines = orders.iter().flat_map(|order| order.materials.iter());
        let (requirements, substitutions) = Self::fold(lines, materials, allocations);

        let mut report = RequirementsReport::empty();
        report.requirements = requirements;
        report.substitutions = substitutions;
        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "需求彙總完成，物料 {} 項，耗時 {:?}",
            report.requirements.len(),
            start_time.elapsed()
        );

        report
    }

    fn fold<'a, I>(
        lines: I,
        materials: &[Material],
        allocations: &[Allocation],
    ) -> (Vec<MaterialRequirement>, Vec<DefaultSubstitution>)
    where
        I: IntoIterator<Item = &'a OrderMaterialLine>,
    {
        let material_map = Self::create_material_map(materials);
        let allocated_map = Self::sum_allocations(allocations);

        let mut accumulators: IndexMap<&str, MaterialRequirement> = IndexMap::new();
        let mut substitutions = Vec::new();

        for line in lines {
            let material_id = line.material_id.as_str();

            if let Some(acc) = accumulators.get_mut(material_id) {
                acc.required = acc.required.saturating_add(line.required_quantity);
                continue;
            }

            let accumulator = match material_map.get(material_id) {
                Some(material) => MaterialRequirement::new(
                    material_id.to_string(),
                    line.required_quantity,
                    material.available_stock,
                    material.effective_safety_stock(),
                    material.effective_lead_time(),
                ),
                None => {
                    tracing::warn!("找不到物料主檔 {}，以庫存 0、提前期 0 計算", material_id);
                    substitutions.push(DefaultSubstitution::UnknownMaterial {
                        material_id: material_id.to_string(),
                    });
                    MaterialRequirement::new(
                        material_id.to_string(),
                        line.required_quantity,
                        Decimal::ZERO,
                        Decimal::ZERO,
                        0,
                    )
                }
            };

            accumulators.insert(material_id, accumulator);
        }

        let requirements = accumulators
            .into_values()
            .map(|mut acc| {
                acc.allocated = allocated_map
                    .get(acc.material_id.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                acc.settle();
                tracing::debug!(
                    "物料 {}: 需求 {}，可用 {}，缺料 {}，等級 {:?}",
                    acc.material_id,
                    acc.required,
                    acc.available,
                    acc.shortage,
                    acc.status
                );
                acc
            })
            .collect();

        (requirements, substitutions)
    }

    /// 創建物料映射（重複 ID 以第一筆為準）
    fn create_material_map(materials: &[Material]) -> HashMap<&str, &Material> {
        let mut map = HashMap::with_capacity(materials.len());
        for material in materials {
            map.entry(material.id.as_str()).or_insert(material);
        }
        map
    }

    /// 按物料加總分配數量
    fn sum_allocations(allocations: &[Allocation]) -> HashMap<&str, Decimal> {
        let mut map = HashMap::new();
        for allocation in allocations {
            let total = map
                .entry(allocation.material_id.as_str())
                .or_insert(Decimal::ZERO);
            *total = total.saturating_add(allocation.quantity);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfloor_core::RequirementStatus;

    fn line(id: &str, qty: i64) -> OrderMaterialLine {
        OrderMaterialLine::new(id, Decimal::from(qty))
    }

    #[test]
    fn test_same_material_across_orders_is_summed() {
        let orders = vec![
            ProductionOrder::new().with_line("M1", Decimal::from(5)),
            ProductionOrder::new().with_line("M1", Decimal::from(7)),
        ];
        let materials = vec![Material::new("M1", Decimal::from(8)).with_safety_stock(Decimal::from(2))];

        let report = RequirementsAggregator::run(&orders, &materials, &[]);

        assert_eq!(report.requirements.len(), 1);
        let m1 = &report.requirements[0];
        assert_eq!(m1.required, Decimal::from(12));
        assert_eq!(m1.available, Decimal::from(8));
        assert_eq!(m1.shortage, Decimal::from(4));
        assert_eq!(m1.status, RequirementStatus::Critical);
        assert!(report.substitutions.is_empty());
        assert!(report.calculation_time_ms.is_some());
    }

    #[test]
    fn test_warning_within_safety_stock() {
        let lines = vec![line("M2", 10)];
        let materials = vec![Material::new("M2", Decimal::from(7)).with_safety_stock(Decimal::from(3))];

        let result = aggregate_requirements(&lines, &materials, &[]);

        assert_eq!(result[0].shortage, Decimal::from(3));
        assert_eq!(result[0].status, RequirementStatus::Warning);
    }

    #[test]
    fn test_sufficient_stock_is_ok() {
        let lines = vec![line("M3", 4)];
        let materials = vec![Material::new("M3", Decimal::from(50)).with_lead_time(10)];

        let result = aggregate_requirements(&lines, &materials, &[]);

        assert_eq!(result[0].shortage, Decimal::ZERO);
        assert_eq!(result[0].status, RequirementStatus::Ok);
        assert_eq!(result[0].lead_time_days, 10);
    }

    #[test]
    fn test_unknown_material_fails_open() {
        let orders = vec![ProductionOrder::new()
            .with_line("GHOST", Decimal::from(3))
            .with_line("GHOST", Decimal::from(1))];

        let report = RequirementsAggregator::run(&orders, &[], &[]);

        let ghost = &report.requirements[0];
        assert_eq!(ghost.available, Decimal::ZERO);
        assert_eq!(ghost.lead_time_days, 0);
        assert_eq!(ghost.required, Decimal::from(4));
        assert_eq!(ghost.shortage, Decimal::from(4));
        assert_eq!(ghost.status, RequirementStatus::Critical);
        assert_eq!(
            report.substitutions,
            vec![DefaultSubstitution::UnknownMaterial {
                material_id: "GHOST".to_string()
            }]
        );
    }

    #[test]
    fn test_first_occurrence_order() {
        let lines = vec![line("B", 1), line("A", 1), line("C", 1), line("A", 2), line("B", 3)];

        let result = aggregate_requirements(&lines, &[], &[]);

        let ids: Vec<_> = result.iter().map(|r| r.material_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert_eq!(result[0].required, Decimal::from(4));
        assert_eq!(result[1].required, Decimal::from(3));
    }

    #[test]
    fn test_allocations_are_informational() {
        let order = ProductionOrder::new().with_line("M4", Decimal::from(10));
        let materials = vec![Material::new("M4", Decimal::from(10))];
        let allocations = vec![
            Allocation::new(order.id, "M4", Decimal::from(6)),
            Allocation::new(order.id, "M4", Decimal::from(2)),
            Allocation::new(order.id, "UNUSED", Decimal::from(9)),
        ];

        let report = RequirementsAggregator::run(&[order], &materials, &allocations);

        assert_eq!(report.requirements.len(), 1);
        assert_eq!(report.requirements[0].allocated, Decimal::from(8));
        assert_eq!(report.requirements[0].shortage, Decimal::ZERO);
        assert_eq!(report.requirements[0].status, RequirementStatus::Ok);
    }

    #[test]
    fn test_duplicate_material_first_wins() {
        let lines = vec![line("M5", 5)];
        let materials = vec![
            Material::new("M5", Decimal::from(5)),
            Material::new("M5", Decimal::ZERO),
        ];

        let result = aggregate_requirements(&lines, &materials, &[]);
        assert_eq!(result[0].available, Decimal::from(5));
    }

    #[test]
    fn test_empty_input() {
        let report = RequirementsAggregator::run(&[], &[], &[]);
        assert!(report.requirements.is_empty());
        assert!(report.substitutions.is_empty());
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let order = ProductionOrder::new()
            .with_line("M1", Decimal::MAX)
            .with_line("M1", Decimal::MAX);
        let materials = vec![Material::new("M1", Decimal::ZERO)];
        let allocations = vec![
            Allocation::new(order.id, "M1", Decimal::MAX),
            Allocation::new(order.id, "M1", Decimal::MAX),
        ];

        let report = RequirementsAggregator::run(&[order], &materials, &allocations);

        let m1 = &report.requirements[0];
        assert_eq!(m1.required, Decimal::MAX);
        assert_eq!(m1.allocated, Decimal::MAX);
        assert_eq!(m1.shortage, Decimal::MAX);
        assert_eq!(m1.status, RequirementStatus::Critical);
        assert_eq!(report.summary().total_shortage, Decimal::MAX);
    }
}
