use crate::entities::{Bar, CuttingPlan, RequirementSet, StockProfile};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::iter;

/// Checks whether the plan contains every required cut exactly as many times as required, and nothing else.
pub fn plan_conserves_requirements(requirements: &RequirementSet, plan: &CuttingPlan) -> bool {
    let required = requirements
        .iter()
        .flat_map(|req| iter::repeat_n(req.size, req.quantity))
        .map(OrderedFloat)
        .sorted()
        .collect_vec();

    let placed = plan
        .bars()
        .iter()
        .flat_map(|bar| bar.cuts().iter().copied())
        .map(OrderedFloat)
        .sorted()
        .collect_vec();

    required == placed
}

/// Replays the placements on a bar: every cut must have fit in the length remaining at the moment it was placed,
/// where each earlier cut consumed its size plus one kerf.
pub fn bar_respects_capacity(bar: &Bar, profile: &StockProfile) -> bool {
    let mut remaining = profile.usable_length();
    for &size in bar.cuts() {
        if size > remaining {
            return false;
        }
        remaining -= size + profile.kerf_loss();
    }
    true
}

pub fn plan_respects_capacity(plan: &CuttingPlan) -> bool {
    plan.bars()
        .iter()
        .all(|bar| !bar.is_empty() && bar_respects_capacity(bar, plan.stock()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_replay() {
        let profile = StockProfile::new(100.0, 0.0, 2.0).unwrap();
        assert!(bar_respects_capacity(&Bar::new(vec![32.0, 32.0, 32.0]), &profile));
        assert!(!bar_respects_capacity(&Bar::new(vec![25.0, 25.0, 25.0, 25.0]), &profile));
        assert!(bar_respects_capacity(&Bar::default(), &profile));
    }

    #[test]
    fn conservation_detects_missing_and_extra_cuts() {
        let profile = StockProfile::new(100.0, 0.0, 0.0).unwrap();
        let reqs = RequirementSet::new([(2, 40.0), (1, 20.0)]).unwrap();

        let exact = CuttingPlan::new(profile, vec![Bar::new(vec![40.0, 20.0]), Bar::new(vec![40.0])]);
        let missing = CuttingPlan::new(profile, vec![Bar::new(vec![40.0, 40.0])]);
        let extra = CuttingPlan::new(
            profile,
            vec![Bar::new(vec![40.0, 40.0, 20.0]), Bar::new(vec![20.0])],
        );

        assert!(plan_conserves_requirements(&reqs, &exact));
        assert!(!plan_conserves_requirements(&reqs, &missing));
        assert!(!plan_conserves_requirements(&reqs, &extra));
    }
}
