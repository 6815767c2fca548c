use std::time::Instant;

use crate::PlanError;
use crate::entities::{Bar, CutRequirement, CuttingPlan, PartCuttingJob, RequirementSet, StockProfile};
use crate::util::assertions::plan_respects_capacity;
use log::{debug, info};
use rayon::prelude::*;

/// Packs `requirements` onto bars of the given `profile`.
///
/// Fails before placing anything if the profile has no usable length or if any
/// required size can never fit on an empty bar.
pub fn pack(profile: &StockProfile, requirements: RequirementSet) -> Result<CuttingPlan, PlanError> {
    let packer = GreedyBarPacker::new(*profile, requirements)?;
    Ok(packer.solve())
}

/// Packs a single job. The job itself is left untouched.
pub fn plan_job(job: &PartCuttingJob) -> Result<CuttingPlan, PlanError> {
    pack(&job.stock, job.requirements.clone())
}

/// Plans all `jobs` independently of each other, in parallel.
/// Output keeps the order of the jobs, any error aborts the whole batch.
pub fn plan_jobs(jobs: &[PartCuttingJob]) -> Result<Vec<(String, CuttingPlan)>, PlanError> {
    jobs.par_iter()
        .map(|job| plan_job(job).map(|plan| (job.description.clone(), plan)))
        .collect()
}

/// Greedy largest-first bar packer with smallest-filler backfill.
///
/// Requirements are handled from large to small. Whenever the current size no longer fits,
/// the smallest open requirement is tried as filler for the leftover space. Only when the filler
/// does not fit either, the bar is closed and a new one is opened.
///
/// Every placed cut is charged `size + kerf_loss`, the last cut on a bar included.
/// This heuristic does not guarantee a minimal number of bars.
pub struct GreedyBarPacker {
    pub profile: StockProfile,
    /// Quantities are consumed and exhausted fillers dropped while packing
    open: Vec<CutRequirement>,
}

impl GreedyBarPacker {
    pub fn new(profile: StockProfile, requirements: RequirementSet) -> Result<Self, PlanError> {
        profile.check_usable_length()?;

        let usable_length = profile.usable_length();
        //sorted from large to small, so the first offender is the largest
        if let Some(req) = requirements.iter().find(|req| req.size > usable_length) {
            return Err(PlanError::UnfittableCut {
                size: req.size,
                usable_length,
            });
        }

        Ok(Self {
            profile,
            open: requirements.into_inner(),
        })
    }

    pub fn solve(mut self) -> CuttingPlan {
        let start = Instant::now();
        let usable_length = self.profile.usable_length();
        let kerf_loss = self.profile.kerf_loss();

        #[cfg(debug_assertions)]
        let required = RequirementSet::from_sorted(self.open.clone());

        let mut bars: Vec<Bar> = vec![];
        let mut bar = Bar::default();
        let mut remaining = usable_length;

        let mut i = 0;
        while i < self.open.len() {
            while self.open[i].quantity > 0 {
                let size = self.open[i].size;
                if size <= remaining {
                    bar.push(size);
                    remaining -= size + kerf_loss;
                    self.open[i].quantity -= 1;
                    continue;
                }

                //current size does not fit, try to backfill with the smallest open requirement.
                //open[i] has a positive quantity, so it is never dropped here and `last >= i`
                let last = self.open.len() - 1;
                let filler = self.open[last];
                if filler.quantity == 0 {
                    self.open.pop();
                } else if filler.size <= remaining {
                    bar.push(filler.size);
                    remaining -= filler.size + kerf_loss;
                    self.open[last].quantity -= 1;
                } else {
                    debug_assert!(!bar.is_empty(), "closing an empty bar, {size} can never fit");
                    debug!(
                        "[GBP] closing bar {} with {} cuts, {:.3} left",
                        bars.len(),
                        bar.n_cuts(),
                        remaining
                    );
                    bars.push(std::mem::take(&mut bar));
                    remaining = usable_length;
                }
            }
            i += 1;
        }

        if !bar.is_empty() {
            bars.push(bar);
        }

        let plan = CuttingPlan::new(self.profile, bars);

        #[cfg(debug_assertions)]
        debug_assert!(crate::util::assertions::plan_conserves_requirements(&required, &plan));
        debug_assert!(plan_respects_capacity(&plan));

        info!(
            "[GBP] packed {} cuts onto {} bars in {:.3}ms (utilization {:.3}%)",
            plan.n_cuts(),
            plan.n_bars(),
            start.elapsed().as_secs_f64() * 1000.0,
            plan.utilization() * 100.0
        );

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assertions::{bar_respects_capacity, plan_conserves_requirements};
    use itertools::Itertools;
    use test_case::test_case;

    fn cuts(plan: &CuttingPlan) -> Vec<Vec<f32>> {
        plan.bars().iter().map(|b| b.cuts().to_vec()).collect_vec()
    }

    #[test]
    fn reference_scenario() {
        let profile = StockProfile::new(100.0, 0.0, 1.0).unwrap();
        let reqs = RequirementSet::new([(3, 40.0), (2, 20.0)]).unwrap();
        let plan = pack(&profile, reqs).unwrap();

        assert_eq!(cuts(&plan), vec![vec![40.0, 40.0], vec![40.0, 20.0, 20.0]]);
        let summaries = plan.summaries().iter().map(|s| s.to_string()).collect_vec();
        assert_eq!(summaries, vec!["2x 40", "1x 40, 2x 20"]);
    }

    #[test]
    fn packer_consumes_only_its_own_requirements() {
        let profile = StockProfile::new(100.0, 0.0, 1.0).unwrap();
        let reqs = RequirementSet::new([(3, 40.0), (0, 30.0), (2, 20.0)]).unwrap();
        let before = reqs.clone();

        //the packer pops exhausted fillers and zeroes quantities on its working list
        let plan = GreedyBarPacker::new(profile, reqs.clone()).unwrap().solve();
        assert!(plan_conserves_requirements(&reqs, &plan));
        assert_eq!(reqs, before);
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs.total_quantity(), 5);

        //packing the same set again gives the same plan
        assert_eq!(pack(&profile, reqs).unwrap(), plan);
    }

    #[test]
    fn unfittable_cut_is_rejected_up_front() {
        let profile = StockProfile::new(30.0, 0.0, 0.0).unwrap();
        let reqs = RequirementSet::new([(1, 40.0)]).unwrap();
        assert_eq!(
            pack(&profile, reqs).unwrap_err(),
            PlanError::UnfittableCut {
                size: 40.0,
                usable_length: 30.0
            }
        );
    }

    #[test]
    fn unusable_margin_counts_against_fit() {
        let profile = StockProfile::new(100.0, 10.0, 0.0).unwrap();
        let reqs = RequirementSet::new([(1, 50.0), (1, 95.0)]).unwrap();
        assert!(matches!(
            pack(&profile, reqs),
            Err(PlanError::UnfittableCut { size, .. }) if size == 95.0
        ));
    }

    #[test]
    fn filler_backfills_leftover_space() {
        //60 leaves 40: the next 60 does not fit but the 10s do
        let profile = StockProfile::new(100.0, 0.0, 0.0).unwrap();
        let reqs = RequirementSet::new([(2, 60.0), (5, 10.0)]).unwrap();
        let plan = pack(&profile, reqs).unwrap();

        assert_eq!(
            cuts(&plan),
            vec![vec![60.0, 10.0, 10.0, 10.0, 10.0], vec![60.0, 10.0]]
        );
    }

    #[test]
    fn exhausted_fillers_are_dropped() {
        //the single 5 is consumed as filler on the first bar, the 30s then fall back to the 25
        let profile = StockProfile::new(100.0, 0.0, 0.0).unwrap();
        let reqs = RequirementSet::new([(3, 30.0), (1, 25.0), (1, 5.0), (2, 90.0)]).unwrap();
        let plan = pack(&profile, reqs).unwrap();

        assert_eq!(
            cuts(&plan),
            vec![
                vec![90.0, 5.0],
                vec![90.0],
                vec![30.0, 30.0, 30.0],
                vec![25.0]
            ]
        );
    }

    #[test]
    fn kerf_is_charged_after_every_cut() {
        //100 -> 73 -> 46 -> 19, the fourth 25 no longer fits
        let profile = StockProfile::new(100.0, 0.0, 2.0).unwrap();
        let reqs = RequirementSet::new([(4, 25.0)]).unwrap();
        let plan = pack(&profile, reqs).unwrap();

        assert_eq!(cuts(&plan), vec![vec![25.0, 25.0, 25.0], vec![25.0]]);
    }

    #[test]
    fn last_cut_may_use_the_remaining_length_exactly() {
        //100 -> 66 -> 32, the third 32 fits exactly and its kerf runs past the end of the bar
        let profile = StockProfile::new(100.0, 0.0, 2.0).unwrap();
        let reqs = RequirementSet::new([(3, 32.0)]).unwrap();
        let plan = pack(&profile, reqs).unwrap();

        assert_eq!(cuts(&plan), vec![vec![32.0, 32.0, 32.0]]);
        assert_eq!(plan.bars()[0].offcut(&profile), 0.0);
    }

    #[test]
    fn zero_quantities_and_empty_sets() {
        let profile = StockProfile::new(100.0, 0.0, 1.0).unwrap();
        let plan = pack(&profile, RequirementSet::new([]).unwrap()).unwrap();
        assert_eq!(plan.n_bars(), 0);
        assert_eq!(plan.utilization(), 0.0);

        let reqs = RequirementSet::new([(0, 50.0), (2, 30.0), (0, 10.0)]).unwrap();
        let plan = pack(&profile, reqs).unwrap();
        assert_eq!(cuts(&plan), vec![vec![30.0, 30.0]]);
    }

    #[test]
    fn single_cut_filling_the_whole_bar() {
        let profile = StockProfile::new(100.0, 0.0, 5.0).unwrap();
        let reqs = RequirementSet::new([(2, 100.0)]).unwrap();
        let plan = pack(&profile, reqs).unwrap();

        assert_eq!(cuts(&plan), vec![vec![100.0], vec![100.0]]);
        assert!(plan.bars().iter().all(|b| bar_respects_capacity(b, &profile)));
    }

    #[test_case(1.0, 2; "kerf of one")]
    #[test_case(0.0, 2; "no kerf")]
    #[test_case(15.0, 3; "wide kerf")]
    fn bar_count_depends_on_kerf(kerf: f32, expected_bars: usize) {
        let profile = StockProfile::new(100.0, 0.0, kerf).unwrap();
        let reqs = RequirementSet::new([(3, 40.0), (2, 20.0)]).unwrap();
        assert_eq!(pack(&profile, reqs).unwrap().n_bars(), expected_bars);
    }

    #[test]
    fn packing_is_deterministic() {
        let profile = StockProfile::new(6000.0, 20.0, 3.0).unwrap();
        let reqs = RequirementSet::new([(7, 1250.0), (4, 830.5), (9, 410.0), (3, 1250.0)]).unwrap();
        let first = pack(&profile, reqs.clone()).unwrap();
        let second = pack(&profile, reqs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn jobs_are_planned_in_order() {
        let job = |description: &str, bar_length: f32, pairs: Vec<(usize, f32)>| PartCuttingJob {
            description: description.to_owned(),
            stock: StockProfile::new(bar_length, 0.0, 0.0).unwrap(),
            requirements: RequirementSet::new(pairs).unwrap(),
        };
        let jobs = vec![
            job("a", 100.0, vec![(3, 50.0)]),
            job("b", 60.0, vec![(1, 60.0)]),
            job("c", 10.0, vec![(4, 2.5)]),
        ];
        let plans = plan_jobs(&jobs).unwrap();

        let overview = plans
            .iter()
            .map(|(desc, plan)| (desc.as_str(), plan.n_bars()))
            .collect_vec();
        assert_eq!(overview, vec![("a", 2), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn one_failing_job_fails_the_batch() {
        let jobs = vec![
            PartCuttingJob {
                description: "ok".into(),
                stock: StockProfile::new(100.0, 0.0, 0.0).unwrap(),
                requirements: RequirementSet::new([(1, 50.0)]).unwrap(),
            },
            PartCuttingJob {
                description: "too long".into(),
                stock: StockProfile::new(100.0, 0.0, 0.0).unwrap(),
                requirements: RequirementSet::new([(1, 150.0)]).unwrap(),
            },
        ];
        assert!(matches!(
            plan_jobs(&jobs),
            Err(PlanError::UnfittableCut { size, .. }) if size == 150.0
        ));
    }
}
