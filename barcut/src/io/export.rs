use crate::entities::{Bar, CuttingPlan, PartCuttingJob, StockProfile};
use crate::io::ext_repr::{
    ExtBar, ExtCuttingPlan, ExtInstance, ExtJob, ExtRequirement, ExtSolution, ExtStock,
};
use std::time::Instant;

/// Exports the plans of a batch of jobs out of the library
pub fn export(plans: &[(String, CuttingPlan)], start: Instant) -> ExtSolution {
    ExtSolution {
        plans: plans
            .iter()
            .map(|(description, plan)| export_plan(description, plan))
            .collect(),
        total_bars: plans.iter().map(|(_, plan)| plan.n_bars()).sum(),
        run_time_ms: start.elapsed().as_millis() as u64,
    }
}

/// Exports jobs built inside the library (from table rows, for example) as an instance
pub fn export_instance(name: &str, jobs: &[PartCuttingJob]) -> ExtInstance {
    ExtInstance {
        name: name.to_owned(),
        jobs: jobs
            .iter()
            .map(|job| ExtJob {
                description: job.description.clone(),
                stock: ExtStock::from(&job.stock),
                requirements: job
                    .requirements
                    .iter()
                    .map(|req| ExtRequirement {
                        quantity: req.quantity as u64,
                        size: req.size,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn export_plan(description: &str, plan: &CuttingPlan) -> ExtCuttingPlan {
    ExtCuttingPlan {
        description: description.to_owned(),
        stock: ExtStock::from(plan.stock()),
        bars: plan
            .bars()
            .iter()
            .map(|bar| export_bar(bar, plan.stock()))
            .collect(),
        utilization: plan.utilization(),
    }
}

fn export_bar(bar: &Bar, stock: &StockProfile) -> ExtBar {
    ExtBar {
        cuts: bar.cuts().to_vec(),
        summary: bar.summary().to_string(),
        cut_length: bar.cut_length(),
        offcut: bar.offcut(stock),
    }
}

impl From<&StockProfile> for ExtStock {
    fn from(stock: &StockProfile) -> Self {
        ExtStock {
            bar_length: stock.bar_length(),
            unusable_length: stock.unusable_length(),
            kerf_loss: stock.kerf_loss(),
        }
    }
}
