use serde::{Deserialize, Serialize};

/// A set of cutting jobs to be planned together
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// One entry per part (and stock) to plan
    pub jobs: Vec<ExtJob>,
}

/// Cuts required for one part, from one kind of stock
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtJob {
    pub description: String,
    pub stock: ExtStock,
    pub requirements: Vec<ExtRequirement>,
}

/// External representation of a [`StockProfile`](crate::entities::StockProfile)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtStock {
    /// Full length of a single bar
    pub bar_length: f32,
    /// Margin on every bar which cannot be cut from
    #[serde(default)]
    pub unusable_length: f32,
    /// Material lost with every cut
    #[serde(default)]
    pub kerf_loss: f32,
}

/// A number of cuts of a single size
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtRequirement {
    pub quantity: u64,
    pub size: f32,
}

/// The plans for all jobs of an [`ExtInstance`]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Plans in the order of the jobs
    pub plans: Vec<ExtCuttingPlan>,
    /// Number of bars used over all plans
    pub total_bars: usize,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`CuttingPlan`](crate::entities::CuttingPlan)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCuttingPlan {
    pub description: String,
    pub stock: ExtStock,
    pub bars: Vec<ExtBar>,
    /// Sum of the cut lengths divided by the usable length of all bars
    pub utilization: f32,
}

/// External representation of a [`Bar`](crate::entities::Bar)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBar {
    /// Cut sizes in placement order
    pub cuts: Vec<f32>,
    /// Grouped counts, e.g. `2x 40, 1x 20`
    pub summary: String,
    /// Sum of the cut sizes
    pub cut_length: f32,
    /// Usable length left after all cuts and kerfs
    pub offcut: f32,
}
