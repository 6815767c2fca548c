use crate::entities::{Bar, StockProfile};
use crate::summary::CutSummary;

/// The ordered bars produced by a single packing run, together with the stock they were cut from.
/// Read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct CuttingPlan {
    stock: StockProfile,
    bars: Vec<Bar>,
}

impl CuttingPlan {
    pub(crate) fn new(stock: StockProfile, bars: Vec<Bar>) -> Self {
        Self { stock, bars }
    }

    pub fn stock(&self) -> &StockProfile {
        &self.stock
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn n_bars(&self) -> usize {
        self.bars.len()
    }

    pub fn n_cuts(&self) -> usize {
        self.bars.iter().map(|bar| bar.n_cuts()).sum()
    }

    /// One grouped summary per bar, in bar order
    pub fn summaries(&self) -> Vec<CutSummary> {
        self.bars.iter().map(|bar| bar.summary()).collect()
    }

    /// Total nominal cut length divided by the total usable length of all bars in the plan
    pub fn utilization(&self) -> f32 {
        if self.bars.is_empty() {
            return 0.0;
        }
        let total_cut_length = self.bars.iter().map(|bar| bar.cut_length()).sum::<f32>();
        let total_usable_length = self.stock.usable_length() * self.bars.len() as f32;

        total_cut_length / total_usable_length
    }
}
