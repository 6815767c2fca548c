use crate::entities::StockProfile;
use crate::summary::{CutSummary, summarize};

/// A single stock bar and the cut sizes assigned to it, in the order they were placed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bar {
    cuts: Vec<f32>,
}

impl Bar {
    pub fn new(cuts: Vec<f32>) -> Self {
        Self { cuts }
    }

    pub fn cuts(&self) -> &[f32] {
        &self.cuts
    }

    pub fn n_cuts(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Sum of the nominal cut sizes
    pub fn cut_length(&self) -> f32 {
        self.cuts.iter().sum()
    }

    /// Length consumed on the bar when every cut, including the last one, is charged a kerf
    pub fn consumed_length(&self, kerf_loss: f32) -> f32 {
        self.cuts.iter().map(|size| size + kerf_loss).sum()
    }

    /// Usable length left over after all cuts, never negative
    pub fn offcut(&self, profile: &StockProfile) -> f32 {
        f32::max(
            profile.usable_length() - self.consumed_length(profile.kerf_loss()),
            0.0,
        )
    }

    pub fn summary(&self) -> CutSummary {
        summarize(&self.cuts)
    }

    pub(crate) fn push(&mut self, size: f32) {
        self.cuts.push(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_and_offcut() {
        let profile = StockProfile::new(100.0, 0.0, 1.0).unwrap();
        let bar = Bar::new(vec![40.0, 20.0, 20.0]);
        assert_eq!(bar.cut_length(), 80.0);
        assert_eq!(bar.consumed_length(profile.kerf_loss()), 83.0);
        assert_eq!(bar.offcut(&profile), 17.0);
    }

    #[test]
    fn offcut_is_clamped_when_last_kerf_overshoots() {
        let profile = StockProfile::new(100.0, 0.0, 2.0).unwrap();
        let bar = Bar::new(vec![100.0]);
        assert_eq!(bar.offcut(&profile), 0.0);
    }
}
