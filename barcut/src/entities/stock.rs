use crate::PlanError;

/// Geometry of the raw bars cuts are taken from.
/// Every bar of a plan shares the same profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockProfile {
    /// Full length of a single bar
    bar_length: f32,
    /// Fixed margin on every bar which cannot be cut from (clamping, offcut)
    unusable_length: f32,
    /// Material lost with every cut (saw blade width)
    kerf_loss: f32,
}

impl StockProfile {
    pub fn new(bar_length: f32, unusable_length: f32, kerf_loss: f32) -> Result<Self, PlanError> {
        if !bar_length.is_finite() || !unusable_length.is_finite() || !kerf_loss.is_finite() {
            return Err(PlanError::invalid_config(format!(
                "stock lengths must be finite (bar: {bar_length}, unusable: {unusable_length}, kerf: {kerf_loss})"
            )));
        }
        if unusable_length < 0.0 {
            return Err(PlanError::invalid_config(format!(
                "unusable length cannot be negative: {unusable_length}"
            )));
        }
        if kerf_loss < 0.0 {
            return Err(PlanError::invalid_config(format!(
                "kerf loss cannot be negative: {kerf_loss}"
            )));
        }
        let profile = StockProfile {
            bar_length,
            unusable_length,
            kerf_loss,
        };
        profile.check_usable_length()?;
        Ok(profile)
    }

    pub fn bar_length(&self) -> f32 {
        self.bar_length
    }

    pub fn unusable_length(&self) -> f32 {
        self.unusable_length
    }

    pub fn kerf_loss(&self) -> f32 {
        self.kerf_loss
    }

    /// Length of a bar available for cutting: `bar_length - unusable_length`
    pub fn usable_length(&self) -> f32 {
        self.bar_length - self.unusable_length
    }

    /// Fails with [`PlanError::InvalidConfiguration`] if no length of the bar is usable.
    pub fn check_usable_length(&self) -> Result<(), PlanError> {
        match self.usable_length() > 0.0 {
            true => Ok(()),
            false => Err(PlanError::invalid_config(format!(
                "usable length must be positive, bar length {} leaves {} after an unusable length of {}",
                self.bar_length,
                self.usable_length(),
                self.unusable_length
            ))),
        }
    }
}
