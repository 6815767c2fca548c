use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for planning tabular input and drawing the results
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlanConfig {
    /// Margin on every bar which cannot be cut from. Only applies to table input, JSON instances carry their own.
    #[serde(default)]
    pub unusable_length: f32,
    /// Material lost with every cut. Only applies to table input, JSON instances carry their own.
    #[serde(default)]
    pub kerf_loss: f32,
    /// Header names of the columns read from a table
    #[serde(default)]
    pub columns: ColumnNames,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            unusable_length: 0.0,
            kerf_loss: 0.0,
            columns: ColumnNames::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Headers are matched after trimming, ignoring case
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColumnNames {
    pub description: String,
    pub size: String,
    pub quantity: String,
    pub stock_length: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            description: "Description".into(),
            size: "Size".into(),
            quantity: "Quantity".into(),
            stock_length: "Stock Length".into(),
        }
    }
}
