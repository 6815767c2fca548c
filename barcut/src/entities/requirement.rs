use crate::PlanError;
use itertools::Itertools;
use log::warn;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// A number of cuts of a single size.
/// Once its quantity reaches zero the requirement is inert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutRequirement {
    pub quantity: usize,
    pub size: f32,
}

impl CutRequirement {
    pub fn new(quantity: usize, size: f32) -> Result<Self, PlanError> {
        let requirement = CutRequirement { quantity, size };
        requirement.validate()?;
        Ok(requirement)
    }

    /// Builds a requirement from raw text fields, as entered in a table row or read from a spreadsheet cell.
    /// Integral floats (`"3.0"`) are accepted as quantities, fractional or negative ones are not.
    pub fn parse(quantity: &str, size: &str) -> Result<Self, PlanError> {
        let quantity = parse_quantity(quantity.trim())?;
        let size = size.trim().parse::<f32>().map_err(|_| {
            PlanError::invalid_input(format!("cut size is not a number: {:?}", size.trim()))
        })?;
        CutRequirement::new(quantity, size)
    }

    fn validate(&self) -> Result<(), PlanError> {
        match self.size.is_finite() && self.size > 0.0 {
            true => Ok(()),
            false => Err(PlanError::invalid_input(format!(
                "cut size must be a positive number, got {}",
                self.size
            ))),
        }
    }
}

fn parse_quantity(text: &str) -> Result<usize, PlanError> {
    let value = match text.parse::<i64>() {
        Ok(v) => v,
        Err(_) => match text.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
            _ => {
                return Err(PlanError::invalid_input(format!(
                    "quantity is not a whole number: {text:?}"
                )));
            }
        },
    };
    usize::try_from(value)
        .map_err(|_| PlanError::invalid_input(format!("quantity cannot be negative: {value}")))
}

/// Working list of [`CutRequirement`]s, ordered by size from large to small.
///
/// The set owns its own copy of the requirements: equal sizes keep the relative order in which they were supplied,
/// and consuming the set during packing never touches the caller's data.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementSet {
    requirements: Vec<CutRequirement>,
}

impl RequirementSet {
    /// Creates a set from `(quantity, size)` pairs
    pub fn new(pairs: impl IntoIterator<Item = (usize, f32)>) -> Result<Self, PlanError> {
        Self::from_requirements(
            pairs
                .into_iter()
                .map(|(quantity, size)| CutRequirement { quantity, size }),
        )
    }

    pub fn from_requirements(
        requirements: impl IntoIterator<Item = CutRequirement>,
    ) -> Result<Self, PlanError> {
        let mut requirements = requirements.into_iter().collect_vec();
        for req in &requirements {
            req.validate()?;
            if req.quantity == 0 {
                warn!("[REQ] requirement of size {} has zero quantity and will be ignored", req.size);
            }
        }
        //stable: ties keep their input order
        requirements.sort_by_key(|req| Reverse(OrderedFloat(req.size)));

        Ok(Self { requirements })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CutRequirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Total number of cuts required over all sizes
    pub fn total_quantity(&self) -> usize {
        self.requirements.iter().map(|req| req.quantity).sum()
    }

    /// Size of the largest requirement with a non-zero quantity
    pub fn largest_size(&self) -> Option<f32> {
        self.requirements
            .iter()
            .find(|req| req.quantity > 0)
            .map(|req| req.size)
    }

    /// Wraps requirements which are already validated and sorted
    #[cfg(debug_assertions)]
    pub(crate) fn from_sorted(requirements: Vec<CutRequirement>) -> Self {
        Self { requirements }
    }

    pub(crate) fn into_inner(self) -> Vec<CutRequirement> {
        self.requirements
    }
}
