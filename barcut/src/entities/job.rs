use crate::PlanError;
use crate::entities::{CutRequirement, RequirementSet, StockProfile};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// All cuts required for one part, to be taken from one kind of stock.
#[derive(Debug, Clone, PartialEq)]
pub struct PartCuttingJob {
    pub description: String,
    pub stock: StockProfile,
    pub requirements: RequirementSet,
}

/// A single flat row of tabular input: one cut size of one part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartRow {
    pub description: String,
    pub stock: StockProfile,
    pub quantity: usize,
    pub size: f32,
}

type JobKey = (String, [OrderedFloat<f32>; 3]);

fn job_key(description: &str, stock: &StockProfile) -> JobKey {
    (
        description.to_owned(),
        [
            OrderedFloat(stock.bar_length()),
            OrderedFloat(stock.unusable_length()),
            OrderedFloat(stock.kerf_loss()),
        ],
    )
}

/// Groups rows into one [`PartCuttingJob`] per distinct `(description, stock)` pair.
/// Jobs appear in the order their pair was first encountered, requirements in row order.
pub fn group_part_rows(
    rows: impl IntoIterator<Item = PartRow>,
) -> Result<Vec<PartCuttingJob>, PlanError> {
    let mut job_index: HashMap<JobKey, usize> = HashMap::new();
    let mut grouped: Vec<(String, StockProfile, Vec<CutRequirement>)> = vec![];

    for row in rows {
        let requirement = CutRequirement::new(row.quantity, row.size)?;
        let key = job_key(&row.description, &row.stock);
        match job_index.get(&key) {
            Some(&idx) => grouped[idx].2.push(requirement),
            None => {
                job_index.insert(key, grouped.len());
                grouped.push((row.description, row.stock, vec![requirement]));
            }
        }
    }

    grouped
        .into_iter()
        .map(|(description, stock, requirements)| {
            Ok(PartCuttingJob {
                description,
                stock,
                requirements: RequirementSet::from_requirements(requirements)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn row(description: &str, bar_length: f32, quantity: usize, size: f32) -> PartRow {
        PartRow {
            description: description.to_owned(),
            stock: StockProfile::new(bar_length, 0.0, 2.0).unwrap(),
            quantity,
            size,
        }
    }

    #[test]
    fn one_job_per_description_and_stock() {
        let rows = vec![
            row("frame", 6000.0, 4, 1200.0),
            row("door", 6000.0, 2, 2100.0),
            row("frame", 6000.0, 2, 800.0),
            row("frame", 3000.0, 1, 500.0),
        ];
        let jobs = group_part_rows(rows).unwrap();

        let keys = jobs
            .iter()
            .map(|j| (j.description.as_str(), j.stock.bar_length()))
            .collect_vec();
        assert_eq!(keys, vec![("frame", 6000.0), ("door", 6000.0), ("frame", 3000.0)]);
        assert_eq!(jobs[0].requirements.total_quantity(), 6);
        assert_eq!(jobs[0].requirements.len(), 2);
    }

    #[test]
    fn invalid_row_rejects_the_whole_batch() {
        let rows = vec![row("frame", 6000.0, 4, 1200.0), row("door", 6000.0, 2, 0.0)];
        assert!(matches!(
            group_part_rows(rows),
            Err(PlanError::InvalidInput { .. })
        ));
    }
}
