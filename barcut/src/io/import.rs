use crate::PlanError;
use crate::entities::{PartCuttingJob, RequirementSet, StockProfile};
use crate::io::ext_repr::{ExtInstance, ExtStock};

/// Imports an instance into the library, validating every stock profile and requirement
pub fn import(ext_instance: &ExtInstance) -> Result<Vec<PartCuttingJob>, PlanError> {
    ext_instance
        .jobs
        .iter()
        .map(|ext_job| {
            let stock = import_stock(&ext_job.stock)?;
            let pairs = ext_job
                .requirements
                .iter()
                .map(|r| {
                    let quantity = usize::try_from(r.quantity).map_err(|_| {
                        PlanError::invalid_input(format!("quantity too large: {}", r.quantity))
                    })?;
                    Ok((quantity, r.size))
                })
                .collect::<Result<Vec<_>, PlanError>>()?;

            Ok(PartCuttingJob {
                description: ext_job.description.clone(),
                stock,
                requirements: RequirementSet::new(pairs)?,
            })
        })
        .collect()
}

fn import_stock(ext_stock: &ExtStock) -> Result<StockProfile, PlanError> {
    StockProfile::new(
        ext_stock.bar_length,
        ext_stock.unusable_length,
        ext_stock.kerf_loss,
    )
}
