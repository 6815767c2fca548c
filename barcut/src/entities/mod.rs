mod bar;
mod job;
mod plan;
mod requirement;
mod stock;

#[doc(inline)]
pub use bar::Bar;
#[doc(inline)]
pub use job::PartCuttingJob;
#[doc(inline)]
pub use job::PartRow;
#[doc(inline)]
pub use job::group_part_rows;
#[doc(inline)]
pub use plan::CuttingPlan;
#[doc(inline)]
pub use requirement::CutRequirement;
#[doc(inline)]
pub use requirement::RequirementSet;
#[doc(inline)]
pub use stock::StockProfile;
