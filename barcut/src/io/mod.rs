mod export;
mod import;

/// External (serializable) representations of cutting jobs and plans.
pub mod ext_repr;

pub use export::{export, export_instance};

#[doc(inline)]
pub use import::import;
