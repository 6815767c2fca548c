use crate::config::PlanConfig;
use barcut::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct PlanOutput {
    pub config: PlanConfig,
    pub instance: ExtInstance,
    pub solution: ExtSolution,
}
