/// Consistency checks between requirements and the plans produced from them
pub mod assertions;
