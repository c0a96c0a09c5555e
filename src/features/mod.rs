pub mod ai;
pub mod bfhl;
pub mod health;
pub mod math;
