pub mod common;
pub mod health;
pub mod meal_analysis;
