pub mod analyze_meal;
pub mod confirm_clarification;
