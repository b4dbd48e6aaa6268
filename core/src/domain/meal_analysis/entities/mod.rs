pub mod analysis_result;
pub mod food_item;
pub mod meal_type;

pub use analysis_result::*;
pub use food_item::*;
pub use meal_type::*;
