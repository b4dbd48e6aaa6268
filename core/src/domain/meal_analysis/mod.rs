pub mod clarification;
pub mod entities;
pub mod parser;
pub mod ports;
pub mod prompts;
pub mod reply;
pub mod services;
pub mod value_objects;
pub mod visualization;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
