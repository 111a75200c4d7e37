pub mod entities;
pub mod helpers;
pub mod ports;
pub mod services;
pub mod validators;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use services::FormController;
pub use value_objects::*;
