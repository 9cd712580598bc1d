pub mod catalog;
pub mod log;
pub mod macros;
pub mod schedule;
pub mod template;
pub mod validation;

pub use catalog::*;
pub use log::*;
pub use schedule::*;
pub use template::*;
pub use validation::*;
