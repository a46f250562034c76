//! Records the form is built from

mod data;
mod job;
mod parameter;
mod template;
mod value;

pub use data::*;
pub use job::*;
pub use parameter::*;
pub use template::*;
pub use value::*;
