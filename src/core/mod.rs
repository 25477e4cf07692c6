pub mod array;
pub mod demos;
pub mod server;
pub mod workers;

pub use crate::domain::model::{ArrayReport, Person, WorkerReport};
pub use crate::domain::ports::Task;
pub use crate::utils::error::Result;
