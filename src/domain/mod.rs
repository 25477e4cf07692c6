//! Report types and the worker `Task` trait shared by the drills.

pub mod model;
pub mod ports;
