//! Application state module

mod app_state;
mod catalog;
pub mod content;
mod forms;

pub use app_state::*;
pub use catalog::*;
pub use forms::*;
