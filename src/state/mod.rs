//! Application state module

mod app_state;
mod forms;
mod notice;
mod submissions;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use notice::*;
pub use submissions::*;
pub use validation::*;
