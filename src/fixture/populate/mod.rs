//! Populate command handler.

mod logging;
mod run;

pub use logging::describe_plan;
pub use run::run_populate;
