//! CLI command handlers. Each command is in its own file.

mod completions;
mod doctor;
mod grab;
mod links;
mod scan;

pub use completions::run_completions;
pub use doctor::run_doctor;
pub use grab::run_grab;
pub use links::run_links;
pub use scan::run_scan;
