//! CLI command handlers.

mod check;
mod list;

pub use check::run_check;
pub use list::run_list;
