//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;

pub use generate::{GenerateReport, Outcome};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
