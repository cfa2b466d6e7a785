//! CLI command handlers. Each writes to the given output so tests can capture it.

mod check;
mod complete;
mod interactive;
mod util;

pub use check::{run_check, run_json};
pub use complete::run_complete;
pub use interactive::run_interactive_session;
pub use util::{run_completions, run_man};

#[cfg(test)]
pub use check::format_result;
#[cfg(test)]
pub use interactive::{prompt_loop, write_banner, LoopEnd};
