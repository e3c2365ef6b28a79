//! CLI command handlers, one file per command.

mod completions;
mod names;
mod process;

pub use completions::run_completions;
pub use names::run_names;
pub use process::{run_process, ProcessArgs};

#[cfg(test)]
pub(crate) use process::{check_names, submit_form};
