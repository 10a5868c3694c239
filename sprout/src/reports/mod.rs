//! Report data structures for the scaffold run.
//!
//! This module separates data collection from rendering: the scaffold
//! operation streams progress to an Output target while it runs, then
//! returns a report that closes the transcript.

mod output;
mod scaffold;

pub use output::{Output, Report, TerminalOutput};
pub use scaffold::{ScaffoldProgress, ScaffoldReport};

#[cfg(test)]
pub use output::BufferOutput;
