//! CPU-scheduling domain models.
//!
//! Provides the input and output types shared by every scheduler:
//! processes going in, execution intervals and completion times coming out.
//!
//! # Domain Mappings
//!
//! | cpu-sched | Operating system | Batch queue | Print spooler |
//! |-----------|------------------|-------------|---------------|
//! | Process | Thread/Task | Job | Print job |
//! | ExecutionInterval | Time slice | Run segment | Page range |
//! | RunResult | Dispatch trace | Job log | Spool log |

mod algorithm;
mod process;
mod run;

pub use algorithm::Algorithm;
pub use process::Process;
pub use run::{ExecutionInterval, RunResult};
