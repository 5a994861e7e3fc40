pub mod progress;
pub mod session;
#[cfg(test)]
pub mod integration_tests;

pub use progress::{ProgressRun, ProgressSimulator, RunEnd};
pub use session::{SessionState, ToolSession};
