pub mod orchestration;

pub use orchestration::{CancelPoint, Outcome, ReleaseContext, ReleaseWorkflow, VcsState};
