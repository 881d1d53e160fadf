mod models;
mod orchestrator;
mod traits;

pub use models::*;
pub use orchestrator::{RoundUpOrchestrator, RoundUpStage};
pub use traits::*;
