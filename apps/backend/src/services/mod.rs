pub mod game_flow;
pub mod notifier;

pub use game_flow::GameFlowService;
pub use notifier::{StateNotifier, TracingNotifier};
