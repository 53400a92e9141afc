pub mod agents;
pub mod chatflows;
pub mod onboarding;
pub mod state;

pub use state::AppState;
