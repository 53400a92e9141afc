pub mod agent;
pub mod chatflow;
pub mod onboarding;
pub mod sections;

pub use agent::{Agent, AgentMetadata};
pub use chatflow::{Chatflow, ChatflowMetadata};
pub use onboarding::{OnboardAck, OnboardRequest};
pub use sections::{Documentation, Integration, Media, Pricing, Requirements};
