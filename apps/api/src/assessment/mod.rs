pub mod assess;
pub mod handlers;
pub mod prompts;
