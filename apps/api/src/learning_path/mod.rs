pub mod capstone;
pub mod handlers;
pub mod progress;
pub mod prompts;
pub mod resources;
pub mod roadmap;
