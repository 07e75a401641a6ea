pub mod handlers;
pub mod sync;
