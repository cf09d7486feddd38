pub mod answers;
pub mod handlers;
pub mod markdown;
