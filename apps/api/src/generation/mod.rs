pub mod generator;
pub mod handlers;
pub mod playbook;
pub mod post_types;
pub mod prompts;
pub mod scoring;
pub mod topic;
