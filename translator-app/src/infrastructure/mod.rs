pub mod config;
pub mod openrouter;
pub mod security;
