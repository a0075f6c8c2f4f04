pub mod blame;
pub mod config;
pub mod resolve;
pub mod walk;
