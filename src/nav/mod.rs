//! Revision navigation: blame browsing and history stepping driven by the
//! `git` CLI.

pub mod annotate;
pub mod error;
pub mod line;
pub mod resolve;
pub mod session;
pub mod viewers;

#[cfg(test)]
mod tests;
