//! Request handlers

pub mod evaluation;
pub mod health;
