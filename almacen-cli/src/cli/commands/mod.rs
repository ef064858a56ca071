//! Command handlers

pub mod config;
pub mod routing;
pub mod upload;
