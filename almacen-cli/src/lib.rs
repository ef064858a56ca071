//! Warehouse order dispatch
//!
//! Reads an order sheet, submits each row to the delivery platform with a
//! create-then-confirm call pair, and reports the per-row outcomes. Also
//! assembles routing-parameter payloads for the same platform.

pub mod api;
pub mod cli;
pub mod config;
pub mod orders;
pub mod routing;
pub mod source;
