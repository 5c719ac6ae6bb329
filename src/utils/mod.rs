//! Shared helpers: HTML escaping, URL cleanup and timestamps.

pub mod date;
pub mod html;
