#![forbid(unsafe_code)]

//! Domain model for the NeuraMate wellness page: garden progress, chat turns,
//! and the wellness hub records. Everything here is pure and in-memory.

pub mod model;
pub mod time;

pub use time::Clock;
