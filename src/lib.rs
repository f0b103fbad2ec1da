// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod places;
pub mod progress;
pub mod scrape;
pub mod session;
pub mod specs;

pub use error::{Error, Result};
