#![forbid(unsafe_code)]

pub mod domain;
mod error;
pub mod prediction;
pub mod ranking;
pub mod render;
pub mod scoring;

pub use error::Error;
