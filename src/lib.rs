pub mod assistant;
pub mod aws;
pub mod config;
pub mod error;
pub mod inference;
pub mod server;
pub mod storage;

pub use error::{Error, Result};
