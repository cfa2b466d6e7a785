pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod oib;
pub mod validator;

pub use error::OibError;
pub use oib::Oib;
pub use validator::{check, validate_many, validate_one, BatchResult, Candidate};
