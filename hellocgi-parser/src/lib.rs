#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod query;
pub mod render;
pub mod request;
pub mod serve;

pub use query::{QueryParams, parse};
pub use request::CgiRequest;
