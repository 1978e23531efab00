pub mod config;
pub mod error;
pub mod logging;

pub mod acquire;
pub mod capture;
pub mod fetch;
pub mod netlog;
pub mod pipeline;
pub mod query;
pub mod reformat;
pub mod remux;
pub mod tools;

pub use error::{GrabError, StreamKind};
pub use netlog::MediaLinks;
