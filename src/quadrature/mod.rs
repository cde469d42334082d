pub mod config;
pub mod constants;
mod core;
mod errors;
pub mod reference;
mod report;
mod rules;

pub use config::{Advisory, IntegrationConfig};
pub use self::core::QuadratureEngine;
pub use errors::QuadratureError;
pub use report::{IntegrationReport, Sample};
pub use rules::Rule;

#[cfg(test)]
mod tests;
