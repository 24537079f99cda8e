//! Core types and configuration for botlift.
//!
//! This crate defines the CLI parameter resolver ([`Params`]), the
//! `botlift.toml` schema ([`BotliftConfig`]), deterministic resource naming
//! ([`ResourceNamer`]), and shared error types.

pub mod args;
pub mod config;
pub mod error;
pub mod naming;

pub use args::Params;
pub use config::{
    ArtifactConfig, BotliftConfig, CloudRunConfig, IamConfig, NamingConfig, ProjectConfig,
    ServicesConfig,
};
pub use error::{Error, Result};
pub use naming::{ResourceKind, ResourceNamer};
