//! Retrolab Core - Catalog and environment registry
//!
//! This crate catalogs installed games (a rom plus optional saved states),
//! resolves each to the emulation core that understands it, and registers
//! every (game, state) pair as an instantiable environment for automated
//! experimentation.
//!
//! # Architecture
//!
//! - [`CoreCatalog`] - Immutable tables from the core manifest: extension to
//!   platform, platform to core library
//! - [`AssetLocator`] - Resolves game directories, rom files, and saved
//!   states against the catalog
//! - [`EnvironmentRegistry`] - One [`EnvRegistration`] per (game, state)
//!   pair, built once at startup
//! - [`EnvironmentFactory`] - Validates requests and delegates construction
//!   to an external [`EnvironmentBuilder`]
//!
//! All state is built once at initialization and read-only afterwards; share
//! the catalog behind an `Arc` and clone the locator freely.

pub mod catalog;
pub mod env;
pub mod error;
pub mod factory;
pub mod locator;
pub mod paths;
pub mod registry;
pub mod resolver;

pub use catalog::{CoreCatalog, CoreDescriptor, host_library_suffix};
pub use env::{EnvOptions, EnvSpec, EnvironmentBuilder};
pub use error::{CatalogError, ResolveError};
pub use factory::{CreateError, EnvironmentFactory, Unavailable};
pub use locator::{AssetLocator, CHECKSUM_FILE, STATE_EXTENSION};
pub use registry::{EnvRegistration, EnvironmentRegistry};
pub use resolver::{ResolutionError, resolve};
