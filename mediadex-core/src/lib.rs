//! # Mediadex Core
//!
//! Business rules for the mediadex catalog: entity validators, the
//! repository port with an in-memory adapter, and the services that put
//! validation in front of storage.
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use mediadex_config::Config;
//! use mediadex_core::{GameService, InMemoryRepository};
//! use mediadex_model::Game;
//!
//! let service = GameService::from_config(
//!     Arc::new(InMemoryRepository::<Game>::new()),
//!     &Config::default(),
//! );
//! let report = service.validate(&Game::default());
//! assert!(report.is_error());
//! ```

#![allow(missing_docs)]

/// Error types surfaced by catalog operations
pub mod error;

/// Repository port and in-memory adapter
pub mod repository;

/// Validation-aware catalog services
pub mod service;

/// Field checks and per-entity validators
pub mod validation;

pub use error::{CatalogError, Result, ensure_valid};
pub use repository::{CatalogRepository, InMemoryRepository};
pub use service::{BookService, CatalogService, GameService, MovieService};
pub use validation::{
    BookValidator, GameValidator, MovieValidator, Validator, not_exist,
};
