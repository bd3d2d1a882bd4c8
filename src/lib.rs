// ABOUTME: Library entry point for the pantry-chef recipe generation client core
// ABOUTME: Form state, request orchestration, and recipe rendering behind a service seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![deny(unsafe_code)]

//! # Pantry Chef
//!
//! Client core for an ingredient-driven recipe generator. It owns the
//! mutable form collections, sequences the single asynchronous call to
//! the remote generation service against an explicit view-state machine,
//! and projects the returned recipe into a display tree.
//!
//! Any UI layer (web, desktop, terminal) is a thin adapter over these
//! operations; the core performs no rendering I/O of its own.
//!
//! ## Architecture
//!
//! - **Form state** ([`form`], [`preferences`]): ordered distinct
//!   ingredient and restriction lists, closed preference option sets
//! - **Orchestration** ([`orchestrator`]): the
//!   `Idle -> Loading -> Result | Error` state machine with a
//!   sequence-tag guard against stale settlements
//! - **Service seam** ([`service`]): the collaborator contract as an
//!   async trait, with an HTTP implementation
//! - **Rendering** ([`render`]): pure projection from view state to a
//!   display tree tolerant of absent optional fields
//!
//! ## Example
//!
//! ```rust,no_run
//! use pantry_chef::config::ServiceConfig;
//! use pantry_chef::form::FormState;
//! use pantry_chef::orchestrator::RequestOrchestrator;
//! use pantry_chef::render::project;
//! use pantry_chef::service::HttpRecipeService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = HttpRecipeService::new(ServiceConfig::from_env()?);
//!     let mut orchestrator = RequestOrchestrator::new(service);
//!
//!     let mut form = FormState::new();
//!     form.add_ingredient("chicken");
//!     form.add_ingredient("rice");
//!
//!     orchestrator.generate(&form).await;
//!     println!("{}", project(orchestrator.state()).to_text());
//!     Ok(())
//! }
//! ```

/// Environment-derived service configuration
pub mod config;

/// Structured error types for service operations
pub mod errors;

/// Form state manager for ingredient and restriction collections
pub mod form;

/// Logging configuration and structured output
pub mod logging;

/// Wire data model for the generation service contract
pub mod models;

/// View-state machine and request orchestration
pub mod orchestrator;

/// Closed preference option sets
pub mod preferences;

/// Pure view-state projection to a display tree
pub mod render;

/// Recipe service seam and HTTP client
pub mod service;

// Re-export key types for convenience

pub use config::ServiceConfig;
pub use errors::{ServiceError, ServiceResult};
pub use form::{EntryList, FormState};
pub use models::{GenerationRequest, GenerationResponse, Recipe};
pub use orchestrator::{RequestOrchestrator, ViewState};
pub use preferences::{CookingTime, CuisineType, MealType, Preferences};
pub use render::{project, RecipeView, RenderedView};
pub use service::{HttpRecipeService, RecipeService};
