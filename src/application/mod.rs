// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: The search/pagination and selection controllers
//!
//! # Architecture
//!
//! The application layer sits between the domain layer (pure business logic)
//! and the infrastructure/presentation layers. It defines:
//!
//! - **Ports (Traits)**: Abstract interfaces that infrastructure implements
//! - **Controllers**: State holders with an explicit transition API
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the controllers and renders their snapshots
//!
//! # Example
//!
//! ```ignore
//! use image_finder::application::gallery::SearchPaginationController;
//!
//! let mut controller = SearchPaginationController::new();
//! if let Some(request) = controller.submit_query("forest", &mut sink) {
//!     let outcome = dispatch(client.clone(), request).await;
//!     controller.on_fetch_settled(&outcome.request, outcome.result, &mut sink);
//! }
//! ```

pub mod gallery;
pub mod port;
