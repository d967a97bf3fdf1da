//! Users Domain
//!
//! In-memory user registry with CRUD endpoints, plus a placeholder login
//! that issues bearer tokens for the guarded `/profile` route.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Not-found mapping, id consistency
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory store)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::seeded();
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod auth;
pub mod auth_handlers;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use auth::AuthService;
pub use error::{UserError, UserResult};
pub use models::{
    CreateUser, LoginRequest, LoginResponse, ReplaceUser, UpdateUser, User, UserFilter, UserId,
};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use store::UserStore;
