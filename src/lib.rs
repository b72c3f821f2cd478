//! Clean Rooms Resource Handlers
//!
//! Provisioning handlers for five Clean Rooms resource types (analysis
//! template, collaboration, configured table, configured-table association,
//! membership) invoked by a stateless orchestration framework.
//!
//! Create and Delete are driven to convergence by a single generic
//! [`engine::StabilizationEngine`]: after the one-shot mutating call, each
//! invocation spends one retry and requires the point lookup and the full
//! listing to agree before reporting success. The only state carried between
//! invocations is the two-field [`context::CallbackContext`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use cleanrooms_handlers::handlers;
//! use cleanrooms_handlers::progress::{Action, ResourceHandlerRequest};
//!
//! let event = handlers::invoke(&client, Action::Create, request, None).await;
//! ```
//!
//! `client` is any [`provider::ControlPlane`] implementation for the resource
//! type being handled.

pub mod config;
pub mod constants;
pub mod context;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod observability;
pub mod progress;
pub mod provider;
pub mod resources;
pub mod scanner;
pub mod tags;

pub use context::CallbackContext;
pub use error::{ApiError, HandlerErrorCode};
pub use identity::ResourceIdentity;
pub use progress::{Action, OperationStatus, ProgressEvent, ResourceHandlerRequest};
pub use provider::{ControlPlane, ListPage, ListPages};
pub use resources::ResourceModel;
