//! # campus-service
//!
//! Business logic services for Campus ERP. Services orchestrate
//! repositories and the auth layer; HTTP concerns stay in `campus-api`.

pub mod attendance;
pub mod context;
pub mod feed;
pub mod finance;
pub mod interviews;
pub mod roster;

pub use context::RequestContext;
