//! Request middleware.
//!
//! - [`origin::require_allowed_origin`] -- Rejects requests from origins not
//!   on the configured allow-list.

pub mod origin;
