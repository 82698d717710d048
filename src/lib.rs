//! Client-side editing of votes: an in-memory draft seeded from a loaded
//! vote record, mutated by user-driven operations, validated, and pushed
//! back to the persistence API as a replace-style update.
//!
//! Routing, result tallying, storage and the sign-in flow all live
//! elsewhere; this crate only consumes them through [`api::VoteStore`] and
//! [`session::SessionProvider`].

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod notify;
pub mod session;
