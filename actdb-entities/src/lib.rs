#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # actdb-entities
//!
//! Reusable, agnostic domain entities for the school activities database.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod activity;
pub mod email;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
