#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # reviewdb-entities
//!
//! Reusable, agnostic domain entities for reviewdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod id;
pub mod rating;
pub mod review;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
