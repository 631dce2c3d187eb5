#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # survey-entities
//!
//! Reusable, agnostic domain entities for the patient satisfaction survey.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod answer;
pub mod identifier;
pub mod survey;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
