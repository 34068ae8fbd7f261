//! # mockapi-domain
//!
//! Pure domain model for the mockapi JSON mock server.
//!
//! ## Responsibilities
//! - Foundational types: record identifiers, error conventions
//! - Define **Records** (schema-less JSON objects addressed by `id`)
//! - Define the **Document** (collection name → ordered records)
//! - Define **Filters**, **Sort** specs and **Pages** over a collection
//! - Run the query processor: filter → sort → paginate
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod document;
pub mod filter;
pub mod page;
pub mod query;
pub mod record;
pub mod sort;
