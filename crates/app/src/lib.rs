//! # mockapi-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement or consume:
//!   - `CollectionStore` — read/write access to the live collections
//!   - `SnapshotSink` — persist a full copy of the document
//! - Provide the in-process `InMemoryStore`, which every request reads and
//!   writes directly, together with its `MutationTracker`
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CollectionService` — query pages, CRUD on records
//!   - `SnapshotScheduler` — periodic background persistence
//!
//! ## Dependency rule
//! Depends on `mockapi-domain` only (plus `tokio` for locks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod mutation;
pub mod ports;
pub mod services;
pub mod snapshot;
pub mod store;
