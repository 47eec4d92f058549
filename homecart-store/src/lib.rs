//! Document-store and auth-directory seams for the Homecart admin tooling.
//!
//! Every admin command talks to two external services: the document database
//! (collections of JSON documents) and the auth provider's user directory.
//! This crate defines both seams as traits, the typed write operations that
//! cross them (including the server-timestamp and field-deletion sentinels),
//! and the chunked [`BatchWriter`] all bulk commands go through.
//!
//! Clients are constructed explicitly and passed by parameter — there is no
//! process-global handle. In-memory implementations of both seams back the
//! test suites of every crate above this one.

mod batch;
mod directory;
mod document;
mod error;
mod memory;
mod write;

pub use batch::{BatchReport, BatchWriter};
pub use directory::{AuthDirectory, AuthUser, AuthUserUpdate, NewAuthUser};
pub use document::{Doc, DocumentStore};
pub use error::{StoreError, StoreResult};
pub use memory::{MemoryDirectory, MemoryStore};
pub use write::{ensure_batch_size, WriteKind, WriteOp, MAX_BATCH_OPS};
