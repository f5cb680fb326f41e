//! # Hubnotes Architecture
//!
//! Hubnotes is a **UI-agnostic notes library** with a small command-line host.
//! Everything a note-taking screen needs (a persistent list, search, tags,
//! guarded editing, import and export) lives in the library; a host only
//! turns user events into calls and results into output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (cli/, wired by main.rs)                              │
//! │  - Parses arguments, renders output, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - One command per user operation, returning CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - store.rs: NoteStore, the owner of all notes              │
//! │  - session.rs: EditSession, drafts and the unsaved guard    │
//! │  - search.rs: filtering; tags.rs: TagSet                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (storage/) + format (schema.rs)                    │
//! │  - StorageBackend: FsStorage (production), MemStorage       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never exits, and never prompts.
//! The "discard unsaved changes?" question is a callback the host answers
//! with a [`session::Decision`].
//!
//! ## Module Overview
//!
//! - [`api`]: the facade hosts talk to
//! - [`commands`]: one module per operation
//! - [`store`]: [`store::NoteStore`], persistence and mutation
//! - [`session`]: [`session::EditSession`] state machine
//! - [`search`]: query filtering and empty-state classification
//! - [`tags`]: [`tags::TagSet`]
//! - [`summary`]: list previews
//! - [`index`]: user-facing note references
//! - [`schema`]: the persisted JSON format and its validation
//! - [`storage`]: key/value backends
//! - [`model`], [`clock`], [`config`], [`error`], [`logging`]

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod schema;
pub mod search;
pub mod session;
pub mod storage;
pub mod store;
pub mod summary;
pub mod tags;
