//! # Snapfolio Architecture
//!
//! Snapfolio is a **personal photo gallery library** with a terminal client.
//! The browsing logic (filtering, search, likes, infinite scroll, lightbox)
//! is a plain in-memory state machine; the CLI is just one way to drive it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, runs `browse` sessions │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and the gallery core           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                 ┌────────────┴─────────────┐
//!                 ▼                          ▼
//! ┌───────────────────────────┐  ┌──────────────────────────────┐
//! │  Commands (commands/*.rs) │  │  Gallery Core (gallery/)     │
//! │  - list / view            │─▶│  - GalleryState, Criteria    │
//! │  - optimize / manifest    │  │  - Pager, Lightbox           │
//! │  - config / formats       │  │  - No I/O whatsoever         │
//! └───────────────────────────┘  └──────────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogSource trait over the photos.json manifest        │
//! │  - FileCatalog (production), InMemoryCatalog (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## View State Is Never Persisted
//!
//! Likes, the active filter and the page cursor live only as long as the
//! [`gallery::Gallery`] value that owns them. The manifest is read-only input
//! for browsing; only the `manifest` command writes it.
//!
//! ## Testing Strategy
//!
//! 1. **Gallery core** (`gallery/*.rs`): the filtering, paging and navigation
//!    rules, tested directly on in-memory photo lists.
//! 2. **Commands** (`commands/*.rs`): against `InMemoryCatalog` fixtures, or
//!    temp directories with generated images for optimize/manifest.
//! 3. **CLI** (`tests/`): end-to-end runs of the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`gallery`]: In-memory browsing state
//! - [`commands`]: Business logic for each command
//! - [`store`]: Catalog storage abstraction and implementations
//! - [`model`]: Core data types (`PhotoRecord`, `Manifest`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing and the interactive session for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod gallery;
pub mod model;
pub mod store;
