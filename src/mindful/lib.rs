//! # Mindful Architecture
//!
//! Mindful is a **UI-agnostic spaced-repetition note library**. The bundled
//! boundary is a CLI, but nothing from `api.rs` inward knows or cares which
//! client is driving it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, renders output, confirms deletions     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the interval table                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns structured CmdResults       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore over an abstract Slot                          │
//! │  - FileSlot (production), MemorySlot (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scheduling policy itself lives in [`scheduler`]: a pure function of
//! (note, interval table, date) with no clock or I/O access, so every review
//! transition is reproducible in a unit test.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, never calls
//! `std::process::exit` and never assumes a terminal. The same core could
//! serve a web UI or any other client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`scheduler`]: The spaced-repetition review scheduler
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `Strength`)
//! - [`config`]: Configuration management (the interval table)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod store;
