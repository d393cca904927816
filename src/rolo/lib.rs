//! # Rolo Architecture
//!
//! Rolo is a contact book driven by short text commands (`add n/Alice ...`, `pin 2`,
//! `undo`). The library is the whole application; the binary is one thin front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Reads command lines, prints results and event snapshots  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ command line
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - parse → execute → history → persist                      │
//! └─────────────────────────────────────────────────────────────┘
//!          │                   │                     │
//!          ▼                   ▼                     ▼
//! ┌────────────────┐ ┌──────────────────┐ ┌─────────────────────┐
//! │ parser/        │ │ commands/        │ │ history.rs          │
//! │ text → Command │ │ execute/undo/redo│ │ undo & redo stacks  │
//! └────────────────┘ └──────────────────┘ └─────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model/)                                             │
//! │  - AddressBook (authoritative) + displayed view             │
//! │  - publishes ModelEvent on the EventBus after each commit   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - Storage trait: JsonFileStore, InMemoryStore              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indexes
//!
//! Every index a user types is 1-based and refers to the *displayed* list: the current
//! filter applied, pinned persons first. See [`index`] and [`model::Model`].
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//! Results are [`api::CmdResult`] values and list updates are [`events::ModelEvent`]s.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): execute/undo/redo against an in-memory model. Most
//!    tests live here.
//! 2. **Parser** (`parser/`): text to typed commands, including every failure shape.
//! 3. **API** (`api.rs`, `tests/`): whole command lines against `InMemoryStore`.
//! 4. **CLI** (`cli/`, `tests/`): argument parsing, row formatting, and the binary itself.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by front ends
//! - [`parser`]: tokenizer and per-command parsers
//! - [`commands`]: one module per command verb
//! - [`history`]: undo/redo
//! - [`model`]: value objects, entities, address book, model
//! - [`events`]: model change notification
//! - [`store`]: persistence and export
//! - [`config`], [`logging`]: ambient setup for front ends
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod index;
pub mod logging;
pub mod model;
pub mod parser;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
