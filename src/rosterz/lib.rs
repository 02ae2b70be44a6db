//! # Rosterz Architecture
//!
//! Rosterz is a **UI-agnostic roster-editing library** with a terminal
//! client on top. The library owns every rule of the screen; the client
//! only parses lines and renders results.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Parses input lines, formats output, handles the terminal │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning one session's state                   │
//! │  - Dispatches intents, exposes the query surface            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per intent                                │
//! │  - Forwards each structural delta to dependent state        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State Components (roster.rs, ui_state.rs, undo.rs)         │
//! │  - Ordered records with unique ids, emitting deltas         │
//! │  - Expanded-row tracking, one-slot undo buffer              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Delta Contract
//!
//! Indices are the only addressing scheme the screen has, and they move
//! on every insert and removal. Each mutating roster operation therefore
//! returns a [`roster::Delta`] describing what changed, and the command
//! layer forwards it to the expanded-row tracker before anything else
//! happens. Dependent state never inspects the list to guess what moved.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` values, and never writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal. Errors are values
//! ([`error::RosterError`]); no failure mutates state.
//!
//! ## Concurrency Model
//!
//! Single-threaded and synchronous. Every operation completes before it
//! returns; there is no background work, I/O, or suspension. The caller
//! serializes intents, one user gesture to completion before the next.
//!
//! ## Testing Strategy
//!
//! 1. **Components** (`roster.rs`, `ui_state.rs`, `undo.rs`,
//!    `validation.rs`): unit tests of invariants and transition rules.
//! 2. **Commands** (`commands/*.rs`): the lion's share, logic branches
//!    against directly constructed state.
//! 3. **API** (`api.rs`): end-to-end scenarios over the facade.
//! 4. **CLI** (`tests/repl_e2e.rs`): the compiled binary driven over
//!    piped stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each intent
//! - [`roster`]: the ordered collection and its deltas
//! - [`ui_state`]: expanded-row tracking across mutations
//! - [`undo`]: the one-slot undo buffer
//! - [`validation`]: name/id policy for insert and edit
//! - [`model`]: the record value type
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod roster;
pub mod ui_state;
pub mod undo;
pub mod validation;
