//! # Creditview Architecture
//!
//! Creditview is a **UI-agnostic data-view library** for carbon-credit records,
//! with a small CLI client on top. A presentation layer (terminal, browser, desktop)
//! supplies the record collection and renders what the library derives from it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders pages, initializes logging     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: loads records, dispatches to commands       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - `list`: one-shot browse, `certificate`: one export       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - pipeline: filter → search → sort → page (ViewPipeline)   │
//! │  - certificate: HTML / PDF export (CertificateExporter)     │
//! │  - source: where records come from (RecordSource)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! The pipeline never touches the filesystem and never mutates its source
//! collection. Certificate files only leave the process through a
//! [`certificate::Delivery`] sink, and time only enters through a
//! [`clock::Clock`], so both are swapped out in tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`pipeline`]: The filter/sort/paginate engine
//! - [`query`]: Query parameters and their string parsing
//! - [`debounce`]: Last-call-wins deferral used for search input
//! - [`certificate`]: Certificate documents, renderers and delivery sinks
//! - [`dialog`]: Export dialog state for presentation layers
//! - [`source`]: Record sources
//! - [`model`]: `Record` and `Status`
//! - [`clock`]: Wall clock and manual clock
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod certificate;
pub mod clock;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod dialog;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod source;
