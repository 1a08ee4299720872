// src/specs/mod.rs
//! # Response "specs"
//!
//! One module per response shape the scanner's web UI sends back. Each spec
//! encodes *where the ground truth lives* in that body and *how to read it
//! without falling over* when the server leaves something out.
//!
//! ## What lives here
//! - **Pure parsing** of a body the caller already fetched: HTML pages, the
//!   ajax show-jobs envelope, DataTables-style `aaData` JSON.
//! - **Positional contracts** (which cell, which row) read from
//!   `config::consts`, never hard-coded inline.
//! - **Tolerant extraction** through `core::html` (the markup reader) and
//!   `core::sanitize` (marker/number helpers).
//!
//! ## What does **not** live here
//! - HTTP, sessions, cookies, retries.
//! - Caching, printing or exporting records.
//!
//! ## Conventions & invariants
//! - Every function is a pure `&str -> records` call; each builds its own tree.
//! - Missing optional data → `None` (or the documented `-1` sentinel).
//! - Malformed rows are dropped and logged at `debug`; the caller only sees a
//!   shorter list.
//! - Only bodies that are not the expected *format* (bad JSON, wrong envelope,
//!   broken escapes) come back as `Err`.
//!
//! ## Current specs
//! - `uploads`: folder-browse line items → `Upload`.
//! - `forms`: upload form token, folder id lookup, new upload number.
//! - `jobs`: show-jobs table (HTML or the double-encoded ajax envelope) → `Job`s.
//! - `job_status`: single-job `aaData` table → `Job`.
pub mod forms;
pub mod job_status;
pub mod jobs;
pub mod uploads;
