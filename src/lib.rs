// src/lib.rs
//! Parsers for the responses of a legacy license-scanner web UI.
//!
//! Feed a response body you already fetched to one function in [`specs`] and
//! get back [`Upload`]s, [`Job`]s, or a plain id/token. Nothing here does I/O.

pub mod config;
pub mod core;
pub mod error;
pub mod records;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::{Result, ScrapeError};
pub use records::{Job, Upload};

pub use specs::forms::{
    find_new_upload_id, parse_folder_id, parse_new_upload_id, parse_upload_form_token,
};
pub use specs::job_status::parse_single_job_from_json_table;
pub use specs::jobs::{decode_show_jobs_payload, parse_job_table, parse_show_jobs_payload};
pub use specs::uploads::{parse_all_uploads, parse_folder_listing, parse_upload_line_item};
