// src/cli.rs
//! `cli` binary: run one parser over a saved response body and print JSON.
//!
//! ```text
//! cli jobs --ajax -i showjobs.json
//! curl ... | cli folder-id "Software Repository"
//! cli uploads --folder-id 3 -i browse.json --lines
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use serde_json::Value;

use crate::specs::{forms, job_status, jobs, uploads};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Parse a saved response body from the scanner web UI")]
pub struct Args {
    #[command(subcommand)]
    pub shape: Shape,

    /// Response body file; stdin when omitted or `-`
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// One JSON record per line instead of a pretty document
    #[arg(long, global = true)]
    pub lines: bool,

    /// -v debug, -vv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Shape {
    /// Folder browse JSON (`aaData` line items) → uploads
    Uploads {
        #[arg(long)]
        folder_id: Option<i64>,
    },
    /// Upload page → `uploadformbuild` token
    FormToken,
    /// Page with folder pickers → id of the named folder
    FolderId { name: String },
    /// Upload response → new upload number (-1 if none)
    NewUpload,
    /// Show-jobs table → jobs
    Jobs {
        /// Input is the `{"showJobsData": ...}` ajax envelope
        #[arg(long)]
        ajax: bool,
    },
    /// Single-job status JSON → job
    JobStatus,
}

pub fn run(args: Args) -> Result<()> {
    let body = read_input(args.input.as_deref())?;

    let out: Value = match &args.shape {
        Shape::Uploads { folder_id } => {
            serde_json::to_value(uploads::parse_folder_listing(&body, *folder_id)?)?
        }
        Shape::FormToken => forms::parse_upload_form_token(&body).into(),
        Shape::FolderId { name } => forms::parse_folder_id(&body, name).into(),
        Shape::NewUpload => forms::parse_new_upload_id(&body).into(),
        Shape::Jobs { ajax: true } => serde_json::to_value(jobs::parse_show_jobs_payload(&body)?)?,
        Shape::Jobs { ajax: false } => serde_json::to_value(jobs::parse_job_table(&body))?,
        Shape::JobStatus => serde_json::to_value(job_status::parse_single_job_from_json_table(&body)?)?,
    };

    print(&out, args.lines)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).wrap_err_with(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body).wrap_err("reading stdin")?;
            Ok(body)
        }
    }
}

fn print(out: &Value, lines: bool) -> Result<()> {
    match (out, lines) {
        (Value::Array(items), true) => {
            for item in items {
                println!("{}", serde_json::to_string(item)?);
            }
        }
        (value, true) => println!("{}", serde_json::to_string(value)?),
        (value, false) => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
