// src/specs/job_status.rs
//! Spec for the single-job status table.
//!
//! The status endpoint returns DataTables JSON where every `aaData` row is a
//! `{"0": label, "1": value}` pair. Nothing in the rows says what they are;
//! meaning is purely positional (see `JobDetailRows`):
//! - row 0: job id, as markup with an `<a>`
//! - row 1: report id (only meaningful for finished SPDX reporter jobs)
//! - row 3: agent name
//! - row 11: status, possibly followed by `<br>` and more text
//!
//! Short tables degrade field by field instead of failing: whatever rows are
//! missing leave their field at its default.

use serde_json::Value;
use tracing::debug;

use crate::config::consts::{
    JobDetailRows as Row, REPORTER_AGENTS, STATUS_SEPARATOR, TABLE_DATA_KEY,
};
use crate::core::html::Markup;
use crate::core::sanitize::parse_int;
use crate::error::{Result, ScrapeError, json_object};
use crate::records::Job;

/// Status body → `Job`, or `None` when the body has no `aaData` table.
pub fn parse_single_job_from_json_table(body: &str) -> Result<Option<Job>> {
    let envelope = json_object(body)?;
    let Some(rows) = envelope.get(TABLE_DATA_KEY) else {
        return Ok(None);
    };
    let rows = rows.as_array().ok_or(ScrapeError::WrongType {
        key: TABLE_DATA_KEY,
        expected: "an array",
    })?;
    if rows.len() <= Row::STATUS {
        debug!(rows = rows.len(), "job status table shorter than expected");
    }

    let mut job = Job::default();

    if let Some(id) = cell_str(rows, Row::ID).and_then(id_from_markup) {
        job.id = id;
    }
    job.agent = cell_str(rows, Row::AGENT).unwrap_or_default().to_string();
    job.status = cell_str(rows, Row::STATUS)
        .and_then(|lines| lines.split(STATUS_SEPARATOR).next())
        .unwrap_or_default()
        .to_string();

    if job.is_completed() && REPORTER_AGENTS.contains(&job.agent.as_str()) {
        job.report_id = cell(rows, Row::REPORT_ID).and_then(int_value);
        if job.report_id.is_none() {
            debug!(agent = %job.agent, "completed reporter job without a readable report id");
        }
    }

    Ok(Some(job))
}

fn cell(rows: &[Value], row: usize) -> Option<&Value> {
    rows.get(row)?.get(Row::VALUE_COL)
}

fn cell_str(rows: &[Value], row: usize) -> Option<&str> {
    cell(rows, row)?.as_str()
}

fn int_value(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| v.as_str().and_then(parse_int))
}

// `<a href="...">123</a>`; an empty anchor gives no id.
fn id_from_markup(markup: &str) -> Option<i64> {
    let doc = Markup::parse(markup);
    let anchor = doc.first("a")?;
    if anchor.is_empty() {
        return None;
    }
    anchor.first_child_text().and_then(|text| parse_int(&text))
}
