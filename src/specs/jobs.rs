// src/specs/jobs.rs
//! Spec for the show-jobs table.
//!
//! The ajax endpoint wraps the table twice: a JSON object
//! `{"showJobsData": "..."}` whose string is itself backslash-escaped HTML.
//! [`decode_show_jobs_payload`] peels both layers, [`parse_job_table`] reads
//! the HTML. They are separate so either step can be fed captured input.
//!
//! Row layout (see `JobTableColumns`):
//! - `<tr>` without a `class` is a header/layout row
//! - col 0: `<a>` job id, col 1: status (blank = not started), col 2: agent
//! - cols 3..=6: items, dates, rate, ETA (unused)
//! - col 7: actions; a completed report job links `...&report=N`

use tracing::{debug, trace};

use crate::config::consts::{
    JobTableColumns as Col, REPORT_MARKER, SHOW_JOBS_KEY, STATUS_COMPLETED, STATUS_NOT_STARTED,
};
use crate::core::escape::unescape;
use crate::core::html::{Markup, Tag};
use crate::core::sanitize::{int_after_marker, parse_int};
use crate::error::{Result, ScrapeError, json_object};
use crate::records::Job;

/// JSON envelope → plain HTML.
pub fn decode_show_jobs_payload(body: &str) -> Result<String> {
    let envelope = json_object(body)?;
    let raw = envelope
        .get(SHOW_JOBS_KEY)
        .ok_or(ScrapeError::MissingKey(SHOW_JOBS_KEY))?
        .as_str()
        .ok_or(ScrapeError::WrongType { key: SHOW_JOBS_KEY, expected: "a string" })?;
    unescape(raw)
}

/// Decoded show-jobs HTML → jobs in row order.
///
/// Rows with fewer than eight cells or an unreadable id are dropped. Bare
/// `<tr>` markup without a surrounding `<table>` is accepted. Status and agent
/// come back trimmed; a blank or whitespace-only status reads "Not started".
pub fn parse_job_table(html: &str) -> Vec<Job> {
    let doc = Markup::parse_table_rows(html);
    let mut jobs = Vec::new();

    for (n, row) in doc.all("tr").enumerate() {
        if !row.has_attr("class") {
            continue;
        }
        match parse_job_row(row) {
            Some(job) => jobs.push(job),
            None => debug!(row = n, "skipping malformed job row"),
        }
    }

    trace!(jobs = jobs.len(), "parsed show-jobs table");
    jobs
}

/// Both steps: ajax envelope → jobs.
pub fn parse_show_jobs_payload(body: &str) -> Result<Vec<Job>> {
    let html = decode_show_jobs_payload(body)?;
    Ok(parse_job_table(&html))
}

fn parse_job_row(row: Tag<'_>) -> Option<Job> {
    let cells: Vec<Tag<'_>> = row.all("td").collect();
    if cells.len() < Col::MIN_CELLS {
        debug!(cells = cells.len(), "job row too short");
        return None;
    }

    let id = cells[Col::ID]
        .first("a")
        .and_then(|a| a.first_child_text())
        .and_then(|text| parse_int(&text))?;

    let status = cells[Col::STATUS]
        .first_child_text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| STATUS_NOT_STARTED.to_string());

    let agent = cells[Col::AGENT]
        .first_child_text()
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    let report_id = if status == STATUS_COMPLETED {
        report_link(cells[Col::ACTION])
    } else {
        None
    };

    Some(Job { id, status, agent, report_id })
}

fn report_link(cell: Tag<'_>) -> Option<i64> {
    let href = cell.first("a")?.attr("href")?;
    let id = int_after_marker(href, REPORT_MARKER);
    if id.is_none() {
        debug!(href, "completed job links no report id");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(class: Option<&str>, cells: &[&str]) -> String {
        let open = match class {
            Some(c) => format!(r#"<tr class="{c}">"#),
            None => "<tr>".to_string(),
        };
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        format!("{open}{tds}</tr>")
    }

    fn table(rows: &[String]) -> String {
        format!("<table>{}</table>", rows.concat())
    }

    #[test]
    fn completed_report_row() {
        let doc = table(&[
            row(None, &["Job", "Status", "Agent", "Items", "Dates", "Rate", "ETA", "Action"]),
            row(
                Some("jobrow"),
                &[
                    r#"<a href="?mod=showjobs&job=17">17</a>"#,
                    "Completed",
                    "spdx2tv",
                    "1",
                    "2024-01-01",
                    "",
                    "",
                    r#"<a href="?mod=download&report=99">Download</a>"#,
                ],
            ),
        ]);
        let jobs = parse_job_table(&doc);
        assert_eq!(
            jobs,
            vec![Job {
                id: 17,
                status: "Completed".into(),
                agent: "spdx2tv".into(),
                report_id: Some(99),
            }]
        );
    }

    #[test]
    fn bare_rows_without_table() {
        let bare = [
            row(None, &["Job", "Status", "Agent", "", "", "", "", ""]),
            row(
                Some("x"),
                &["<a>5</a>", "Completed", "spdx2", "", "", "", "", r#"<a href="?mod=download&report=99">x</a>"#],
            ),
        ]
        .concat();
        let expected = vec![Job {
            id: 5,
            status: "Completed".into(),
            agent: "spdx2".into(),
            report_id: Some(99),
        }];
        assert_eq!(parse_job_table(&bare), expected);
        assert_eq!(parse_job_table(&table(&[bare.clone()])), expected);
    }

    #[test]
    fn comments_before_cell_text() {
        let doc = table(&[row(
            Some("x"),
            &[
                "<a><!-- id -->5</a>",
                "<!-- s -->Completed",
                "spdx2",
                "",
                "",
                "",
                "",
                r#"<a href="?report=99">x</a>"#,
            ],
        )]);
        let jobs = parse_job_table(&doc);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 5);
        assert_eq!(jobs[0].status, "Completed");
        assert_eq!(jobs[0].report_id, Some(99));
    }

    #[test]
    fn classless_rows_never_count() {
        let full = [r#"<a>5</a>"#, "Completed", "nomos", "", "", "", "", ""];
        let doc = table(&[row(None, &full), row(None, &full)]);
        assert!(parse_job_table(&doc).is_empty());
    }

    #[test]
    fn short_rows_are_dropped() {
        let doc = table(&[
            row(Some("x"), &["<a>1</a>", "Completed", "nomos", "", "", "", ""]),
            row(Some("x"), &["<a>2</a>", "Started", "monk", "", "", "", "", ""]),
        ]);
        let jobs = parse_job_table(&doc);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 2);
    }

    #[test]
    fn blank_status_is_not_started() {
        let doc = table(&[row(Some("x"), &["<a>3</a>", "", "ununpack", "", "", "", "", ""])]);
        let jobs = parse_job_table(&doc);
        assert_eq!(jobs[0].status, STATUS_NOT_STARTED);
        assert_eq!(jobs[0].report_id, None);
    }

    #[test]
    fn report_links_ignored_unless_completed() {
        let doc = table(&[row(
            Some("x"),
            &["<a>4</a>", "Started<br>50%", "spdx2", "", "", "", "", r#"<a href="?report=7">x</a>"#],
        )]);
        let jobs = parse_job_table(&doc);
        assert_eq!(jobs[0].status, "Started");
        assert_eq!(jobs[0].report_id, None);
    }

    #[test]
    fn envelope_errors() {
        assert!(matches!(decode_show_jobs_payload("not json"), Err(ScrapeError::Json(_))));
        assert!(matches!(decode_show_jobs_payload("{}"), Err(ScrapeError::MissingKey(_))));
        assert!(matches!(
            decode_show_jobs_payload(r#"{"showJobsData": 3}"#),
            Err(ScrapeError::WrongType { .. })
        ));
    }
}
