// tests/show_jobs.rs
//
// Show-jobs table against a captured ajax body and its decoded HTML.
//
use foss_scrape::{Job, decode_show_jobs_payload, parse_job_table, parse_show_jobs_payload};

const AJAX: &str = include_str!("fixtures/show_jobs.json");
const HTML: &str = include_str!("fixtures/show_jobs.html");

fn job(id: i64, status: &str, agent: &str, report_id: Option<i64>) -> Job {
    Job { id, status: status.into(), agent: agent.into(), report_id }
}

#[test]
fn decoding_recovers_the_html() {
    let decoded = decode_show_jobs_payload(AJAX).unwrap();
    assert_eq!(decoded, HTML);
    assert!(decoded.contains("résumé"));
}

#[test]
fn decoded_payload_matches_direct_html() {
    let via_ajax = parse_show_jobs_payload(AJAX).unwrap();
    let direct = parse_job_table(HTML);
    assert_eq!(via_ajax, direct);
}

#[test]
fn fixture_jobs() {
    let jobs = parse_job_table(HTML);
    assert_eq!(
        jobs,
        vec![
            job(120, "Completed", "ununpack", None),
            job(121, "Completed", "nomos", None),
            job(124, "Completed", "spdx2tv", Some(77)),
            job(125, "Failed", "spdx2", None),
            job(126, "Not started", "copyright", None),
        ]
    );
    // Header, upload banner and the three-cell row are all gone.
    assert!(jobs.iter().all(|j| j.id != 127));
}

#[test]
fn report_ids_only_on_completed_jobs() {
    for j in parse_job_table(HTML) {
        if j.report_id.is_some() {
            assert!(j.is_completed(), "{j} has a report id");
        }
    }
}
