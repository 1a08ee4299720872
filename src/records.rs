// src/records.rs
//! Records handed back to the caller. Plain values; nothing here is tracked
//! after an extractor returns it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::consts::{STATUS_COMPLETED, UNSET_ID};

/// One uploaded package in a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upload {
    pub name: String,
    pub id: i64,
    /// Caller context; the listing rows don't carry it.
    pub folder_id: Option<i64>,
    pub spdx_tv_url: Option<String>,
    pub spdx_xml_url: Option<String>,
}

impl Default for Upload {
    fn default() -> Self {
        Self {
            name: String::new(),
            id: UNSET_ID,
            folder_id: None,
            spdx_tv_url: None,
            spdx_xml_url: None,
        }
    }
}

impl Upload {
    /// Both required fields were found.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.id != UNSET_ID
    }

    pub fn in_folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }
}

impl fmt::Display for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Upload {}: {}", self.id, self.name)
    }
}

/// One agent or report job run against an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub status: String,
    pub agent: String,
    /// Only set for completed jobs; see [`Job::completed_report_id`].
    pub report_id: Option<i64>,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            id: UNSET_ID,
            status: String::new(),
            agent: String::new(),
            report_id: None,
        }
    }
}

impl Job {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    /// The report id, but only while the job reads as completed.
    pub fn completed_report_id(&self) -> Option<i64> {
        if self.is_completed() { self.report_id } else { None }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Job {}: {}, {}", self.id, self.agent, self.status)
    }
}
