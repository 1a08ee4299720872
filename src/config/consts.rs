// src/config/consts.rs
//
// Everything here mirrors markup the server happens to emit. None of it is
// negotiated; when the tool's templates change, this is the file to update.

/// Positions inside one folder-browse line item.
pub struct UploadItem;
impl UploadItem {
    pub const MARKUP: usize = 0;
    pub const META: usize = 2;
    /// Index of the upload id inside the META cell.
    pub const META_ID: usize = 0;
}

/// `<td>` positions in a data row of the show-jobs table.
pub struct JobTableColumns;
impl JobTableColumns {
    pub const ID: usize = 0;
    pub const STATUS: usize = 1;
    pub const AGENT: usize = 2;
    // 3..=6: item count, date range, rate, ETA (not modelled)
    pub const ACTION: usize = 7;
    pub const MIN_CELLS: usize = 8;
}

/// `aaData` row positions in the single-job status table.
pub struct JobDetailRows;
impl JobDetailRows {
    pub const ID: usize = 0;
    pub const REPORT_ID: usize = 1;
    pub const AGENT: usize = 3;
    pub const STATUS: usize = 11;
    /// Every row keeps its value in this column.
    pub const VALUE_COL: &'static str = "1";
}

// Upload listing
pub const SPDX_XML_OPTION_TITLE: &str = "Generate SPDX report";
pub const SPDX_TV_OPTION_TITLE: &str = "Generate SPDX report in tag:value format";

// Forms
pub const UPLOAD_FORM_TOKEN_FIELD: &str = "uploadformbuild";
pub const FOLDER_SELECT_NAME: &str = "folder";

// href markers
pub const UPLOAD_MARKER: &str = "upload=";
pub const REPORT_MARKER: &str = "report=";

// JSON envelopes
pub const SHOW_JOBS_KEY: &str = "showJobsData";
pub const TABLE_DATA_KEY: &str = "aaData";

// Jobs
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_NOT_STARTED: &str = "Not started";
pub const STATUS_SEPARATOR: &str = "<br>";
pub const SPDX_TV_AGENT: &str = "spdx2tv";
pub const SPDX_XML_AGENT: &str = "spdx2";
pub const REPORTER_AGENTS: [&str; 2] = [SPDX_TV_AGENT, SPDX_XML_AGENT];

/// Returned by `parse_new_upload_id` when no upload link is present.
pub const UPLOAD_ID_NOT_FOUND: i64 = -1;

/// Placeholder id for records whose id could not be read.
pub const UNSET_ID: i64 = -1;
