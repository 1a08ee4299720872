// src/specs/uploads.rs
//! Spec for the folder-browse listing.
//!
//! The browse endpoint answers with DataTables JSON; every `aaData` entry is a
//! line item (an array of cells):
//! - cell 0: display markup: `<b>` name, a `<select>` of report options
//! - cell 2: metadata array, upload id first (already a JSON number)
//!
//! Other cells are ignored.

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::consts::{
    SPDX_TV_OPTION_TITLE, SPDX_XML_OPTION_TITLE, TABLE_DATA_KEY, UNSET_ID, UploadItem,
};
use crate::core::html::Markup;
use crate::error::{Result, ScrapeError, json_object};
use crate::records::Upload;

/// One line item → `Upload`.
///
/// Without a `<b>` name tag the record comes back at its defaults (empty name,
/// id `-1`); that's the only hard requirement of the row. Report URLs are
/// independently optional.
pub fn parse_upload_line_item(item: &[Value]) -> Upload {
    let mut upload = Upload::default();

    let Some(markup) = item.get(UploadItem::MARKUP).and_then(Value::as_str) else {
        debug!("line item has no markup cell");
        return upload;
    };
    let doc = Markup::parse(markup);

    let Some(bold) = doc.first("b") else {
        debug!("line item has no <b> name tag");
        return upload;
    };
    upload.name = bold.text().trim().to_string();

    upload.spdx_xml_url = report_option(&doc, SPDX_XML_OPTION_TITLE);
    upload.spdx_tv_url = report_option(&doc, SPDX_TV_OPTION_TITLE);

    upload.id = item
        .get(UploadItem::META)
        .and_then(|meta| meta.get(UploadItem::META_ID))
        .and_then(Value::as_i64)
        .unwrap_or(UNSET_ID);

    upload
}

/// Every usable line item, in input order.
pub fn parse_all_uploads(rows: &[Value]) -> Vec<Upload> {
    let uploads: Vec<Upload> = rows
        .iter()
        .enumerate()
        .filter_map(|(n, row)| {
            let Some(cells) = row.as_array() else {
                debug!(row = n, "line item is not an array; skipping");
                return None;
            };
            let upload = parse_upload_line_item(cells);
            if upload.is_complete() {
                Some(upload)
            } else {
                debug!(row = n, "line item has no name or id; skipping");
                None
            }
        })
        .collect();
    trace!(rows = rows.len(), uploads = uploads.len(), "parsed folder listing rows");
    uploads
}

/// Whole browse response → uploads stamped with the folder they were listed in.
///
/// A body without `aaData` is an empty folder.
pub fn parse_folder_listing(body: &str, folder_id: Option<i64>) -> Result<Vec<Upload>> {
    let envelope = json_object(body)?;
    let Some(rows) = envelope.get(TABLE_DATA_KEY) else {
        return Ok(Vec::new());
    };
    let rows = rows.as_array().ok_or(ScrapeError::WrongType {
        key: TABLE_DATA_KEY,
        expected: "an array",
    })?;

    let mut uploads = parse_all_uploads(rows);
    if let Some(folder) = folder_id {
        uploads = uploads.into_iter().map(|u| u.in_folder(folder)).collect();
    }
    Ok(uploads)
}

// `value` of the <option> carrying the given title, byte for byte.
fn report_option(doc: &Markup, title: &str) -> Option<String> {
    doc.first_where("option", "title", title)
        .and_then(|opt| opt.attr("value"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CELL0: &str = r#"
        <b>openssl-1.1.1.tar.gz</b><br>
        <select name="tools">
          <option value="">-- select action --</option>
          <option title="Generate SPDX report" value="?mod=ui_spdx2&upload=31">SPDX2</option>
          <option title="Generate SPDX report in tag:value format" value="?mod=ui_spdx2&outputFormat=spdx2tv&upload=31">SPDX2 tag:value</option>
        </select>"#;

    #[test]
    fn reads_name_urls_and_id() {
        let item = vec![json!(CELL0), json!(""), json!([31, 7, "x"])];
        let u = parse_upload_line_item(&item);
        assert_eq!(u.name, "openssl-1.1.1.tar.gz");
        assert_eq!(u.id, 31);
        assert_eq!(u.spdx_xml_url.as_deref(), Some("?mod=ui_spdx2&upload=31"));
        assert_eq!(
            u.spdx_tv_url.as_deref(),
            Some("?mod=ui_spdx2&outputFormat=spdx2tv&upload=31")
        );
        assert_eq!(u.folder_id, None);
    }

    #[test]
    fn report_options_are_independent() {
        let cell = r#"<b>busy.zip</b><select><option title="Generate SPDX report" value="x.php">x</option></select>"#;
        let u = parse_upload_line_item(&[json!(cell), json!(null), json!([5])]);
        assert_eq!(u.spdx_xml_url.as_deref(), Some("x.php"));
        assert_eq!(u.spdx_tv_url, None);

        let u = parse_upload_line_item(&[json!("<b>still-scanning.zip</b>"), json!(null), json!([6])]);
        assert!(u.is_complete());
        assert_eq!(u.spdx_xml_url, None);
        assert_eq!(u.spdx_tv_url, None);
    }

    #[test]
    fn no_bold_tag_leaves_defaults() {
        let u = parse_upload_line_item(&[json!("<i>nameless</i>"), json!(null), json!([8])]);
        assert_eq!(u, Upload::default());
    }

    #[test]
    fn id_is_not_reparsed_from_strings() {
        let u = parse_upload_line_item(&[json!("<b>a</b>"), json!(null), json!(["8"])]);
        assert_eq!(u.id, UNSET_ID);
        assert!(!u.is_complete());
    }

    #[test]
    fn listing_stamps_folder() {
        let body = json!({ "aaData": [[CELL0, "", [31]], ["<b>b.tgz</b>", "", [32]]] }).to_string();
        let uploads = parse_folder_listing(&body, Some(3)).unwrap();
        assert_eq!(uploads.len(), 2);
        assert!(uploads.iter().all(|u| u.folder_id == Some(3)));

        assert!(parse_folder_listing("{}", Some(3)).unwrap().is_empty());
        assert!(parse_folder_listing("[]", None).is_err());
    }
}
