// src/specs/forms.rs
//! Small lookups on the upload pages: the form build token, folder ids from
//! the folder picker, and the id of a freshly created upload.

use tracing::{debug, trace, warn};

use crate::config::consts::{
    FOLDER_SELECT_NAME, UPLOAD_FORM_TOKEN_FIELD, UPLOAD_ID_NOT_FOUND, UPLOAD_MARKER,
};
use crate::core::html::Markup;
use crate::core::sanitize::int_after_marker;

/// `value` of `<input name="uploadformbuild">`.
///
/// Never fails: a missing input or value is logged and comes back as `None`.
pub fn parse_upload_form_token(html: &str) -> Option<String> {
    let doc = Markup::parse(html);
    let Some(input) = doc.first_where("input", "name", UPLOAD_FORM_TOKEN_FIELD) else {
        warn!("couldn't extract {UPLOAD_FORM_TOKEN_FIELD} token: input not found");
        return None;
    };
    match input.attr("value") {
        Some(token) => Some(token.to_string()),
        None => {
            warn!("couldn't extract {UPLOAD_FORM_TOKEN_FIELD} token: input has no value");
            None
        }
    }
}

/// Id (the option `value`) of the folder shown as `folder_name` in any
/// `<select name="folder">`.
///
/// Matching is exact and case-sensitive after trimming both sides. The first
/// match across all selects wins, so duplicate folder names resolve to
/// whichever the page lists first.
pub fn parse_folder_id(html: &str, folder_name: &str) -> Option<String> {
    let wanted = folder_name.trim();
    let doc = Markup::parse(html);
    let found = doc
        .all("select")
        .filter(|select| select.attr("name") == Some(FOLDER_SELECT_NAME))
        .flat_map(|select| select.all("option"))
        .find(|option| option.text().trim() == wanted)?;
    let id = found.attr("value").map(str::to_string);
    trace!(folder = wanted, ?id, "resolved folder");
    id
}

/// Upload number from the first link carrying `upload=`, in document order.
///
/// That first link decides: if its suffix isn't a number, there is no id.
pub fn find_new_upload_id(html: &str) -> Option<i64> {
    let doc = Markup::parse(html);
    let href = doc
        .all("a")
        .filter_map(|a| a.attr("href"))
        .find(|href| href.contains(UPLOAD_MARKER))?;
    let id = int_after_marker(href, UPLOAD_MARKER);
    if id.is_none() {
        debug!(href, "upload link without a number");
    }
    id
}

/// Like [`find_new_upload_id`], with `-1` standing in for "not found".
pub fn parse_new_upload_id(html: &str) -> i64 {
    find_new_upload_id(html).unwrap_or(UPLOAD_ID_NOT_FOUND)
}
