//! Background form submission.

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use crate::config::{BACKGROUND_REQUEST_HEADER, BACKGROUND_REQUEST_VALUE};
use crate::error::ReloadError;

/// POST the form's current field values to `path`, tagged as a background
/// request, and return the raw response body.
///
/// The status code is deliberately not checked: an error page without the
/// results-container marker falls through the swap untouched, which matches
/// treating "missing expected structure" as nothing-to-do.
pub async fn post_form(path: &str, form: &HtmlFormElement) -> Result<String, ReloadError> {
    let data = FormData::new_with_form(form)
        .map_err(|err| ReloadError::FormSerialization(format!("{:?}", err)))?;

    let response = Request::post(path)
        .header(BACKGROUND_REQUEST_HEADER, BACKGROUND_REQUEST_VALUE)
        .body(data)?
        .send()
        .await?;

    Ok(response.text().await?)
}
