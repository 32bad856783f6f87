//! Fetch client for the upload and delete endpoints.

use crate::browser::{describe, encode_path_segment, js_error, window};
use boxview_core::{DeleteResponse, ViewState, ViewerConfig, ViewerError, CAPTION_FIELD, FILE_FIELD};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestInit, Response};

/// POST a pasted image and return the view state the server answers with.
pub async fn upload_image(config: &ViewerConfig, file: &File) -> Result<ViewState, ViewerError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_error)?;
    form.append_with_str(CAPTION_FIELD, &config.default_caption)
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);

    let request = Request::new_with_str_and_init(&config.upload_endpoint, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    log::debug!("Uploading {} ({} bytes)", file.name(), file.size());
    let response = send(&request).await?;
    read_json(&response).await
}

/// POST a delete request for `filename`.
pub async fn delete_image(config: &ViewerConfig, filename: &str) -> Result<DeleteResponse, ViewerError> {
    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);

    let url = config.delete_url(&encode_path_segment(filename));
    let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;

    log::debug!("Deleting {}", filename);
    let response = send(&request).await?;
    read_json(&response).await
}

/// Issue the request. Rejected fetches and non-2xx statuses are transport errors.
async fn send(request: &Request) -> Result<Response, ViewerError> {
    let value = JsFuture::from(window()?.fetch_with_request(request))
        .await
        .map_err(|e| ViewerError::Transport(describe(&e)))?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(ViewerError::Transport(format!(
            "{} {} from {}",
            response.status(),
            response.status_text(),
            response.url()
        )));
    }

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ViewerError> {
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(|e| ViewerError::Transport(describe(&e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| ViewerError::Decode("response body is not text".to_string()))?;

    Ok(serde_json::from_str(&body)?)
}
