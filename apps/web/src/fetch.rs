use portfolio_core::loader::{check_status, parse_projects};
use portfolio_core::{Error, Project, Result};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

async fn fetch_response(url: &str) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;
    check_status(response.status(), &response.status_text())?;
    Ok(response)
}

/// Projects are parsed from the body text so extra fields keep their file order
/// and integer years keep their integer text.
pub async fn fetch_projects(url: &str) -> Result<Vec<Project>> {
    let response = fetch_response(url).await?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::Decode(format!("{url} did not return text")))?;
    parse_projects(&body)
}

pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = fetch_response(url).await?;
    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|error| Error::Decode(error.to_string()))
}

fn js_error(value: JsValue) -> Error {
    Error::Network(format!("{value:?}"))
}
