use portfolio_core::nav::Location;
use portfolio_core::ColorScheme;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub fn current_location() -> Location {
    let Some(window) = web_sys::window() else {
        return Location::new("localhost", "/");
    };
    let location = window.location();
    let host = location.host().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    Location::new(&host, &pathname)
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Sets `color-scheme` on the root element.
pub fn apply_color_scheme(scheme: ColorScheme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let Some(root) = root else {
        log::warn!("no document element to apply color-scheme to");
        return;
    };
    if let Err(error) = root.style().set_property("color-scheme", scheme.as_str()) {
        log::warn!("failed to set color-scheme: {error:?}");
    }
}

/// Follows `href` in this tab, or in a new one when `new_tab` is set.
pub fn open(href: &str, new_tab: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = if new_tab {
        window
            .open_with_url_and_target(href, "_blank")
            .map(|_| ())
    } else {
        window.location().set_href(href)
    };
    if let Err(error) = result {
        log::error!("failed to open {href}: {error:?}");
    }
}
