use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Absolute URL for an asset, honoring `window.__BASE_URL` when the host
/// page serves the app from a sub-path.
pub fn asset_url(path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = web_sys::window()
        .and_then(|w| {
            js_sys::Reflect::get(&w, &JsValue::from_str("__BASE_URL"))
                .ok()?
                .as_string()
        })
        .unwrap_or_else(|| "/".to_string());
    join_base(&base, p)
}

fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Fetches the first URL that answers with a successful text body.
pub async fn fetch_text_with_fallbacks(window: &Window, urls: &[&str]) -> Option<String> {
    for url in urls {
        let Ok(resp_value) =
            wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(url)).await
        else {
            continue;
        };
        let Ok(resp) = resp_value.dyn_into::<web_sys::Response>() else {
            continue;
        };
        if !resp.ok() {
            tracing::debug!(url, status = resp.status(), "fetch fallback");
            continue;
        }
        if let Ok(text_promise) = resp.text()
            && let Ok(text_js) = wasm_bindgen_futures::JsFuture::from(text_promise).await
            && let Some(s) = text_js.as_string()
        {
            return Some(s);
        }
    }
    None
}

/// Value of `key` in a `?a=b&c=d` query string, percent-decoded.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let mut it = pair.splitn(2, '=');
            Some((it.next()?, it.next().unwrap_or("")))
        })
        .find(|(k, _)| *k == key)
        .map(|(_, v)| url_decode(v))
}

fn url_decode(s: &str) -> String {
    percent_encoding::percent_decode_str(s)
        .decode_utf8()
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| s.to_string())
}
