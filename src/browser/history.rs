//! Address-bar access via the History API

use url::Url;
use wasm_bindgen::JsValue;

use crate::router::History;

/// `window.location` / `window.history` backed implementation. State
/// objects are always null; the URL itself is the state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
  fn current_url(&self) -> Url {
    let href = web_sys::window()
      .and_then(|window| window.location().href().ok())
      .unwrap_or_else(|| "about:blank".to_string());
    Url::parse(&href).unwrap_or_else(|_| Url::parse("about:blank").unwrap())
  }

  fn push(&self, url: &Url) {
    if let Some(window) = web_sys::window() {
      if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url.as_str()));
      }
    }
  }

  fn replace(&self, url: &Url) {
    if let Some(window) = web_sys::window() {
      if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()));
      }
    }
  }
}
