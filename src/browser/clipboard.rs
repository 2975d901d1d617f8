//! Clipboard port implementations
//!
//! The primary path is the async Clipboard API. The fallback drives a
//! transient off-screen `<textarea>` through the legacy execCommand
//! copy; the element is created and removed within the same call on
//! every path.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlTextAreaElement;

use crate::router::{Clipboard, ClipboardError, FallbackCopy};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
  async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
      .await
      .map(|_| ())
      .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
  }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DomFallbackCopy;

impl FallbackCopy for DomFallbackCopy {
  fn copy(&self, text: &str) -> Result<(), ClipboardError> {
    let document = web_sys::window()
      .and_then(|window| window.document())
      .ok_or(ClipboardError::Unavailable)?;
    let body = document.body().ok_or(ClipboardError::Unavailable)?;
    let textarea: HtmlTextAreaElement = document
      .create_element("textarea")
      .map_err(|_| ClipboardError::Unavailable)?
      .unchecked_into();
    textarea.set_value(text);
    body
      .append_child(&textarea)
      .map_err(|_| ClipboardError::Unavailable)?;
    textarea.select();
    // No early return between append and remove.
    let copied = document.exec_command("copy").unwrap_or(false);
    let _ = body.remove_child(&textarea);
    if copied {
      Ok(())
    } else {
      Err(ClipboardError::Rejected("execCommand copy refused".into()))
    }
  }
}
