//! Browser collaborators behind traits
//!
//! The router only ever touches the address bar, the clipboard and the
//! contributor collection through these ports, so the whole control
//! flow runs (and is tested) without a browser.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::types::Contributor;

#[derive(Debug, Error)]
pub enum ClipboardError {
  #[error("clipboard API unavailable")]
  Unavailable,
  #[error("clipboard write rejected: {0}")]
  Rejected(String),
}

/// Read and mutate the address bar.
pub trait History {
  fn current_url(&self) -> Url;

  /// Record `url` as a new history entry.
  fn push(&self, url: &Url);

  /// Overwrite the current history entry without adding one.
  fn replace(&self, url: &Url);
}

/// Asynchronous clipboard write. May be unavailable or denied.
#[async_trait(?Send)]
pub trait Clipboard {
  async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Synchronous best-effort copy used when the clipboard write fails,
/// e.g. a select-and-copy on a transient scratch element.
pub trait FallbackCopy {
  fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Supplies the current contributor collection. The router asks for a
/// fresh snapshot on every resolution: the collection may only be
/// populated after the router has started.
pub trait ContributorSource {
  fn snapshot(&self) -> Vec<Contributor>;
}

impl ContributorSource for Vec<Contributor> {
  fn snapshot(&self) -> Vec<Contributor> {
    self.clone()
  }
}
