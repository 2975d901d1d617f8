//! URL-synchronized modal router
//!
//! Keeps the contributor profile modal in sync with a deep-link token
//! in the address bar, in both directions: opening a profile pushes a
//! history entry carrying the login, and back/forward navigation
//! re-derives the modal state from the URL. Loading a deep link fresh
//! reproduces the open modal once the collection resolves the token.

mod codec;
mod ports;

pub use codec::{HashFragmentCodec, QueryParamCodec, TokenCodec};
pub use ports::{Clipboard, ClipboardError, ContributorSource, FallbackCopy, History};

use url::Url;

use crate::types::Contributor;

/// Modal state. `Open` always carries the contributor being shown, so
/// an open modal without a selection cannot be represented.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
  #[default]
  Closed,
  Open(Contributor),
}

impl ModalState {
  pub fn is_open(&self) -> bool {
    matches!(self, ModalState::Open(_))
  }

  pub fn current(&self) -> Option<&Contributor> {
    match self {
      ModalState::Open(contributor) => Some(contributor),
      ModalState::Closed => None,
    }
  }
}

/// The controller. Generic over the token codec and the four browser
/// ports; see [`crate::browser`] for the web-sys implementations.
pub struct ModalRouter<C, H, K, F, S> {
  codec: C,
  history: H,
  clipboard: K,
  fallback: F,
  source: S,
  state: ModalState,
}

impl<C, H, K, F, S> ModalRouter<C, H, K, F, S>
where
  C: TokenCodec,
  H: History,
  K: Clipboard,
  F: FallbackCopy,
  S: ContributorSource,
{
  pub fn new(codec: C, history: H, clipboard: K, fallback: F, source: S) -> Self {
    Self {
      codec,
      history,
      clipboard,
      fallback,
      source,
      state: ModalState::Closed,
    }
  }

  pub fn state(&self) -> &ModalState {
    &self.state
  }

  /// Open the profile modal for `item` and record its login in the
  /// URL. An item without a login is a caller bug: logged and ignored,
  /// state untouched.
  pub fn open(&mut self, item: &Contributor) {
    if item.login.trim().is_empty() {
      tracing::warn!("open called with an item that has no login; ignoring");
      return;
    }
    self.state = ModalState::Open(item.clone());
    self.navigate_to(&item.login);
  }

  /// Close the modal and drop the token from the URL. The URL change
  /// replaces the current history entry so closing never pollutes
  /// back-navigation.
  pub fn close(&mut self) {
    self.state = ModalState::Closed;
    let mut url = self.history.current_url();
    self.codec.clear(&mut url);
    self.history.replace(&url);
  }

  /// Record `login` as the URL token. Pushes a new history entry only
  /// when the token actually changes, so repeated calls with the same
  /// login cause at most one history mutation.
  pub fn navigate_to(&self, login: &str) {
    let mut url = self.history.current_url();
    if self.codec.extract(&url).as_deref() == Some(login) {
      return;
    }
    self.codec.apply(&mut url, login);
    self.history.push(&url);
  }

  /// Absolute deep link for `contributor`, built from the current URL
  /// and independent of the modal state.
  pub fn profile_link(&self, contributor: &Contributor) -> Url {
    let mut url = self.history.current_url();
    self.codec.apply(&mut url, &contributor.login);
    url
  }

  /// Copy a deep link for `contributor` to the clipboard, degrading to
  /// the fallback copy when the clipboard is unavailable. Failures are
  /// logged, never raised.
  pub async fn copy_profile_link(&self, contributor: &Contributor) {
    let link = self.profile_link(contributor);
    copy_with_fallback(&self.clipboard, &self.fallback, link.as_str()).await;
  }

  /// Resolve the current URL token against the collection and open the
  /// matching contributor, if any. An unresolved token is not an
  /// error: the collection may simply not be loaded yet, and this
  /// resolution is re-run from scratch on every collection change.
  pub fn sync_from_url(&mut self) {
    let url = self.history.current_url();
    let Some(login) = self.codec.extract(&url) else {
      return;
    };
    if let Some(found) = self.find(&login) {
      tracing::debug!(login = %found.login, "deep-link token resolved");
      self.state = ModalState::Open(found);
    }
  }

  /// Re-run URL resolution after a collection change, but only while
  /// nothing is selected yet.
  pub fn resync(&mut self) {
    if !self.state.is_open() {
      self.sync_from_url();
    }
  }

  /// Reconcile state after back/forward navigation. Only state is
  /// touched here: the URL already reflects the traversal, so the
  /// router must not write it back.
  pub fn handle_navigation(&mut self) {
    let url = self.history.current_url();
    match self.codec.extract(&url) {
      Some(login) => match self.find(&login) {
        Some(found) => self.state = ModalState::Open(found),
        None => {
          // The URL no longer names anything we know, so it no longer
          // reflects whatever profile was open. A later collection
          // change re-resolves the token via resync().
          if self.state.is_open() {
            tracing::debug!(%login, "token unresolved after navigation; closing");
            self.state = ModalState::Closed;
          }
        }
      },
      None => {
        if self.state.is_open() {
          self.state = ModalState::Closed;
        }
      }
    }
  }

  fn find(&self, login: &str) -> Option<Contributor> {
    self
      .source
      .snapshot()
      .into_iter()
      .find(|contributor| contributor.login == login)
  }
}

/// Write `text` to the clipboard, falling back to a selection copy
/// when the write fails. The fallback's own failure is absorbed after
/// a diagnostic.
pub async fn copy_with_fallback(
  clipboard: &impl Clipboard,
  fallback: &impl FallbackCopy,
  text: &str,
) {
  if let Err(err) = clipboard.write_text(text).await {
    tracing::info!(%err, "clipboard write failed; using selection-copy fallback");
    if let Err(err) = fallback.copy(text) {
      tracing::warn!(%err, "fallback copy failed");
    }
  }
}
