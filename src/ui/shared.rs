//! Bridge between the modal router and Leptos reactivity
//!
//! The router itself is plain mutable state behind injected ports.
//! Components drive it through this shared handle; after every
//! operation the resulting state is mirrored into a signal the view
//! reacts to.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::browser::{BrowserClipboard, BrowserHistory, DomFallbackCopy};
use crate::router::{
  copy_with_fallback, ContributorSource, ModalRouter, ModalState, QueryParamCodec,
};
use crate::types::Contributor;

/// Contributor source reading the signal untracked: the router asks
/// for snapshots on its own schedule, reactivity is wired in `App`.
#[derive(Clone)]
pub struct SignalSource(Signal<Vec<Contributor>>);

impl ContributorSource for SignalSource {
  fn snapshot(&self) -> Vec<Contributor> {
    self.0.get_untracked()
  }
}

type AppRouter =
  ModalRouter<QueryParamCodec, BrowserHistory, BrowserClipboard, DomFallbackCopy, SignalSource>;

#[derive(Clone)]
pub struct SharedRouter {
  inner: Rc<RefCell<AppRouter>>,
  modal: RwSignal<ModalState>,
}

impl SharedRouter {
  pub fn new(contributors: Signal<Vec<Contributor>>) -> Self {
    let router = ModalRouter::new(
      QueryParamCodec,
      BrowserHistory,
      BrowserClipboard,
      DomFallbackCopy,
      SignalSource(contributors),
    );
    Self {
      inner: Rc::new(RefCell::new(router)),
      modal: create_rw_signal(ModalState::Closed),
    }
  }

  /// Reactive view of the modal state.
  pub fn modal(&self) -> RwSignal<ModalState> {
    self.modal
  }

  pub fn open(&self, contributor: &Contributor) {
    self.inner.borrow_mut().open(contributor);
    self.refresh();
  }

  pub fn close(&self) {
    self.inner.borrow_mut().close();
    self.refresh();
  }

  pub fn resync(&self) {
    self.inner.borrow_mut().resync();
    self.refresh();
  }

  pub fn handle_navigation(&self) {
    self.inner.borrow_mut().handle_navigation();
    self.refresh();
  }

  /// Copy a deep link for `contributor` to the clipboard.
  /// Fire-and-forget: failures degrade to the selection-copy fallback
  /// inside the copy path. The router borrow is released before the
  /// write is awaited so navigation events arriving mid-copy stay
  /// safe.
  pub fn copy_profile_link(&self, contributor: &Contributor) {
    let link = self.inner.borrow().profile_link(contributor);
    spawn_local(async move {
      copy_with_fallback(&BrowserClipboard, &DomFallbackCopy, link.as_str()).await;
    });
  }

  fn refresh(&self) {
    self.modal.set(self.inner.borrow().state().clone());
  }
}
