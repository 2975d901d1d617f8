//! Global UI state backed by Leptos signals

use leptos::*;

use crate::types::Contributor;

/// Toast notification
#[derive(Clone, Debug)]
pub struct Toast {
  pub id: u32,
  pub message: String,
  pub level: ToastLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
  Info,
  Success,
}

/// Application state with reactive signals
#[derive(Clone)]
pub struct AppState {
  pub contributors: RwSignal<Vec<Contributor>>,
  pub toasts: RwSignal<Vec<Toast>>,
  pub toast_counter: RwSignal<u32>,
}

impl AppState {
  pub fn new(contributors: Vec<Contributor>) -> Self {
    Self {
      contributors: create_rw_signal(contributors),
      toasts: create_rw_signal(Vec::new()),
      toast_counter: create_rw_signal(0),
    }
  }

  pub fn show_toast(&self, message: &str, level: ToastLevel) {
    let id = self.toast_counter.get_untracked() + 1;
    self.toast_counter.set(id);
    self.toasts.update(|toasts| {
      toasts.push(Toast {
        id,
        message: message.to_string(),
        level,
      });
    });
  }

  pub fn remove_toast(&self, id: u32) {
    self.toasts.update(|toasts| {
      toasts.retain(|t| t.id != id);
    });
  }
}
