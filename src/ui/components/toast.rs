//! Toast notification component

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::ui::state::{AppState, ToastLevel};

#[component]
pub fn ToastContainer() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let toasts = state.toasts;

  view! {
    <div class="toast-container">
      <For
        each=move || toasts.get()
        key=|toast| toast.id
        children=move |toast| {
          let state = use_context::<AppState>().expect("AppState not found");
          let id = toast.id;
          let level_class = match toast.level {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
          };

          // Auto-remove toast after 4 seconds
          let state_timeout = state.clone();
          let timeout = Timeout::new(4000, move || {
            state_timeout.remove_toast(id);
          });
          timeout.forget(); // Don't cancel on drop

          view! {
            <div class=format!("toast show {}", level_class)>
              <span class="toast-message">{toast.message.clone()}</span>
              <button class="toast-close" on:click=move |_| state.remove_toast(id)>"×"</button>
            </div>
          }
        }
      />
    </div>
  }
}
