//! UI components

use leptos::*;

use crate::types::Contributor;
use crate::ui::shared::SharedRouter;
use crate::ui::state::AppState;

mod grid;
mod modal;
mod toast;

pub use grid::ContributorGrid;
pub use modal::ContributorModal;
pub use toast::ToastContainer;

/// Contributor roster compiled into the bundle; the page has no
/// backend to fetch from.
fn load_contributors() -> Vec<Contributor> {
  serde_json::from_str(include_str!("../../../assets/contributors.json")).unwrap_or_default()
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
  let state = AppState::new(load_contributors());
  provide_context(state.clone());

  let router = SharedRouter::new(state.contributors.into());
  provide_context(router.clone());

  // Resolve a deep link once mounted, and again whenever the
  // collection changes while nothing is selected yet.
  let contributors = state.contributors;
  let router_sync = router.clone();
  create_effect(move |_| {
    contributors.with(|_| ());
    router_sync.resync();
  });

  // Back/forward traversal re-derives the modal state from the URL.
  // The listener is dropped with the component's reactive owner.
  let router_nav = router.clone();
  window_event_listener(ev::popstate, move |_| {
    router_nav.handle_navigation();
  });

  view! {
    <div class="app-container">
      <header class="site-header">
        <h1>"Top Contributors"</h1>
        <p class="site-tagline">"The people behind the project"</p>
      </header>
      <main class="content">
        <ContributorGrid/>
      </main>
      <ContributorModal/>
      <ToastContainer/>
    </div>
  }
}
