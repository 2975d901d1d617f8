//! Contributor grid and cards

use leptos::*;

use crate::types::Contributor;
use crate::ui::shared::SharedRouter;
use crate::ui::state::AppState;

#[component]
pub fn ContributorGrid() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let contributors = state.contributors;

  view! {
    <section class="contributor-grid">
      <For
        each=move || contributors.get()
        key=|contributor| contributor.login.clone()
        children=move |contributor| {
          view! { <ContributorCard contributor/> }
        }
      />
    </section>
  }
}

#[component]
fn ContributorCard(contributor: Contributor) -> impl IntoView {
  let router = use_context::<SharedRouter>().expect("SharedRouter not found");
  let display_name = contributor
    .name
    .clone()
    .unwrap_or_else(|| contributor.login.clone());
  let open_target = contributor.clone();

  view! {
    <article class="contributor-card" on:click=move |_| router.open(&open_target)>
      <img class="avatar" src=contributor.avatar_url.clone() alt=display_name.clone()/>
      <h3>{display_name.clone()}</h3>
      <span class="login">{format!("@{}", contributor.login)}</span>
      <span class="contributions">{contributor.contributions} " contributions"</span>
    </article>
  }
}
