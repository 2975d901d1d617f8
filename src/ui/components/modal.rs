//! Contributor profile modal
//!
//! Driven entirely by the router's modal state. Clicking the overlay
//! or the close button routes through the router so the URL token is
//! cleared along with the state; clicks inside the dialog do not
//! propagate.

use leptos::*;

use crate::ui::shared::SharedRouter;
use crate::ui::state::{AppState, ToastLevel};

#[component]
pub fn ContributorModal() -> impl IntoView {
  let router = use_context::<SharedRouter>().expect("SharedRouter not found");
  let state = use_context::<AppState>().expect("AppState not found");
  let modal = router.modal();

  view! {
    {move || {
      let router = router.clone();
      let state = state.clone();
      modal.get().current().cloned().map(|contributor| {
        let display_name = contributor
          .name
          .clone()
          .unwrap_or_else(|| contributor.login.clone());

        let overlay_close = {
          let router = router.clone();
          move |_| router.close()
        };
        let button_close = {
          let router = router.clone();
          move |_| router.close()
        };
        let copy_link = {
          let contributor = contributor.clone();
          move |_| {
            router.copy_profile_link(&contributor);
            state.show_toast("Profile link copied", ToastLevel::Success);
          }
        };

        view! {
          <div class="modal-overlay active" on:click=overlay_close>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
              <div class="modal-header">
                <h3>{display_name.clone()}</h3>
                <button class="modal-close" on:click=button_close>"×"</button>
              </div>
              <div class="modal-body">
                <img class="avatar-large" src=contributor.avatar_url.clone() alt=display_name.clone()/>
                <p class="login">{format!("@{}", contributor.login)}</p>
                {contributor.company.clone().map(|company| view! { <p class="company">{company}</p> })}
                <p class="contributions">{contributor.contributions} " contributions"</p>
                <a class="profile-url" href=contributor.html_url.clone() target="_blank" rel="noopener">
                  "View on GitHub"
                </a>
              </div>
              <div class="modal-footer">
                <button class="btn btn-primary" on:click=copy_link>"Copy profile link"</button>
              </div>
            </div>
          </div>
        }
      })
    }}
  }
}
