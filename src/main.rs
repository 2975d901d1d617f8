//! contribwall - client-side rendered contributor wall (WASM)

use contribwall::ui::App;
use leptos::*;

fn main() {
  console_error_panic_hook::set_once();
  mount_to_body(|| view! { <App/> });
}
