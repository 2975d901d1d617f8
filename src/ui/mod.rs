//! Leptos CSR front-end for the contributor wall

mod components;
mod shared;
mod state;

pub use components::App;
pub use shared::SharedRouter;
pub use state::{AppState, Toast, ToastLevel};
