// Core modal-router logic (native + WASM)
pub mod router;
pub mod types;

// Browser adapters and Leptos UI (only compiled with the csr feature)
#[cfg(feature = "csr")]
pub mod browser;
#[cfg(feature = "csr")]
pub mod ui;
