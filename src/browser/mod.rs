//! web-sys implementations of the router ports

mod clipboard;
mod history;

pub use clipboard::{BrowserClipboard, DomFallbackCopy};
pub use history::BrowserHistory;
