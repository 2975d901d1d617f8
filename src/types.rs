//! Contributor data model

use serde::{Deserialize, Serialize};

/// A project contributor as shown on the wall.
///
/// `login` is the identity used for deep links; everything else is
/// display data. The router never mutates contributors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
  pub login: String,
  #[serde(default)]
  pub name: Option<String>,
  pub avatar_url: String,
  pub html_url: String,
  #[serde(default)]
  pub contributions: u32,
  #[serde(default)]
  pub company: Option<String>,
}
