use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacidad que habilita una operación sobre la tienda.
///
/// Cada punto de entrada exige exactamente una capacidad; los roles son
/// conjuntos de capacidades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
  Read,
  Create,
  Update,
  Delete,
}

impl Capability {
  pub const ALL: [Capability; 4] =
    [Capability::Read, Capability::Create, Capability::Update, Capability::Delete];
}

impl fmt::Display for Capability {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Capability::Read => "read",
      Capability::Create => "create",
      Capability::Update => "update",
      Capability::Delete => "delete",
    };
    f.write_str(s)
  }
}
