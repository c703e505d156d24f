use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identificador de documento.
///
/// En una misma colección conviven ids generados por el sistema (UUID v4)
/// con ids elegidos por el llamador (texto libre). `FromStr` canonicaliza:
/// un texto con forma de UUID se interpreta como `Generated`, de modo que
/// el mismo valor compara igual sin importar su origen.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocId {
  Generated(Uuid),
  Custom(String),
}

impl DocId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    DocId::Generated(Uuid::new_v4())
  }

  /// Construye un `DocId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    DocId::Generated(u)
  }

  pub fn is_generated(&self) -> bool {
    matches!(self, DocId::Generated(_))
  }
}

impl Default for DocId {
  fn default() -> Self {
    DocId::new()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDocIdError;

impl fmt::Display for ParseDocIdError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("empty document id")
  }
}

impl std::error::Error for ParseDocIdError {}

impl FromStr for DocId {
  type Err = ParseDocIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.is_empty() {
      return Err(ParseDocIdError);
    }
    match Uuid::parse_str(s) {
      Ok(u) => Ok(DocId::Generated(u)),
      Err(_) => Ok(DocId::Custom(s.to_string())),
    }
  }
}

impl fmt::Display for DocId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DocId::Generated(u) => u.fmt(f),
      DocId::Custom(s) => f.write_str(s),
    }
  }
}

impl From<Uuid> for DocId {
  fn from(u: Uuid) -> Self {
    DocId::Generated(u)
  }
}

impl Serialize for DocId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for DocId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(D::Error::custom)
  }
}
