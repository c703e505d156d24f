pub mod artista;
pub mod cliente;
pub mod form;
pub mod ids;
pub mod producto;
pub mod venta;

pub use artista::Artista;
pub use cliente::Cliente;
pub use form::Form;
pub use ids::DocId;
pub use producto::Producto;
pub use venta::Venta;

use crate::errors::CoreError;

/// Id para un alta: el personalizado si se suministró, uno generado si no.
pub(crate) fn assigned_id(custom_id: Option<&str>) -> Result<DocId, CoreError> {
  match custom_id {
    Some(s) => {
      s.parse().map_err(|_| CoreError::Validation("el id personalizado está vacío".to_string()))
    }
    None => Ok(DocId::new()),
  }
}
