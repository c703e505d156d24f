use crate::domain::ids::DocId;
use crate::domain::{Artista, Cliente, Producto, Venta};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("storage error: {0}")]
  Storage(String),
}

/// Acceso tipado a las cuatro colecciones de la tienda.
///
/// Los listados devuelven cada colección en su orden fijo: artistas y
/// clientes por `nombre` ascendente, inventario por `album` ascendente,
/// ventas por `fecha_venta` descendente. `replace_*` y `delete_*` fallan
/// con [`RepoError::NotFound`] si la clave no existe; `insert_*` falla si
/// la clave ya existe. La exclusión mutua queda en el motor de
/// almacenamiento subyacente.
pub trait TiendaRepository {
  // --- Artistas ---
  fn insert_artista(&self, artista: &Artista) -> Result<(), RepoError>;
  fn find_artista(&self, id: &DocId) -> Result<Option<Artista>, RepoError>;
  fn list_artistas(&self) -> Result<Vec<Artista>, RepoError>;
  fn replace_artista(&self, id: &DocId, artista: &Artista) -> Result<(), RepoError>;
  fn delete_artista(&self, id: &DocId) -> Result<(), RepoError>;

  // --- Clientes ---
  fn insert_cliente(&self, cliente: &Cliente) -> Result<(), RepoError>;
  fn find_cliente(&self, id: &DocId) -> Result<Option<Cliente>, RepoError>;
  fn list_clientes(&self) -> Result<Vec<Cliente>, RepoError>;
  fn replace_cliente(&self, id: &DocId, cliente: &Cliente) -> Result<(), RepoError>;
  fn delete_cliente(&self, id: &DocId) -> Result<(), RepoError>;

  // --- Inventario ---
  fn insert_producto(&self, producto: &Producto) -> Result<(), RepoError>;
  fn find_producto(&self, id: &DocId) -> Result<Option<Producto>, RepoError>;
  fn list_inventario(&self) -> Result<Vec<Producto>, RepoError>;
  fn replace_producto(&self, id: &DocId, producto: &Producto) -> Result<(), RepoError>;
  fn delete_producto(&self, id: &DocId) -> Result<(), RepoError>;

  // --- Ventas ---
  fn insert_venta(&self, venta: &Venta) -> Result<(), RepoError>;
  fn find_venta(&self, id: &DocId) -> Result<Option<Venta>, RepoError>;
  fn list_ventas(&self) -> Result<Vec<Venta>, RepoError>;
  fn replace_venta(&self, id: &DocId, venta: &Venta) -> Result<(), RepoError>;
  fn delete_venta(&self, id: &DocId) -> Result<(), RepoError>;
}

impl<T: TiendaRepository + ?Sized> TiendaRepository for &T {
  fn insert_artista(&self, artista: &Artista) -> Result<(), RepoError> {
    (**self).insert_artista(artista)
  }
  fn find_artista(&self, id: &DocId) -> Result<Option<Artista>, RepoError> {
    (**self).find_artista(id)
  }
  fn list_artistas(&self) -> Result<Vec<Artista>, RepoError> {
    (**self).list_artistas()
  }
  fn replace_artista(&self, id: &DocId, artista: &Artista) -> Result<(), RepoError> {
    (**self).replace_artista(id, artista)
  }
  fn delete_artista(&self, id: &DocId) -> Result<(), RepoError> {
    (**self).delete_artista(id)
  }

  fn insert_cliente(&self, cliente: &Cliente) -> Result<(), RepoError> {
    (**self).insert_cliente(cliente)
  }
  fn find_cliente(&self, id: &DocId) -> Result<Option<Cliente>, RepoError> {
    (**self).find_cliente(id)
  }
  fn list_clientes(&self) -> Result<Vec<Cliente>, RepoError> {
    (**self).list_clientes()
  }
  fn replace_cliente(&self, id: &DocId, cliente: &Cliente) -> Result<(), RepoError> {
    (**self).replace_cliente(id, cliente)
  }
  fn delete_cliente(&self, id: &DocId) -> Result<(), RepoError> {
    (**self).delete_cliente(id)
  }

  fn insert_producto(&self, producto: &Producto) -> Result<(), RepoError> {
    (**self).insert_producto(producto)
  }
  fn find_producto(&self, id: &DocId) -> Result<Option<Producto>, RepoError> {
    (**self).find_producto(id)
  }
  fn list_inventario(&self) -> Result<Vec<Producto>, RepoError> {
    (**self).list_inventario()
  }
  fn replace_producto(&self, id: &DocId, producto: &Producto) -> Result<(), RepoError> {
    (**self).replace_producto(id, producto)
  }
  fn delete_producto(&self, id: &DocId) -> Result<(), RepoError> {
    (**self).delete_producto(id)
  }

  fn insert_venta(&self, venta: &Venta) -> Result<(), RepoError> {
    (**self).insert_venta(venta)
  }
  fn find_venta(&self, id: &DocId) -> Result<Option<Venta>, RepoError> {
    (**self).find_venta(id)
  }
  fn list_ventas(&self) -> Result<Vec<Venta>, RepoError> {
    (**self).list_ventas()
  }
  fn replace_venta(&self, id: &DocId, venta: &Venta) -> Result<(), RepoError> {
    (**self).replace_venta(id, venta)
  }
  fn delete_venta(&self, id: &DocId) -> Result<(), RepoError> {
    (**self).delete_venta(id)
  }
}
