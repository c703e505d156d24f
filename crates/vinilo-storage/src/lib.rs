pub mod config;
pub mod models;
pub mod schema;

use std::cell::RefCell;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use vinilo_core::domain::ids::DocId;
use vinilo_core::domain::{Artista, Cliente, Producto, Venta};
use vinilo_core::ports::{RepoError, TiendaRepository};

use crate::config::StorageConfig;
use crate::models::{
  ArtistaRow, ClienteRow, ProductoRow, VentaRow, artista_to_row, cliente_to_row, producto_to_row,
  row_to_artista, row_to_cliente, row_to_producto, row_to_venta, venta_to_row,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Adaptador SQLite del repositorio de la tienda.
///
/// Los ids se guardan como TEXT (la forma textual de [`DocId`]) y
/// `fecha_venta` como ISO-8601, así el orden textual descendente es el
/// cronológico. La exclusión mutua queda en manos de SQLite.
pub struct SqliteTienda {
  conn: RefCell<SqliteConnection>,
}

impl SqliteTienda {
  pub fn new(database_url: &str) -> Result<Self, RepoError> {
    let mut conn =
      SqliteConnection::establish(database_url).map_err(|e| RepoError::Storage(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS).map_err(|e| RepoError::Storage(e.to_string()))?;
    Ok(Self { conn: RefCell::new(conn) })
  }

  /// Base en memoria, para pruebas y demos.
  pub fn new_in_memory() -> Result<Self, RepoError> {
    Self::new(":memory:")
  }

  /// Abre la base definida en la sección `[storage]` de la configuración.
  pub fn new_from_config() -> Result<Self, RepoError> {
    let cfg = StorageConfig::load().map_err(|e| RepoError::Storage(e.to_string()))?;
    Self::new(&cfg.db_path.to_string_lossy())
  }
}

fn to_storage(e: diesel::result::Error) -> RepoError {
  RepoError::Storage(e.to_string())
}

impl TiendaRepository for SqliteTienda {
  // --- Artistas ---

  fn insert_artista(&self, artista: &Artista) -> Result<(), RepoError> {
    use crate::schema::artistas::dsl::*;

    let row = artista_to_row(artista);
    let mut conn = self.conn.borrow_mut();
    diesel::insert_into(artistas).values(&row).execute(&mut *conn).map_err(to_storage)?;
    Ok(())
  }

  fn find_artista(&self, doc_id: &DocId) -> Result<Option<Artista>, RepoError> {
    use crate::schema::artistas::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let row_opt = artistas
      .filter(id.eq(doc_id.to_string()))
      .first::<ArtistaRow>(&mut *conn)
      .optional()
      .map_err(to_storage)?;

    row_opt.map(row_to_artista).transpose()
  }

  fn list_artistas(&self) -> Result<Vec<Artista>, RepoError> {
    use crate::schema::artistas::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let rows =
      artistas.order(nombre.asc()).load::<ArtistaRow>(&mut *conn).map_err(to_storage)?;
    rows.into_iter().map(row_to_artista).collect()
  }

  fn replace_artista(&self, doc_id: &DocId, artista: &Artista) -> Result<(), RepoError> {
    use crate::schema::artistas::dsl::*;

    let row = artista_to_row(artista);
    let mut conn = self.conn.borrow_mut();
    let n = diesel::update(artistas.filter(id.eq(doc_id.to_string())))
      .set(&row)
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }

  fn delete_artista(&self, doc_id: &DocId) -> Result<(), RepoError> {
    use crate::schema::artistas::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let n = diesel::delete(artistas.filter(id.eq(doc_id.to_string())))
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }

  // --- Clientes ---

  fn insert_cliente(&self, cliente: &Cliente) -> Result<(), RepoError> {
    use crate::schema::clientes::dsl::*;

    let row = cliente_to_row(cliente);
    let mut conn = self.conn.borrow_mut();
    diesel::insert_into(clientes).values(&row).execute(&mut *conn).map_err(to_storage)?;
    Ok(())
  }

  fn find_cliente(&self, doc_id: &DocId) -> Result<Option<Cliente>, RepoError> {
    use crate::schema::clientes::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let row_opt = clientes
      .filter(id.eq(doc_id.to_string()))
      .first::<ClienteRow>(&mut *conn)
      .optional()
      .map_err(to_storage)?;

    row_opt.map(row_to_cliente).transpose()
  }

  fn list_clientes(&self) -> Result<Vec<Cliente>, RepoError> {
    use crate::schema::clientes::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let rows =
      clientes.order(nombre.asc()).load::<ClienteRow>(&mut *conn).map_err(to_storage)?;
    rows.into_iter().map(row_to_cliente).collect()
  }

  fn replace_cliente(&self, doc_id: &DocId, cliente: &Cliente) -> Result<(), RepoError> {
    use crate::schema::clientes::dsl::*;

    let row = cliente_to_row(cliente);
    let mut conn = self.conn.borrow_mut();
    let n = diesel::update(clientes.filter(id.eq(doc_id.to_string())))
      .set(&row)
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }

  fn delete_cliente(&self, doc_id: &DocId) -> Result<(), RepoError> {
    use crate::schema::clientes::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let n = diesel::delete(clientes.filter(id.eq(doc_id.to_string())))
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }

  // --- Inventario ---

  fn insert_producto(&self, producto: &Producto) -> Result<(), RepoError> {
    use crate::schema::inventario::dsl::*;

    let row = producto_to_row(producto);
    let mut conn = self.conn.borrow_mut();
    diesel::insert_into(inventario).values(&row).execute(&mut *conn).map_err(to_storage)?;
    Ok(())
  }

  fn find_producto(&self, doc_id: &DocId) -> Result<Option<Producto>, RepoError> {
    use crate::schema::inventario::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let row_opt = inventario
      .filter(id.eq(doc_id.to_string()))
      .first::<ProductoRow>(&mut *conn)
      .optional()
      .map_err(to_storage)?;

    row_opt.map(row_to_producto).transpose()
  }

  fn list_inventario(&self) -> Result<Vec<Producto>, RepoError> {
    use crate::schema::inventario::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let rows =
      inventario.order(album.asc()).load::<ProductoRow>(&mut *conn).map_err(to_storage)?;
    rows.into_iter().map(row_to_producto).collect()
  }

  fn replace_producto(&self, doc_id: &DocId, producto: &Producto) -> Result<(), RepoError> {
    use crate::schema::inventario::dsl::*;

    let row = producto_to_row(producto);
    let mut conn = self.conn.borrow_mut();
    let n = diesel::update(inventario.filter(id.eq(doc_id.to_string())))
      .set(&row)
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }

  fn delete_producto(&self, doc_id: &DocId) -> Result<(), RepoError> {
    use crate::schema::inventario::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let n = diesel::delete(inventario.filter(id.eq(doc_id.to_string())))
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }

  // --- Ventas ---

  fn insert_venta(&self, venta: &Venta) -> Result<(), RepoError> {
    use crate::schema::ventas::dsl::*;

    let row = venta_to_row(venta);
    let mut conn = self.conn.borrow_mut();
    diesel::insert_into(ventas).values(&row).execute(&mut *conn).map_err(to_storage)?;
    Ok(())
  }

  fn find_venta(&self, doc_id: &DocId) -> Result<Option<Venta>, RepoError> {
    use crate::schema::ventas::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let row_opt = ventas
      .filter(id.eq(doc_id.to_string()))
      .first::<VentaRow>(&mut *conn)
      .optional()
      .map_err(to_storage)?;

    row_opt.map(row_to_venta).transpose()
  }

  fn list_ventas(&self) -> Result<Vec<Venta>, RepoError> {
    use crate::schema::ventas::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let rows =
      ventas.order(fecha_venta.desc()).load::<VentaRow>(&mut *conn).map_err(to_storage)?;
    rows.into_iter().map(row_to_venta).collect()
  }

  fn replace_venta(&self, doc_id: &DocId, venta: &Venta) -> Result<(), RepoError> {
    use crate::schema::ventas::dsl::*;

    let row = venta_to_row(venta);
    let mut conn = self.conn.borrow_mut();
    let n = diesel::update(ventas.filter(id.eq(doc_id.to_string())))
      .set(&row)
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }

  fn delete_venta(&self, doc_id: &DocId) -> Result<(), RepoError> {
    use crate::schema::ventas::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let n = diesel::delete(ventas.filter(id.eq(doc_id.to_string())))
      .execute(&mut *conn)
      .map_err(to_storage)?;

    if n == 0 { Err(RepoError::NotFound) } else { Ok(()) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{NaiveDate, NaiveTime};
  use vinilo_core::domain::Form;

  fn repo() -> SqliteTienda {
    SqliteTienda::new_in_memory().expect("in-memory db")
  }

  fn artista(id: &str, nombre: &str) -> Artista {
    Artista {
      id: id.parse().unwrap(),
      nombre: nombre.to_string(),
      pais: "USA".to_string(),
      genero: "Jazz".to_string(),
      activo: true,
    }
  }

  fn venta_en(id: &str, cliente: Option<&str>, fecha: &str) -> Venta {
    Venta {
      id: id.parse().unwrap(),
      cliente_id: cliente.map(|c| c.parse().unwrap()),
      artista_id: None,
      album: "Album".to_string(),
      fecha_venta: fecha.parse::<NaiveDate>().unwrap().and_time(NaiveTime::MIN),
      cantidad: 1,
      precio_unitario: 10,
    }
  }

  #[test]
  fn insert_find_round_trips_generated_and_custom_ids() {
    let repo = repo();

    let generado = Artista { id: DocId::new(), ..artista("X", "Miles Davis") };
    let custom = artista("ART-NINA", "Nina Simone");

    repo.insert_artista(&generado).unwrap();
    repo.insert_artista(&custom).unwrap();

    let cargado = repo.find_artista(&generado.id).unwrap().unwrap();
    assert_eq!(cargado, generado);

    // el id custom se reencuentra incluso re-parseado desde texto
    let reparsed: DocId = "ART-NINA".parse().unwrap();
    assert_eq!(repo.find_artista(&reparsed).unwrap().unwrap().nombre, "Nina Simone");
  }

  #[test]
  fn list_artistas_orders_by_nombre() {
    let repo = repo();
    for (id, nombre) in [("A3", "Charlie Parker"), ("A1", "Aretha Franklin"), ("A2", "Bill Evans")]
    {
      repo.insert_artista(&artista(id, nombre)).unwrap();
    }

    let nombres: Vec<_> =
      repo.list_artistas().unwrap().into_iter().map(|a| a.nombre).collect();
    assert_eq!(nombres, ["Aretha Franklin", "Bill Evans", "Charlie Parker"]);
  }

  #[test]
  fn duplicate_id_insert_is_a_storage_error() {
    let repo = repo();
    repo.insert_artista(&artista("ART-1", "Miles Davis")).unwrap();
    let err = repo.insert_artista(&artista("ART-1", "Nina Simone"));
    assert!(matches!(err, Err(RepoError::Storage(_))));
  }

  #[test]
  fn replace_is_full_document_and_checks_existence() {
    let repo = repo();
    let original = artista("ART-1", "Miles Davis");
    repo.insert_artista(&original).unwrap();

    let reemplazo = Artista { activo: false, pais: String::new(), ..original.clone() };
    repo.replace_artista(&original.id, &reemplazo).unwrap();

    let cargado = repo.find_artista(&original.id).unwrap().unwrap();
    assert!(!cargado.activo);
    assert_eq!(cargado.pais, "");

    let ausente: DocId = "no-existe".parse().unwrap();
    assert!(matches!(repo.replace_artista(&ausente, &reemplazo), Err(RepoError::NotFound)));
  }

  #[test]
  fn delete_removes_and_reports_missing() {
    let repo = repo();
    let a = artista("ART-1", "Miles Davis");
    repo.insert_artista(&a).unwrap();

    repo.delete_artista(&a.id).unwrap();
    assert!(repo.find_artista(&a.id).unwrap().is_none());
    assert!(matches!(repo.delete_artista(&a.id), Err(RepoError::NotFound)));
  }

  #[test]
  fn ventas_list_recent_first_and_null_references_round_trip() {
    let repo = repo();
    repo.insert_venta(&venta_en("V1", Some("C1"), "2024-01-10")).unwrap();
    repo.insert_venta(&venta_en("V2", None, "2024-03-01")).unwrap();
    repo.insert_venta(&venta_en("V3", Some("C2"), "2024-02-15")).unwrap();

    let ventas = repo.list_ventas().unwrap();
    let ids: Vec<String> = ventas.iter().map(|v| v.id.to_string()).collect();
    assert_eq!(ids, ["V2", "V3", "V1"]);
    assert_eq!(ventas[0].cliente_id, None);
  }

  #[test]
  fn replace_venta_can_clear_a_reference_to_null() {
    let repo = repo();
    let original = venta_en("V1", Some("C1"), "2024-01-10");
    repo.insert_venta(&original).unwrap();

    let sin_cliente = Venta { cliente_id: None, ..original.clone() };
    repo.replace_venta(&original.id, &sin_cliente).unwrap();

    assert_eq!(repo.find_venta(&original.id).unwrap().unwrap().cliente_id, None);
  }

  #[test]
  fn reports_run_over_a_sqlite_snapshot_end_to_end() {
    use vinilo_auth::{AuthTables, Autorizador};
    use vinilo_core::services::TiendaService;
    use vinilo_reports::{DESCONOCIDO, ReportService};

    let store = repo();
    let tablas = AuthTables::default();
    let tienda = TiendaService::new(Autorizador::new(tablas.clone()), &store);
    let reportes = ReportService::new(Autorizador::new(tablas), &store);

    let miles = tienda
      .create_artista(
        "ldaza",
        &Form::new().set("nombre", "Miles Davis").set("genero", "Jazz").set("activo", "si"),
        None,
      )
      .unwrap();

    let ana = tienda
      .create_cliente(
        "ldaza",
        &Form::new().set("nombre", "Ana").set("correo", "ana@example.com"),
        None,
      )
      .unwrap();

    tienda
      .create_producto(
        "ldaza",
        &Form::new()
          .set("artista_id", &miles.to_string())
          .set("album", "Kind of Blue")
          .set("anio", "1959")
          .set("genero", "Jazz")
          .set("stock", "3")
          .set("precio_unitario", "20"),
        None,
      )
      .unwrap();

    tienda
      .create_venta(
        "ldaza",
        &Form::new()
          .set("cliente_id", &ana.to_string())
          .set("artista_id", &miles.to_string())
          .set("album", "Kind of Blue")
          .set("fecha_venta", "2024-11-05")
          .set("cantidad", "2")
          .set("precio_unitario", "20"),
        None,
      )
      .unwrap();

    // escenario: stock bajo con nombre y valoración resueltos
    let bajo = reportes.inventario_bajo("sbarbosa").unwrap();
    assert_eq!(bajo.len(), 1);
    assert_eq!(bajo[0].artista, "Miles Davis");
    assert_eq!(bajo[0].valor_total, 60);

    // escenario: borrar el cliente degrada el nombre al rótulo fijo
    tienda.delete_cliente("ldaza", &ana).unwrap();
    let detalladas = reportes.ventas_detalladas("sbarbosa").unwrap();
    assert_eq!(detalladas[0].nombre_cliente, DESCONOCIDO);
    let activos = reportes.clientes_activos("sbarbosa").unwrap();
    assert_eq!(activos[0].cliente, DESCONOCIDO);
    assert_eq!(activos[0].gasto_total, 40.0);

    let stats = reportes.estadisticas("sbarbosa").unwrap();
    assert_eq!(stats.total_ventas, 1);
    assert_eq!(stats.ingresos_totales, 40.0);

    // el rol consulta no puede escribir, pero sí leer reportes
    assert!(tienda.delete_artista("sbarbosa", &miles).is_err());
    assert!(reportes.ventas_por_artista("sbarbosa").is_ok());
  }
}
