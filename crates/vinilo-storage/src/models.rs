use crate::schema::{artistas, clientes, inventario, ventas};

use chrono::NaiveDateTime;
use diesel::prelude::*;

use vinilo_core::domain::ids::DocId;
use vinilo_core::domain::{Artista, Cliente, Producto, Venta};
use vinilo_core::ports::RepoError;

const FECHA_FMT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Queryable)]
#[diesel(table_name = artistas)]
pub struct ArtistaRow {
  pub id: String,
  pub nombre: String,
  pub pais: String,
  pub genero: String,
  pub activo: bool,
  pub created_at: String,
  pub updated_at: String,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = artistas)]
pub struct NewArtistaRow {
  pub id: String,
  pub nombre: String,
  pub pais: String,
  pub genero: String,
  pub activo: bool,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = clientes)]
pub struct ClienteRow {
  pub id: String,
  pub nombre: String,
  pub correo: String,
  pub telefono: String,
  pub created_at: String,
  pub updated_at: String,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = clientes)]
pub struct NewClienteRow {
  pub id: String,
  pub nombre: String,
  pub correo: String,
  pub telefono: String,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = inventario)]
pub struct ProductoRow {
  pub id: String,
  pub artista_id: String,
  pub album: String,
  pub anio: i32,
  pub genero: String,
  pub stock: i32,
  pub precio_unitario: i32,
  pub created_at: String,
  pub updated_at: String,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = inventario)]
pub struct NewProductoRow {
  pub id: String,
  pub artista_id: String,
  pub album: String,
  pub anio: i32,
  pub genero: String,
  pub stock: i32,
  pub precio_unitario: i32,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = ventas)]
pub struct VentaRow {
  pub id: String,
  pub cliente_id: Option<String>,
  pub artista_id: Option<String>,
  pub album: String,
  pub fecha_venta: String,
  pub cantidad: i32,
  pub precio_unitario: i32,
  pub created_at: String,
  pub updated_at: String,
}

// En un reemplazo completo, `None` debe escribir NULL (no "no tocar").
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = ventas)]
#[diesel(treat_none_as_null = true)]
pub struct NewVentaRow {
  pub id: String,
  pub cliente_id: Option<String>,
  pub artista_id: Option<String>,
  pub album: String,
  pub fecha_venta: String,
  pub cantidad: i32,
  pub precio_unitario: i32,
}

fn parse_id(raw: &str) -> Result<DocId, RepoError> {
  raw.parse().map_err(|_| RepoError::Storage(format!("empty id in row: {raw:?}")))
}

pub fn artista_to_row(artista: &Artista) -> NewArtistaRow {
  NewArtistaRow {
    id: artista.id.to_string(),
    nombre: artista.nombre.clone(),
    pais: artista.pais.clone(),
    genero: artista.genero.clone(),
    activo: artista.activo,
  }
}

pub fn row_to_artista(row: ArtistaRow) -> Result<Artista, RepoError> {
  Ok(Artista {
    id: parse_id(&row.id)?,
    nombre: row.nombre,
    pais: row.pais,
    genero: row.genero,
    activo: row.activo,
  })
}

pub fn cliente_to_row(cliente: &Cliente) -> NewClienteRow {
  NewClienteRow {
    id: cliente.id.to_string(),
    nombre: cliente.nombre.clone(),
    correo: cliente.correo.clone(),
    telefono: cliente.telefono.clone(),
  }
}

pub fn row_to_cliente(row: ClienteRow) -> Result<Cliente, RepoError> {
  Ok(Cliente {
    id: parse_id(&row.id)?,
    nombre: row.nombre,
    correo: row.correo,
    telefono: row.telefono,
  })
}

pub fn producto_to_row(producto: &Producto) -> NewProductoRow {
  NewProductoRow {
    id: producto.id.to_string(),
    artista_id: producto.artista_id.to_string(),
    album: producto.album.clone(),
    anio: producto.anio,
    genero: producto.genero.clone(),
    stock: producto.stock,
    precio_unitario: producto.precio_unitario,
  }
}

pub fn row_to_producto(row: ProductoRow) -> Result<Producto, RepoError> {
  Ok(Producto {
    id: parse_id(&row.id)?,
    artista_id: parse_id(&row.artista_id)?,
    album: row.album,
    anio: row.anio,
    genero: row.genero,
    stock: row.stock,
    precio_unitario: row.precio_unitario,
  })
}

pub fn venta_to_row(venta: &Venta) -> NewVentaRow {
  NewVentaRow {
    id: venta.id.to_string(),
    cliente_id: venta.cliente_id.as_ref().map(|id| id.to_string()),
    artista_id: venta.artista_id.as_ref().map(|id| id.to_string()),
    album: venta.album.clone(),
    fecha_venta: venta.fecha_venta.format(FECHA_FMT).to_string(),
    cantidad: venta.cantidad,
    precio_unitario: venta.precio_unitario,
  }
}

pub fn row_to_venta(row: VentaRow) -> Result<Venta, RepoError> {
  let fecha_venta = NaiveDateTime::parse_from_str(&row.fecha_venta, FECHA_FMT)
    .map_err(|e| RepoError::Storage(format!("invalid fecha_venta in row: {e}")))?;

  Ok(Venta {
    id: parse_id(&row.id)?,
    cliente_id: row.cliente_id.as_deref().map(parse_id).transpose()?,
    artista_id: row.artista_id.as_deref().map(parse_id).transpose()?,
    album: row.album,
    fecha_venta,
    cantidad: row.cantidad,
    precio_unitario: row.precio_unitario,
  })
}
