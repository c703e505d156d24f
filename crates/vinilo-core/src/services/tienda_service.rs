use crate::domain::form::Form;
use crate::domain::ids::DocId;
use crate::domain::{Artista, Cliente, Producto, Venta};
use crate::errors::CoreError;
use crate::ports::TiendaRepository;
use tracing::debug;
use vinilo_auth::{Autorizador, Capability, PrincipalInfo};

/// Fachada de la tienda: autentica, autoriza y recién entonces toca el
/// repositorio.
///
/// Toda operación exige su capacidad ANTES de cualquier acceso al
/// almacenamiento; una denegación nunca deja efectos parciales.
pub struct TiendaService<R: TiendaRepository> {
  auth: Autorizador,
  repo: R,
}

impl<R: TiendaRepository> TiendaService<R> {
  pub fn new(auth: Autorizador, repo: R) -> Self {
    Self { auth, repo }
  }

  /// Valida credenciales. La falla es [`CoreError::Forbidden`] sin
  /// distinguir usuario desconocido de contraseña incorrecta.
  pub fn login(&self, usuario: &str, password: &str) -> Result<PrincipalInfo, CoreError> {
    self.auth.authenticate(usuario, password).ok_or(CoreError::Forbidden)
  }

  // ---------- ARTISTAS ----------

  pub fn list_artistas(&self, principal: &str) -> Result<Vec<Artista>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(self.repo.list_artistas()?)
  }

  pub fn get_artista(&self, principal: &str, id: &DocId) -> Result<Artista, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    self.repo.find_artista(id)?.ok_or(CoreError::NotFound)
  }

  pub fn create_artista(
    &self,
    principal: &str,
    form: &Form,
    custom_id: Option<&str>,
  ) -> Result<DocId, CoreError> {
    self.auth.require(principal, Capability::Create)?;
    let artista = Artista::from_form(form, custom_id)?;
    self.repo.insert_artista(&artista)?;
    debug!(id = %artista.id, "artista creado");
    Ok(artista.id)
  }

  pub fn update_artista(&self, principal: &str, id: &DocId, form: &Form) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Update)?;
    let artista = Artista::from_form(form, None)?.with_id(id.clone());
    self.repo.replace_artista(id, &artista)?;
    debug!(%id, "artista actualizado");
    Ok(())
  }

  pub fn delete_artista(&self, principal: &str, id: &DocId) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Delete)?;
    self.repo.delete_artista(id)?;
    debug!(%id, "artista eliminado");
    Ok(())
  }

  // ---------- CLIENTES ----------

  pub fn list_clientes(&self, principal: &str) -> Result<Vec<Cliente>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(self.repo.list_clientes()?)
  }

  pub fn get_cliente(&self, principal: &str, id: &DocId) -> Result<Cliente, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    self.repo.find_cliente(id)?.ok_or(CoreError::NotFound)
  }

  pub fn create_cliente(
    &self,
    principal: &str,
    form: &Form,
    custom_id: Option<&str>,
  ) -> Result<DocId, CoreError> {
    self.auth.require(principal, Capability::Create)?;
    let cliente = Cliente::from_form(form, custom_id)?;
    self.repo.insert_cliente(&cliente)?;
    debug!(id = %cliente.id, "cliente creado");
    Ok(cliente.id)
  }

  pub fn update_cliente(&self, principal: &str, id: &DocId, form: &Form) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Update)?;
    let cliente = Cliente::from_form(form, None)?.with_id(id.clone());
    self.repo.replace_cliente(id, &cliente)?;
    debug!(%id, "cliente actualizado");
    Ok(())
  }

  pub fn delete_cliente(&self, principal: &str, id: &DocId) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Delete)?;
    self.repo.delete_cliente(id)?;
    debug!(%id, "cliente eliminado");
    Ok(())
  }

  // ---------- INVENTARIO ----------

  pub fn list_inventario(&self, principal: &str) -> Result<Vec<Producto>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(self.repo.list_inventario()?)
  }

  pub fn get_producto(&self, principal: &str, id: &DocId) -> Result<Producto, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    self.repo.find_producto(id)?.ok_or(CoreError::NotFound)
  }

  pub fn create_producto(
    &self,
    principal: &str,
    form: &Form,
    custom_id: Option<&str>,
  ) -> Result<DocId, CoreError> {
    self.auth.require(principal, Capability::Create)?;
    let producto = Producto::from_form(form, custom_id)?;
    self.repo.insert_producto(&producto)?;
    debug!(id = %producto.id, "producto creado");
    Ok(producto.id)
  }

  pub fn update_producto(&self, principal: &str, id: &DocId, form: &Form) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Update)?;
    let producto = Producto::from_form(form, None)?.with_id(id.clone());
    self.repo.replace_producto(id, &producto)?;
    debug!(%id, "producto actualizado");
    Ok(())
  }

  pub fn delete_producto(&self, principal: &str, id: &DocId) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Delete)?;
    self.repo.delete_producto(id)?;
    debug!(%id, "producto eliminado");
    Ok(())
  }

  // ---------- VENTAS ----------

  pub fn list_ventas(&self, principal: &str) -> Result<Vec<Venta>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(self.repo.list_ventas()?)
  }

  pub fn get_venta(&self, principal: &str, id: &DocId) -> Result<Venta, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    self.repo.find_venta(id)?.ok_or(CoreError::NotFound)
  }

  pub fn create_venta(
    &self,
    principal: &str,
    form: &Form,
    custom_id: Option<&str>,
  ) -> Result<DocId, CoreError> {
    self.auth.require(principal, Capability::Create)?;
    let venta = Venta::from_form(form, custom_id)?;
    self.repo.insert_venta(&venta)?;
    debug!(id = %venta.id, "venta registrada");
    Ok(venta.id)
  }

  pub fn update_venta(&self, principal: &str, id: &DocId, form: &Form) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Update)?;
    let venta = Venta::from_form(form, None)?.with_id(id.clone());
    self.repo.replace_venta(id, &venta)?;
    debug!(%id, "venta actualizada");
    Ok(())
  }

  pub fn delete_venta(&self, principal: &str, id: &DocId) -> Result<(), CoreError> {
    self.auth.require(principal, Capability::Delete)?;
    self.repo.delete_venta(id)?;
    debug!(%id, "venta eliminada");
    Ok(())
  }
}
