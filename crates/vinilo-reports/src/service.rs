use crate::reportes::{
  self, ClienteActivoRow, Estadisticas, GeneroRow, InventarioBajoRow, VentaDetallada,
  VentasArtistaRow,
};
use vinilo_auth::{Autorizador, Capability};
use vinilo_core::CoreError;
use vinilo_core::ports::TiendaRepository;

/// Motor de reportes con el mismo gate que el CRUD.
///
/// Cada consulta exige la capacidad de lectura y recalcula desde cero
/// sobre una instantánea fresca del repositorio; no hay caché.
pub struct ReportService<R: TiendaRepository> {
  auth: Autorizador,
  repo: R,
}

impl<R: TiendaRepository> ReportService<R> {
  pub fn new(auth: Autorizador, repo: R) -> Self {
    Self { auth, repo }
  }

  pub fn estadisticas(&self, principal: &str) -> Result<Estadisticas, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(reportes::estadisticas(
      &self.repo.list_artistas()?,
      &self.repo.list_clientes()?,
      &self.repo.list_inventario()?,
      &self.repo.list_ventas()?,
    ))
  }

  pub fn ventas_por_artista(&self, principal: &str) -> Result<Vec<VentasArtistaRow>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(reportes::ventas_por_artista(&self.repo.list_ventas()?, &self.repo.list_artistas()?))
  }

  pub fn inventario_bajo(&self, principal: &str) -> Result<Vec<InventarioBajoRow>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(reportes::inventario_bajo(&self.repo.list_inventario()?, &self.repo.list_artistas()?))
  }

  pub fn clientes_activos(&self, principal: &str) -> Result<Vec<ClienteActivoRow>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(reportes::clientes_activos(&self.repo.list_ventas()?, &self.repo.list_clientes()?))
  }

  pub fn generos_populares(&self, principal: &str) -> Result<Vec<GeneroRow>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(reportes::generos_populares(&self.repo.list_inventario()?))
  }

  pub fn ventas_detalladas(&self, principal: &str) -> Result<Vec<VentaDetallada>, CoreError> {
    self.auth.require(principal, Capability::Read)?;
    Ok(reportes::ventas_detalladas(
      &self.repo.list_ventas()?,
      &self.repo.list_clientes()?,
      &self.repo.list_artistas()?,
    ))
  }
}
