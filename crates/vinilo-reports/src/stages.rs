use std::collections::HashMap;
use std::hash::Hash;
use vinilo_core::domain::ids::DocId;

/// Rótulo fijo para referencias colgantes o ausentes.
pub const DESCONOCIDO: &str = "Desconocido";

/// Índice id → nombre para los joins izquierdos de los reportes.
pub fn indice_nombres<'a, T>(
  rows: &'a [T],
  entrada: impl Fn(&'a T) -> (&'a DocId, &'a str),
) -> HashMap<&'a DocId, &'a str> {
  rows.iter().map(entrada).collect()
}

/// Join izquierdo: el nombre referenciado o [`DESCONOCIDO`].
pub fn nombre_o_desconocido(indice: &HashMap<&DocId, &str>, id: Option<&DocId>) -> String {
  id.and_then(|id| indice.get(id).copied()).unwrap_or(DESCONOCIDO).to_string()
}

/// Agrupa filas por una clave calculada. Los grupos solo existen si tienen
/// al menos una fila; nunca se sintetizan grupos vacíos.
pub fn agrupar_por<T, K: Eq + Hash>(
  rows: impl IntoIterator<Item = T>,
  clave: impl Fn(&T) -> K,
) -> HashMap<K, Vec<T>> {
  let mut grupos: HashMap<K, Vec<T>> = HashMap::new();
  for row in rows {
    grupos.entry(clave(&row)).or_default().push(row);
  }
  grupos
}

/// Redondeo a 2 decimales. Se aplica solo en la proyección final, nunca
/// sobre sumas parciales.
pub fn round2(x: f64) -> f64 {
  (x * 100.0).round() / 100.0
}
