use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait para los tipos de identificador de agregado
///
/// Los identificadores de esta aplicación son secuencias numéricas por
/// colección: el siguiente id se calcula como `max(existentes) + 1` en el
/// momento de crear el registro, nunca se reutiliza ni se reasigna.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convertir el ID a texto
    fn as_string(&self) -> String;

    /// Construir el ID desde texto
    fn from_string(s: &str) -> Result<Self, String>;

    /// Construir el ID a partir del número de secuencia
    fn from_seq(seq: u32) -> Self;

    /// Número de secuencia subyacente
    fn seq(&self) -> u32;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>().map_err(|e| format!("Id inválido: {}", e))
    }

    fn from_seq(seq: u32) -> Self {
        seq
    }

    fn seq(&self) -> u32 {
        *self
    }
}
