use super::{AggregateId, EntityMetadata};

/// Trait para la raíz de un agregado
///
/// Define los métodos y metadatos obligatorios de todos los agregados del
/// sistema.
pub trait AggregateRoot {
    /// Tipo del identificador del agregado
    type Id: AggregateId;

    // ============================================================================
    // Métodos de instancia (datos del registro concreto)
    // ============================================================================

    /// Id del registro
    fn id(&self) -> Self::Id;

    /// Código de negocio del registro (por ejemplo "VNT-004")
    fn code(&self) -> &str;

    /// Nombre para mostrar del registro
    fn description(&self) -> &str;

    /// Metadatos del ciclo de vida
    fn metadata(&self) -> &EntityMetadata;

    /// Metadatos mutables
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Metadatos de la clase del agregado (datos estáticos)
    // ============================================================================

    /// Índice del agregado en el sistema (por ejemplo "a003")
    fn aggregate_index() -> &'static str;

    /// Nombre de la colección (por ejemplo "clients")
    fn collection_name() -> &'static str;

    /// Nombre del elemento para la UI (singular, por ejemplo "Cliente")
    fn element_name() -> &'static str;

    /// Nombre de la lista para la UI (plural, por ejemplo "Clientes")
    fn list_name() -> &'static str;

    // ============================================================================
    // Métodos con implementación por defecto
    // ============================================================================

    /// Nombre completo del agregado (por ejemplo "a003_client")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
