//! Borrador por etapas de los formularios de entidad
//!
//! El formulario nunca toca la colección: recibe instantáneas de
//! referencia, valida su borrador y lo entrega por el callback de guardado
//! solo tras la confirmación explícita. El controlador de lista sigue
//! siendo la única fuente de verdad.

use crate::shared::error::{FieldErrors, MutationError};
use std::future::Future;
use thiserror::Error;

/// Modo del formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Envío rechazado antes o después de la validación
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("el formulario tiene errores de validación")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Rejected(#[from] MutationError),
}

/// Borrador editable de un registro más su mapa de errores por campo
#[derive(Debug, Clone)]
pub struct FormModel<D> {
    pub draft: D,
    pub errors: FieldErrors,
    mode: FormMode,
}

impl<D: Clone> FormModel<D> {
    /// Formulario de creación sobre una plantilla vacía
    pub fn create(blank: D) -> Self {
        Self {
            draft: blank,
            errors: FieldErrors::new(),
            mode: FormMode::Create,
        }
    }

    /// Formulario de edición sobre una copia del registro existente
    pub fn edit(existing: D) -> Self {
        Self {
            draft: existing,
            errors: FieldErrors::new(),
            mode: FormMode::Edit,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        self.mode == FormMode::Edit
    }

    /// Refrescar el mapa de errores con el validador del módulo
    pub fn validate_with<F>(&mut self, check: F) -> bool
    where
        F: FnOnce(&D) -> FieldErrors,
    {
        self.errors = check(&self.draft);
        self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Enviar el borrador: validar y, si no hay errores, esperar el
    /// guardado del llamador
    ///
    /// La frontera es asíncrona a propósito: hoy el guardado es una
    /// mutación en memoria, pero el contrato admite sustituirlo por una
    /// llamada real sin cambiar a los módulos.
    pub async fn submit<T, F, S, Fut>(&mut self, check: F, save: S) -> Result<T, SubmitError>
    where
        F: FnOnce(&D) -> FieldErrors,
        S: FnOnce(D) -> Fut,
        Fut: Future<Output = Result<T, MutationError>>,
    {
        if !self.validate_with(check) {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }
        save(self.draft.clone()).await.map_err(SubmitError::from)
    }
}

/// Compuerta de confirmación en dos pasos para acciones destructivas
///
/// La capa de datos no vuelve a preguntar: `remove` invocado directamente
/// funciona. La compuerta solo garantiza que el callback de la UI no se
/// dispare sin confirmación, y que una confirmación dispare una sola vez.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmGate {
    open: bool,
}

impl ConfirmGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primer paso: abrir el diálogo de confirmación
    pub fn request(&mut self) {
        self.open = true;
    }

    /// Cerrar sin confirmar
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Segundo paso: devuelve `true` exactamente una vez por apertura
    pub fn confirm(&mut self) -> bool {
        let fire = self.open;
        self.open = false;
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Draft {
        name: String,
    }

    fn check(draft: &Draft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if draft.name.trim().is_empty() {
            errors.insert("name", "El nombre no puede estar vacío".into());
        }
        errors
    }

    #[tokio::test]
    async fn test_submit_blocks_on_validation_errors() {
        let mut form = FormModel::create(Draft::default());
        let result = form
            .submit(check, |_| async { Ok::<_, MutationError>(()) })
            .await;
        match result {
            Err(SubmitError::Invalid(errors)) => assert!(errors.contains_key("name")),
            other => panic!("se esperaba Invalid, llegó {:?}", other),
        }
        assert!(!form.is_valid());
    }

    #[tokio::test]
    async fn test_submit_hands_draft_to_save() {
        let mut form = FormModel::create(Draft::default());
        form.draft.name = "Corte clásico".into();
        let saved = form
            .submit(check, |draft| async move { Ok::<_, MutationError>(draft.name) })
            .await
            .unwrap();
        assert_eq!(saved, "Corte clásico");
    }

    #[tokio::test]
    async fn test_save_rejection_propagates() {
        let mut form = FormModel::edit(Draft {
            name: "Manicure".into(),
        });
        assert!(form.is_edit());
        let result: Result<(), _> = form
            .submit(check, |_| async {
                Err(MutationError::forbidden("servicios"))
            })
            .await;
        assert!(matches!(
            result,
            Err(SubmitError::Rejected(MutationError::Forbidden { .. }))
        ));
    }

    #[test]
    fn test_confirm_gate_fires_exactly_once() {
        let mut gate = ConfirmGate::new();
        let mut removals = 0;

        // confirmar sin abrir no dispara
        assert!(!gate.confirm());

        gate.request();
        assert!(gate.is_open());
        if gate.confirm() {
            removals += 1;
        }
        // una segunda confirmación de la misma apertura no dispara
        if gate.confirm() {
            removals += 1;
        }
        assert_eq!(removals, 1);

        // descartar cierra sin disparar
        gate.request();
        gate.dismiss();
        assert!(!gate.confirm());
    }
}
