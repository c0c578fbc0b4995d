use crate::shared::error::FieldErrors;
use contracts::domain::a009_supplier::Supplier;
use contracts::domain::a010_supply::Supply;
use contracts::domain::a011_delivery::DeliveryDto;

/// Validación del borrador de entrega
pub fn validate(dto: &DeliveryDto, supplies: &[Supply], suppliers: &[Supplier]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match dto.supply_id {
        None => {
            errors.insert("supplyId", "Seleccione un insumo".into());
        }
        Some(supply_id) => {
            if !supplies.iter().any(|s| s.base.id.value() == supply_id) {
                errors.insert("supplyId", "El insumo seleccionado no existe".into());
            }
        }
    }

    match dto.supplier_id {
        None => {
            errors.insert("supplierId", "Seleccione un proveedor".into());
        }
        Some(supplier_id) => {
            if !suppliers.iter().any(|s| s.base.id.value() == supplier_id) {
                errors.insert("supplierId", "El proveedor seleccionado no existe".into());
            }
        }
    }

    if dto.quantity == 0 {
        errors.insert("quantity", "La cantidad debe ser mayor que cero".into());
    }
    if dto.expected_date.is_none() {
        errors.insert("expectedDate", "La fecha esperada es obligatoria".into());
    }

    errors
}
