use crate::shared::error::FieldErrors;
use contracts::domain::a008_purchase::PurchaseDto;
use contracts::domain::a009_supplier::Supplier;
use contracts::domain::a010_supply::Supply;

/// Validación del borrador de compra
pub fn validate(dto: &PurchaseDto, suppliers: &[Supplier], supplies: &[Supply]) -> FieldErrors {
    let mut errors = FieldErrors::new();

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

    if dto.date.is_none() {
        errors.insert("date", "La fecha es obligatoria".into());
    }

    if dto.lines.is_empty() {
        errors.insert("lines", "Agregue al menos un insumo".into());
    } else {
        for (index, line) in dto.lines.iter().enumerate() {
            let exists = line
                .supply_id
                .is_some_and(|id| supplies.iter().any(|s| s.base.id.value() == id));
            if !exists {
                errors.insert("lines", format!("Renglón {}: insumo inválido", index + 1));
                break;
            }
            if line.quantity == 0 {
                errors.insert(
                    "lines",
                    format!("Renglón {}: la cantidad debe ser mayor que cero", index + 1),
                );
                break;
            }
            if line.unit_cost <= 0.0 {
                errors.insert(
                    "lines",
                    format!("Renglón {}: el costo debe ser mayor que cero", index + 1),
                );
                break;
            }
        }
    }

    errors
}
