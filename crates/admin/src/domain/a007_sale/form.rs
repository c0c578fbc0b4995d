use crate::shared::error::FieldErrors;
use contracts::domain::a003_client::Client;
use contracts::domain::a004_service::Service;
use contracts::domain::a007_sale::SaleDto;

/// Validación del borrador de venta
pub fn validate(dto: &SaleDto, clients: &[Client], services: &[Service]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match dto.client_id {
        None => {
            errors.insert("clientId", "Seleccione un cliente".into());
        }
        Some(client_id) => {
            if !clients.iter().any(|c| c.base.id.value() == client_id) {
                errors.insert("clientId", "El cliente seleccionado no existe".into());
            }
        }
    }

    if dto.date.is_none() {
        errors.insert("date", "La fecha es obligatoria".into());
    }
    if dto.payment.is_none() {
        errors.insert("payment", "Seleccione un medio de pago".into());
    }

    if dto.lines.is_empty() {
        errors.insert("lines", "Agregue al menos un servicio".into());
    } else {
        for (index, line) in dto.lines.iter().enumerate() {
            let exists = line
                .service_id
                .is_some_and(|id| services.iter().any(|s| s.base.id.value() == id));
            if !exists {
                errors.insert("lines", format!("Renglón {}: servicio inválido", index + 1));
                break;
            }
            if line.quantity == 0 {
                errors.insert(
                    "lines",
                    format!("Renglón {}: la cantidad debe ser mayor que cero", index + 1),
                );
                break;
            }
            if line.unit_price <= 0.0 {
                errors.insert(
                    "lines",
                    format!("Renglón {}: el precio debe ser mayor que cero", index + 1),
                );
                break;
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_client::ClientDto;
    use contracts::domain::a004_service::ServiceDto;
    use contracts::domain::a007_sale::SaleLineDto;
    use contracts::enums::{PaymentMethod, ServiceCategory};

    fn refs() -> (Vec<Client>, Vec<Service>) {
        let clients = vec![Client::new_for_insert(
            1,
            &ClientDto {
                first_name: "Sofía".into(),
                last_name: "Cardona".into(),
                document_id: "1020304050".into(),
                ..ClientDto::default()
            },
        )];
        let services = vec![Service::new_for_insert(
            1,
            &ServiceDto {
                name: "Corte clásico".into(),
                category: Some(ServiceCategory::Corte),
                price: 25_000.0,
                duration_minutes: 30,
                ..ServiceDto::default()
            },
        )];
        (clients, services)
    }

    #[test]
    fn test_line_with_zero_quantity() {
        let (clients, services) = refs();
        let dto = SaleDto {
            client_id: Some(1),
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 12),
            payment: Some(PaymentMethod::Cash),
            lines: vec![SaleLineDto {
                service_id: Some(1),
                description: "Corte clásico".into(),
                quantity: 0,
                unit_price: 25_000.0,
            }],
            ..SaleDto::default()
        };
        let errors = validate(&dto, &clients, &services);
        assert!(errors.get("lines").is_some_and(|m| m.contains("cantidad")));
    }

    #[test]
    fn test_unknown_service_in_line() {
        let (clients, services) = refs();
        let dto = SaleDto {
            client_id: Some(1),
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 12),
            payment: Some(PaymentMethod::Cash),
            lines: vec![SaleLineDto {
                service_id: Some(42),
                description: "Otro".into(),
                quantity: 1,
                unit_price: 10_000.0,
            }],
            ..SaleDto::default()
        };
        let errors = validate(&dto, &clients, &services);
        assert!(errors
            .get("lines")
            .is_some_and(|m| m.contains("servicio inválido")));
    }
}
