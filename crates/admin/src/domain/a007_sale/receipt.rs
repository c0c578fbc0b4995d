//! Comprobante de venta para impresión
//!
//! La acción de imprimir recibe el registro ya resuelto: todos los ids
//! foráneos vienen convertidos a nombres, de modo que la exportación no
//! necesita más consultas.

use crate::shared::error::MutationError;
use crate::shared::format::format_money;
use anyhow::Context;
use chrono::NaiveDate;
use contracts::domain::a003_client::Client;
use contracts::domain::a004_service::Service;
use contracts::domain::a007_sale::Sale;
use contracts::enums::PaymentMethod;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// Venta resuelta, lista para el comprobante
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReceipt {
    pub code: String,
    pub date: NaiveDate,
    pub client_name: String,
    pub payment: PaymentMethod,
    pub lines: Vec<ReceiptLine>,
    pub total: f64,
}

/// Resuelve los ids foráneos de la venta contra las instantáneas dadas
pub fn resolve_receipt(
    sale: &Sale,
    clients: &[Client],
    services: &[Service],
) -> Result<SaleReceipt, MutationError> {
    let client = clients
        .iter()
        .find(|c| c.base.id == sale.client_id)
        .ok_or_else(|| MutationError::not_found("Cliente", sale.client_id.value().to_string()))?;

    let lines = sale
        .lines
        .iter()
        .map(|line| {
            // el nombre congelado en la venta manda; el catálogo es el
            // respaldo para datos históricos sin descripción
            let description = if line.description.trim().is_empty() {
                services
                    .iter()
                    .find(|s| s.base.id == line.service_id)
                    .map(|s| s.base.description.clone())
                    .unwrap_or_else(|| format!("Servicio {}", line.service_id.value()))
            } else {
                line.description.clone()
            };
            ReceiptLine {
                description,
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.subtotal(),
            }
        })
        .collect();

    Ok(SaleReceipt {
        code: sale.base.code.clone(),
        date: sale.date,
        client_name: client.base.description.clone(),
        payment: sale.payment,
        lines,
        total: sale.total,
    })
}

impl SaleReceipt {
    /// HTML del comprobante que se entrega a la ventana de impresión
    pub fn to_html(&self) -> String {
        let mut rows = String::new();
        for line in &self.lines {
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                line.description,
                line.quantity,
                format_money(line.unit_price),
                format_money(line.subtotal),
            ));
        }

        format!(
            "<html>\n<head><title>Comprobante {code}</title></head>\n<body>\n\
             <h1>AsthroApp</h1>\n\
             <h2>Comprobante {code}</h2>\n\
             <p>Fecha: {date}</p>\n\
             <p>Cliente: {client}</p>\n\
             <p>Medio de pago: {payment}</p>\n\
             <table>\n\
             <tr><th>Servicio</th><th>Cant.</th><th>Precio</th><th>Subtotal</th></tr>\n\
             {rows}\
             </table>\n\
             <h3>Total: {total}</h3>\n\
             </body>\n</html>",
            code = self.code,
            date = self.date.format("%d/%m/%Y"),
            client = self.client_name,
            payment = self.payment.display_name(),
            rows = rows,
            total = format_money(self.total),
        )
    }
}

/// Frontera hacia la utilidad de impresión del anfitrión
pub fn render_receipt(
    sale: &Sale,
    clients: &[Client],
    services: &[Service],
) -> anyhow::Result<String> {
    let receipt = resolve_receipt(sale, clients, services)
        .with_context(|| format!("no se pudo resolver la venta {}", sale.base.code))?;
    Ok(receipt.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a003_client::ClientDto;
    use contracts::domain::a007_sale::{SaleDto, SaleLineDto};
    use contracts::enums::PaymentMethod;

    fn fixtures() -> (Sale, Vec<Client>) {
        let clients = vec![Client::new_for_insert(
            1,
            &ClientDto {
                first_name: "Sofía".into(),
                last_name: "Cardona".into(),
                document_id: "1020304050".into(),
                ..ClientDto::default()
            },
        )];
        let sale = Sale::new_for_insert(
            4,
            &SaleDto {
                client_id: Some(1),
                date: NaiveDate::from_ymd_opt(2025, 3, 12),
                payment: Some(PaymentMethod::Card),
                lines: vec![SaleLineDto {
                    service_id: Some(1),
                    description: "Corte clásico".into(),
                    quantity: 2,
                    unit_price: 25_000.0,
                }],
                ..SaleDto::default()
            },
        );
        (sale, clients)
    }

    #[test]
    fn test_receipt_joins_client_name() {
        let (sale, clients) = fixtures();
        let receipt = resolve_receipt(&sale, &clients, &[]).unwrap();
        assert_eq!(receipt.client_name, "Sofía Cardona");
        assert_eq!(receipt.code, "VNT-004");
        assert_eq!(receipt.lines[0].subtotal, 50_000.0);
    }

    #[test]
    fn test_unknown_client_is_not_found() {
        let (sale, _) = fixtures();
        let err = resolve_receipt(&sale, &[], &[]).unwrap_err();
        assert!(matches!(err, MutationError::NotFound { .. }));
    }

    #[test]
    fn test_receipt_serializes_camel_case_for_the_host() {
        let (sale, clients) = fixtures();
        let receipt = resolve_receipt(&sale, &clients, &[]).unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["clientName"], "Sofía Cardona");
        assert_eq!(json["lines"][0]["unitPrice"], 25_000.0);
    }

    #[test]
    fn test_html_carries_resolved_names_and_totals() {
        let (sale, clients) = fixtures();
        let html = render_receipt(&sale, &clients, &[]).unwrap();
        assert!(html.contains("Comprobante VNT-004"));
        assert!(html.contains("Sofía Cardona"));
        assert!(html.contains("Tarjeta"));
        assert!(html.contains("$ 50.000"));
    }
}
