use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub u32);

impl ClientId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(ClientId::new)
            .map_err(|e| format!("Id de cliente inválido: {}", e))
    }

    fn from_seq(seq: u32) -> Self {
        Self(seq)
    }

    fn seq(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Cliente del salón
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseRecord<ClientId>,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    /// Documento de identidad
    #[serde(rename = "documentId")]
    pub document_id: String,

    pub email: String,

    pub phone: String,

    pub status: RecordStatus,
}

impl Client {
    fn display_name(first_name: &str, last_name: &str) -> String {
        format!("{} {}", first_name.trim(), last_name.trim())
    }

    pub fn new_for_insert(seq: u32, dto: &ClientDto) -> Self {
        let mut base = BaseRecord::new(
            ClientId::from_seq(seq),
            format!("CLT-{:03}", seq),
            Self::display_name(&dto.first_name, &dto.last_name),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            document_id: dto.document_id.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            status: RecordStatus::Active,
        }
    }

    pub fn update(&mut self, dto: &ClientDto) {
        self.first_name = dto.first_name.clone();
        self.last_name = dto.last_name.clone();
        self.document_id = dto.document_id.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.base.comment = dto.comment.clone();
        self.base.description = Self::display_name(&self.first_name, &self.last_name);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("El apellido no puede estar vacío".into());
        }
        if self.document_id.trim().is_empty() {
            return Err("El documento no puede estar vacío".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "clients"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: Option<u32>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let dto = ClientDto {
            first_name: "Sofía".into(),
            last_name: "Cardona".into(),
            document_id: "1020304050".into(),
            ..ClientDto::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("documentId").is_some());
        assert!(json.get("first_name").is_none());
    }
}
