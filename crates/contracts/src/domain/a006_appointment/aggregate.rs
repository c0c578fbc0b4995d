use crate::domain::a001_user::UserId;
use crate::domain::a003_client::ClientId;
use crate::domain::a004_service::ServiceId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::AppointmentStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub u32);

impl AppointmentId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for AppointmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(AppointmentId::new)
            .map_err(|e| format!("Id de cita inválido: {}", e))
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

/// Cita de un cliente con un empleado para un servicio
///
/// La franja es exacta: fecha más hora de inicio. Las citas nacen
/// pendientes y avanzan por la tabla de transiciones de
/// [`AppointmentStatus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(flatten)]
    pub base: BaseRecord<AppointmentId>,

    #[serde(rename = "clientId")]
    pub client_id: ClientId,

    #[serde(rename = "employeeId")]
    pub employee_id: UserId,

    #[serde(rename = "serviceId")]
    pub service_id: ServiceId,

    pub date: NaiveDate,

    pub time: NaiveTime,

    pub status: AppointmentStatus,
}

impl Appointment {
    fn slot_label(date: NaiveDate, time: NaiveTime) -> String {
        format!("{} {}", date.format("%d/%m/%Y"), time.format("%H:%M"))
    }

    pub fn new_for_insert(seq: u32, dto: &AppointmentDto) -> Self {
        let date = dto.date.unwrap_or_default();
        let time = dto.time.unwrap_or_default();
        let mut base = BaseRecord::new(
            AppointmentId::from_seq(seq),
            format!("CIT-{:03}", seq),
            Self::slot_label(date, time),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            client_id: ClientId::new(dto.client_id.unwrap_or_default()),
            employee_id: UserId::new(dto.employee_id.unwrap_or_default()),
            service_id: ServiceId::new(dto.service_id.unwrap_or_default()),
            date,
            time,
            status: AppointmentStatus::Pending,
        }
    }

    pub fn update(&mut self, dto: &AppointmentDto) {
        if let Some(client_id) = dto.client_id {
            self.client_id = ClientId::new(client_id);
        }
        if let Some(employee_id) = dto.employee_id {
            self.employee_id = UserId::new(employee_id);
        }
        if let Some(service_id) = dto.service_id {
            self.service_id = ServiceId::new(service_id);
        }
        if let Some(date) = dto.date {
            self.date = date;
        }
        if let Some(time) = dto.time {
            self.time = time;
        }
        self.base.comment = dto.comment.clone();
        self.base.description = Self::slot_label(self.date, self.time);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.value() == 0 {
            return Err("La cita requiere un cliente".into());
        }
        if self.employee_id.value() == 0 {
            return Err("La cita requiere un empleado".into());
        }
        if self.service_id.value() == 0 {
            return Err("La cita requiere un servicio".into());
        }
        Ok(())
    }

    /// La cita ocupa la franja indicada; las canceladas liberan el cupo
    pub fn occupies(&self, employee_id: UserId, date: NaiveDate, time: NaiveTime) -> bool {
        self.employee_id == employee_id
            && self.date == date
            && self.time == time
            && self.status != AppointmentStatus::Cancelled
    }
}

impl AggregateRoot for Appointment {
    type Id = AppointmentId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "appointments"
    }

    fn element_name() -> &'static str {
        "Cita"
    }

    fn list_name() -> &'static str {
        "Citas"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppointmentDto {
    pub id: Option<u32>,
    #[serde(rename = "clientId")]
    pub client_id: Option<u32>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<u32>,
    #[serde(rename = "serviceId")]
    pub service_id: Option<u32>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub comment: Option<String>,
}
