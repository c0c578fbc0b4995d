use crate::domain::a001_user::UserId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseRecord, EntityMetadata};
use crate::enums::RecordStatus;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Nombre del día de la semana para la UI
pub fn weekday_display_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(pub u32);

impl ScheduleId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ScheduleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(ScheduleId::new)
            .map_err(|e| format!("Id de horario inválido: {}", e))
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

/// Franja de trabajo semanal de un empleado
///
/// Una franja cubre un día de la semana con hora de inicio y fin. La
/// disponibilidad de citas consulta estas franjas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(flatten)]
    pub base: BaseRecord<ScheduleId>,

    #[serde(rename = "employeeId")]
    pub employee_id: UserId,

    pub weekday: Weekday,

    #[serde(rename = "startTime")]
    pub start_time: NaiveTime,

    #[serde(rename = "endTime")]
    pub end_time: NaiveTime,

    pub status: RecordStatus,
}

impl Schedule {
    fn slot_label(weekday: Weekday, start: NaiveTime, end: NaiveTime) -> String {
        format!(
            "{} {} a {}",
            weekday_display_name(weekday),
            start.format("%H:%M"),
            end.format("%H:%M")
        )
    }

    pub fn new_for_insert(seq: u32, dto: &ScheduleDto) -> Self {
        let weekday = dto.weekday.unwrap_or(Weekday::Mon);
        let start_time = dto.start_time.unwrap_or_default();
        let end_time = dto.end_time.unwrap_or_default();
        let mut base = BaseRecord::new(
            ScheduleId::from_seq(seq),
            format!("HOR-{:03}", seq),
            Self::slot_label(weekday, start_time, end_time),
        );
        base.comment = dto.comment.clone();

        Self {
            base,
            employee_id: UserId::new(dto.employee_id.unwrap_or_default()),
            weekday,
            start_time,
            end_time,
            status: RecordStatus::Active,
        }
    }

    pub fn update(&mut self, dto: &ScheduleDto) {
        if let Some(employee_id) = dto.employee_id {
            self.employee_id = UserId::new(employee_id);
        }
        if let Some(weekday) = dto.weekday {
            self.weekday = weekday;
        }
        if let Some(start_time) = dto.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = dto.end_time {
            self.end_time = end_time;
        }
        self.base.comment = dto.comment.clone();
        self.base.description = Self::slot_label(self.weekday, self.start_time, self.end_time);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.start_time >= self.end_time {
            return Err("La hora de inicio debe ser anterior a la de fin".into());
        }
        Ok(())
    }

    /// La franja cubre la hora indicada; el fin es exclusivo
    pub fn covers(&self, weekday: Weekday, time: NaiveTime) -> bool {
        self.weekday == weekday && self.start_time <= time && time < self.end_time
    }
}

impl AggregateRoot for Schedule {
    type Id = ScheduleId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "schedules"
    }

    fn element_name() -> &'static str {
        "Horario"
    }

    fn list_name() -> &'static str {
        "Horarios"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScheduleDto {
    pub id: Option<u32>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<u32>,
    pub weekday: Option<Weekday>,
    #[serde(rename = "startTime")]
    pub start_time: Option<NaiveTime>,
    #[serde(rename = "endTime")]
    pub end_time: Option<NaiveTime>,
    pub comment: Option<String>,
}
