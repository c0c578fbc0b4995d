use crate::shared::error::FieldErrors;
use contracts::domain::a001_user::User;
use contracts::domain::a005_schedule::ScheduleDto;

/// Validación del borrador de horario contra la plantilla de empleados
pub fn validate(dto: &ScheduleDto, employees: &[User]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match dto.employee_id {
        None => {
            errors.insert("employeeId", "Seleccione un empleado".into());
        }
        Some(employee_id) => {
            if !employees.iter().any(|u| u.base.id.value() == employee_id) {
                errors.insert("employeeId", "El empleado seleccionado no existe".into());
            }
        }
    }

    if dto.weekday.is_none() {
        errors.insert("weekday", "Seleccione un día de la semana".into());
    }

    match (dto.start_time, dto.end_time) {
        (None, _) => {
            errors.insert("startTime", "La hora de inicio es obligatoria".into());
        }
        (_, None) => {
            errors.insert("endTime", "La hora de fin es obligatoria".into());
        }
        (Some(start), Some(end)) if start >= end => {
            errors.insert(
                "endTime",
                "La hora de fin debe ser posterior a la de inicio".into(),
            );
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};
    use contracts::domain::a001_user::UserDto;

    fn employees() -> Vec<User> {
        vec![User::new_for_insert(
            2,
            &UserDto {
                first_name: "Julián".into(),
                last_name: "Pardo".into(),
                email: "julian@asthro.co".into(),
                role_id: Some(2),
                ..UserDto::default()
            },
        )]
    }

    #[test]
    fn test_window_must_be_ordered() {
        let dto = ScheduleDto {
            employee_id: Some(2),
            weekday: Some(Weekday::Mon),
            start_time: NaiveTime::from_hms_opt(10, 0, 0),
            end_time: NaiveTime::from_hms_opt(10, 0, 0),
            ..ScheduleDto::default()
        };
        let errors = validate(&dto, &employees());
        assert!(errors.contains_key("endTime"));
    }

    #[test]
    fn test_unknown_employee() {
        let dto = ScheduleDto {
            employee_id: Some(77),
            weekday: Some(Weekday::Mon),
            start_time: NaiveTime::from_hms_opt(8, 0, 0),
            end_time: NaiveTime::from_hms_opt(18, 0, 0),
            ..ScheduleDto::default()
        };
        let errors = validate(&dto, &employees());
        assert!(errors.contains_key("employeeId"));
    }
}
