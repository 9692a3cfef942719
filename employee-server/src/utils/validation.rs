//! Input validation helpers
//!
//! Checks applied by the HTTP layer before a request reaches the service:
//! path identifiers, and field rules for create/update bodies.

use shared::{Department, EmployeeCreate, EmployeeUpdate};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names: employee name, job title, department name, location
pub const MAX_NAME_LEN: usize = 200;

// ── Path parameters ─────────────────────────────────────────────────

/// Parse a base-10 integer path segment (`{id}`, `{deptno}`).
pub fn parse_path_number(raw: &str, field: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("{field} must be an integer, got '{raw}'")))
}

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, passes [`validate_required_text`].
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

fn validate_salary(sal: f64) -> Result<(), AppError> {
    if !sal.is_finite() || sal < 0.0 {
        return Err(AppError::validation(format!(
            "sal must be a non-negative number, got {sal}"
        )));
    }
    Ok(())
}

pub fn validate_department(dept: &Department) -> Result<(), AppError> {
    if dept.deptno <= 0 {
        return Err(AppError::validation(format!(
            "departamento.deptno must be positive, got {}",
            dept.deptno
        )));
    }
    validate_required_text(&dept.dname, "departamento.dname", MAX_NAME_LEN)?;
    validate_required_text(&dept.loc, "departamento.loc", MAX_NAME_LEN)?;
    Ok(())
}

pub fn validate_employee_create(data: &EmployeeCreate) -> Result<(), AppError> {
    if data.empno <= 0 {
        return Err(AppError::validation(format!(
            "empno must be positive, got {}",
            data.empno
        )));
    }
    validate_required_text(&data.ename, "ename", MAX_NAME_LEN)?;
    validate_required_text(&data.job, "job", MAX_NAME_LEN)?;
    validate_salary(data.sal)?;
    validate_department(&data.departamento)
}

/// Validate the supplied fields of an update. An empty update passes here,
/// it is rejected by the service as `NoFieldsToUpdate`.
pub fn validate_employee_update(data: &EmployeeUpdate) -> Result<(), AppError> {
    validate_optional_text(&data.ename, "ename", MAX_NAME_LEN)?;
    validate_optional_text(&data.job, "job", MAX_NAME_LEN)?;
    if let Some(sal) = data.sal {
        validate_salary(sal)?;
    }
    if let Some(dept) = &data.departamento {
        validate_department(dept)?;
    }
    Ok(())
}
