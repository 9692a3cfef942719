//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::{ApiResponse, EmployeeCreate, EmployeeStats, EmployeeUpdate};

use crate::core::ServerState;
use crate::db::models::Employee;
use crate::utils::validation::{
    parse_path_number, validate_employee_create, validate_employee_update,
};
use crate::utils::{AppResult, with_deadline};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let employees = with_deadline(
        state.config.write_timeout(),
        "list employees",
        state.employees.get_all(),
    )
    .await?;
    Ok(Json(ApiResponse::list(
        employees,
        "Employees retrieved successfully",
    )))
}

/// Get employee by employee number
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let empno = parse_path_number(&id, "employee id")?;
    let employee = with_deadline(
        state.config.read_timeout(),
        "get employee",
        state.employees.get_by_id(empno),
    )
    .await?;
    Ok(Json(ApiResponse::ok(employee, "Employee retrieved successfully")))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Employee>>)> {
    let Json(payload) = payload?;
    validate_employee_create(&payload)?;

    let employee = with_deadline(
        state.config.write_timeout(),
        "create employee",
        state.employees.create(payload),
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(employee, "Employee created successfully")),
    ))
}

/// Update an employee (only the supplied fields)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Employee>>> {
    let empno = parse_path_number(&id, "employee id")?;
    let Json(payload) = payload?;
    validate_employee_update(&payload)?;

    let employee = with_deadline(
        state.config.write_timeout(),
        "update employee",
        state.employees.update(empno, payload),
    )
    .await?;
    Ok(Json(ApiResponse::ok(employee, "Employee updated successfully")))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let empno = parse_path_number(&id, "employee id")?;
    with_deadline(
        state.config.write_timeout(),
        "delete employee",
        state.employees.delete(empno),
    )
    .await?;
    Ok(Json(ApiResponse::ok_empty("Employee deleted successfully")))
}

/// List the employees of one department
pub async fn list_by_department(
    State(state): State<ServerState>,
    Path(deptno): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let deptno = parse_path_number(&deptno, "department number")?;
    let employees = with_deadline(
        state.config.write_timeout(),
        "list department employees",
        state.employees.get_by_department(deptno),
    )
    .await?;
    Ok(Json(ApiResponse::list(
        employees,
        "Department employees retrieved successfully",
    )))
}

/// Per-department statistics
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<EmployeeStats>>> {
    let stats = with_deadline(
        state.config.write_timeout(),
        "employee stats",
        state.employees.get_stats(),
    )
    .await?;
    Ok(Json(ApiResponse::ok(stats, "Statistics retrieved successfully")))
}
