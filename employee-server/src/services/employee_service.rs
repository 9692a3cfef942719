//! Employee Service
//!
//! Business rules on top of [`EmployeeRepository`]: existence checks before
//! mutation, the employee-number uniqueness check, and statistics shaping.

use chrono::Utc;
use shared::{EmployeeCreate, EmployeeStats, EmployeeUpdate};

use crate::db::models::Employee;
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> AppResult<Vec<Employee>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_by_id(&self, empno: i64) -> AppResult<Employee> {
        self.repo
            .find_by_empno(empno)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {} not found", empno)))
    }

    /// Create an employee after checking that `empno` is free
    ///
    /// The check and the insert are separate store calls; a concurrent create
    /// with the same `empno` is stopped by the unique index and surfaces as
    /// `Conflict` too.
    pub async fn create(&self, data: EmployeeCreate) -> AppResult<Employee> {
        if self.repo.count_by_empno(data.empno).await? > 0 {
            return Err(AppError::conflict(format!(
                "Employee with empno {} already exists",
                data.empno
            )));
        }

        let employee = self.repo.insert(data).await?;
        tracing::info!(empno = employee.empno, "Employee created");
        Ok(employee)
    }

    /// Merge the supplied fields and return the updated employee
    pub async fn update(&self, empno: i64, patch: EmployeeUpdate) -> AppResult<Employee> {
        if patch.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        self.get_by_id(empno).await?;
        self.repo.update_fields(empno, patch).await?;

        let employee = self.get_by_id(empno).await?;
        tracing::info!(empno, "Employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, empno: i64) -> AppResult<()> {
        self.get_by_id(empno).await?;

        if !self.repo.delete_by_empno(empno).await? {
            return Err(AppError::internal(format!(
                "Employee {} could not be deleted",
                empno
            )));
        }

        tracing::info!(empno, "Employee deleted");
        Ok(())
    }

    /// Employees of a department; an unknown department is an empty list
    pub async fn get_by_department(&self, deptno: i64) -> AppResult<Vec<Employee>> {
        Ok(self.repo.find_by_department(deptno).await?)
    }

    pub async fn get_stats(&self) -> AppResult<EmployeeStats> {
        let aggregate = self.repo.aggregate_by_department().await?;
        Ok(EmployeeStats {
            total_employees: aggregate.total_employees,
            by_department: aggregate.by_department,
            timestamp: Utc::now(),
        })
    }
}
