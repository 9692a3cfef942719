//! Employee Model
//!
//! Wire types for the employee API. Field names follow the stored document
//! layout (`empno`, `ename`, `job`, `sal`, `departamento`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department embedded inside every employee document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub deptno: i64,
    pub dname: String,
    pub loc: String,
}

/// Create employee payload (all fields required)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub empno: i64,
    pub ename: String,
    pub job: String,
    pub sal: f64,
    pub departamento: Department,
}

/// Update employee payload
///
/// One optional slot per mutable field. Absent fields are skipped on
/// serialization, so the serialized value is exactly the merge patch.
/// `empno` is deliberately not part of this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departamento: Option<Department>,
}

impl EmployeeUpdate {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.ename.is_none()
            && self.job.is_none()
            && self.sal.is_none()
            && self.departamento.is_none()
    }
}

/// Per-department salary breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    /// Department name (grouping key)
    pub department: String,
    pub count: u64,
    pub avg_salary: f64,
    pub total_salary: f64,
}

/// Employee statistics summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub total_employees: u64,
    pub by_department: Vec<DepartmentStats>,
    /// Generation time
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_skips_absent_fields() {
        let update = EmployeeUpdate {
            sal: Some(950.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "sal": 950.0 }));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_empty_body() {
        let update: EmployeeUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_ignores_empno() {
        // empno is immutable, an update body carrying it only applies the rest
        let update: EmployeeUpdate =
            serde_json::from_str(r#"{"empno": 1, "job": "ANALYST"}"#).unwrap();
        assert_eq!(update.job.as_deref(), Some("ANALYST"));
        assert!(update.ename.is_none());
    }

    #[test]
    fn test_create_requires_department() {
        let result: Result<EmployeeCreate, _> = serde_json::from_str(
            r#"{"empno": 7369, "ename": "SMITH", "job": "CLERK", "sal": 800}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_create_accepts_integer_salary() {
        let create: EmployeeCreate = serde_json::from_str(
            r#"{"empno": 7369, "ename": "SMITH", "job": "CLERK", "sal": 800,
                "departamento": {"deptno": 20, "dname": "RESEARCH", "loc": "DALLAS"}}"#,
        )
        .unwrap();
        assert_eq!(create.sal, 800.0);
        assert_eq!(create.departamento.deptno, 20);
    }

    #[test]
    fn test_stats_camel_case() {
        let stats = DepartmentStats {
            department: "SALES".to_string(),
            count: 2,
            avg_salary: 1425.0,
            total_salary: 2850.0,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["avgSalary"], 1425.0);
        assert_eq!(value["totalSalary"], 2850.0);
    }
}
