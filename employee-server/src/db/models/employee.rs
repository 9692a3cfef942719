//! Employee Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::{Department, EmployeeCreate};
use surrealdb::RecordId;

/// Employee ID type (store-generated, opaque)
pub type EmployeeId = RecordId;

/// Employee document as stored in SurrealDB
///
/// The record id is exposed to API clients as `_id` ("table:key" string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(
        default,
        rename = "_id",
        alias = "id",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<EmployeeId>,
    pub empno: i64,
    pub ename: String,
    pub job: String,
    pub sal: f64,
    pub departamento: Department,
}

impl Employee {
    /// True when every business field equals the create payload
    pub fn matches(&self, data: &EmployeeCreate) -> bool {
        self.empno == data.empno
            && self.ename == data.ename
            && self.job == data.job
            && self.sal == data.sal
            && self.departamento == data.departamento
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serialized_as_string() {
        let emp = Employee {
            id: Some("rh:abc".parse().unwrap()),
            empno: 7369,
            ename: "SMITH".to_string(),
            job: "CLERK".to_string(),
            sal: 800.0,
            departamento: Department {
                deptno: 20,
                dname: "RESEARCH".to_string(),
                loc: "DALLAS".to_string(),
            },
        };
        let value = serde_json::to_value(&emp).unwrap();
        assert_eq!(value["_id"], "rh:abc");
        assert_eq!(value["departamento"]["dname"], "RESEARCH");

        let back: Employee = serde_json::from_value(value).unwrap();
        assert_eq!(back, emp);
    }
}
