//! Employee Repository
//!
//! Single-collection queries. Owns no business rules: a missing employee is
//! `None`, an unmatched update is `0`, an unmatched delete is `false`.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Employee;
use serde::Deserialize;
use shared::{DepartmentStats, EmployeeCreate, EmployeeUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Debug, Deserialize)]
struct CountRow {
    total: u64,
}

/// One row of the per-department GROUP BY
#[derive(Debug, Deserialize)]
struct DepartmentRow {
    department: String,
    employees: u64,
    avg_salary: f64,
    total_salary: f64,
}

impl From<DepartmentRow> for DepartmentStats {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department: row.department,
            count: row.employees,
            avg_salary: row.avg_salary,
            total_salary: row.total_salary,
        }
    }
}

/// Per-department breakdown plus the collection-wide total
#[derive(Debug, Clone)]
pub struct DepartmentAggregate {
    pub by_department: Vec<DepartmentStats>,
    pub total_employees: u64,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>, table: impl Into<String>) -> Self {
        Self {
            base: BaseRepository::new(db, table),
        }
    }

    /// Define the collection and its indexes (idempotent)
    ///
    /// `empno` carries a UNIQUE index so that two concurrent creates with the
    /// same employee number cannot both be stored.
    pub async fn ensure_schema(&self) -> RepoResult<()> {
        let table = self.base.table();
        let sql = format!(
            r#"DEFINE TABLE IF NOT EXISTS {table} SCHEMALESS;
               DEFINE INDEX IF NOT EXISTS {table}_empno_unique ON TABLE {table} FIELDS empno UNIQUE;
               DEFINE INDEX IF NOT EXISTS {table}_deptno ON TABLE {table} FIELDS departamento.deptno;"#
        );
        self.base.db().query(sql).await?.check()?;
        Ok(())
    }

    /// Find all employees ordered by employee number
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let sql = format!("SELECT * FROM {} ORDER BY empno ASC", self.base.table());
        let employees: Vec<Employee> = self.base.db().query(sql).await?.take(0)?;
        Ok(employees)
    }

    /// Find employee by employee number
    pub async fn find_by_empno(&self, empno: i64) -> RepoResult<Option<Employee>> {
        let sql = format!("SELECT * FROM {} WHERE empno = $empno", self.base.table());
        let mut result = self.base.db().query(sql).bind(("empno", empno)).await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Count employees with the given employee number (0 or 1 in practice)
    pub async fn count_by_empno(&self, empno: i64) -> RepoResult<u64> {
        let sql = format!(
            "SELECT count() AS total FROM {} WHERE empno = $empno GROUP ALL",
            self.base.table()
        );
        let mut result = self.base.db().query(sql).bind(("empno", empno)).await?;
        let rows: Vec<CountRow> = result.take(0)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }

    /// Count all employees
    pub async fn count_all(&self) -> RepoResult<u64> {
        let sql = format!("SELECT count() AS total FROM {} GROUP ALL", self.base.table());
        let rows: Vec<CountRow> = self.base.db().query(sql).await?.take(0)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }

    /// Insert a new employee, returning it with the generated record id
    pub async fn insert(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let empno = data.empno;
        let sql = format!("CREATE {} CONTENT $data RETURN AFTER", self.base.table());

        let created = self
            .base
            .db()
            .query(sql)
            .bind(("data", data))
            .await
            .and_then(|mut result| result.take::<Option<Employee>>(0));

        match created {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) => Err(RepoError::Database("Failed to create employee".to_string())),
            Err(err) => {
                // The unique index rejected the insert: another create with the
                // same empno committed between the caller's check and this write.
                if self.count_by_empno(empno).await? > 0 {
                    return Err(RepoError::Duplicate(format!(
                        "Employee with empno {} already exists",
                        empno
                    )));
                }
                Err(err.into())
            }
        }
    }

    /// Merge the supplied fields into the employee with `empno`
    ///
    /// Returns the number of matched documents.
    pub async fn update_fields(&self, empno: i64, patch: EmployeeUpdate) -> RepoResult<usize> {
        let sql = format!(
            "UPDATE {} MERGE $patch WHERE empno = $empno RETURN AFTER",
            self.base.table()
        );
        let mut result = self
            .base
            .db()
            .query(sql)
            .bind(("patch", patch))
            .bind(("empno", empno))
            .await?;
        let updated: Vec<Employee> = result.take(0)?;
        Ok(updated.len())
    }

    /// Hard delete the employee with `empno`
    ///
    /// Returns whether a document was removed.
    pub async fn delete_by_empno(&self, empno: i64) -> RepoResult<bool> {
        let sql = format!(
            "DELETE {} WHERE empno = $empno RETURN BEFORE",
            self.base.table()
        );
        let mut result = self.base.db().query(sql).bind(("empno", empno)).await?;
        let removed: Vec<Employee> = result.take(0)?;
        if removed.len() > 1 {
            tracing::warn!(empno, removed = removed.len(), "Deleted duplicate employee records");
        }
        Ok(!removed.is_empty())
    }

    /// Find employees of a department ordered by employee number
    pub async fn find_by_department(&self, deptno: i64) -> RepoResult<Vec<Employee>> {
        let sql = format!(
            "SELECT * FROM {} WHERE departamento.deptno = $deptno ORDER BY empno ASC",
            self.base.table()
        );
        let mut result = self.base.db().query(sql).bind(("deptno", deptno)).await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees)
    }

    /// Employee count, average and total salary per department name
    pub async fn aggregate_by_department(&self) -> RepoResult<DepartmentAggregate> {
        let sql = format!(
            r#"SELECT
                    departamento.dname AS department,
                    count() AS employees,
                    math::mean(sal) AS avg_salary,
                    math::sum(sal) AS total_salary
                FROM {}
                GROUP BY department
                ORDER BY department ASC"#,
            self.base.table()
        );
        let rows: Vec<DepartmentRow> = self.base.db().query(sql).await?.take(0)?;
        let total_employees = self.count_all().await?;

        Ok(DepartmentAggregate {
            by_department: rows.into_iter().map(DepartmentStats::from).collect(),
            total_employees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Department;
    use surrealdb::engine::local::Mem;

    async fn repo() -> EmployeeRepository {
        let db: Surreal<Db> = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        let repo = EmployeeRepository::new(db, "rh");
        repo.ensure_schema().await.unwrap();
        repo
    }

    fn employee(empno: i64, ename: &str, sal: f64, deptno: i64, dname: &str) -> EmployeeCreate {
        EmployeeCreate {
            empno,
            ename: ename.to_string(),
            job: "CLERK".to_string(),
            sal,
            departamento: Department {
                deptno,
                dname: dname.to_string(),
                loc: "DALLAS".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let repo = repo().await;
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.count_all().await.unwrap(), 0);
        assert!(repo.find_by_empno(7369).await.unwrap().is_none());
        assert_eq!(repo.count_by_empno(7369).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = repo().await;
        let data = employee(7369, "SMITH", 800.0, 20, "RESEARCH");
        let created = repo.insert(data.clone()).await.unwrap();
        assert!(created.id.is_some());
        assert!(created.matches(&data));

        let found = repo.find_by_empno(7369).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(repo.count_by_empno(7369).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_empno() {
        let repo = repo().await;
        for (empno, name) in [(7900, "JAMES"), (7369, "SMITH"), (7499, "ALLEN")] {
            repo.insert(employee(empno, name, 1000.0, 30, "SALES"))
                .await
                .unwrap();
        }
        let empnos: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|e| e.empno)
            .collect();
        assert_eq!(empnos, vec![7369, 7499, 7900]);
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicate() {
        let repo = repo().await;
        repo.insert(employee(7369, "SMITH", 800.0, 20, "RESEARCH"))
            .await
            .unwrap();
        let err = repo
            .insert(employee(7369, "OTHER", 900.0, 30, "SALES"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(repo.count_by_empno(7369).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_fields_merges() {
        let repo = repo().await;
        repo.insert(employee(7369, "SMITH", 800.0, 20, "RESEARCH"))
            .await
            .unwrap();

        let patch = EmployeeUpdate {
            sal: Some(950.0),
            ..Default::default()
        };
        assert_eq!(repo.update_fields(7369, patch).await.unwrap(), 1);

        let updated = repo.find_by_empno(7369).await.unwrap().unwrap();
        assert_eq!(updated.sal, 950.0);
        assert_eq!(updated.ename, "SMITH");
        assert_eq!(updated.job, "CLERK");
        assert_eq!(updated.departamento.dname, "RESEARCH");
    }

    #[tokio::test]
    async fn test_update_fields_replaces_department() {
        let repo = repo().await;
        repo.insert(employee(7369, "SMITH", 800.0, 20, "RESEARCH"))
            .await
            .unwrap();

        let dept = Department {
            deptno: 10,
            dname: "ACCOUNTING".to_string(),
            loc: "NEW YORK".to_string(),
        };
        let patch = EmployeeUpdate {
            departamento: Some(dept.clone()),
            ..Default::default()
        };
        repo.update_fields(7369, patch).await.unwrap();

        let updated = repo.find_by_empno(7369).await.unwrap().unwrap();
        assert_eq!(updated.departamento, dept);
        assert_eq!(updated.sal, 800.0);
    }

    #[tokio::test]
    async fn test_update_fields_no_match() {
        let repo = repo().await;
        let patch = EmployeeUpdate {
            job: Some("ANALYST".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.update_fields(1, patch).await.unwrap(), 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_empno() {
        let repo = repo().await;
        repo.insert(employee(7369, "SMITH", 800.0, 20, "RESEARCH"))
            .await
            .unwrap();

        assert!(repo.delete_by_empno(7369).await.unwrap());
        assert!(repo.find_by_empno(7369).await.unwrap().is_none());
        assert!(!repo.delete_by_empno(7369).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_by_department() {
        let repo = repo().await;
        repo.insert(employee(7902, "FORD", 3000.0, 20, "RESEARCH"))
            .await
            .unwrap();
        repo.insert(employee(7499, "ALLEN", 1600.0, 30, "SALES"))
            .await
            .unwrap();
        repo.insert(employee(7369, "SMITH", 800.0, 20, "RESEARCH"))
            .await
            .unwrap();

        let research: Vec<i64> = repo
            .find_by_department(20)
            .await
            .unwrap()
            .iter()
            .map(|e| e.empno)
            .collect();
        assert_eq!(research, vec![7369, 7902]);
        assert!(repo.find_by_department(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_aggregate_by_department() {
        let repo = repo().await;
        repo.insert(employee(7369, "SMITH", 800.0, 20, "RESEARCH"))
            .await
            .unwrap();
        repo.insert(employee(7902, "FORD", 3000.0, 20, "RESEARCH"))
            .await
            .unwrap();
        repo.insert(employee(7499, "ALLEN", 1600.0, 30, "SALES"))
            .await
            .unwrap();
        repo.insert(employee(7839, "KING", 5000.0, 10, "ACCOUNTING"))
            .await
            .unwrap();

        let agg = repo.aggregate_by_department().await.unwrap();
        assert_eq!(agg.total_employees, 4);

        let names: Vec<&str> = agg
            .by_department
            .iter()
            .map(|d| d.department.as_str())
            .collect();
        assert_eq!(names, vec!["ACCOUNTING", "RESEARCH", "SALES"]);

        let research = &agg.by_department[1];
        assert_eq!(research.count, 2);
        assert_eq!(research.total_salary, 3800.0);
        assert_eq!(research.avg_salary, 1900.0);

        let sum: u64 = agg.by_department.iter().map(|d| d.count).sum();
        assert_eq!(sum, agg.total_employees);
    }
}
