//! Demo dataset
//!
//! The classic EMP/DEPT sample: 14 employees across ACCOUNTING (10),
//! RESEARCH (20) and SALES (30). Loaded only into an empty collection.

use shared::{Department, EmployeeCreate};

use super::repository::{EmployeeRepository, RepoResult};

/// (empno, ename, job, sal, deptno)
pub const DEMO_EMPLOYEES: &[(i64, &str, &str, f64, i64)] = &[
    (7369, "SMITH", "CLERK", 800.0, 20),
    (7499, "ALLEN", "SALESMAN", 1600.0, 30),
    (7521, "WARD", "SALESMAN", 1250.0, 30),
    (7566, "JONES", "MANAGER", 2975.0, 20),
    (7654, "MARTIN", "SALESMAN", 1250.0, 30),
    (7698, "BLAKE", "MANAGER", 2850.0, 30),
    (7782, "CLARK", "MANAGER", 2450.0, 10),
    (7788, "SCOTT", "ANALYST", 3000.0, 20),
    (7839, "KING", "PRESIDENT", 5000.0, 10),
    (7844, "TURNER", "SALESMAN", 1500.0, 30),
    (7876, "ADAMS", "CLERK", 1100.0, 20),
    (7900, "JAMES", "CLERK", 950.0, 30),
    (7902, "FORD", "ANALYST", 3000.0, 20),
    (7934, "MILLER", "CLERK", 1300.0, 10),
];

fn department(deptno: i64) -> Department {
    let (dname, loc) = match deptno {
        10 => ("ACCOUNTING", "NEW YORK"),
        20 => ("RESEARCH", "DALLAS"),
        _ => ("SALES", "CHICAGO"),
    };
    Department {
        deptno,
        dname: dname.to_string(),
        loc: loc.to_string(),
    }
}

pub fn demo_employees() -> Vec<EmployeeCreate> {
    DEMO_EMPLOYEES
        .iter()
        .map(|&(empno, ename, job, sal, deptno)| EmployeeCreate {
            empno,
            ename: ename.to_string(),
            job: job.to_string(),
            sal,
            departamento: department(deptno),
        })
        .collect()
}

/// Insert the demo dataset when the collection is empty.
///
/// Returns the number of inserted employees (0 if data already existed).
pub async fn seed_if_empty(repo: &EmployeeRepository) -> RepoResult<usize> {
    if repo.count_all().await? > 0 {
        return Ok(0);
    }
    let employees = demo_employees();
    let count = employees.len();
    for employee in employees {
        repo.insert(employee).await?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::Surreal;
    use surrealdb::engine::local::{Db, Mem};

    #[tokio::test]
    async fn test_seed_only_when_empty() {
        let db: Surreal<Db> = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        let repo = EmployeeRepository::new(db, "rh");
        repo.ensure_schema().await.unwrap();

        assert_eq!(seed_if_empty(&repo).await.unwrap(), 14);
        assert_eq!(seed_if_empty(&repo).await.unwrap(), 0);
        assert_eq!(repo.count_all().await.unwrap(), 14);

        let sales = repo.find_by_department(30).await.unwrap();
        assert_eq!(sales.len(), 6);
        assert!(sales.iter().all(|e| e.departamento.loc == "CHICAGO"));
    }
}
