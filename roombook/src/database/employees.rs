//! Employee records.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::model::{Employee, EmployeeDraft, EmployeeId};

use super::connection::Database;
use super::query_count;

const INSERT_EMPLOYEE: &str =
    "INSERT INTO employees (name, email, department) VALUES (?1, ?2, ?3)";

const SELECT_EMPLOYEE: &str =
    "SELECT id, name, email, department FROM employees WHERE id = ?1";

const SELECT_ALL_EMPLOYEES: &str =
    "SELECT id, name, email, department FROM employees ORDER BY id";

const UPDATE_EMPLOYEE: &str =
    "UPDATE employees SET name = ?2, email = ?3, department = ?4 WHERE id = ?1";

const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";

const COUNT_EMPLOYEE: &str = "SELECT COUNT(*) FROM employees WHERE id = ?1";

const COUNT_EMPLOYEE_RESERVATIONS: &str =
    "SELECT COUNT(*) FROM reservations WHERE employee_id = ?1";

fn row_to_employee(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        department: row.get(3)?,
    })
}

impl Database {
    /// Stores a new employee and returns their id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_employee(conn: &Connection, draft: &EmployeeDraft) -> Result<EmployeeId> {
        conn.execute(
            INSERT_EMPLOYEE,
            params![draft.name(), draft.email(), draft.department()],
        )?;
        let id = EmployeeId::new(conn.last_insert_rowid());
        log::debug!("created employee {id}");
        Ok(id)
    }

    /// Gets an employee by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_employee(conn: &Connection, id: EmployeeId) -> Result<Option<Employee>> {
        Ok(conn
            .query_row(SELECT_EMPLOYEE, [id], row_to_employee)
            .optional()?)
    }

    /// Lists all employees in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(conn: &Connection) -> Result<Vec<Employee>> {
        let mut stmt = conn.prepare(SELECT_ALL_EMPLOYEES)?;
        let employees = stmt
            .query_map([], row_to_employee)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(employees)
    }

    /// Replaces the fields of an employee. Returns `false` if they do not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_employee(
        conn: &Connection,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<bool> {
        let rows = conn.execute(
            UPDATE_EMPLOYEE,
            params![id, draft.name(), draft.email(), draft.department()],
        )?;
        Ok(rows > 0)
    }

    /// Returns `true` if an employee with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee_exists(conn: &Connection, id: EmployeeId) -> Result<bool> {
        Ok(query_count(conn, COUNT_EMPLOYEE, [id])? > 0)
    }

    /// Deletes an employee that no reservation references.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmployeeNotFound`] if the employee does not exist,
    /// [`Error::EmployeeInUse`] if reservations reference them, or a store
    /// error.
    pub fn delete_employee(&mut self, id: EmployeeId) -> Result<()> {
        self.with_immediate_transaction(|tx| {
            if !Self::employee_exists(tx, id)? {
                return Err(Error::EmployeeNotFound { id });
            }
            let reservations = query_count(tx, COUNT_EMPLOYEE_RESERVATIONS, [id])?;
            if reservations > 0 {
                return Err(Error::EmployeeInUse { id, reservations });
            }
            tx.execute(DELETE_EMPLOYEE, [id])?;
            log::debug!("deleted employee {id}");
            Ok(())
        })
    }
}
