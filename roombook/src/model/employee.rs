//! Employees who hold reservations.

use serde::{Deserialize, Serialize};

use super::{required_text, EmployeeId, ValidationError};

/// A stored employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Free-text department.
    pub department: String,
}

/// The editable fields of an employee, validated.
///
/// # Examples
///
/// ```
/// use roombook::EmployeeDraft;
///
/// assert!(EmployeeDraft::new("Ana", "ana@example.com", "Sales").is_ok());
/// assert!(EmployeeDraft::new("Ana", "ana.example.com", "Sales").is_err());
/// assert!(EmployeeDraft::new("Ana", "@example.com", "Sales").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    name: String,
    email: String,
    department: String,
}

impl EmployeeDraft {
    /// Validates the fields of an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the email lacks a local
    /// part, an `@`, or a domain part.
    pub fn new(
        name: &str,
        email: &str,
        department: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name)?;
        let email = validate_email(email)?;
        Ok(Self {
            name,
            email,
            department: department.into().trim().to_string(),
        })
    }

    /// Returns the employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Attaches an id, producing the stored form.
    #[must_use]
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            department: self.department,
        }
    }
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = required_text("email", email)?;
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(email)
        }
        _ => Err(ValidationError::new(
            "email",
            format!("'{email}' is not of the form local@domain"),
        )),
    }
}
