//! Employee command implementation.

use clap::{Args, Subcommand};
use roombook::{Database, EmployeeDraft, EmployeeId, Error as LibError};

use crate::error::CliError;
use crate::format::{write_records, OutputFormat};
use crate::utils::{confirm_deletion, load_configuration, open_database, print_id, GlobalOptions};

/// Manage employees.
#[derive(Args)]
pub struct EmployeeCommand {
    #[command(subcommand)]
    pub action: EmployeeAction,
}

/// Employee subcommands.
#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Create an employee and print their id
    Create(EmployeeFields),

    /// List employees
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Replace every field of an employee
    Update {
        /// Employee id
        id: EmployeeId,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Delete an employee that holds no reservations
    Delete {
        /// Employee id
        id: EmployeeId,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// The editable fields of an employee.
#[derive(Args)]
pub struct EmployeeFields {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Department
    #[arg(long, default_value = "")]
    pub department: String,
}

impl EmployeeFields {
    fn draft(&self) -> Result<EmployeeDraft, CliError> {
        EmployeeDraft::new(&self.name, &self.email, self.department.as_str())
            .map_err(|e| CliError::from(LibError::from(e)))
    }
}

impl EmployeeCommand {
    /// Execute the employee command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            EmployeeAction::Create(fields) => {
                let id = Database::create_employee(db.connection(), &fields.draft()?)?;
                global.status(format_args!("Created employee {id}"));
                print_id(id)
            }
            EmployeeAction::List { format } => {
                let employees = Database::list_employees(db.connection())?;
                write_records(&mut std::io::stdout().lock(), format, &employees)
            }
            EmployeeAction::Update { id, fields } => {
                if !Database::update_employee(db.connection(), id, &fields.draft()?)? {
                    return Err(LibError::EmployeeNotFound { id }.into());
                }
                global.status(format_args!("Updated employee {id}"));
                Ok(())
            }
            EmployeeAction::Delete { id, yes } => {
                if !confirm_deletion(yes)? {
                    global.status("Cancelled.");
                    return Ok(());
                }
                db.delete_employee(id)?;
                global.status(format_args!("Deleted employee {id}"));
                Ok(())
            }
        }
    }
}
