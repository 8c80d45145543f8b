//! Reservation command implementation.
//!
//! Create, update and delete go through [`ReservationManager`], so each runs
//! its checks and its write in one immediate transaction. `--dry-run` plans
//! inside the same transaction and rolls it back.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use roombook::model::parse_date;
use roombook::operations::{list_reservations, ReservationFilter};
use roombook::{
    EmployeeId, ExecutionResult, ListOrder, ReservationId, ReservationManager,
    ReservationRequest, RoomId, RoomRef,
};

use crate::error::CliError;
use crate::format::{write_records, OutputFormat};
use crate::utils::{confirm_deletion, load_configuration, open_database, print_id, GlobalOptions};

/// Manage reservations.
#[derive(Args)]
pub struct ReservationCommand {
    #[command(subcommand)]
    pub action: ReservationAction,
}

/// Reservation subcommands.
#[derive(Subcommand)]
pub enum ReservationAction {
    /// Reserve a room and print the reservation id
    Create {
        #[command(flatten)]
        fields: ReservationFields,

        /// Check the reservation without storing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List reservations
    List(ListArgs),

    /// Replace every field of a reservation
    Update {
        /// Reservation id
        id: ReservationId,

        #[command(flatten)]
        fields: ReservationFields,

        /// Check the update without storing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Cancel a reservation
    Delete {
        /// Reservation id
        id: ReservationId,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,

        /// Check the deletion without performing it
        #[arg(long)]
        dry_run: bool,
    },
}

/// The room to reserve, by id or by exact name.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct RoomSelector {
    /// Room id
    #[arg(long, value_name = "ID")]
    pub room: Option<RoomId>,

    /// Room name (lowest id wins when names repeat)
    #[arg(long, value_name = "NAME")]
    pub room_name: Option<String>,
}

impl RoomSelector {
    fn room_ref(&self) -> Result<RoomRef, CliError> {
        match (self.room, &self.room_name) {
            (Some(id), None) => Ok(RoomRef::Id(id)),
            (None, Some(name)) => Ok(RoomRef::Name(name.clone())),
            _ => Err(CliError::InvalidArguments(
                "exactly one of --room and --room-name is required".to_string(),
            )),
        }
    }
}

/// The fields of a reservation.
#[derive(Args)]
pub struct ReservationFields {
    #[command(flatten)]
    pub room: RoomSelector,

    /// Employee id
    #[arg(long, value_name = "ID")]
    pub employee: EmployeeId,

    /// Date as YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Start time as HH:MM or HH:MM:SS
    #[arg(long, value_name = "TIME")]
    pub start: String,

    /// End time as HH:MM or HH:MM:SS (exclusive)
    #[arg(long, value_name = "TIME")]
    pub end: String,
}

impl ReservationFields {
    fn request(&self) -> Result<ReservationRequest, CliError> {
        Ok(ReservationRequest::new(
            self.room.room_ref()?,
            self.employee,
            &self.date,
            &self.start,
            &self.end,
        )?)
    }
}

/// Arguments of `reservation list`.
#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Sort order (default: from configuration)
    #[arg(long, value_enum)]
    pub order: Option<ListOrder>,

    /// Only reservations of this room id
    #[arg(long, value_name = "ID")]
    pub room: Option<RoomId>,

    /// Only reservations on this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,
}

fn parse_date_arg(text: &str) -> Result<NaiveDate, String> {
    parse_date(text).map_err(|e| e.to_string())
}

impl ReservationCommand {
    /// Execute the reservation command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            ReservationAction::Create { fields, dry_run } => {
                let request = fields.request()?;
                let mut manager = ReservationManager::new(&mut db);
                if dry_run {
                    let result = manager.execute_create(request, true)?;
                    report_dry_run(global, &result);
                    return Ok(());
                }
                let id = manager.create(request)?;
                global.status(format_args!("Created reservation {id}"));
                print_id(id)
            }
            ReservationAction::List(args) => {
                let order = args.order.unwrap_or_else(|| config.list_order());
                let filter = ReservationFilter::default()
                    .with_room(args.room)
                    .with_date(args.date);
                let reservations = list_reservations(db.connection(), order, &filter)?;
                write_records(&mut std::io::stdout().lock(), args.format, &reservations)
            }
            ReservationAction::Update {
                id,
                fields,
                dry_run,
            } => {
                let request = fields.request()?;
                let result = ReservationManager::new(&mut db).execute_update(id, request, dry_run)?;
                if dry_run {
                    report_dry_run(global, &result);
                } else {
                    global.status(format_args!("Updated reservation {id}"));
                }
                Ok(())
            }
            ReservationAction::Delete { id, yes, dry_run } => {
                if dry_run {
                    let result = ReservationManager::new(&mut db).execute_delete(id, true)?;
                    report_dry_run(global, &result);
                    return Ok(());
                }
                if !confirm_deletion(yes)? {
                    global.status("Cancelled.");
                    return Ok(());
                }
                ReservationManager::new(&mut db).delete(id)?;
                global.status(format_args!("Deleted reservation {id}"));
                Ok(())
            }
        }
    }
}

/// Print the actions a dry run would have taken.
fn report_dry_run(global: &GlobalOptions, result: &ExecutionResult) {
    global.status("Dry run: no changes were made");
    for warning in &result.warnings {
        global.status(format_args!("Warning: {warning}"));
    }
    for action in &result.actions_taken {
        println!("Would: {action}");
    }
}
