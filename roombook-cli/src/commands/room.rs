//! Room command implementation.

use clap::{Args, Subcommand};
use roombook::{Database, Error as LibError, RoomDraft, RoomId};

use crate::error::CliError;
use crate::format::{write_records, OutputFormat};
use crate::utils::{confirm_deletion, load_configuration, open_database, print_id, GlobalOptions};

/// Manage rooms.
#[derive(Args)]
pub struct RoomCommand {
    #[command(subcommand)]
    pub action: RoomAction,
}

/// Room subcommands.
#[derive(Subcommand)]
pub enum RoomAction {
    /// Create a room and print its id
    Create(RoomFields),

    /// List rooms
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Replace every field of a room
    Update {
        /// Room id
        id: RoomId,

        #[command(flatten)]
        fields: RoomFields,
    },

    /// Delete a room that no reservation references
    Delete {
        /// Room id
        id: RoomId,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// The editable fields of a room.
#[derive(Args)]
pub struct RoomFields {
    /// Room name
    #[arg(long)]
    pub name: String,

    /// Number of seats
    #[arg(long)]
    pub capacity: u32,

    /// Free-text list of equipment
    #[arg(long, default_value = "")]
    pub resources: String,
}

impl RoomFields {
    fn draft(&self) -> Result<RoomDraft, CliError> {
        RoomDraft::new(&self.name, self.capacity, self.resources.as_str())
            .map_err(|e| CliError::from(LibError::from(e)))
    }
}

impl RoomCommand {
    /// Execute the room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            RoomAction::Create(fields) => {
                let id = Database::create_room(db.connection(), &fields.draft()?)?;
                global.status(format_args!("Created room {id}"));
                print_id(id)
            }
            RoomAction::List { format } => {
                let rooms = Database::list_rooms(db.connection())?;
                write_records(&mut std::io::stdout().lock(), format, &rooms)
            }
            RoomAction::Update { id, fields } => {
                if !Database::update_room(db.connection(), id, &fields.draft()?)? {
                    return Err(LibError::RoomNotFound { room: id.into() }.into());
                }
                global.status(format_args!("Updated room {id}"));
                Ok(())
            }
            RoomAction::Delete { id, yes } => {
                if !confirm_deletion(yes)? {
                    global.status("Cancelled.");
                    return Ok(());
                }
                db.delete_room(id)?;
                global.status(format_args!("Deleted room {id}"));
                Ok(())
            }
        }
    }
}
