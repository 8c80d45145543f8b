//! The interactive numeric menu.
//!
//! Operation errors are printed and the menu keeps going. Only end of
//! input or a broken output stream leave the loop.

use std::io::{BufRead, Write};

use roombook::{
    Database, EmployeeDraft, EmployeeId, ListOrder, ReservationId, ReservationManager,
    ReservationRequest, RoomDraft, RoomId, RoomRef, TimeSlot,
};

use super::{Console, ConsoleError, Prompt};
use crate::format::write_table;

const CONFIRM_PROMPT: &str = "Are you sure? (yes/no): ";
const CHOICE_PROMPT: &str = "Choose an option: ";

/// Failure of a single menu action.
enum ActionError {
    Console(ConsoleError),
    Operation(roombook::Error),
}

impl From<ConsoleError> for ActionError {
    fn from(e: ConsoleError) -> Self {
        ActionError::Console(e)
    }
}

impl From<roombook::Error> for ActionError {
    fn from(e: roombook::Error) -> Self {
        ActionError::Operation(e)
    }
}

impl From<roombook::model::ValidationError> for ActionError {
    fn from(e: roombook::model::ValidationError) -> Self {
        ActionError::Operation(e.into())
    }
}

type Action = Result<(), ActionError>;

#[derive(Clone, Copy)]
enum Section {
    Reservations,
    Employees,
    Rooms,
}

impl Section {
    const fn title(self) -> &'static str {
        match self {
            Section::Reservations => "--- Reservations ---",
            Section::Employees => "--- Employees ---",
            Section::Rooms => "--- Rooms ---",
        }
    }
}

/// Menu-driven management of rooms, employees and reservations.
pub struct Menu<'a, R, W> {
    console: Console<R, W>,
    db: &'a mut Database,
    order: ListOrder,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Creates a menu over an open database.
    pub fn new(console: Console<R, W>, db: &'a mut Database, order: ListOrder) -> Self {
        Self { console, db, order }
    }

    /// Consumes the menu and returns its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the main menu until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading or writing the console fails.
    pub fn run(&mut self) -> Result<(), std::io::Error> {
        match self.main_loop() {
            Ok(()) | Err(ConsoleError::Closed) => Ok(()),
            Err(ConsoleError::Io(e)) => Err(e),
        }
    }

    fn main_loop(&mut self) -> Prompt<()> {
        loop {
            self.console.say("")?;
            self.console.say("--- Main menu ---")?;
            self.console.say("1. Manage reservations")?;
            self.console.say("2. Manage employees")?;
            self.console.say("3. Manage rooms")?;
            self.console.say("0. Exit")?;

            match self.console.prompt_number::<u32>(CHOICE_PROMPT)? {
                1 => self.section(Section::Reservations)?,
                2 => self.section(Section::Employees)?,
                3 => self.section(Section::Rooms)?,
                0 => {
                    self.console.say("Goodbye.")?;
                    return Ok(());
                }
                _ => self.console.say("Invalid option.")?,
            }
        }
    }

    fn section(&mut self, section: Section) -> Prompt<()> {
        loop {
            self.console.say("")?;
            self.console.say(section.title())?;
            self.console.say("1. Create")?;
            self.console.say("2. List")?;
            self.console.say("3. Update")?;
            self.console.say("4. Delete")?;
            self.console.say("0. Back")?;

            let choice = self.console.prompt_number::<u32>(CHOICE_PROMPT)?;
            let outcome = match (section, choice) {
                (_, 0) => return Ok(()),
                (Section::Reservations, 1) => self.create_reservation(),
                (Section::Reservations, 2) => self.list_reservations(),
                (Section::Reservations, 3) => self.update_reservation(),
                (Section::Reservations, 4) => self.delete_reservation(),
                (Section::Employees, 1) => self.create_employee(),
                (Section::Employees, 2) => self.list_employees(),
                (Section::Employees, 3) => self.update_employee(),
                (Section::Employees, 4) => self.delete_employee(),
                (Section::Rooms, 1) => self.create_room(),
                (Section::Rooms, 2) => self.list_rooms(),
                (Section::Rooms, 3) => self.update_room(),
                (Section::Rooms, 4) => self.delete_room(),
                _ => {
                    self.console.say("Invalid option.")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(ActionError::Operation(e)) => {
                    log::debug!("menu action failed: {e:?}");
                    self.console.say(format_args!("Error: {e}"))?;
                }
                Err(ActionError::Console(e)) => return Err(e),
            }
        }
    }

    // Reservations

    fn reservation_request(&mut self) -> Result<ReservationRequest, ActionError> {
        let room = self.console.read_line("Room (id or name): ")?;
        let employee: i64 = self.console.prompt_number("Employee id: ")?;
        let date = self.console.prompt_date("Date (YYYY-MM-DD): ")?;
        let start = self.console.prompt_time("start", "Start time (HH:MM): ")?;
        let end = self.console.prompt_time("end", "End time (HH:MM): ")?;

        let slot = TimeSlot::new(date, start, end)?;
        Ok(ReservationRequest::from_slot(
            self.room_ref(&room)?,
            EmployeeId::new(employee),
            slot,
        ))
    }

    /// Reads a numeric answer as an id unless only a room named that way
    /// exists.
    fn room_ref(&self, input: &str) -> Result<RoomRef, ActionError> {
        let conn = self.db.connection();
        match RoomRef::parse(input) {
            RoomRef::Id(id) if !Database::room_exists(conn, id)? => {
                Ok(RoomRef::Id(
                    Database::find_room_id_by_name(conn, input)?.unwrap_or(id),
                ))
            }
            room => Ok(room),
        }
    }

    fn create_reservation(&mut self) -> Action {
        let request = self.reservation_request()?;
        let id = ReservationManager::new(&mut *self.db).create(request)?;
        self.console
            .say(format_args!("Reservation created with id {id}."))?;
        Ok(())
    }

    fn list_reservations(&mut self) -> Action {
        let reservations = ReservationManager::new(&mut *self.db).list(self.order)?;
        self.print_list(&reservations, "No reservations.")
    }

    fn update_reservation(&mut self) -> Action {
        let id = ReservationId::new(self.console.prompt_number("Reservation id: ")?);
        let request = self.reservation_request()?;
        ReservationManager::new(&mut *self.db).update(id, request)?;
        self.console.say("Reservation updated.")?;
        Ok(())
    }

    fn delete_reservation(&mut self) -> Action {
        let id = ReservationId::new(self.console.prompt_number("Reservation id: ")?);
        if self.console.confirm(CONFIRM_PROMPT)? {
            ReservationManager::new(&mut *self.db).delete(id)?;
            self.console.say("Reservation deleted.")?;
        } else {
            self.console.say("Cancelled.")?;
        }
        Ok(())
    }

    // Employees

    fn employee_draft(&mut self) -> Result<EmployeeDraft, ActionError> {
        let name = self.console.read_line("Name: ")?;
        let email = self.console.read_line("Email: ")?;
        let department = self.console.read_line("Department: ")?;
        Ok(EmployeeDraft::new(&name, &email, department)?)
    }

    fn create_employee(&mut self) -> Action {
        let draft = self.employee_draft()?;
        let id = Database::create_employee(self.db.connection(), &draft)?;
        self.console
            .say(format_args!("Employee created with id {id}."))?;
        Ok(())
    }

    fn list_employees(&mut self) -> Action {
        let employees = Database::list_employees(self.db.connection())?;
        self.print_list(&employees, "No employees.")
    }

    fn update_employee(&mut self) -> Action {
        let id = EmployeeId::new(self.console.prompt_number("Employee id: ")?);
        let draft = self.employee_draft()?;
        if Database::update_employee(self.db.connection(), id, &draft)? {
            self.console.say("Employee updated.")?;
            Ok(())
        } else {
            Err(roombook::Error::EmployeeNotFound { id }.into())
        }
    }

    fn delete_employee(&mut self) -> Action {
        let id = EmployeeId::new(self.console.prompt_number("Employee id: ")?);
        if self.console.confirm(CONFIRM_PROMPT)? {
            self.db.delete_employee(id)?;
            self.console.say("Employee deleted.")?;
        } else {
            self.console.say("Cancelled.")?;
        }
        Ok(())
    }

    // Rooms

    fn room_draft(&mut self) -> Result<RoomDraft, ActionError> {
        let name = self.console.read_line("Name: ")?;
        let capacity: u32 = self.console.prompt_number("Capacity: ")?;
        let resources = self.console.read_line("Resources: ")?;
        Ok(RoomDraft::new(&name, capacity, resources)?)
    }

    fn create_room(&mut self) -> Action {
        let draft = self.room_draft()?;
        let id = Database::create_room(self.db.connection(), &draft)?;
        self.console.say(format_args!("Room created with id {id}."))?;
        Ok(())
    }

    fn list_rooms(&mut self) -> Action {
        let rooms = Database::list_rooms(self.db.connection())?;
        self.print_list(&rooms, "No rooms.")
    }

    fn update_room(&mut self) -> Action {
        let id = RoomId::new(self.console.prompt_number("Room id: ")?);
        let draft = self.room_draft()?;
        if Database::update_room(self.db.connection(), id, &draft)? {
            self.console.say("Room updated.")?;
            Ok(())
        } else {
            Err(roombook::Error::RoomNotFound { room: id.into() }.into())
        }
    }

    fn delete_room(&mut self) -> Action {
        let id = RoomId::new(self.console.prompt_number("Room id: ")?);
        if self.console.confirm(CONFIRM_PROMPT)? {
            self.db.delete_room(id)?;
            self.console.say("Room deleted.")?;
        } else {
            self.console.say("Cancelled.")?;
        }
        Ok(())
    }

    fn print_list<T: crate::format::Tabular>(&mut self, items: &[T], empty: &str) -> Action {
        if items.is_empty() {
            self.console.say(empty)?;
            return Ok(());
        }
        write_table(self.console.output(), items).map_err(ConsoleError::Io)?;
        Ok(())
    }
}
