//! Meeting rooms.

use serde::{Deserialize, Serialize};

use super::{required_text, RoomId, ValidationError};

/// A stored meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Store-assigned identifier.
    pub id: RoomId,
    /// Display name. Unique by convention only.
    pub name: String,
    /// Number of seats, always positive.
    pub capacity: u32,
    /// Free-text list of equipment.
    pub resources: String,
}

/// The editable fields of a room, validated.
///
/// # Examples
///
/// ```
/// use roombook::RoomDraft;
///
/// let draft = RoomDraft::new("  Sala A ", 8, "projector").unwrap();
/// assert_eq!(draft.name(), "Sala A");
///
/// assert!(RoomDraft::new("", 8, "").is_err());
/// assert!(RoomDraft::new("Sala B", 0, "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    name: String,
    capacity: u32,
    resources: String,
}

impl RoomDraft {
    /// Validates the fields of a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the capacity is zero.
    pub fn new(
        name: &str,
        capacity: u32,
        resources: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name)?;
        if capacity == 0 {
            return Err(ValidationError::new("capacity", "must be positive"));
        }
        Ok(Self {
            name,
            capacity,
            resources: resources.into().trim().to_string(),
        })
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the resources text.
    #[must_use]
    pub fn resources(&self) -> &str {
        &self.resources
    }

    /// Attaches an id, producing the stored form.
    #[must_use]
    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            capacity: self.capacity,
            resources: self.resources,
        }
    }
}
