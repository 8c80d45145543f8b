//! Reservation listing.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{ReservationDetails, RoomId, DATE_FORMAT};
use crate::store::ReservationStore;

/// Order in which reservations are listed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// By date, then start time, then id.
    #[default]
    Chronological,
    /// By id, which is creation order.
    Insertion,
}

impl ListOrder {
    /// The SQL `ORDER BY` terms for this order.
    #[must_use]
    pub const fn sql_order_by(self) -> &'static str {
        match self {
            Self::Chronological => "r.date, r.start_time, r.id",
            Self::Insertion => "r.id",
        }
    }
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chronological => write!(f, "chronological"),
            Self::Insertion => write!(f, "insertion"),
        }
    }
}

/// Optional restrictions on a reservation listing.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roombook::operations::ReservationFilter;
///
/// let filter = ReservationFilter::default()
///     .with_date(NaiveDate::from_ymd_opt(2025, 7, 1));
/// assert!(filter.date.is_some());
/// assert!(filter.room.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    /// Only reservations of this room.
    pub room: Option<RoomId>,
    /// Only reservations on this date.
    pub date: Option<NaiveDate>,
}

impl ReservationFilter {
    /// Restricts the listing to one room.
    #[must_use]
    pub const fn with_room(mut self, room: Option<RoomId>) -> Self {
        self.room = room;
        self
    }

    /// Restricts the listing to one date.
    #[must_use]
    pub const fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Returns `true` if `details` passes every restriction.
    #[must_use]
    pub fn matches(&self, details: &ReservationDetails) -> bool {
        let room_matches = self.room.map_or(true, |room| details.room_id == room);
        let date_matches = self
            .date
            .map_or(true, |date| details.date == date.format(DATE_FORMAT).to_string());
        room_matches && date_matches
    }
}

/// Lists reservations in `order`, keeping those that pass `filter`.
///
/// # Errors
///
/// Returns a store error if the listing query fails.
pub fn list_reservations<S: ReservationStore + ?Sized>(
    store: &S,
    order: ListOrder,
    filter: &ReservationFilter,
) -> Result<Vec<ReservationDetails>> {
    let mut details = store.list_reservation_details(order)?;
    details.retain(|d| filter.matches(d));
    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeId, ReservationId};
    use crate::store::MockReservationStore;
    use mockall::predicate::eq;

    fn details(id: i64, room: i64, date: &str) -> ReservationDetails {
        ReservationDetails {
            id: ReservationId::new(id),
            room_id: RoomId::new(room),
            room_name: format!("Room {room}"),
            employee_id: EmployeeId::new(1),
            employee_name: "Ana".into(),
            date: date.into(),
            start_time: "09:00:00".into(),
            end_time: "10:00:00".into(),
        }
    }

    #[test]
    fn test_default_order_is_chronological() {
        assert_eq!(ListOrder::default(), ListOrder::Chronological);
        assert_eq!(ListOrder::Insertion.to_string(), "insertion");
    }

    #[test]
    fn test_order_deserializes_lowercase() {
        let order: ListOrder = serde_yaml::from_str("insertion").unwrap();
        assert_eq!(order, ListOrder::Insertion);
    }

    #[test]
    fn test_filters() {
        let mut store = MockReservationStore::new();
        store
            .expect_list_reservation_details()
            .with(eq(ListOrder::Insertion))
            .returning(|_| {
                Ok(vec![
                    details(1, 1, "2025-07-01"),
                    details(2, 2, "2025-07-01"),
                    details(3, 1, "2025-07-02"),
                ])
            });

        let filter = ReservationFilter::default()
            .with_room(Some(RoomId::new(1)))
            .with_date(NaiveDate::from_ymd_opt(2025, 7, 2));
        let listed = list_reservations(&store, ListOrder::Insertion, &filter).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, ReservationId::new(3));

        let all = list_reservations(&store, ListOrder::Insertion, &ReservationFilter::default())
            .unwrap();
        assert_eq!(all.len(), 3);
    }
}
