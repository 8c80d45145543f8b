//! Property-based tests for operations module.
//!
//! Random create, update and delete sequences are run through the manager
//! and compared against an in-memory model of the stored reservations.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use crate::database::Database;
use crate::model::{EmployeeDraft, ReservationId, ReservationRequest, RoomDraft, RoomId, TimeSlot};
use crate::operations::{ListOrder, ReservationManager};

const ROOMS: usize = 2;

#[derive(Debug, Clone)]
enum Op {
    Create { room: usize, slot: TimeSlot },
    Update { target: usize, room: usize, slot: TimeSlot },
    Delete { target: usize },
}

fn slot_strategy() -> impl Strategy<Value = TimeSlot> {
    (0u32..2, 0u32..(24 * 60 - 1), 1u32..240).prop_map(|(day, start, len)| {
        let end = (start + len).min(24 * 60 - 1);
        let time = |minutes: u32| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 7, 1 + day).unwrap();
        TimeSlot::new(date, time(start), time(end)).unwrap()
    })
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..ROOMS, slot_strategy()).prop_map(|(room, slot)| Op::Create { room, slot }),
        1 => (0usize..16, 0..ROOMS, slot_strategy())
            .prop_map(|(target, room, slot)| Op::Update { target, room, slot }),
        1 => (0usize..16).prop_map(|target| Op::Delete { target }),
    ]
}

fn conflicts(
    model: &[(ReservationId, RoomId, TimeSlot)],
    room: RoomId,
    slot: &TimeSlot,
    exclude: Option<ReservationId>,
) -> bool {
    model
        .iter()
        .any(|(id, r, s)| Some(*id) != exclude && *r == room && s.overlaps(slot))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    // Every admitted write keeps per-room reservations pairwise disjoint,
    // and the manager admits exactly what the model admits.
    #[test]
    fn random_sequences_preserve_disjointness(ops in prop::collection::vec(op_strategy(), 1..24)) {
        let mut db = Database::open_in_memory().unwrap();
        let rooms: Vec<RoomId> = (0..ROOMS)
            .map(|i| {
                let draft = RoomDraft::new(&format!("Room {i}"), 4, "").unwrap();
                Database::create_room(db.connection(), &draft).unwrap()
            })
            .collect();
        let employee = Database::create_employee(
            db.connection(),
            &EmployeeDraft::new("Ana", "ana@example.com", "").unwrap(),
        )
        .unwrap();

        let mut created: Vec<ReservationId> = Vec::new();
        let mut model: Vec<(ReservationId, RoomId, TimeSlot)> = Vec::new();
        let mut manager = ReservationManager::new(&mut db);

        for op in ops {
            match op {
                Op::Create { room, slot } => {
                    let room_id = rooms[room];
                    let expected_conflict = conflicts(&model, room_id, &slot, None);
                    let request = ReservationRequest::from_slot(room_id.into(), employee, slot);
                    match manager.create(request) {
                        Ok(id) => {
                            prop_assert!(!expected_conflict);
                            created.push(id);
                            model.push((id, room_id, slot));
                        }
                        Err(err) => {
                            prop_assert!(expected_conflict);
                            prop_assert!(err.is_conflict());
                        }
                    }
                }
                Op::Update { target, room, slot } => {
                    let Some(&id) = created.get(target) else { continue };
                    let room_id = rooms[room];
                    let present = model.iter().position(|(m, _, _)| *m == id);
                    let request = ReservationRequest::from_slot(room_id.into(), employee, slot);
                    let result = manager.update(id, request);
                    match present {
                        None => prop_assert!(result.unwrap_err().is_not_found()),
                        Some(index) => {
                            if conflicts(&model, room_id, &slot, Some(id)) {
                                prop_assert!(result.unwrap_err().is_conflict());
                            } else {
                                prop_assert!(result.is_ok());
                                model[index] = (id, room_id, slot);
                            }
                        }
                    }
                }
                Op::Delete { target } => {
                    let Some(&id) = created.get(target) else { continue };
                    let present = model.iter().position(|(m, _, _)| *m == id);
                    let result = manager.delete(id);
                    match present {
                        None => prop_assert!(result.unwrap_err().is_not_found()),
                        Some(index) => {
                            prop_assert!(result.is_ok());
                            model.remove(index);
                        }
                    }
                }
            }
        }

        let stored = manager.list(ListOrder::Insertion).unwrap();
        prop_assert_eq!(stored.len(), model.len());

        let slots: Vec<(RoomId, TimeSlot)> = stored
            .iter()
            .map(|d| (d.room_id, TimeSlot::parse(&d.date, &d.start_time, &d.end_time).unwrap()))
            .collect();
        for (i, (room_a, a)) in slots.iter().enumerate() {
            for (room_b, b) in &slots[i + 1..] {
                prop_assert!(room_a != room_b || !a.overlaps(b));
            }
        }
    }
}
