//! Concurrent operation tests for roombook.
//!
//! Each thread opens its own `Database` handle on a shared file, the way
//! separate console processes would, and races to book the same window.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

use common::{request, reservation_rows, seed_employee, seed_room, temp_database_path};
use roombook::database::{Database, DatabaseConfig};
use roombook::{Error, ListOrder, ReservationManager, ReservationRequest, TimeSlot};

const THREADS: usize = 8;

fn open(path: &std::path::Path) -> Database {
    Database::open(DatabaseConfig::new(path).with_busy_timeout(Duration::from_secs(30))).unwrap()
}

#[test]
fn test_same_window_booked_exactly_once() {
    let db_path = temp_database_path();
    let (room, ana) = {
        let db = open(&db_path);
        (seed_room(&db, "A"), seed_employee(&db, "Ana"))
    };

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let path = db_path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut db = open(&path);
                let request =
                    ReservationRequest::new(room.into(), ana, "2025-07-01", "09:00", "10:00")
                        .unwrap();
                barrier.wait();
                ReservationManager::new(&mut db).create(request)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "results: {results:?}");
    for result in &results {
        if let Err(err) = result {
            assert!(
                matches!(err, Error::SchedulingConflict { .. }),
                "unexpected error: {err:?}"
            );
        }
    }

    assert_eq!(reservation_rows(&open(&db_path)), 1);
}

#[test]
fn test_overlapping_windows_keep_room_consistent() {
    let db_path = temp_database_path();
    let (room, ana) = {
        let db = open(&db_path);
        (seed_room(&db, "A"), seed_employee(&db, "Ana"))
    };

    // Staggered half-hour offsets: neighbours overlap, every other one fits.
    let windows: Vec<(String, String)> = (0..THREADS)
        .map(|i| {
            let start = 8 * 60 + 30 * i;
            let end = start + 60;
            (
                format!("{:02}:{:02}", start / 60, start % 60),
                format!("{:02}:{:02}", end / 60, end % 60),
            )
        })
        .collect();

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = windows
        .into_iter()
        .map(|(start, end)| {
            let path = db_path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut db = open(&path);
                let request =
                    ReservationRequest::new(room.into(), ana, "2025-07-01", &start, &end).unwrap();
                barrier.wait();
                ReservationManager::new(&mut db).create(request)
            })
        })
        .collect();

    for handle in handles {
        if let Err(err) = handle.join().unwrap() {
            assert!(err.is_conflict(), "unexpected error: {err:?}");
        }
    }

    let mut db = open(&db_path);
    let stored = ReservationManager::new(&mut db)
        .list(ListOrder::Chronological)
        .unwrap();
    assert!(!stored.is_empty());

    let slots: Vec<TimeSlot> = stored
        .iter()
        .map(|d| TimeSlot::parse(&d.date, &d.start_time, &d.end_time).unwrap())
        .collect();
    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            assert!(!a.overlaps(b), "{a} overlaps {b}");
        }
    }
}

#[test]
fn test_concurrent_readers_during_writes() {
    let db_path = temp_database_path();
    let (room, ana) = {
        let db = open(&db_path);
        (seed_room(&db, "A"), seed_employee(&db, "Ana"))
    };

    let mut handles = Vec::new();

    for _ in 0..4 {
        let path = db_path.clone();
        handles.push(thread::spawn(move || -> Result<(), Error> {
            let mut db = open(&path);
            for _ in 0..10 {
                ReservationManager::new(&mut db).list(ListOrder::Insertion)?;
                thread::sleep(Duration::from_millis(1));
            }
            Ok(())
        }));
    }

    for hour in 8..12 {
        let path = db_path.clone();
        handles.push(thread::spawn(move || -> Result<(), Error> {
            let mut db = open(&path);
            let request = ReservationRequest::new(
                room.into(),
                ana,
                "2025-07-01",
                &format!("{hour:02}:00"),
                &format!("{:02}:00", hour + 1),
            )?;
            ReservationManager::new(&mut db).create(request).map(|_| ())
        }));
    }

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(reservation_rows(&open(&db_path)), 4);
}

#[test]
fn test_lock_wait_past_busy_timeout_is_store_unavailable() {
    let db_path = temp_database_path();
    let config = DatabaseConfig::new(&db_path).with_busy_timeout(Duration::from_secs(1));
    let mut holder = Database::open(config.clone()).unwrap();
    let mut waiter = Database::open(config).unwrap();
    let room = seed_room(&holder, "A");
    let ana = seed_employee(&holder, "Ana");

    let lock = holder.begin_immediate().unwrap();

    let started = Instant::now();
    let err = ReservationManager::new(&mut waiter)
        .create(request(room, ana, "09:00", "10:00"))
        .unwrap_err();
    let waited = started.elapsed();

    assert!(err.is_store_unavailable(), "unexpected error: {err}");
    assert!(waited >= Duration::from_millis(900), "gave up after {waited:?}");
    assert!(waited < Duration::from_secs(10), "waited {waited:?}");

    drop(lock);
    assert_eq!(reservation_rows(&waiter), 0);
}
