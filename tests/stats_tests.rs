use chrono::{Duration, NaiveDate, NaiveDateTime};

use yard_control::models::{Dock, DockState, Movement, MovementState};
use yard_control::stats::compute_stats;

fn create_mock_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

fn create_mock_dock(id: i64, state: DockState, active: bool) -> Dock {
    Dock {
        id,
        number: id as i32,
        name: None,
        permitted_type: None,
        state,
        reserved_by: None,
        active,
        created_at: create_mock_now(),
    }
}

/// A movement that entered at `gate_in`, waited `wait` minutes after becoming available and spent `at_dock`
/// minutes at the dock.
fn create_completed_movement(id: i64, gate_in: NaiveDateTime, wait: i64, at_dock: i64) -> Movement {
    let mut movement = Movement::at_gate(id, gate_in);
    movement.id = id;
    let available = gate_in + Duration::minutes(5);
    let arrived = available + Duration::minutes(wait);
    movement.enter(MovementState::YardAvailable, available);
    movement.enter(MovementState::AssignedEnRoute, available + Duration::minutes(1));
    movement.enter(MovementState::AtDock, arrived);
    movement.enter(MovementState::LoadReady, arrived + Duration::minutes(at_dock - 1));
    movement.enter(MovementState::DockExit, arrived + Duration::minutes(at_dock));
    movement
}

fn create_open_movement(id: i64, state: MovementState) -> Movement {
    let mut movement = Movement::at_gate(id, create_mock_now() - Duration::hours(1));
    movement.id = id;
    movement.state = state;
    movement
}

#[test]
fn test_average_wait_over_completed_movements() {
    let morning = create_mock_now() - Duration::hours(4);
    let movements = vec![
        create_completed_movement(1, morning, 10, 30),
        create_completed_movement(2, morning + Duration::minutes(40), 20, 10),
    ];

    let stats = compute_stats(&movements, &[], create_mock_now());
    assert_eq!(stats.average_wait_minutes, Some(15.0));
    assert_eq!(stats.average_dock_minutes, Some(20.0));
}

#[test]
fn test_averages_are_none_without_completed_movements() {
    let movements = vec![
        create_open_movement(1, MovementState::YardAvailable),
        create_open_movement(2, MovementState::AtDock),
    ];

    let stats = compute_stats(&movements, &[], create_mock_now());
    assert_eq!(stats.average_wait_minutes, None);
    assert_eq!(stats.average_dock_minutes, None);

    let empty = compute_stats(&[], &[], create_mock_now());
    assert_eq!(empty.trucks_in_yard, 0);
    assert_eq!(empty.average_wait_minutes, None);
}

#[test]
fn test_only_todays_gate_entries_are_averaged() {
    let yesterday = create_mock_now() - Duration::days(1);
    let movements = vec![
        create_completed_movement(1, yesterday, 90, 90),
        create_completed_movement(2, create_mock_now() - Duration::hours(2), 12, 24),
    ];

    let stats = compute_stats(&movements, &[], create_mock_now());
    assert_eq!(stats.average_wait_minutes, Some(12.0));
    assert_eq!(stats.average_dock_minutes, Some(24.0));
}

#[test]
fn test_movements_missing_a_timestamp_are_skipped_per_average() {
    let mut no_availability = create_completed_movement(1, create_mock_now() - Duration::hours(3), 10, 30);
    no_availability.timestamps.available_at = None;
    let complete = create_completed_movement(2, create_mock_now() - Duration::hours(2), 20, 10);

    let stats = compute_stats(&[no_availability, complete], &[], create_mock_now());
    assert_eq!(stats.average_wait_minutes, Some(20.0));
    assert_eq!(stats.average_dock_minutes, Some(20.0));
}

#[test]
fn test_counts_by_state_and_active_docks() {
    let movements = vec![
        create_open_movement(1, MovementState::GateIn),
        create_open_movement(2, MovementState::YardAvailable),
        create_open_movement(3, MovementState::YardAvailable),
        create_open_movement(4, MovementState::Requested),
        create_open_movement(5, MovementState::AssignedEnRoute),
        create_open_movement(6, MovementState::AtDock),
        create_open_movement(7, MovementState::LoadReady),
        create_open_movement(8, MovementState::DockExit),
        create_open_movement(9, MovementState::CdExit),
    ];
    let docks = vec![
        create_mock_dock(1, DockState::Free, true),
        create_mock_dock(2, DockState::Occupied, true),
        create_mock_dock(3, DockState::Occupied, true),
        create_mock_dock(4, DockState::Maintenance, true),
        create_mock_dock(5, DockState::Free, false),
    ];

    let stats = compute_stats(&movements, &docks, create_mock_now());
    assert_eq!(stats.trucks_in_yard, 7);
    assert_eq!(stats.trucks_available, 2);
    assert_eq!(stats.trucks_at_dock, 2);
    assert_eq!(stats.docks_free, 1);
    assert_eq!(stats.docks_occupied, 2);
}
