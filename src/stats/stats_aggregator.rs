use chrono::NaiveDateTime;
use crate::models::{Dock, DockState, Movement, MovementState, YardStats};

/// Derives the dashboard counters from a snapshot of the yard.
///
/// Averages only look at today's completed movements: gate entry on the calendar day of `now` and a dock
/// exit recorded. Each average skips movements missing one of its two timestamps and is `None` when nothing
/// is left to average. Dock counts only consider active docks.
pub fn compute_stats(movements: &[Movement], docks: &[Dock], now: NaiveDateTime) -> YardStats {
    let count_in = |states: &[MovementState]| movements.iter().filter(|m| states.contains(&m.state)).count();

    let today = now.date();
    let completed_today: Vec<&Movement> = movements
        .iter()
        .filter(|m| m.timestamps.gate_in_at.map_or(false, |t| t.date() == today))
        .filter(|m| m.timestamps.dock_exit_at.is_some())
        .collect();

    let active_docks = docks.iter().filter(|dock| dock.active);
    let (docks_free, docks_occupied) = active_docks.fold((0, 0), |(free, occupied), dock| match dock.state {
        DockState::Free => (free + 1, occupied),
        DockState::Occupied => (free, occupied + 1),
        DockState::Maintenance => (free, occupied),
    });

    YardStats {
        trucks_in_yard: count_in(&MovementState::ACTIVE),
        trucks_available: count_in(&[MovementState::YardAvailable]),
        trucks_at_dock: count_in(&[MovementState::AtDock, MovementState::LoadReady]),
        docks_free,
        docks_occupied,
        average_wait_minutes: mean(completed_today.iter().filter_map(|m| m.wait_minutes())),
        average_dock_minutes: mean(completed_today.iter().filter_map(|m| m.dock_minutes())),
    }
}

fn mean(samples: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = samples.fold((0.0, 0usize), |(sum, count), sample| (sum + sample, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
