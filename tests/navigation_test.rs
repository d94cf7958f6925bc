// Test navigation transitions and toggled-cell tracking across the board

use fretboard_wasm::models::{wrap_fret, CellId, FretPosition, STRING_COUNT};
use fretboard_wasm::state::{ArrowKey, FretboardState};

/// Helper to run a script of arrow presses
fn press(state: &mut FretboardState, script: &[ArrowKey]) {
    for &key in script {
        state.navigate(key);
    }
}

/// Helper to press one key repeatedly
fn press_n(state: &mut FretboardState, key: ArrowKey, times: usize) {
    for _ in 0..times {
        state.navigate(key);
    }
}

/// A fixed walk that hits both string edges and wraps the fret range in
/// both directions
fn long_walk() -> Vec<ArrowKey> {
    use ArrowKey::*;
    let mut script = vec![Up, Up, Up, Up, Up, Left, Left, Left];
    script.extend([Down; 7]);
    script.extend([Right; 30]);
    script.extend([Left; 60]);
    script.extend([Up, Right, Down, Left, Up, Up, Right, Right, Down]);
    script
}

#[test]
fn test_starting_position() {
    let state = FretboardState::new();
    assert_eq!(state.current, FretPosition::new(4, 12));
    assert_eq!(state.continuous_fret, 12);
}

#[test]
fn test_single_right_steps_one_fret() {
    let mut state = FretboardState::new();
    state.navigate(ArrowKey::Right);
    assert_eq!(state.current, FretPosition::new(4, 13));
}

#[test]
fn test_fourteen_rights_wrap_past_the_board_edge() {
    // From fret 12, fourteen steps right pass fret 24 and come out at 2.
    let mut state = FretboardState::new();
    press_n(&mut state, ArrowKey::Right, 14);
    assert_eq!(state.continuous_fret, 26);
    assert_eq!(state.current, FretPosition::new(4, 2));
}

#[test]
fn test_left_wraps_below_fret_one() {
    let mut state = FretboardState::new();
    press_n(&mut state, ArrowKey::Left, 12);
    assert_eq!(state.current.fret, 24);
    assert_eq!(state.continuous_fret, 0);

    press_n(&mut state, ArrowKey::Left, 24);
    assert_eq!(state.current.fret, 24);
    assert_eq!(state.continuous_fret, -24);
}

#[test]
fn test_horizontal_round_trip_from_any_fret() {
    let mut state = FretboardState::new();
    for offset in 0..30 {
        let before = (state.current, state.continuous_fret);
        state.navigate(ArrowKey::Right);
        state.navigate(ArrowKey::Left);
        assert_eq!((state.current, state.continuous_fret), before, "offset {}", offset);
        // Walk somewhere new for the next iteration.
        state.navigate(ArrowKey::Right);
    }
}

#[test]
fn test_vertical_round_trip_away_from_the_edges() {
    // Up then Down restores the state whenever the string move is not
    // clamped; strings 1..=4 can always take the Up.
    for start_string in 1..=4 {
        let mut state = FretboardState::new();
        press_n(&mut state, ArrowKey::Up, 4 - start_string);
        let before = (state.current, state.continuous_fret);

        state.navigate(ArrowKey::Up);
        state.navigate(ArrowKey::Down);
        assert_eq!(
            (state.current, state.continuous_fret),
            before,
            "start string {}",
            start_string
        );
    }
}

#[test]
fn test_clamp_at_top_string_breaks_the_round_trip() {
    let mut state = FretboardState::new();
    press_n(&mut state, ArrowKey::Up, 4);
    assert_eq!(state.current.string, 0);

    // The Up is clamped but still moves the fret counter; the Down then
    // moves the string for real.
    state.navigate(ArrowKey::Up);
    assert_eq!(state.current.string, 0);
    state.navigate(ArrowKey::Down);
    assert_eq!(state.current.string, 1);
}

#[test]
fn test_wrap_invariant_holds_on_a_long_walk() {
    let mut state = FretboardState::new();
    for (step, &key) in long_walk().iter().enumerate() {
        state.navigate(key);
        assert_eq!(
            state.current.fret,
            wrap_fret(state.continuous_fret),
            "fret invariant broken at step {}",
            step
        );
        assert!((1..=24).contains(&state.current.fret));
        assert!(state.current.string < STRING_COUNT);
    }
}

#[test]
fn test_toggled_cell_rides_up_then_down() {
    let mut state = FretboardState::new();
    state.toggle_cell(CellId::new(2, 10));

    state.navigate(ArrowKey::Up);
    assert_eq!(state.toggled_cells(), vec![CellId::new(1, 10)]);

    state.navigate(ArrowKey::Down);
    assert_eq!(state.toggled_cells(), vec![CellId::new(2, 10)]);
}

#[test]
fn test_toggled_cell_wraps_across_the_fret_seam() {
    let mut state = FretboardState::new();
    state.toggle_cell(CellId::new(3, 24));

    state.navigate(ArrowKey::Right);
    assert_eq!(state.toggled_cells(), vec![CellId::new(3, 1)]);

    state.navigate(ArrowKey::Left);
    assert_eq!(state.toggled_cells(), vec![CellId::new(3, 24)]);

    state.navigate(ArrowKey::Left);
    assert_eq!(state.toggled_cells(), vec![CellId::new(3, 23)]);
}

#[test]
fn test_toggled_cells_drop_off_both_edges() {
    let mut state = FretboardState::new();
    state.toggle_cell(CellId::new(0, 12));
    state.toggle_cell(CellId::new(5, 12));
    state.toggle_cell(CellId::new(2, 12));

    // Up pushes the string-0 cell off the board.
    state.navigate(ArrowKey::Up);
    assert_eq!(
        state.toggled_cells(),
        vec![CellId::new(1, 12), CellId::new(4, 12)]
    );

    // Two Downs push the old string-5 cell (now 4 -> 5 -> 6) off as well.
    state.navigate(ArrowKey::Down);
    state.navigate(ArrowKey::Down);
    assert_eq!(state.toggled_cells(), vec![CellId::new(3, 12)]);
}

#[test]
fn test_toggles_stay_on_board_through_the_long_walk() {
    let mut state = FretboardState::new();
    state.toggle_cell(CellId::new(0, 1));
    state.toggle_cell(CellId::new(2, 13));
    state.toggle_cell(CellId::new(5, 24));

    for &key in &long_walk() {
        state.navigate(key);
        for cell in state.toggled_cells() {
            assert!(cell.on_board(), "cell {:?} left the board", cell);
        }
    }
}

#[test]
fn test_untoggling_removes_the_marker_for_good() {
    let mut state = FretboardState::new();
    let cell = CellId::new(1, 7);
    state.toggle_cell(cell);
    state.toggle_cell(cell);
    state.navigate(ArrowKey::Right);
    state.navigate(ArrowKey::Left);
    assert!(state.toggled_cells().is_empty());
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut state = FretboardState::new();
    state.toggle_cell(CellId::new(4, 3));
    state.toggle_cell(CellId::new(1, 20));
    press(&mut state, &[ArrowKey::Up, ArrowKey::Right]);

    let snapshot = state.snapshot();
    let json = serde_json::to_string(&snapshot).expect("snapshot should serialize");
    let parsed: fretboard_wasm::state::StateSnapshot =
        serde_json::from_str(&json).expect("snapshot should deserialize");

    assert_eq!(parsed.current, snapshot.current);
    assert_eq!(parsed.continuous_fret, snapshot.continuous_fret);
    assert_eq!(parsed.tuning, snapshot.tuning);
    assert_eq!(parsed.toggled, snapshot.toggled);
}

#[test]
fn test_snapshots_report_toggles_sorted_and_stable() {
    let mut state = FretboardState::new();
    state.toggle_cell(CellId::new(5, 1));
    state.toggle_cell(CellId::new(0, 24));
    state.toggle_cell(CellId::new(3, 7));

    let first = serde_json::to_string(&state.snapshot()).unwrap();
    let second = serde_json::to_string(&state.snapshot()).unwrap();
    assert_eq!(first, second);

    let toggled = state.snapshot().toggled;
    let mut sorted = toggled.clone();
    sorted.sort();
    assert_eq!(toggled, sorted);
}
