// Test overlay placement: row offsets, instance tiling, and cell content

use fretboard_wasm::layout::{
    BgVariant, DisplayList, LayoutConfig, LayoutEngine, OverlayVariant,
};
use fretboard_wasm::models::{KeyName, Tuning};
use fretboard_wasm::state::{ArrowKey, FretboardState};

/// Measurements with distinct values so transposed axes fail loudly
fn test_config() -> LayoutConfig {
    LayoutConfig {
        cell_width: 50.0,
        cell_height: 30.0,
        base_x: 400.0,
        base_y: 240.0,
    }
}

fn layout(state: &FretboardState) -> DisplayList {
    LayoutEngine::new().compute_layout(state, &test_config())
}

/// Index of the cycle-0 instance of a variant in the overlay list
fn cycle_zero(variant: OverlayVariant) -> usize {
    match variant {
        OverlayVariant::Primary => 10,
        OverlayVariant::Secondary => 11,
    }
}

#[test]
fn test_twenty_one_instances_tile_the_cycles() {
    let list = layout(&FretboardState::new());
    assert_eq!(list.overlays.len(), 21);

    for (i, overlay) in list.overlays.iter().enumerate() {
        let expected_variant = if i % 2 == 0 {
            OverlayVariant::Primary
        } else {
            OverlayVariant::Secondary
        };
        assert_eq!(overlay.variant, expected_variant, "instance {}", i);
        assert_eq!(overlay.cycle_offset, (i / 2) as i32 - 5, "instance {}", i);
        assert_eq!(overlay.rows.len(), 6, "instance {}", i);
    }

    // Secondary stacks above primary.
    assert!(list.overlays[1].z_index > list.overlays[0].z_index);
}

#[test]
fn test_same_variant_neighbors_sit_one_cycle_apart() {
    let list = layout(&FretboardState::new());
    let step = 12.0 * test_config().cell_width;

    for i in 0..list.overlays.len() - 2 {
        let a = &list.overlays[i].rows[0];
        let b = &list.overlays[i + 2].rows[0];
        assert_eq!(b.left - a.left, step, "instances {} and {}", i, i + 2);
        assert_eq!(b.top, a.top);
    }
}

#[test]
fn test_primary_row_offsets_at_the_start_position() {
    let list = layout(&FretboardState::new());
    let overlay = &list.overlays[cycle_zero(OverlayVariant::Primary)];
    assert_eq!(overlay.cycle_offset, 0);

    // String 0 row: start -6, global shift +2, 5 cells wide.
    let row = &overlay.rows[0];
    assert_eq!(row.left, 400.0 + (-6.0 + 2.0 + 2.0) * 50.0);
    assert_eq!(row.top, 240.0 + (0.0 - 4.0) * 30.0);
    assert_eq!(row.cells.len(), 5);

    // String 5 row: start -1, 7 cells; first cell is fret 13.
    let row = &overlay.rows[5];
    assert_eq!(row.left, 400.0 + (-1.0 + 2.0 + 3.0) * 50.0);
    assert_eq!(row.top, 240.0 + 30.0);
    assert_eq!(row.cells[0].fret_number, 13);
    assert_eq!(row.cells[6].fret_number, 19);
}

#[test]
fn test_secondary_row_offsets_at_the_start_position() {
    let list = layout(&FretboardState::new());
    let overlay = &list.overlays[cycle_zero(OverlayVariant::Secondary)];
    assert_eq!(overlay.cycle_offset, 0);

    let row = &overlay.rows[1];
    assert_eq!(row.left, 400.0 + (-1.0 + 2.0 + 2.0) * 50.0);
    assert_eq!(row.top, 240.0 + (1.0 - 4.0) * 30.0);
    assert_eq!(row.cells.len(), 5);
}

#[test]
fn test_anchor_follows_horizontal_navigation_and_wraps() {
    let mut state = FretboardState::new();
    let at_start = layout(&state).overlays[10].rows[2].left;

    state.navigate(ArrowKey::Right);
    let one_right = layout(&state).overlays[10].rows[2].left;
    assert_eq!(one_right - at_start, test_config().cell_width);

    for _ in 0..23 {
        state.navigate(ArrowKey::Right);
    }
    let full_cycle = layout(&state).overlays[10].rows[2].left;
    assert_eq!(full_cycle, at_start);
}

#[test]
fn test_rows_track_the_current_string_vertically() {
    let mut state = FretboardState::new();
    state.navigate(ArrowKey::Up); // string 4 -> 3

    let list = layout(&state);
    let overlay = &list.overlays[10];
    assert_eq!(overlay.rows[3].top, 240.0);
    assert_eq!(overlay.rows[0].top, 240.0 - 3.0 * 30.0);
    assert_eq!(overlay.rows[5].top, 240.0 + 2.0 * 30.0);
}

#[test]
fn test_all_fourths_nudges_the_top_two_rows_left() {
    let standard = FretboardState::new();
    let mut fourths = FretboardState::new();
    fourths.tuning = Tuning::AllFourths;

    let std_list = layout(&standard);
    let fourths_list = layout(&fourths);

    for string in 0..6 {
        let delta = fourths_list.overlays[10].rows[string].left
            - std_list.overlays[10].rows[string].left;
        let expected = if string <= 1 { -50.0 } else { 0.0 };
        assert_eq!(delta, expected, "string {}", string);
    }
}

#[test]
fn test_cell_sequences_are_contiguous_alternating_columns() {
    let list = layout(&FretboardState::new());
    for overlay in &list.overlays {
        for row in &overlay.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                assert_eq!(cell.fret_number, row.cells[0].fret_number + i as i32);
                assert_eq!(cell.is_center, i % 2 == 0);
                assert!(!cell.is_empty);
                // Dimmed notes default off: only center columns show text.
                assert_eq!(cell.show_text, cell.is_center);
            }
        }
    }
}

#[test]
fn test_dimmed_toggle_reveals_every_column() {
    let mut state = FretboardState::new();
    state.show_dimmed_notes = true;
    let list = layout(&state);
    for overlay in &list.overlays {
        for row in &overlay.rows {
            assert!(row.cells.iter().all(|c| c.show_text));
        }
    }
}

#[test]
fn test_start_position_shows_the_natural_notes() {
    // At the starting position the staggered center columns land exactly on
    // the white keys, so the pass estimates C and spells without accidentals.
    let list = layout(&FretboardState::new());
    assert_eq!(list.estimate.key, KeyName::C);

    for overlay in &list.overlays {
        for row in &overlay.rows {
            for cell in row.cells.iter().filter(|c| c.is_center) {
                assert!(
                    ["C", "D", "E", "F", "G", "A", "B"].contains(&cell.display_text.as_str()),
                    "unexpected center note {}",
                    cell.display_text
                );
            }
        }
    }
}

#[test]
fn test_all_instances_share_one_flat_side_estimate() {
    // One step right shifts every center note up a semitone; the pass
    // estimates C# (displayed Db) and every instance spells flat.
    let mut state = FretboardState::new();
    state.navigate(ArrowKey::Right);

    let list = layout(&state);
    assert_eq!(list.estimate.key, KeyName::CSharp);
    assert_eq!(list.estimate.display_key, KeyName::DFlat);

    for overlay in &list.overlays {
        for row in &overlay.rows {
            for cell in &row.cells {
                assert!(
                    !cell.display_text.contains('#'),
                    "sharp spelling {} leaked into a Db pass",
                    cell.display_text
                );
            }
        }
    }
}

#[test]
fn test_degree_toggle_relabels_diatonic_cells() {
    let mut state = FretboardState::new();
    state.show_degrees = true;

    let list = layout(&state);
    // Start position, C estimate: every center note is diatonic.
    for overlay in &list.overlays {
        for row in &overlay.rows {
            for cell in row.cells.iter().filter(|c| c.is_center) {
                assert!(
                    ["1", "2", "3", "4", "5", "6", "7"].contains(&cell.display_text.as_str()),
                    "center cell shows {} instead of a degree",
                    cell.display_text
                );
            }
        }
    }
}

#[test]
fn test_background_assignment_swaps_on_vertical_moves() {
    let mut state = FretboardState::new();

    let list = layout(&state);
    assert_eq!(list.overlays[0].bg_variant, BgVariant::A);
    assert_eq!(list.overlays[1].bg_variant, BgVariant::B);

    state.navigate(ArrowKey::Down);
    let list = layout(&state);
    assert_eq!(list.overlays[0].bg_variant, BgVariant::B);
    assert_eq!(list.overlays[1].bg_variant, BgVariant::A);

    // A second vertical move restores the original assignment, even when
    // the string is clamped.
    for _ in 0..2 {
        state.navigate(ArrowKey::Down);
    }
    assert_eq!(layout(&state).overlays[0].bg_variant, BgVariant::B);
}

#[test]
fn test_display_list_round_trips_through_json() {
    let mut state = FretboardState::new();
    state.navigate(ArrowKey::Up);
    state.show_dimmed_notes = true;

    let list = layout(&state);
    let json = serde_json::to_string(&list).expect("display list should serialize");
    let parsed: DisplayList = serde_json::from_str(&json).expect("display list should parse");

    assert_eq!(parsed.overlays.len(), list.overlays.len());
    assert_eq!(parsed.estimate.key, list.estimate.key);
    let row = &list.overlays[7].rows[3];
    let parsed_row = &parsed.overlays[7].rows[3];
    assert_eq!(parsed_row.left, row.left);
    assert_eq!(parsed_row.top, row.top);
    assert_eq!(parsed_row.cells.len(), row.cells.len());
    assert_eq!(
        parsed_row.cells[0].display_text,
        row.cells[0].display_text
    );
}
