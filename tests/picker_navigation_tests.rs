use dashcalc_rs::interaction::PickerNavigation;

#[test]
fn for_year_snaps_the_decade_window() {
    let nav = PickerNavigation::for_year(2024);
    assert_eq!(nav.decade_start(), 2020);
    assert_eq!(nav.display_year(), 2024);
}

#[test]
fn decade_navigation_moves_by_ten() {
    let nav = PickerNavigation::for_year(2024);
    assert_eq!(nav.next_decade().decade_start(), 2030);
    assert_eq!(nav.previous_decade().decade_start(), 2010);
    // Display year is untouched by decade paging.
    assert_eq!(nav.next_decade().display_year(), 2024);
}

#[test]
fn year_navigation_moves_by_one() {
    let nav = PickerNavigation::for_year(2024);
    assert_eq!(nav.next_year().display_year(), 2025);
    assert_eq!(nav.previous_year().display_year(), 2023);
    assert_eq!(nav.next_year().decade_start(), 2020);
}

#[test]
fn decade_grid_has_twelve_cells_with_context_years() {
    let cells = PickerNavigation::for_year(2024).decade_cells();

    assert_eq!(cells.len(), 12);
    assert_eq!(cells[0].year, 2019);
    assert_eq!(cells[11].year, 2030);
    assert!(!cells[0].in_decade);
    assert!(!cells[11].in_decade);
    for cell in &cells[1..11] {
        assert!(cell.in_decade, "year {} must be in the decade", cell.year);
    }
}

#[test]
fn next_decade_grid_shifts_the_window() {
    let cells = PickerNavigation::for_year(2024).next_decade().decade_cells();
    assert_eq!(cells[0].year, 2029);
    assert_eq!(cells[11].year, 2040);
}

#[test]
fn selecting_a_context_cell_walks_into_the_adjacent_decade() {
    let nav = PickerNavigation::for_year(2024).select_year(2030);
    assert_eq!(nav.decade_start(), 2030);
    assert_eq!(nav.display_year(), 2030);
}

#[test]
fn negative_years_snap_toward_minus_infinity() {
    let nav = PickerNavigation::for_year(-5);
    assert_eq!(nav.decade_start(), -10);
    assert!(nav.decade_cells().iter().any(|cell| cell.year == -5 && cell.in_decade));
}
