use std::collections::BTreeSet;

use airstrike::{
    check_placement, compute_footprint, is_placement_valid, CellMask, Orientation,
    PlacementError, Point, BODY_CELLS, GRID_SIZE,
};
use proptest::prelude::*;

fn offsets(o: Orientation) -> BTreeSet<(i32, i32)> {
    o.body_offsets().into_iter().collect()
}

fn rotate_cw((dr, dc): (i32, i32)) -> (i32, i32) {
    (dc, -dr)
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Up),
        Just(Orientation::Down),
        Just(Orientation::Left),
        Just(Orientation::Right),
    ]
}

#[test]
fn up_footprint_shape() {
    let body = compute_footprint(Point::new(0, 2), Orientation::Up);
    let expected = [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(1, 2),
        Point::new(1, 3),
        Point::new(1, 4),
        Point::new(2, 2),
        Point::new(3, 1),
        Point::new(3, 2),
        Point::new(3, 3),
    ];
    assert_eq!(body, expected);
}

#[test]
fn down_and_left_footprints() {
    let down: BTreeSet<Point> = compute_footprint(Point::new(5, 5), Orientation::Down)
        .into_iter()
        .collect();
    assert!(down.contains(&Point::new(4, 3)));
    assert!(down.contains(&Point::new(3, 5)));
    assert!(down.contains(&Point::new(2, 6)));

    let left: BTreeSet<Point> = compute_footprint(Point::new(5, 5), Orientation::Left)
        .into_iter()
        .collect();
    for r in 3..=7 {
        assert!(left.contains(&Point::new(r, 6)));
    }
    assert!(left.contains(&Point::new(5, 7)));
    for r in 4..=6 {
        assert!(left.contains(&Point::new(r, 8)));
    }
}

#[test]
fn quarter_turn_maps_each_orientation_onto_the_next() {
    for o in Orientation::ALL {
        let turned: BTreeSet<(i32, i32)> = offsets(o).into_iter().map(rotate_cw).collect();
        assert_eq!(turned, offsets(o.rotate_cw()), "{:?}", o);
    }
}

#[test]
fn rotate_cw_cycles_back() {
    let mut o = Orientation::Up;
    for _ in 0..4 {
        o = o.rotate_cw();
    }
    assert_eq!(o, Orientation::Up);
    assert_eq!(Orientation::Up.rotate_cw(), Orientation::Right);
}

#[test]
fn head_out_of_bounds_rejected() {
    let err = check_placement(Point::new(-1, 4), Orientation::Up, &CellMask::new());
    assert_eq!(err, Err(PlacementError::HeadOutOfBounds(Point::new(-1, 4))));
    assert!(!is_placement_valid(Point::new(10, 0), Orientation::Down, &CellMask::new()));
}

#[test]
fn wing_off_board_rejected() {
    assert!(!is_placement_valid(Point::new(0, 1), Orientation::Up, &CellMask::new()));
    assert!(!is_placement_valid(Point::new(7, 5), Orientation::Up, &CellMask::new()));
    assert!(is_placement_valid(Point::new(6, 5), Orientation::Up, &CellMask::new()));
    assert!(matches!(
        check_placement(Point::new(0, 0), Orientation::Up, &CellMask::new()),
        Err(PlacementError::OutOfBounds(_))
    ));
}

#[test]
fn overlap_rejected() {
    let mut occupied = CellMask::new();
    occupied.insert(Point::new(2, 2));
    assert_eq!(
        check_placement(Point::new(0, 2), Orientation::Up, &occupied),
        Err(PlacementError::Overlaps(Point::new(2, 2)))
    );
    assert!(is_placement_valid(Point::new(0, 7), Orientation::Up, &occupied));
}

#[test]
fn mask_ignores_off_board_points() {
    let mut mask = CellMask::new();
    assert!(!mask.insert(Point::new(-1, 0)));
    assert!(mask.insert(Point::new(9, 9)));
    assert_eq!(mask.count(), 1);
    assert!(mask.contains(Point::new(9, 9)));
    assert!(!mask.contains(Point::new(10, 10)));
}

proptest! {
    #[test]
    fn footprint_has_nine_distinct_cells(r in -5..15i32, c in -5..15i32, o in orientation()) {
        let head = Point::new(r, c);
        let body = compute_footprint(head, o);
        let distinct: BTreeSet<Point> = body.iter().copied().collect();
        prop_assert_eq!(body.len(), BODY_CELLS);
        prop_assert_eq!(distinct.len(), BODY_CELLS);
        prop_assert!(!distinct.contains(&head));
    }

    #[test]
    fn valid_placement_stays_on_board(r in 0..GRID_SIZE, c in 0..GRID_SIZE, o in orientation()) {
        let head = Point::new(r, c);
        let on_board = compute_footprint(head, o).iter().all(|p| p.in_bounds());
        prop_assert_eq!(is_placement_valid(head, o, &CellMask::new()), on_board);
    }

    #[test]
    fn validation_has_no_side_effects(r in 0..GRID_SIZE, c in 0..GRID_SIZE, o in orientation()) {
        let occupied = CellMask::from_points([Point::new(4, 4), Point::new(5, 5)]);
        let before = occupied;
        let first = is_placement_valid(Point::new(r, c), o, &occupied);
        let second = is_placement_valid(Point::new(r, c), o, &occupied);
        prop_assert_eq!(first, second);
        prop_assert_eq!(occupied, before);
    }
}
