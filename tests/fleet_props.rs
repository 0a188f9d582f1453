use airstrike::{
    generate_fleet, resolve_attack, Aircraft, AircraftId, CellStatus, FleetBuilder, FleetError,
    ObservedFleet, Orientation, OwnFleet, PlacementError, Point, Radar, RadarError, FLEET_SIZE,
    GRID_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn sample_fleet() -> OwnFleet {
    OwnFleet::try_from_aircraft(vec![
        Aircraft::new(AircraftId(0), Point::new(0, 2), Orientation::Up),
        Aircraft::new(AircraftId(1), Point::new(0, 7), Orientation::Up),
        Aircraft::new(AircraftId(2), Point::new(6, 2), Orientation::Up),
    ])
    .unwrap()
}

#[test]
fn sample_fleet_is_valid() {
    let fleet = sample_fleet();
    assert_eq!(fleet.aircraft().len(), FLEET_SIZE);
    assert_eq!(fleet.occupied().count(), 30);
    assert!(!fleet.is_eliminated());
}

#[test]
fn overlapping_fleet_rejected() {
    let err = OwnFleet::try_from_aircraft(vec![
        Aircraft::new(AircraftId(0), Point::new(0, 2), Orientation::Up),
        Aircraft::new(AircraftId(1), Point::new(0, 3), Orientation::Up),
        Aircraft::new(AircraftId(2), Point::new(6, 2), Orientation::Up),
    ])
    .unwrap_err();
    assert!(matches!(err, FleetError::Placement(PlacementError::Overlaps(_))));
}

#[test]
fn short_fleet_rejected() {
    let err = OwnFleet::try_from_aircraft(vec![Aircraft::new(
        AircraftId(0),
        Point::new(0, 2),
        Orientation::Up,
    )])
    .unwrap_err();
    assert_eq!(err, FleetError::Incomplete { placed: 1 });
}

#[test]
fn observed_fleet_rejects_duplicate_ids() {
    let err = ObservedFleet::from_snapshot(vec![
        Aircraft::new(AircraftId(0), Point::new(0, 2), Orientation::Up),
        Aircraft::new(AircraftId(0), Point::new(0, 7), Orientation::Up),
        Aircraft::new(AircraftId(2), Point::new(6, 2), Orientation::Up),
    ])
    .unwrap_err();
    assert_eq!(err, FleetError::DuplicateId(AircraftId(0)));
}

#[test]
fn builder_place_remove_clear() {
    let mut builder = FleetBuilder::new();
    builder.place(Point::new(0, 2), Orientation::Up).unwrap();
    assert!(matches!(
        builder.place(Point::new(0, 3), Orientation::Up),
        Err(PlacementError::Overlaps(_))
    ));
    assert_eq!(builder.placed().len(), 1);

    builder.place(Point::new(0, 7), Orientation::Up).unwrap();
    assert!(builder.remove(AircraftId(0)).is_some());
    assert!(!builder.occupied().contains(Point::new(2, 2)));
    builder.place(Point::new(0, 2), Orientation::Up).unwrap();
    builder.place(Point::new(6, 2), Orientation::Up).unwrap();
    assert!(builder.is_complete());
    assert_eq!(
        builder.place(Point::new(6, 7), Orientation::Up).unwrap_err(),
        PlacementError::FleetFull
    );

    let mut cleared = builder.clone();
    cleared.clear();
    assert!(cleared.placed().is_empty());
    assert!(cleared.occupied().is_empty());

    let fleet = builder.finish().unwrap();
    assert_eq!(fleet.alive_count(), 3);
}

#[test]
fn incomplete_builder_cannot_finish() {
    let mut builder = FleetBuilder::new();
    builder.place(Point::new(0, 2), Orientation::Up).unwrap();
    assert_eq!(
        builder.finish().unwrap_err(),
        FleetError::Incomplete { placed: 1 }
    );
}

#[test]
fn head_hit_kills_body_hit_injures() {
    let fleet = sample_fleet();

    let (outcome, fleet) = resolve_attack(&fleet, Point::new(1, 0));
    assert_eq!(outcome.status, CellStatus::Injured);
    assert_eq!(outcome.killed, None);
    assert_eq!(fleet.alive_count(), 3);

    let (outcome, fleet) = resolve_attack(&fleet, Point::new(5, 5));
    assert_eq!(outcome.status, CellStatus::Empty);

    let (outcome, fleet) = resolve_attack(&fleet, Point::new(0, 2));
    assert_eq!(outcome.status, CellStatus::Dead);
    assert_eq!(outcome.killed, Some(AircraftId(0)));
    assert_eq!(fleet.alive_count(), 2);
    assert!(!fleet.get(AircraftId(0)).unwrap().is_alive());

    // Wreckage no longer counts.
    let (outcome, _) = resolve_attack(&fleet, Point::new(0, 2));
    assert_eq!(outcome.status, CellStatus::Empty);
    let (outcome, _) = resolve_attack(&fleet, Point::new(1, 0));
    assert_eq!(outcome.status, CellStatus::Empty);
}

#[test]
fn body_hits_never_eliminate() {
    let mut fleet = sample_fleet();
    let bodies: Vec<Point> = fleet
        .aircraft()
        .iter()
        .flat_map(|a| a.body().to_vec())
        .collect();
    for p in bodies {
        let (outcome, next) = resolve_attack(&fleet, p);
        assert_eq!(outcome.status, CellStatus::Injured);
        fleet = next;
    }
    assert!(!fleet.is_eliminated());

    for head in [Point::new(0, 2), Point::new(0, 7), Point::new(6, 2)] {
        fleet = resolve_attack(&fleet, head).1;
    }
    assert!(fleet.is_eliminated());
}

#[test]
fn radar_is_write_once() {
    let mut radar = Radar::new();
    radar.record(Point::new(3, 3), CellStatus::Injured).unwrap();
    assert_eq!(
        radar.record(Point::new(3, 3), CellStatus::Dead),
        Err(RadarError::AlreadyRecorded {
            point: Point::new(3, 3),
            existing: CellStatus::Injured,
        })
    );
    assert_eq!(radar.status(Point::new(3, 3)), Some(CellStatus::Injured));
    assert_eq!(radar.len(), 1);
    assert_eq!(radar.dead_count(), 0);
    assert_eq!(
        radar.record(Point::new(0, GRID_SIZE), CellStatus::Empty),
        Err(RadarError::OutOfBounds(Point::new(0, GRID_SIZE)))
    );
    assert_eq!(radar.untried_cells().len(), 99);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleets_are_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let aircraft = generate_fleet(&mut rng);
        prop_assert_eq!(aircraft.len(), FLEET_SIZE);
        let fleet = OwnFleet::try_from_aircraft(aircraft);
        prop_assert!(fleet.is_ok());
        let fleet = fleet.unwrap();
        let mut cells = 0;
        for a in fleet.aircraft() {
            prop_assert!(a.cells().all(|p| p.in_bounds()));
            cells += a.mask().count();
        }
        prop_assert_eq!(fleet.occupied().count(), cells);
    }

    #[test]
    fn outcome_matches_fleet_layout(seed in any::<u64>(), r in 0..GRID_SIZE, c in 0..GRID_SIZE) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = OwnFleet::try_from_aircraft(generate_fleet(&mut rng)).unwrap();
        let target = Point::new(r, c);
        let (outcome, after) = resolve_attack(&fleet, target);
        let is_head = fleet.aircraft().iter().any(|a| a.head() == target);
        let is_body = fleet.aircraft().iter().any(|a| a.body().contains(&target));
        let expected = if is_head {
            CellStatus::Dead
        } else if is_body {
            CellStatus::Injured
        } else {
            CellStatus::Empty
        };
        prop_assert_eq!(outcome.status, expected);
        prop_assert_eq!(outcome.killed.is_some(), is_head);
        let lost = fleet.alive_count() - after.alive_count();
        prop_assert_eq!(lost, usize::from(is_head));
    }

    #[test]
    fn radar_keeps_first_outcome(r in 0..GRID_SIZE, c in 0..GRID_SIZE) {
        let mut radar = Radar::new();
        let p = Point::new(r, c);
        prop_assert!(radar.record(p, CellStatus::Empty).is_ok());
        prop_assert!(radar.record(p, CellStatus::Dead).is_err());
        prop_assert_eq!(radar.status(p), Some(CellStatus::Empty));
    }
}
