#![cfg(feature = "std")]

use std::io::Cursor;

use airstrike::{CellStatus, CliPlayer, FleetError, Orientation, Player, Point, Radar};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn scripted(input: &str) -> CliPlayer {
    CliPlayer::with_input("Tester", Box::new(Cursor::new(input.to_string())))
}

#[test]
fn placement_from_commands() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted("help\nC1 up\nD1\nH1\nundo\nA7 right\ndone\nC7 up\nH1 up\ndone\n");
    let fleet = player.place_fleet(&mut rng).unwrap();

    // D1 overlaps the first aircraft, H1 is taken back, A7 right runs off the board.
    let heads: Vec<Point> = fleet.aircraft().iter().map(|a| a.head()).collect();
    assert_eq!(heads, vec![Point::new(0, 2), Point::new(6, 2), Point::new(0, 7)]);
}

#[test]
fn rotate_and_random_fill() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut player = scripted("rotate\nrotate\nE10\nrandom\ndone\n");
    let fleet = player.place_fleet(&mut rng).unwrap();
    assert_eq!(fleet.aircraft().len(), 3);
    assert_eq!(fleet.aircraft()[0].head(), Point::new(9, 4));
    assert_eq!(fleet.aircraft()[0].orientation(), Orientation::Down);
}

#[test]
fn end_of_input_aborts_placement() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted("C1 up\n");
    assert_eq!(
        player.place_fleet(&mut rng).unwrap_err(),
        FleetError::Incomplete { placed: 1 }
    );
}

#[test]
fn targeting_skips_bad_and_repeated_cells() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut radar = Radar::new();
    radar.record(Point::new(4, 1), CellStatus::Empty).unwrap();
    let mut player = scripted("Z9\nB5\nJ10\n");
    assert_eq!(player.select_target(&mut rng, &radar), Some(Point::new(9, 9)));
}

#[test]
fn empty_line_fires_at_an_untried_cell() {
    let mut rng = SmallRng::seed_from_u64(4);
    let radar = Radar::new();
    let mut player = scripted("\n");
    let target = player.select_target(&mut rng, &radar).unwrap();
    assert!(target.in_bounds());
}

#[test]
fn end_of_input_gives_up_targeting() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted("");
    assert_eq!(player.select_target(&mut rng, &Radar::new()), None);
}
