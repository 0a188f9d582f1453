#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::core::{
    ai,
    config::{GRID_SIZE, PLACEMENT_ATTEMPTS},
    is_placement_valid, Aircraft, AircraftId, CellStatus, FleetBuilder, FleetError, Orientation,
    OwnFleet, PlayerId, Point, Radar,
};
use rand::rngs::SmallRng;
use rand::Rng;

use super::Player;

/// Interactive player reading commands from stdin (or any reader).
pub struct CliPlayer {
    name: String,
    input: Option<Box<dyn BufRead + Send>>,
    fleet: Vec<Aircraft>,
    incoming: Radar,
}

impl CliPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: None,
            fleet: Vec::new(),
            incoming: Radar::new(),
        }
    }

    /// A player fed from `input` instead of stdin.
    pub fn with_input(name: impl Into<String>, input: Box<dyn BufRead + Send>) -> Self {
        Self {
            input: Some(input),
            ..Self::new(name)
        }
    }

    /// Next trimmed input line, `None` on end of input.
    fn read_line(&mut self) -> Option<String> {
        let _ = io::stdout().flush();
        let mut line = String::new();
        let read = match self.input.as_mut() {
            Some(reader) => reader.read_line(&mut line),
            None => io::stdin().read_line(&mut line),
        };
        match read {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

fn coord_to_string(p: Point) -> String {
    let col = (b'A' + p.c as u8) as char;
    format!("{}{}", col, p.r + 1)
}

fn parse_coord(input: &str) -> Result<Point, String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., C4)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as i32;
    if col >= GRID_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: i32 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row < 1 || row > GRID_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok(Point::new(row - 1, col))
}

fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.to_ascii_lowercase().as_str() {
        "u" | "up" => Some(Orientation::Up),
        "d" | "down" => Some(Orientation::Down),
        "l" | "left" => Some(Orientation::Left),
        "r" | "right" => Some(Orientation::Right),
        _ => None,
    }
}

fn print_grid(cell: impl Fn(Point) -> char) {
    print!("     ");
    for c in 0..GRID_SIZE {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for r in 0..GRID_SIZE {
        print!("   {:2}", r + 1);
        for c in 0..GRID_SIZE {
            print!(" {}", cell(Point::new(r, c)));
        }
        println!();
    }
}

fn status_char(status: CellStatus) -> char {
    match status {
        CellStatus::Dead => 'X',
        CellStatus::Injured => '*',
        CellStatus::Empty => 'o',
    }
}

/// The player's own aircraft, with the opponent's shots on top.
pub fn print_fleet(aircraft: &[Aircraft], incoming: &Radar) {
    print_grid(|p| {
        if let Some(status) = incoming.status(p) {
            return status_char(status);
        }
        for a in aircraft {
            if a.head() == p {
                return 'H';
            }
            if a.body().contains(&p) {
                return '#';
            }
        }
        '.'
    });
    println!("    Legend: H=Head  #=Body  X=Destroyed  *=Injured  o=Miss");
}

/// What the player knows about the enemy board.
pub fn print_radar(radar: &Radar) {
    print_grid(|p| radar.status(p).map(status_char).unwrap_or('.'));
    println!("    Legend: X=Head hit  *=Body hit  o=Miss  .=Unknown");
}

/// Fill the builder with random aircraft, keeping what is already placed.
fn place_remaining(builder: &mut FleetBuilder, rng: &mut SmallRng) {
    let mut attempts = 0;
    while !builder.is_complete() && attempts < PLACEMENT_ATTEMPTS {
        attempts += 1;
        let head = Point::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
        let orientation = ai::random_orientation(rng);
        if is_placement_valid(head, orientation, builder.occupied()) {
            let _ = builder.place(head, orientation);
        }
    }
}

impl Player for CliPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<OwnFleet, FleetError> {
        println!("\n=== {}: AIRCRAFT PLACEMENT ===", self.name);
        print_placement_help();

        let mut builder = FleetBuilder::new();
        let mut orientation = Orientation::Up;
        loop {
            println!();
            print_fleet(builder.placed(), &Radar::new());
            if builder.is_complete() {
                print!("All aircraft placed. Type 'done' to confirm: ");
            } else {
                print!(
                    "Aircraft {}/3, heading {:?} (or 'help'): ",
                    builder.placed().len() + 1,
                    orientation
                );
            }
            let line = match self.read_line() {
                Some(line) => line,
                None => {
                    return Err(FleetError::Incomplete {
                        placed: builder.placed().len(),
                    })
                }
            };
            let mut parts = line.split_whitespace();
            let command = match parts.next() {
                Some(c) => c.to_ascii_lowercase(),
                None => continue,
            };

            match command.as_str() {
                "help" => print_placement_help(),
                "rotate" => {
                    orientation = orientation.rotate_cw();
                    println!("Heading {:?}", orientation);
                }
                "undo" => match builder.placed().last().map(Aircraft::id) {
                    Some(id) => {
                        builder.remove(id);
                        println!("Removed aircraft {}", id);
                    }
                    None => println!("Nothing to undo"),
                },
                "clear" => builder.clear(),
                "random" => place_remaining(&mut builder, rng),
                "done" => {
                    if builder.is_complete() {
                        let fleet = builder.finish()?;
                        self.fleet = fleet.snapshot();
                        self.incoming = Radar::new();
                        println!("Fleet confirmed. Ready for battle.");
                        return Ok(fleet);
                    }
                    println!("Place all 3 aircraft first");
                }
                other => {
                    let head = match parse_coord(other) {
                        Ok(p) => p,
                        Err(e) => {
                            println!("Error: {}", e);
                            continue;
                        }
                    };
                    if let Some(word) = parts.next() {
                        match parse_orientation(word) {
                            Some(o) => orientation = o,
                            None => {
                                println!("Error: unknown heading '{}' - use up/down/left/right", word);
                                continue;
                            }
                        }
                    }
                    match builder.place(head, orientation) {
                        Ok(a) => println!("Aircraft {} placed at {}", a.id(), coord_to_string(head)),
                        Err(e) => println!("Error: {}", e),
                    }
                }
            }
        }
    }

    fn select_target(&mut self, rng: &mut SmallRng, radar: &Radar) -> Option<Point> {
        println!("\n=== {}: YOUR TURN ===", self.name);
        println!("Enemy airspace:");
        print_radar(radar);
        println!("\nYour fleet:");
        print_fleet(&self.fleet, &self.incoming);

        let suggestion = ai::select_target(rng, radar)?;
        loop {
            print!(
                "\nEnter target [random pick: {}] (or 'help'): ",
                coord_to_string(suggestion)
            );
            let line = self.read_line()?;
            if line.is_empty() {
                println!("Firing at {}", coord_to_string(suggestion));
                return Some(suggestion);
            }
            if line.eq_ignore_ascii_case("help") {
                print_targeting_help();
                continue;
            }
            match parse_coord(&line) {
                Ok(p) if radar.contains(p) => {
                    println!("You already attacked {}. Choose another target.", coord_to_string(p));
                }
                Ok(p) => return Some(p),
                Err(e) => {
                    println!("Invalid coordinate: {}", e);
                    println!("   Example: A5, B10, J1");
                }
            }
        }
    }

    fn handle_attack_result(&mut self, target: Point, status: CellStatus) {
        let at = coord_to_string(target);
        match status {
            CellStatus::Dead => println!("DESTROYED! Your shot at {} hit an aircraft head.", at),
            CellStatus::Injured => println!("Hit. Your shot at {} struck an aircraft body.", at),
            CellStatus::Empty => println!("Miss. Nothing at {}.", at),
        }
    }

    fn handle_incoming_attack(&mut self, target: Point, status: CellStatus) {
        let _ = self.incoming.record(target, status);
        let at = coord_to_string(target);
        match status {
            CellStatus::Dead => {
                let lost = self
                    .fleet
                    .iter()
                    .find(|a| a.head() == target)
                    .map(Aircraft::id)
                    .unwrap_or(AircraftId(0));
                println!("AIRCRAFT LOST! The enemy destroyed aircraft {} at {}", lost, at);
            }
            CellStatus::Injured => println!("The enemy hit one of your aircraft at {}", at),
            CellStatus::Empty => println!("The enemy missed at {}", at),
        }
    }

    fn handoff(&mut self, next: PlayerId) {
        println!("\n\n\n\n\n\n\n\n\n\n");
        print!("Pass the device to {} ({}) and press ENTER ", self.name, next);
        let _ = self.read_line();
    }
}

fn print_placement_help() {
    println!("Commands:");
    println!("  C4 [up|down|left|right]  place the next aircraft with its head at C4");
    println!("  rotate                   turn the heading clockwise");
    println!("  undo                     take back the last aircraft");
    println!("  clear                    remove every aircraft");
    println!("  random                   place the remaining aircraft randomly");
    println!("  done                     confirm once all 3 aircraft are placed");
    println!("Columns are A-J, rows 1-10. The body trails behind the head.");
}

fn print_targeting_help() {
    println!("Enter a cell such as A5 or J10 to fire at it.");
    println!("Press ENTER to fire at the random pick.");
    println!("Hitting a head destroys the aircraft; body hits only injure it.");
}
