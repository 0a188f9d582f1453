/// Side length of the square board.
pub const GRID_SIZE: i32 = 10;
/// Number of aircraft every player deploys.
pub const FLEET_SIZE: usize = 3;
/// Body cells of one aircraft, excluding the head.
pub const BODY_CELLS: usize = 9;
/// Head plus body.
pub const AIRCRAFT_CELLS: usize = BODY_CELLS + 1;
/// Number of cells on the board.
pub const TOTAL_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Random head/orientation samples the AI draws for one fleet before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 1000;
/// Times the AI restarts fleet generation after an incomplete attempt.
pub const FLEET_GENERATION_ROUNDS: usize = 8;

/// Default cosmetic pause before the computer opponent fires, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 800;
