/// Number of shipped levels; "New Level" cycles through `0..LEVEL_COUNT`.
pub const LEVEL_COUNT: usize = 4;

pub const LEFT_MARGIN: i32 = 40;
pub const TOP_MARGIN: i32 = 40;
pub const SQUARE_SIZE: i32 = 25;

/// Upper bound on steps taken by one click-to-walk.
pub const MAX_WALK_STEPS: usize = 1024;
