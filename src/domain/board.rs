/// Board geometry and match rules.
///
/// Coordinates are (x, y) with x = column, y = row, origin top-left.
/// Rows 0 and HEIGHT-1 are the border rows; the left paddle lives in
/// column 0 and the right paddle in column WIDTH-1.

pub const WIDTH: i32 = 80;
pub const HEIGHT: i32 = 24;
pub const PADDLE_HEIGHT: i32 = 3;

/// Highest row a paddle's top cell may occupy.
pub const PADDLE_MAX_Y: i32 = HEIGHT - PADDLE_HEIGHT;

/// Columns where the ball is tested against a paddle (one in from each edge).
pub const LEFT_HIT_X: i32 = 1;
pub const RIGHT_HIT_X: i32 = WIDTH - 2;

/// Points needed to win a match.
pub const MAX_SCORE: u32 = 5;

/// Length of one tick in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

pub const CENTER_X: i32 = WIDTH / 2;
pub const CENTER_Y: i32 = HEIGHT / 2;
