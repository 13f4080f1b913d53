// Piece Values
pub const VAL_PAWN: i32 = 100;
pub const VAL_ADVISOR: i32 = 200;
pub const VAL_ELEPHANT: i32 = 200;
pub const VAL_HORSE: i32 = 400;
pub const VAL_CANNON: i32 = 450;
pub const VAL_ROOK: i32 = 900;
pub const VAL_KING: i32 = 10_000;

// Soldier bonus indexed by ranks advanced from its own back rank.
// Crossing the river is where a soldier starts to matter; the last rank is
// a dead end.
pub const SOLDIER_ADVANCE: [i32; 10] = [0, 0, 0, 0, 10, 20, 30, 40, 50, 0];

// Gomoku line scores, indexed by open ends (0, 1, 2).
pub const LINE_FIVE: i32 = 100_000;
pub const LINE_FOUR: [i32; 3] = [0, 1_000, 10_000];
pub const LINE_THREE: [i32; 3] = [0, 100, 1_000];
pub const LINE_TWO: [i32; 3] = [0, 10, 100];
