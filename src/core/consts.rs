/// How many scores a level's table keeps.
pub const MAX_SCORES: usize = 3;

pub const SNOW_TOKEN: &str = "S";
pub const BLOCK_TOKEN: &str = "B";
pub const MONSTER_TOKEN: &str = "M";
pub const SMALL_SNOWBALL_TOKEN: &str = "SB";
