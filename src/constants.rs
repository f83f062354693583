pub const DEFAULT_LENGTH: i64 = 10;
pub const DEFAULT_COUNT: i64 = 5;
pub const DEFAULT_STYLE: &'static str = "casual";
