//! Compass labels used in the 最大風向 column, mapped to bearings (北 = 0°, clockwise).

const STEP_DEGREES: f64 = 22.5;

/// The sixteen points, starting at north and going clockwise.
pub const COMPASS_POINTS: [&str; 16] = [
    "北", "北北東", "北東", "東北東", "東", "東南東", "南東", "南南東", "南", "南南西", "南西",
    "西南西", "西", "西北西", "北西", "北北西",
];

/// Returns `None` for anything that is not one of the sixteen exact labels
/// (calm, missing-value marks, whitespace-padded text).
pub fn bearing_for(label: &str) -> Option<f64> {
    COMPASS_POINTS
        .iter()
        .position(|point| *point == label)
        .map(|index| index as f64 * STEP_DEGREES)
}
