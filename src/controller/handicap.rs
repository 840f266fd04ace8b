/// Rounds half up, so `-2.5` becomes `-2` and `2.5` becomes `3`.
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Course handicap for a player off a given tee.
///
/// `round(handicap_index * slope / 113 + (rating - total_par))`. Negative results
/// are valid and mean better than scratch.
#[must_use]
pub fn course_handicap(handicap_index: f64, slope: i32, rating: f64, total_par: i32) -> i32 {
    round_half_up(handicap_index * (f64::from(slope) / 113.0) + (rating - f64::from(total_par)))
}

/// Course handicap scaled by a game's handicap percentage.
#[must_use]
pub fn adjusted_handicap(course_handicap: i32, percentage: u32) -> i32 {
    round_half_up(f64::from(course_handicap) * (f64::from(percentage) / 100.0))
}

/// Strokes a player receives on a hole of the given stroke rank.
///
/// Every hole gets `floor(ch / total_holes)` strokes; holes ranked at or below
/// `ch % total_holes` get one more. Negative handicaps are not clamped.
#[must_use]
pub fn strokes_received(course_handicap: i32, hole_rank: i32, total_holes: u32) -> i32 {
    if total_holes == 0 {
        return 0;
    }
    let total = total_holes as i32;
    let per_hole = (f64::from(course_handicap) / f64::from(total)).floor() as i32;
    let extra = course_handicap % total;
    per_hole + i32::from(hole_rank <= extra)
}

#[must_use]
pub fn net_score(gross_score: i32, course_handicap: i32, hole_rank: i32, total_holes: u32) -> i32 {
    gross_score - strokes_received(course_handicap, hole_rank, total_holes)
}
