/// Rating bands for rank titles, ascending, keyed by exclusive upper bound.
pub const RANK_BANDS: [(i32, &str); 9] = [
    (1200, "Newbie"),
    (1400, "Pupil"),
    (1600, "Specialist"),
    (1900, "Expert"),
    (2100, "Candidate Master"),
    (2300, "Master"),
    (2400, "International Master"),
    (2600, "Grandmaster"),
    (3000, "International Grandmaster"),
];

/// Title for ratings at or above the highest band bound.
pub const TOP_RANK_TITLE: &str = "Legendary Grandmaster";

/// Maps a rating to its Codeforces rank title.
///
/// Classifies any integer: negative ratings land in the lowest band and
/// everything from 3000 up is Legendary Grandmaster.
pub fn rank_title(rating: i32) -> &'static str {
    RANK_BANDS
        .iter()
        .find(|(upper, _)| rating < *upper)
        .map(|(_, title)| *title)
        .unwrap_or(TOP_RANK_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_title_boundaries() {
        assert_eq!(rank_title(1199), "Newbie");
        assert_eq!(rank_title(1200), "Pupil");
        assert_eq!(rank_title(1399), "Pupil");
        assert_eq!(rank_title(1400), "Specialist");
        assert_eq!(rank_title(1599), "Specialist");
        assert_eq!(rank_title(1600), "Expert");
        assert_eq!(rank_title(1899), "Expert");
        assert_eq!(rank_title(1900), "Candidate Master");
        assert_eq!(rank_title(2099), "Candidate Master");
        assert_eq!(rank_title(2100), "Master");
        assert_eq!(rank_title(2299), "Master");
        assert_eq!(rank_title(2300), "International Master");
        assert_eq!(rank_title(2399), "International Master");
        assert_eq!(rank_title(2400), "Grandmaster");
        assert_eq!(rank_title(2599), "Grandmaster");
        assert_eq!(rank_title(2600), "International Grandmaster");
        assert_eq!(rank_title(2999), "International Grandmaster");
        assert_eq!(rank_title(3000), "Legendary Grandmaster");
    }

    #[test]
    fn test_rank_title_extremes() {
        assert_eq!(rank_title(0), "Newbie");
        assert_eq!(rank_title(-500), "Newbie");
        assert_eq!(rank_title(i32::MAX), "Legendary Grandmaster");
    }
}
