/// One slice of the tag distribution: tag name plus accepted-submission count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub value: usize,
}

/// Summary derived from a user's chronological rating history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingStatsSummary {
    pub increased: usize,
    pub decreased: usize,
    pub unchanged: usize,
    pub total_contests: usize,
    pub max_rating: i32,
    pub average_rank: i64,
}
