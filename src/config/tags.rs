/// Common problem tags on Codeforces, offered by the tag filter.
///
/// The live problemset carries a few more exotic tags; the filter accepts
/// any of those too, this list only drives the `tags` listing and the typo
/// warning for `--tags`.
pub const PROBLEM_TAGS: [&str; 20] = [
    "implementation",
    "dp",
    "math",
    "greedy",
    "brute force",
    "data structures",
    "constructive algorithms",
    "dfs and similar",
    "sortings",
    "binary search",
    "graphs",
    "trees",
    "strings",
    "number theory",
    "geometry",
    "combinatorics",
    "two pointers",
    "dsu",
    "bitmasks",
    "probabilities",
];

pub fn is_known_tag(tag: &str) -> bool {
    PROBLEM_TAGS.contains(&tag)
}
