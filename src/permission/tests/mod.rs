//! Round-trip and grouping tests for the permission codec.


use std::collections::HashSet;

fn as_set<S: AsRef<str>>(list: &[S]) -> HashSet<String> {
    list.iter().map(|s| s.as_ref().to_string()).collect()
}
