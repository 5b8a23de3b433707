use crate::debug_log;
use crate::pattern::Pattern;
use std::collections::{BTreeMap, BTreeSet};

/// Candidate words grouped by the pattern each would produce for one guess.
pub type Partition = BTreeMap<Pattern, BTreeSet<String>>;

/// The pattern `word` produces when `letter` is guessed against `current`.
///
/// Positions holding `letter` in `word` are revealed; all other positions
/// are carried over from `current` unchanged.
pub fn induced_pattern(current: &Pattern, word: &str, letter: char) -> Pattern {
    current.reveal(word, letter)
}

/// Split `candidates` by the pattern each word induces for `letter`.
///
/// Every candidate lands in exactly one group, so the groups are disjoint and
/// their union is `candidates`.
pub fn partition(candidates: &BTreeSet<String>, current: &Pattern, letter: char) -> Partition {
    let mut groups: Partition = BTreeMap::new();
    for word in candidates {
        groups
            .entry(induced_pattern(current, word, letter))
            .or_default()
            .insert(word.clone());
    }
    debug_log!(
        "guess '{}' split {} words into {} groups",
        letter,
        candidates.len(),
        groups.len()
    );
    groups
}

/// Take the largest group out of `groups`.
///
/// Groups are visited in pattern order and only a strictly larger group
/// displaces the current best, so a tie goes to the smallest pattern
/// (placeholder before any letter).
pub fn select_largest(groups: Partition) -> Option<(Pattern, BTreeSet<String>)> {
    let mut best: Option<(Pattern, BTreeSet<String>)> = None;
    for (pattern, words) in groups {
        debug_log!("  {} -> {} words", pattern, words.len());
        let larger = best
            .as_ref()
            .is_none_or(|(_, best_words)| words.len() > best_words.len());
        if larger {
            best = Some((pattern, words));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_groups_by_induced_pattern() {
        let candidates = words(&["cat", "car", "cow", "bat"]);
        let groups = partition(&candidates, &Pattern::blank(3), 'a');

        assert_eq!(groups.len(), 2);
        let keys: Vec<String> = groups.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["---", "-a-"]);
        assert_eq!(groups[&Pattern::blank(3)], words(&["cow"]));
    }

    #[test]
    fn test_induced_pattern_carries_over_current() {
        let current = Pattern::blank(4).reveal("tell", 't');
        assert_eq!(induced_pattern(&current, "tell", 'l').to_string(), "t-ll");
        assert_eq!(induced_pattern(&current, "tall", 'e').to_string(), "t---");
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let candidates = words(&["ally", "beta", "cool", "deal", "else", "flew", "good", "hole"]);
        let groups = partition(&candidates, &Pattern::blank(4), 'l');

        let total: usize = groups.values().map(BTreeSet::len).sum();
        assert_eq!(total, candidates.len());

        let union: BTreeSet<String> = groups.values().flatten().cloned().collect();
        assert_eq!(union, candidates);
    }

    #[test]
    fn test_absent_letter_keeps_one_group() {
        let candidates = words(&["cat", "car", "bat"]);
        let current = Pattern::blank(3).reveal("cat", 'a');
        let groups = partition(&candidates, &current, 'q');

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&current], candidates);
    }

    #[test]
    fn test_select_largest_prefers_biggest_group() {
        let candidates = words(&["cat", "car", "cow", "bat"]);
        let (pattern, chosen) =
            select_largest(partition(&candidates, &Pattern::blank(3), 'a')).unwrap();
        assert_eq!(pattern.to_string(), "-a-");
        assert_eq!(chosen, words(&["bat", "car", "cat"]));
    }

    #[test]
    fn test_select_largest_breaks_ties_by_smallest_pattern() {
        // "ab" -> "a-" and "ba" -> "-a", one word each
        let candidates = words(&["ab", "ba"]);
        let (pattern, chosen) =
            select_largest(partition(&candidates, &Pattern::blank(2), 'a')).unwrap();
        assert_eq!(pattern.to_string(), "-a");
        assert_eq!(chosen, words(&["ba"]));

        // the unrevealed group outnumbers "-c" and "c-"
        let candidates = words(&["ab", "ba", "cd", "dc", "ee"]);
        let groups = partition(&candidates, &Pattern::blank(2), 'c');
        let (pattern, chosen) = select_largest(groups).unwrap();
        assert_eq!(pattern.to_string(), "--");
        assert_eq!(chosen, words(&["ab", "ba", "ee"]));

        // "-c" and "c-" tie at one word each
        let candidates = words(&["cd", "dc"]);
        let (pattern, chosen) =
            select_largest(partition(&candidates, &Pattern::blank(2), 'c')).unwrap();
        assert_eq!(pattern.to_string(), "-c");
        assert_eq!(chosen, words(&["dc"]));
    }

    #[test]
    fn test_select_largest_empty() {
        assert!(select_largest(Partition::new()).is_none());
    }
}
