//! Binary fuzzy matching for the filter query.
//!
//! Matching is a case-insensitive subsequence test: every character of
//! the query must appear in the candidate text in the same relative
//! order, not necessarily adjacent. There is no scoring and no ranking;
//! an entry either survives the filter or it does not.

/// Report whether `text` matches `query`.
///
/// An empty or whitespace-only query matches everything.
#[must_use]
pub fn matches(text: &str, query: &str) -> bool {
	if query.trim().is_empty() {
		return true;
	}

	let mut pending = query.chars().flat_map(char::to_lowercase);
	let Some(mut needle) = pending.next() else {
		return true;
	};

	for c in text.chars().flat_map(char::to_lowercase) {
		if c == needle {
			match pending.next() {
				Some(next) => needle = next,
				None => return true,
			}
		}
	}

	false
}
