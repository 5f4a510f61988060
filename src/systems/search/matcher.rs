/// Return whether `file_name` contains `query` as a contiguous substring.
///
/// Matching is case-sensitive and an empty query matches every name.
#[must_use]
pub fn matches(file_name: &str, query: &str) -> bool {
	file_name.contains(query)
}

/// Case-insensitive variant of [`matches`], comparing lowercased text.
#[must_use]
pub fn matches_ignore_case(file_name: &str, query: &str) -> bool {
	if query.is_empty() {
		return true;
	}
	file_name.to_lowercase().contains(&query.to_lowercase())
}

/// Matching behaviour selected for a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
	#[default]
	CaseSensitive,
	IgnoreCase,
}

impl MatchMode {
	#[must_use]
	pub fn from_ignore_case(ignore_case: bool) -> Self {
		if ignore_case {
			Self::IgnoreCase
		} else {
			Self::CaseSensitive
		}
	}

	#[must_use]
	pub fn matches(self, file_name: &str, query: &str) -> bool {
		match self {
			Self::CaseSensitive => matches(file_name, query),
			Self::IgnoreCase => matches_ignore_case(file_name, query),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn contiguous_substrings_match() {
		assert!(matches("report_final.txt", "report"));
		assert!(matches("report_final.txt", "final.t"));
		assert!(matches("report.txt", "report.txt"));
	}

	#[test]
	fn scattered_characters_do_not_match() {
		assert!(!matches("report.txt", "rpt"));
		assert!(!matches("readme.md", "report"));
	}

	#[test]
	fn empty_query_matches_everything() {
		assert!(matches("anything.rs", ""));
		assert!(matches("", ""));
		assert!(matches_ignore_case("", ""));
	}

	#[test]
	fn matching_is_case_sensitive_by_default() {
		assert!(!matches("README.md", "readme"));
		assert!(MatchMode::default().matches("README.md", "README"));
		assert!(!MatchMode::default().matches("README.md", "readme"));
	}

	#[test]
	fn lengthening_the_query_can_only_narrow() {
		// "rep" and "report" both hit report.txt, the longer one misses repo.md.
		assert!(matches("report.txt", "rep"));
		assert!(matches("report.txt", "report"));
		assert!(matches("repo.md", "rep"));
		assert!(!matches("repo.md", "report"));
		// A shorter prefix of a matching query always matches as well.
		assert!(matches("report.txt", "repor"));
	}

	#[test]
	fn ignore_case_mode_folds_both_sides() {
		let mode = MatchMode::from_ignore_case(true);
		assert!(mode.matches("README.md", "readme"));
		assert!(mode.matches("readme.md", "ReadMe"));
		assert!(!mode.matches("readme.md", "report"));
	}

	#[test]
	fn multibyte_names_match_by_characters() {
		assert!(matches("αναζήτηση.txt", "ζήτη"));
		assert!(!matches("αναζήτηση.txt", "ζητη"));
	}
}
