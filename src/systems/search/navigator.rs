//! Pure selection movement and scroll positioning.
//!
//! A selection of `None` means nothing is highlighted yet. Moving down from
//! `None` selects the first result.

/// Move the selection one row up. The first row and an empty selection stay put.
#[must_use]
pub fn step_up(selected: Option<usize>) -> Option<usize> {
	match selected {
		Some(index) if index > 0 => Some(index - 1),
		other => other,
	}
}

/// Move the selection one row down, never past the last of `len` results.
#[must_use]
pub fn step_down(selected: Option<usize>, len: usize) -> Option<usize> {
	match selected {
		None if len > 0 => Some(0),
		Some(index) if index + 1 < len => Some(index + 1),
		other => other,
	}
}

/// Scroll offset that centres `selected` inside a viewport of `viewport_height` rows.
///
/// Returns 0 when the viewport has not been laid out yet or nothing is selected.
#[must_use]
pub fn compute_scroll_offset(selected: Option<usize>, viewport_height: usize) -> usize {
	if viewport_height == 0 {
		return 0;
	}
	selected.map_or(0, |index| index.saturating_sub(viewport_height / 2))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn up_is_a_no_op_at_the_top_and_without_selection() {
		assert_eq!(step_up(None), None);
		assert_eq!(step_up(Some(0)), Some(0));
		assert_eq!(step_up(Some(4)), Some(3));
	}

	#[test]
	fn down_starts_at_the_first_row_and_stops_at_the_last() {
		assert_eq!(step_down(None, 0), None);
		assert_eq!(step_down(None, 3), Some(0));
		assert_eq!(step_down(Some(1), 3), Some(2));
		assert_eq!(step_down(Some(2), 3), Some(2));
	}

	#[test]
	fn arbitrary_key_sequences_stay_in_bounds() {
		for len in 0..6 {
			let mut selected = None;
			let mut state = 0x9e37_79b9_u32 ^ len as u32;
			for _ in 0..200 {
				state ^= state << 13;
				state ^= state >> 17;
				state ^= state << 5;
				selected = if state & 1 == 0 {
					step_up(selected)
				} else {
					step_down(selected, len)
				};
				if let Some(index) = selected {
					assert!(index < len, "index {index} escaped {len} results");
				}
			}
			if len == 0 {
				assert_eq!(selected, None);
			}
		}
	}

	#[test]
	fn scroll_offset_centres_the_selection() {
		assert_eq!(compute_scroll_offset(Some(5), 10), 0);
		assert_eq!(compute_scroll_offset(Some(20), 10), 15);
		assert_eq!(compute_scroll_offset(Some(3), 0), 0);
		assert_eq!(compute_scroll_offset(None, 10), 0);
		assert_eq!(compute_scroll_offset(Some(7), 1), 7);
	}
}
