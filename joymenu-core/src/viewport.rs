//! Viewport windowing
//!
//! The display shows only a few rows, so a long group is shown through a
//! window that follows the cursor. The window is centred on the cursor
//! where possible and pushed back inside the group near either end. With
//! an odd row count the window may stop one row short of the bottom of
//! the screen when the cursor is near the end of the group.

use core::ops::Range;

/// Visible slice of the active group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    /// Table index shown on the top row
    pub first: usize,
    /// Number of rows in use, at most `min(rows, group_length)`
    pub len: usize,
}

impl Viewport {
    /// Compute the window for a cursor inside a group
    ///
    /// Returns `None` when there is nothing to show: an empty (or
    /// malformed) group, or a display with no rows.
    pub fn compute(
        cursor: usize,
        group_start: usize,
        group_length: usize,
        rows: usize,
    ) -> Option<Self> {
        if group_length == 0 || rows == 0 {
            return None;
        }

        let group_end = group_start + group_length;
        if rows >= group_length {
            return Some(Self {
                first: group_start,
                len: group_length,
            });
        }

        // Centre on the cursor; the window is pulled back only once its
        // centre-plus-half reaches past the group
        let half = rows / 2;
        let mut first = cursor.saturating_sub(half).max(group_start);
        if cursor + half > group_end {
            first = group_end - rows;
        }

        Some(Self {
            first,
            len: rows.min(group_end - first),
        })
    }

    /// Table indices covered, top row first
    pub fn indices(&self) -> Range<usize> {
        self.first..self.first + self.len
    }

    /// Check if a table index is on screen
    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    /// Screen row showing a table index
    pub fn row_of(&self, index: usize) -> Option<usize> {
        if self.contains(index) {
            Some(index - self.first)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_group_fits_whole() {
        let view = Viewport::compute(11, 10, 3, 6).unwrap();
        assert_eq!(view, Viewport { first: 10, len: 3 });

        // Cursor anywhere in the group gives the same window
        for cursor in 10..13 {
            assert_eq!(Viewport::compute(cursor, 10, 3, 6), Some(view));
        }
    }

    #[test]
    fn test_exact_fit() {
        let view = Viewport::compute(5, 0, 6, 6).unwrap();
        assert_eq!(view, Viewport { first: 0, len: 6 });
    }

    #[test]
    fn test_window_centres_on_cursor() {
        // 10-entry group, 6 rows
        assert_eq!(Viewport::compute(5, 0, 10, 6).unwrap().first, 2);
        assert_eq!(Viewport::compute(6, 0, 10, 6).unwrap().first, 3);
    }

    #[test]
    fn test_window_clamps_at_top() {
        let view = Viewport::compute(0, 0, 10, 6).unwrap();
        assert_eq!(view, Viewport { first: 0, len: 6 });
        assert_eq!(Viewport::compute(2, 0, 10, 6).unwrap().first, 0);
    }

    #[test]
    fn test_window_clamps_at_bottom() {
        let view = Viewport::compute(9, 0, 10, 6).unwrap();
        assert_eq!(view, Viewport { first: 4, len: 6 });
        assert_eq!(view.row_of(9), Some(5));
    }

    #[test]
    fn test_group_not_at_origin() {
        let view = Viewport::compute(20, 20, 8, 6).unwrap();
        assert_eq!(view, Viewport { first: 20, len: 6 });

        let view = Viewport::compute(27, 20, 8, 6).unwrap();
        assert_eq!(view, Viewport { first: 22, len: 6 });
    }

    #[test]
    fn test_odd_row_count() {
        let view = Viewport::compute(5, 0, 10, 5).unwrap();
        assert_eq!(view, Viewport { first: 3, len: 5 });
        assert_eq!(view.row_of(5), Some(2));
    }

    #[test]
    fn test_odd_row_count_near_bottom() {
        // Centre-plus-half lands exactly on the group end: no pull back,
        // the last screen row stays blank
        let view = Viewport::compute(8, 0, 10, 5).unwrap();
        assert_eq!(view, Viewport { first: 6, len: 4 });
        assert_eq!(view.row_of(8), Some(2));

        let view = Viewport::compute(9, 0, 10, 5).unwrap();
        assert_eq!(view, Viewport { first: 5, len: 5 });
        assert_eq!(view.row_of(9), Some(4));
    }

    #[test]
    fn test_even_row_count_near_bottom_fills_screen() {
        let view = Viewport::compute(8, 0, 10, 6).unwrap();
        assert_eq!(view, Viewport { first: 4, len: 6 });
    }

    #[test]
    fn test_nothing_to_show() {
        assert_eq!(Viewport::compute(0, 0, 0, 6), None);
        assert_eq!(Viewport::compute(0, 0, 4, 0), None);
    }

    #[test]
    fn test_row_of() {
        let view = Viewport { first: 4, len: 3 };
        assert_eq!(view.row_of(3), None);
        assert_eq!(view.row_of(4), Some(0));
        assert_eq!(view.row_of(6), Some(2));
        assert_eq!(view.row_of(7), None);
    }

    proptest! {
        #[test]
        fn prop_window_bounded_and_contains_cursor(
            group_start in 0usize..64,
            group_length in 1usize..=24,
            rows in 1usize..=8,
            offset in 0usize..24,
        ) {
            let cursor = group_start + offset % group_length;
            let view = Viewport::compute(cursor, group_start, group_length, rows).unwrap();

            let full = rows.min(group_length);
            prop_assert!(view.len == full || (rows % 2 == 1 && view.len + 1 == full));
            prop_assert!(view.contains(cursor));
            prop_assert!(view.first >= group_start);
            prop_assert!(view.first + view.len <= group_start + group_length);
        }
    }
}
