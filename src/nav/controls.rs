//! Page control row construction.
//!
//! Three logical actions: previous, indicator, next. Previous and next
//! become inert placeholders at the respective boundary; the indicator is
//! always inert. Single-page responses get no controls at all.

use crate::nav::action::NavAction;
use serde::{Deserialize, Serialize};

/// Label for an enabled previous control.
pub const PREV_LABEL: &str = "⬅️";

/// Label for an enabled next control.
pub const NEXT_LABEL: &str = "➡️";

/// Label for a disabled boundary control.
pub const DISABLED_LABEL: &str = "⏹️";

/// One inline control: a label and the callback data it fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavButton {
    /// Text shown on the control.
    pub label: String,
    /// Encoded action fired on press.
    pub action: String,
}

impl NavButton {
    /// Creates a control firing a navigation action.
    #[must_use]
    pub fn new(label: &str, action: &NavAction) -> Self {
        Self {
            label: label.to_string(),
            action: action.encode(),
        }
    }

    /// Creates an inert placeholder control.
    #[must_use]
    pub fn noop(label: &str) -> Self {
        Self::new(label, &NavAction::Noop)
    }
}

/// Builds the prev/indicator/next control row for a paged response.
///
/// Returns `None` when the response fits a single page; a lone page needs
/// no navigation.
///
/// # Arguments
///
/// * `id` - Response identifier referenced by the page actions.
/// * `current_page` - 0-based index of the page being rendered.
/// * `total_pages` - Page count of the response.
///
/// # Examples
///
/// ```
/// use reply_pager::nav::page_controls;
///
/// let row = page_controls("abc", 1, 3).unwrap();
/// assert_eq!(row.len(), 3);
/// assert_eq!(row[0].action, "pg:abc:0");
/// assert_eq!(row[1].label, "2/3");
/// assert_eq!(row[2].action, "pg:abc:2");
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn page_controls(id: &str, current_page: usize, total_pages: usize) -> Option<Vec<NavButton>> {
    if total_pages <= 1 {
        return None;
    }

    let prev = if current_page > 0 {
        NavButton::new(
            PREV_LABEL,
            &NavAction::Page {
                id: id.to_string(),
                index: current_page as i64 - 1,
            },
        )
    } else {
        NavButton::noop(DISABLED_LABEL)
    };

    let indicator = NavButton::noop(&format!("{}/{total_pages}", current_page + 1));

    let next = if current_page + 1 < total_pages {
        NavButton::new(
            NEXT_LABEL,
            &NavAction::Page {
                id: id.to_string(),
                index: current_page as i64 + 1,
            },
        )
    } else {
        NavButton::noop(DISABLED_LABEL)
    };

    Some(vec![prev, indicator, next])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_has_no_controls() {
        assert!(page_controls("abc", 0, 1).is_none());
        assert!(page_controls("abc", 0, 0).is_none());
    }

    #[test]
    fn test_first_page_controls() {
        let row = page_controls("abc", 0, 3).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[0].label, DISABLED_LABEL);
        assert_eq!(row[0].action, "noop");
        assert_eq!(row[1].label, "1/3");
        assert_eq!(row[1].action, "noop");
        assert_eq!(row[2].label, NEXT_LABEL);
        assert_eq!(row[2].action, "pg:abc:1");
    }

    #[test]
    fn test_middle_page_controls() {
        let row = page_controls("abc", 1, 3).unwrap();
        assert_eq!(row[0].action, "pg:abc:0");
        assert_eq!(row[1].label, "2/3");
        assert_eq!(row[2].action, "pg:abc:2");
    }

    #[test]
    fn test_last_page_controls() {
        let row = page_controls("abc", 2, 3).unwrap();
        assert_eq!(row[0].action, "pg:abc:1");
        assert_eq!(row[1].label, "3/3");
        assert_eq!(row[2].label, DISABLED_LABEL);
        assert_eq!(row[2].action, "noop");
    }

    #[test]
    fn test_two_page_boundaries() {
        let first = page_controls("x", 0, 2).unwrap();
        assert_eq!(first[0].action, "noop");
        assert_eq!(first[2].action, "pg:x:1");

        let last = page_controls("x", 1, 2).unwrap();
        assert_eq!(last[0].action, "pg:x:0");
        assert_eq!(last[2].action, "noop");
    }
}
