//! Paginated model-selection menu.
//!
//! A second, list-level pagination surface sharing the button encoding:
//! model entries laid out two per row, six per page, with a prev/indicator/
//! next row when the list spans multiple pages and a footer to return to
//! the main menu. Callback data stays under the transport's 64-byte limit
//! as long as model identifiers are reasonably short.

use crate::nav::controls::{DISABLED_LABEL, NEXT_LABEL, NavButton, PREV_LABEL};

/// Model entries per menu page.
pub const MENU_PAGE_SIZE: usize = 6;

/// Prefix of a model-selection action.
pub const SELECT_MODEL_PREFIX: &str = "select_model:";

/// Prefix of a menu page-navigation action.
pub const MENU_PAGE_PREFIX: &str = "menu_model_page:";

/// Action returning to the main menu.
pub const BACK_ACTION: &str = "back_home";

/// One selectable model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    /// Model identifier sent in the selection action.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl ModelEntry {
    /// Creates a model entry.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Builds the model-selection menu for one page of the list.
///
/// The page index is clamped into range, mirroring the leniency of page
/// navigation. The currently selected model is marked. Returns rows of
/// buttons: model rows (two columns), an optional navigation row, and the
/// back-to-menu footer.
///
/// # Arguments
///
/// * `models` - Full model list.
/// * `current_model` - Identifier of the user's selected model.
/// * `page` - Requested menu page (0-based).
#[must_use]
pub fn model_menu(models: &[ModelEntry], current_model: &str, page: usize) -> Vec<Vec<NavButton>> {
    let total_pages = models.len().div_ceil(MENU_PAGE_SIZE).max(1);
    let page = page.min(total_pages - 1);

    let start = page * MENU_PAGE_SIZE;
    let end = (start + MENU_PAGE_SIZE).min(models.len());

    let mut keyboard: Vec<Vec<NavButton>> = Vec::new();

    let buttons: Vec<NavButton> = models[start..end]
        .iter()
        .map(|model| {
            let label = if model.id == current_model {
                format!("✅ {}", model.name)
            } else {
                model.name.clone()
            };
            NavButton {
                label,
                action: format!("{SELECT_MODEL_PREFIX}{}", model.id),
            }
        })
        .collect();

    for pair in buttons.chunks(2) {
        keyboard.push(pair.to_vec());
    }

    if total_pages > 1 {
        let prev = if page > 0 {
            NavButton {
                label: format!("{PREV_LABEL} Prev"),
                action: format!("{MENU_PAGE_PREFIX}{}", page - 1),
            }
        } else {
            NavButton::noop(DISABLED_LABEL)
        };

        let indicator = NavButton::noop(&format!("{}/{total_pages}", page + 1));

        let next = if page + 1 < total_pages {
            NavButton {
                label: format!("Next {NEXT_LABEL}"),
                action: format!("{MENU_PAGE_PREFIX}{}", page + 1),
            }
        } else {
            NavButton::noop(DISABLED_LABEL)
        };

        keyboard.push(vec![prev, indicator, next]);
    }

    keyboard.push(vec![NavButton {
        label: "🔙 Back to Menu".to_string(),
        action: BACK_ACTION.to_string(),
    }]);

    keyboard
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models(n: usize) -> Vec<ModelEntry> {
        (0..n)
            .map(|i| ModelEntry::new(&format!("vendor/model-{i}"), &format!("Model {i}")))
            .collect()
    }

    #[test]
    fn test_single_page_menu_has_no_nav_row() {
        let menu = model_menu(&models(4), "vendor/model-1", 0);
        // Two model rows plus the back footer
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[2][0].action, BACK_ACTION);
        assert!(menu.iter().flatten().all(|b| !b.action.starts_with(MENU_PAGE_PREFIX)));
    }

    #[test]
    fn test_current_model_marked() {
        let menu = model_menu(&models(2), "vendor/model-0", 0);
        assert!(menu[0][0].label.starts_with("✅ "));
        assert!(!menu[0][1].label.starts_with("✅ "));
    }

    #[test]
    fn test_selection_actions() {
        let menu = model_menu(&models(2), "", 0);
        assert_eq!(menu[0][0].action, "select_model:vendor/model-0");
        assert_eq!(menu[0][1].action, "select_model:vendor/model-1");
    }

    #[test]
    fn test_multi_page_nav_row() {
        // 13 models -> 3 pages
        let list = models(13);
        let menu = model_menu(&list, "", 1);
        let nav = &menu[menu.len() - 2];
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0].action, "menu_model_page:0");
        assert_eq!(nav[1].label, "2/3");
        assert_eq!(nav[2].action, "menu_model_page:2");
    }

    #[test]
    fn test_boundary_pages_disable_nav() {
        let list = models(13);

        let first = model_menu(&list, "", 0);
        let nav = &first[first.len() - 2];
        assert_eq!(nav[0].action, "noop");
        assert_eq!(nav[2].action, "menu_model_page:1");

        let last = model_menu(&list, "", 2);
        let nav = &last[last.len() - 2];
        assert_eq!(nav[0].action, "menu_model_page:1");
        assert_eq!(nav[2].action, "noop");
    }

    #[test]
    fn test_page_clamped() {
        let list = models(13);
        let overflow = model_menu(&list, "", 99);
        let last = model_menu(&list, "", 2);
        assert_eq!(overflow, last);
    }

    #[test]
    fn test_empty_model_list() {
        let menu = model_menu(&[], "", 0);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0][0].action, BACK_ACTION);
    }
}
