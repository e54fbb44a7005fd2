//! Navigation action encoding.
//!
//! The composite string `pg:<identifier>:<index>` is the wire contract
//! shared with the platform client; it must be reproduced exactly for
//! compatibility. `noop` marks a control with no effect (disabled
//! prev/next at a boundary, the page indicator).

use crate::error::ActionError;
use serde::{Deserialize, Serialize};

/// Prefix of a page-navigation action.
pub const PAGE_ACTION_PREFIX: &str = "pg:";

/// Sentinel action for inert controls.
pub const NOOP_ACTION: &str = "noop";

/// A parsed navigation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    /// Fetch a page of a cached response.
    Page {
        /// Response identifier.
        id: String,
        /// Requested page index; the store clamps it into range.
        index: i64,
    },
    /// Recognized no-effect action.
    Noop,
}

impl NavAction {
    /// Encodes the action as callback data.
    ///
    /// # Examples
    ///
    /// ```
    /// use reply_pager::nav::NavAction;
    ///
    /// let action = NavAction::Page { id: "abc".to_string(), index: 2 };
    /// assert_eq!(action.encode(), "pg:abc:2");
    /// assert_eq!(NavAction::Noop.encode(), "noop");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Page { id, index } => format!("{PAGE_ACTION_PREFIX}{id}:{index}"),
            Self::Noop => NOOP_ACTION.to_string(),
        }
    }

    /// Parses callback data into an action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Malformed`] for data matching no known
    /// pattern and [`ActionError::InvalidIndex`] when the page-index
    /// component is not an integer. Controls built by this crate never
    /// produce either; both can only arrive from a foreign client.
    pub fn parse(data: &str) -> Result<Self, ActionError> {
        if data == NOOP_ACTION {
            return Ok(Self::Noop);
        }

        let rest = data
            .strip_prefix(PAGE_ACTION_PREFIX)
            .ok_or_else(|| ActionError::Malformed {
                data: data.to_string(),
            })?;

        let (id, index) = rest.rsplit_once(':').ok_or_else(|| ActionError::Malformed {
            data: data.to_string(),
        })?;

        if id.is_empty() {
            return Err(ActionError::Malformed {
                data: data.to_string(),
            });
        }

        let index = index.parse::<i64>().map_err(|_| ActionError::InvalidIndex {
            value: index.to_string(),
        })?;

        Ok(Self::Page {
            id: id.to_string(),
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_encode_page() {
        let action = NavAction::Page {
            id: "k3j2h1".to_string(),
            index: 4,
        };
        assert_eq!(action.encode(), "pg:k3j2h1:4");
    }

    #[test]
    fn test_encode_noop() {
        assert_eq!(NavAction::Noop.encode(), "noop");
    }

    #[test]
    fn test_parse_round_trip() {
        let action = NavAction::Page {
            id: "abc123".to_string(),
            index: 7,
        };
        assert_eq!(NavAction::parse(&action.encode()).unwrap(), action);
        assert_eq!(NavAction::parse("noop").unwrap(), NavAction::Noop);
    }

    #[test]
    fn test_parse_negative_and_overflow_indices() {
        // Out-of-range values parse fine; clamping happens in the store
        assert_eq!(
            NavAction::parse("pg:abc:-3").unwrap(),
            NavAction::Page {
                id: "abc".to_string(),
                index: -3
            }
        );
        assert_eq!(
            NavAction::parse("pg:abc:99").unwrap(),
            NavAction::Page {
                id: "abc".to_string(),
                index: 99
            }
        );
    }

    #[test_case(""; "empty")]
    #[test_case("pg:"; "prefix only")]
    #[test_case("pg:noindex"; "missing separator")]
    #[test_case("pg::3"; "empty id")]
    #[test_case("select:abc"; "unknown prefix")]
    fn test_parse_malformed(data: &str) {
        assert!(matches!(
            NavAction::parse(data),
            Err(ActionError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_non_integer_index() {
        assert!(matches!(
            NavAction::parse("pg:abc:one"),
            Err(ActionError::InvalidIndex { .. })
        ));
    }
}
