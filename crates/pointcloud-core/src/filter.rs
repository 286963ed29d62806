//! Visibility rules for the portfolio table and the team grid.

use crate::error::ParseError;
use std::str::FromStr;

pub const ALL_LABEL: &str = "All";

/// Dimensions a portfolio row can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    Stage,
    Category,
}

impl FromStr for Facet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stage" => Ok(Self::Stage),
            "category" => Ok(Self::Category),
            other => Err(ParseError::UnknownFacet(other.to_string())),
        }
    }
}

/// Active stage and category selections. A row must match every active one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetFilter {
    stage: Option<String>,
    category: Option<String>,
}

impl FacetFilter {
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) {
        let value = Some(value.into());
        match facet {
            Facet::Stage => self.stage = value,
            Facet::Category => self.category = value,
        }
    }

    /// The "All" button: drop both selections.
    pub fn clear(&mut self) {
        self.stage = None;
        self.category = None;
    }

    pub fn is_active(&self) -> bool {
        self.stage.is_some() || self.category.is_some()
    }

    /// A row with a missing attribute fails any active selection on it.
    pub fn matches(&self, row_stage: Option<&str>, row_category: Option<&str>) -> bool {
        let ok = |want: &Option<String>, have: Option<&str>| match want {
            Some(w) => have == Some(w.as_str()),
            None => true,
        };
        ok(&self.stage, row_stage) && ok(&self.category, row_category)
    }
}

/// Team card visibility for the role filter buttons.
#[inline]
pub fn role_visible(filter_label: &str, card_role: Option<&str>) -> bool {
    filter_label == ALL_LABEL || card_role == Some(filter_label)
}

/// Single-expansion accordion over table rows, by row index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Accordion {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Toggle `row`. Returns the row that must collapse as a side effect.
    pub fn toggle(&mut self, row: usize) -> Option<usize> {
        match self.expanded {
            Some(open) if open == row => {
                self.expanded = None;
                None
            }
            previous => {
                self.expanded = Some(row);
                previous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_facet_is_rejected() {
        assert_eq!("stage".parse::<Facet>(), Ok(Facet::Stage));
        assert!("sector".parse::<Facet>().is_err());
    }

    #[test]
    fn accordion_collapses_previous_row() {
        let mut acc = Accordion::default();
        assert_eq!(acc.toggle(2), None);
        assert_eq!(acc.toggle(5), Some(2));
        assert_eq!(acc.expanded(), Some(5));
        assert_eq!(acc.toggle(5), None);
        assert_eq!(acc.expanded(), None);
    }

    #[test]
    fn role_filter() {
        assert!(role_visible("All", None));
        assert!(role_visible("Partner", Some("Partner")));
        assert!(!role_visible("Partner", Some("Advisor")));
        assert!(!role_visible("Partner", None));
    }
}
