use serde::Serialize;

use crate::card::Card;

/// Link to the full listing a category is a preview of.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrowseLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Titled group of cards. Rebuilt on every render, it has no identity of its own.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Category {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub browse: Option<BrowseLink>,
    pub cards: Vec<Card>,
}

impl Category {
    pub fn new(title: &'static str, cards: Vec<Card>) -> Self {
        Self {
            title,
            description: None,
            browse: None,
            cards,
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_browse(mut self, label: &'static str, href: &'static str) -> Self {
        self.browse = Some(BrowseLink { label, href });
        self
    }
}
