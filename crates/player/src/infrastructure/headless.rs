//! In-memory document for running the game shell without a browser.

use std::collections::{BTreeMap, HashSet};

use crate::ports::outbound::{DocumentPort, ElementPort};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessElement {
    id: String,
    styles: BTreeMap<String, String>,
}

impl HeadlessElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

impl ElementPort for HeadlessElement {
    fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }
}

/// A document that only knows which element ids exist.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    element_ids: HashSet<String>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(id: &str) -> Self {
        Self::new().with_element(id)
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.element_ids.insert(id.to_string());
        self
    }
}

impl DocumentPort for HeadlessDocument {
    type Element = HeadlessElement;

    fn element_by_id(&self, id: &str) -> Option<HeadlessElement> {
        self.element_ids.contains(id).then(|| HeadlessElement {
            id: id.to_string(),
            styles: BTreeMap::new(),
        })
    }
}
