//! Root element binding.

use crate::ports::outbound::{DocumentPort, ElementPort};

pub const DEFAULT_ROOT_ID: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("Root element #{0} not found")]
    RootNotFound(String),
}

/// Owns the root element and stretches it over the viewport.
pub struct Ui<E: ElementPort> {
    root: E,
}

impl<E: ElementPort> Ui<E> {
    pub fn new<D>(document: &D, root_id: &str) -> Result<Self, UiError>
    where
        D: DocumentPort<Element = E>,
    {
        let mut root = document
            .element_by_id(root_id)
            .ok_or_else(|| UiError::RootNotFound(root_id.to_string()))?;

        root.set_style("width", "100vw");
        root.set_style("height", "100vh");

        Ok(Self { root })
    }

    pub fn root(&self) -> &E {
        &self.root
    }
}
