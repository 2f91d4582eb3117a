//! Document access for the game shell.
//!
//! The shell only needs to find its root element and size it, so this is all
//! the surface a platform has to provide.

pub trait ElementPort {
    fn set_style(&mut self, property: &str, value: &str);
}

pub trait DocumentPort {
    type Element: ElementPort;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
