use thiserror::Error;
use web_sys::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("no document is available")]
    NoDocument,
    #[error("no element with id `{0}` on the page")]
    Missing(String),
}

/// A resolved placement in the host page that one top-level component
/// replaces the contents of.
#[derive(Debug, Clone)]
pub struct MountPoint {
    element: Element,
}

impl MountPoint {
    pub fn by_id(id: &str) -> Result<Self, MountError> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or(MountError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| MountError::Missing(id.to_string()))?;
        Ok(Self {
            element,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}
