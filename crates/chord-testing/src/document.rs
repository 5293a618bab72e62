//! Mock host document.

use crate::target::{Flavor, MockTarget};
use chord_shortcuts::{Document, EventTarget};
use std::collections::HashMap;
use std::rc::Rc;

/// Document with a mock root and mock elements addressable by id.
#[derive(Debug)]
pub struct MockDocument {
    root: Rc<MockTarget>,
    elements: HashMap<String, Rc<MockTarget>>,
}

impl MockDocument {
    /// Document whose root uses standard registration.
    pub fn new() -> Self {
        Self::with_flavor(Flavor::Standard)
    }

    /// Document whose root uses the given registration mechanism.
    pub fn with_flavor(flavor: Flavor) -> Self {
        Self {
            root: Rc::new(MockTarget::with_flavor("document", flavor)),
            elements: HashMap::new(),
        }
    }

    /// Add a standard element with an id.
    pub fn with_element(self, id: &str) -> Self {
        self.with_element_flavor(id, Flavor::Standard)
    }

    /// Add an element with an id and registration mechanism.
    pub fn with_element_flavor(mut self, id: &str, flavor: Flavor) -> Self {
        self.elements
            .insert(id.to_string(), Rc::new(MockTarget::with_flavor(id, flavor)));
        self
    }

    /// The root target.
    pub fn root_target(&self) -> Rc<MockTarget> {
        Rc::clone(&self.root)
    }

    /// An element by id.
    pub fn element(&self, id: &str) -> Option<Rc<MockTarget>> {
        self.elements.get(id).cloned()
    }
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MockDocument {
    fn root(&self) -> Rc<dyn EventTarget> {
        self.root.clone()
    }

    fn get_element_by_id(&self, id: &str) -> Option<Rc<dyn EventTarget>> {
        self.elements
            .get(id)
            .map(|element| -> Rc<dyn EventTarget> { element.clone() })
    }
}
