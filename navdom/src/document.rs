use crate::element::{find_element, find_element_mut, Element};
use crate::event::{Event, MouseButton};
use crate::hit::hit_test;
use crate::region::RegionMap;

/// The host document: owns the element tree and resolves IDs against it.
///
/// Elements are owned by the document for the lifetime of the page/view;
/// controllers hold only IDs and look elements up on every activation.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Look up an element by ID.
    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// Look up an element by ID, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Map a raw pointer press to a click event on the deepest clickable
    /// element under it, if any.
    pub fn click_at(&self, regions: &RegionMap, x: u16, y: u16, button: MouseButton) -> Event {
        Event::Click {
            target: hit_test(regions, &self.root, x, y),
            x,
            y,
            button,
        }
    }
}
