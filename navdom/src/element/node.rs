use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::class::ClassList;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the host document tree.
///
/// The controller never owns elements; it resolves them by ID through a
/// [`Document`](crate::Document) and mutates their class list in place.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Visual state, encoded as class membership
    pub classes: ClassList,

    // Interaction
    pub clickable: bool,
    /// Disabled elements don't receive input.
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            classes: ClassList::new(),
            clickable: false,
            disabled: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    /// Set the class list from a space-separated attribute string.
    pub fn class(mut self, attr: &str) -> Self {
        self.classes = ClassList::from_attr(attr);
        self
    }

    /// The class list serialized back to attribute form.
    pub fn class_attr(&self) -> String {
        self.classes.to_attr()
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
