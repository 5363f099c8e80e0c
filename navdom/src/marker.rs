use crate::class::ClassList;

/// How class markers are read and flipped on a target element.
///
/// Selected once when a controller is constructed; there is no runtime
/// capability sniffing. `Structured` is the normal mode. `ClassAttr` routes
/// every operation through the serialized attribute text, for hosts that
/// only expose a raw class string. With `legacy_append` set it reproduces
/// the old fallback exactly: toggling only ever appends the marker and
/// never removes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerBackend {
    /// Structured membership API: contains/add/remove on the class list.
    #[default]
    Structured,
    /// Raw space-separated attribute text.
    ClassAttr {
        /// Append-only compatibility mode. Asymmetric: toggle adds the
        /// marker textually, even when it is already present.
        legacy_append: bool,
    },
}

impl MarkerBackend {
    /// Whether the marker is currently present.
    ///
    /// Always a live query against the element's classes, never cached
    /// controller state, so external class mutations are respected.
    pub fn has(&self, classes: &ClassList, name: &str) -> bool {
        match self {
            Self::Structured => classes.contains(name),
            Self::ClassAttr { .. } => ClassList::from_attr(&classes.to_attr()).contains(name),
        }
    }

    /// Flip the marker on the given class list.
    pub fn toggle(&self, classes: &mut ClassList, name: &str) {
        match self {
            Self::Structured => {
                classes.toggle(name);
            }
            Self::ClassAttr { legacy_append: true } => {
                classes.append_raw(name);
            }
            Self::ClassAttr {
                legacy_append: false,
            } => {
                // Symmetric even through the text path: round-trip the
                // attribute and flip membership on the parsed tokens.
                let mut parsed = ClassList::from_attr(&classes.to_attr());
                parsed.toggle(name);
                *classes = parsed;
            }
        }
    }
}
