/// An ordered list of class tokens on an element.
///
/// This is the structured half of the class-marker capability: membership
/// queries and symmetric add/remove. The raw-attribute fallback is built on
/// [`ClassList::append_raw`], which keeps textual append semantics
/// (duplicates allowed) like `className += " name"` in a legacy host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a space-separated class attribute.
    pub fn from_attr(attr: &str) -> Self {
        Self {
            tokens: attr.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Serialize back to space-separated attribute form.
    pub fn to_attr(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.iter().any(|t| t == name)
    }

    /// Add a token. No-op if already present.
    pub fn add(&mut self, name: &str) {
        if !self.contains(name) {
            self.tokens.push(name.to_string());
        }
    }

    /// Remove every occurrence of a token. Other tokens keep their order.
    pub fn remove(&mut self, name: &str) {
        self.tokens.retain(|t| t != name);
    }

    /// Flip a token's membership. Returns whether it is present afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.contains(name) {
            self.remove(name);
            false
        } else {
            self.add(name);
            true
        }
    }

    /// Blind textual append, without a membership check. Duplicates allowed.
    pub fn append_raw(&mut self, name: &str) {
        self.tokens.push(name.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
