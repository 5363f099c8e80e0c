use std::collections::HashMap;

use thiserror::Error;

use crate::document::Document;
use crate::event::{Event, MouseButton};
use crate::marker::MarkerBackend;

/// A configured trigger or target element could not be resolved when the
/// binding was installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("trigger element not found: {0}")]
    TriggerNotFound(String),

    #[error("target element not found: {id} (bound to trigger {trigger})")]
    TargetNotFound { trigger: String, id: String },

    #[error("empty marker name for target {0}")]
    EmptyMarker(String),
}

/// One target element and the marker flipped on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMarker {
    pub id: String,
    pub marker: String,
}

impl TargetMarker {
    pub fn new(id: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            marker: marker.into(),
        }
    }
}

/// A trigger and the ordered (target, marker) pairs one activation flips.
///
/// The single-target case is just `targets.len() == 1` with the trigger as
/// its own target, e.g. a nav icon toggling `"close"` on itself. The
/// two-target case adds the companion menu, e.g. `"show"` on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleBinding {
    pub trigger: String,
    pub targets: Vec<TargetMarker>,
}

impl ToggleBinding {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            targets: Vec::new(),
        }
    }

    pub fn target(mut self, id: impl Into<String>, marker: impl Into<String>) -> Self {
        self.targets.push(TargetMarker::new(id, marker));
        self
    }
}

/// Wires activation events to class-marker flips on bound targets.
#[derive(Debug, Clone, Default)]
pub struct ToggleController {
    backend: MarkerBackend,
    bindings: HashMap<String, Vec<TargetMarker>>,
}

impl ToggleController {
    pub fn new(backend: MarkerBackend) -> Self {
        Self {
            backend,
            bindings: HashMap::new(),
        }
    }

    pub fn backend(&self) -> MarkerBackend {
        self.backend
    }

    pub fn is_bound(&self, trigger: &str) -> bool {
        self.bindings.contains_key(trigger)
    }

    /// Install a binding, validating that every referenced element resolves
    /// and every marker name is non-empty.
    ///
    /// Binding a trigger that is already bound replaces its target list
    /// (assignment semantics): at most one handler fires per activation,
    /// rebinding never accumulates.
    pub fn bind(&mut self, doc: &Document, binding: ToggleBinding) -> Result<(), BindingError> {
        if !doc.contains(&binding.trigger) {
            return Err(BindingError::TriggerNotFound(binding.trigger));
        }
        for target in &binding.targets {
            if target.marker.is_empty() {
                return Err(BindingError::EmptyMarker(target.id.clone()));
            }
            if !doc.contains(&target.id) {
                return Err(BindingError::TargetNotFound {
                    trigger: binding.trigger,
                    id: target.id.clone(),
                });
            }
        }

        log::debug!(
            "[toggle] Binding {} -> {} target(s)",
            binding.trigger,
            binding.targets.len()
        );
        self.bindings.insert(binding.trigger, binding.targets);
        Ok(())
    }

    /// Remove a trigger's binding. Returns true if one was installed.
    pub fn unbind(&mut self, trigger: &str) -> bool {
        self.bindings.remove(trigger).is_some()
    }

    /// Fire the binding for a trigger, flipping each configured marker in
    /// declaration order.
    ///
    /// Each flip is a live membership check against the target's current
    /// classes, so classes mutated by other code since the last activation
    /// are respected. A target that no longer resolves is skipped with a
    /// warning; the document may change shape after binding. Unknown
    /// triggers are ignored.
    pub fn activate(&self, doc: &mut Document, trigger: &str) {
        let Some(targets) = self.bindings.get(trigger) else {
            return;
        };

        for target in targets {
            let Some(element) = doc.get_mut(&target.id) else {
                log::warn!(
                    "[toggle] Target {} detached, skipping marker {}",
                    target.id,
                    target.marker
                );
                continue;
            };
            self.backend.toggle(&mut element.classes, &target.marker);
            log::debug!(
                "[toggle] {} now has classes {:?}",
                target.id,
                element.classes.to_attr()
            );
        }
    }

    /// Route an event to its binding, if any.
    ///
    /// Only a primary-button click on a resolved, enabled trigger
    /// activates. Everything else falls through silently.
    pub fn handle(&self, doc: &mut Document, event: &Event) {
        let Event::Click {
            target: Some(target),
            button: MouseButton::Left,
            ..
        } = event
        else {
            return;
        };

        if doc.get(target).is_some_and(|el| el.disabled) {
            return;
        }

        self.activate(doc, target);
    }
}

/// One-shot setup: install a list of bindings and hand back the controller.
///
/// This is the explicit replacement for self-executing page setup; the host
/// application calls it once at startup with its binding configuration.
pub fn bind_toggles(
    doc: &Document,
    backend: MarkerBackend,
    bindings: impl IntoIterator<Item = ToggleBinding>,
) -> Result<ToggleController, BindingError> {
    let mut controller = ToggleController::new(backend);
    for binding in bindings {
        controller.bind(doc, binding)?;
    }
    Ok(controller)
}
