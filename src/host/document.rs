use std::collections::BTreeMap;

use crate::foundation::core::Vec2;
use crate::foundation::error::{RevealError, RevealResult};
use crate::host::listeners::ListenerTable;

/// Identity of an element inside a [`Document`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// Read access to an element hierarchy, as needed for hover-target resolution.
pub trait ElementTree {
    /// Parent of `id`, or `None` at the root.
    fn parent(&self, id: ElementId) -> Option<ElementId>;

    /// Value of attribute `name` on `id`, if declared.
    fn attribute(&self, id: ElementId, name: &str) -> Option<&str>;

    /// Nearest ancestor-or-self of `start` declaring `name`, with the declared value.
    ///
    /// The walk stops at the first match. Implementations must not contain parent cycles.
    fn closest_with_attribute(&self, start: ElementId, name: &str) -> Option<(ElementId, &str)> {
        let mut cur = Some(start);
        while let Some(id) = cur {
            if let Some(value) = self.attribute(id, name) {
                return Some((id, value));
            }
            cur = self.parent(id);
        }
        None
    }
}

#[derive(Clone, Debug)]
struct Element {
    name: String,
    parent: Option<ElementId>,
    attrs: BTreeMap<String, String>,
}

/// Serializable description of a document, elements referenced by string id.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct DocumentDef {
    /// Elements, parents declared before their children.
    #[serde(default)]
    pub elements: Vec<ElementDef>,
    /// Id of the reveal overlay element, if mounted.
    #[serde(default)]
    pub overlay: Option<String>,
}

/// One element of a [`DocumentDef`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElementDef {
    /// Unique element id.
    pub id: String,
    /// Parent element id.
    #[serde(default)]
    pub parent: Option<String>,
    /// Declared attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

/// In-memory host page: element hierarchy, overlay, scroll offset and registered listeners.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
    by_name: BTreeMap<String, ElementId>,
    overlay: Option<ElementId>,
    scroll: Vec2,
    listeners: ListenerTable,
}

impl Document {
    /// Empty document with no overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from its description.
    pub fn from_def(def: &DocumentDef) -> RevealResult<Self> {
        let mut doc = Self::new();
        for el in &def.elements {
            let parent = match el.parent.as_deref() {
                Some(p) => Some(doc.element(p).ok_or_else(|| {
                    RevealError::document(format!(
                        "element '{}' references parent '{}' which is not declared before it",
                        el.id, p
                    ))
                })?),
                None => None,
            };
            let id = doc.add_element(&el.id, parent)?;
            for (k, v) in &el.attrs {
                doc.set_attribute(id, k, v)?;
            }
        }
        if let Some(overlay) = def.overlay.as_deref() {
            let id = doc.element(overlay).ok_or_else(|| {
                RevealError::document(format!("overlay element '{overlay}' is not declared"))
            })?;
            doc.set_overlay(Some(id));
        }
        Ok(doc)
    }

    /// Append an element under `parent`.
    pub fn add_element(&mut self, name: &str, parent: Option<ElementId>) -> RevealResult<ElementId> {
        if self.by_name.contains_key(name) {
            return Err(RevealError::document(format!(
                "duplicate element id '{name}'"
            )));
        }
        if let Some(p) = parent {
            self.check(p)?;
        }
        let id = ElementId(u32::try_from(self.elements.len()).map_err(|_| {
            RevealError::document("too many elements")
        })?);
        self.elements.push(Element {
            name: name.to_owned(),
            parent,
            attrs: BTreeMap::new(),
        });
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Declare (or overwrite) an attribute.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> RevealResult<()> {
        self.check(id)?;
        self.elements[id.0 as usize]
            .attrs
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> RevealResult<Option<String>> {
        self.check(id)?;
        Ok(self.elements[id.0 as usize].attrs.remove(name))
    }

    /// Look up an element by its string id.
    pub fn element(&self, name: &str) -> Option<ElementId> {
        self.by_name.get(name).copied()
    }

    /// String id of an element.
    pub fn name(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id.0 as usize).map(|e| e.name.as_str())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Reveal overlay element, if mounted.
    pub fn overlay(&self) -> Option<ElementId> {
        self.overlay
    }

    /// Mount or detach the reveal overlay.
    pub fn set_overlay(&mut self, overlay: Option<ElementId>) {
        self.overlay = overlay;
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Update the scroll offset.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Registered event listeners.
    pub fn listeners(&self) -> &ListenerTable {
        &self.listeners
    }

    /// Mutable access to registered event listeners.
    pub fn listeners_mut(&mut self) -> &mut ListenerTable {
        &mut self.listeners
    }

    fn check(&self, id: ElementId) -> RevealResult<()> {
        if (id.0 as usize) < self.elements.len() {
            Ok(())
        } else {
            Err(RevealError::document(format!("unknown element {}", id.0)))
        }
    }
}

impl ElementTree for Document {
    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id.0 as usize).and_then(|e| e.parent)
    }

    fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements
            .get(id.0 as usize)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/document.rs"]
mod tests;
