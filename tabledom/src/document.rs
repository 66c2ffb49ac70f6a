//! Document tree with reversible structural substitution.
//!
//! Elements are owned by their parent, so "detaching" an element means moving
//! it out of the tree. A [`Substitution`] remembers where the original lived
//! and hands it back on [`Document::restore`], unchanged and with the same ID.

use thiserror::Error;

use crate::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element \"{0}\" is not in the document")]
    NotFound(String),
    #[error("the document root cannot be substituted")]
    RootSubstitution,
}

/// Position of an element: its parent's ID and its index among the parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub parent: String,
    pub index: usize,
}

/// An element that has been swapped out of the document for a replacement.
#[derive(Debug)]
pub struct Substitution {
    /// Where the original lived when it was detached.
    pub slot: Slot,
    /// ID of the element currently standing in for the original.
    pub replacement_id: String,
    original: Element,
}

impl Substitution {
    pub fn original(&self) -> &Element {
        &self.original
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Find the slot an element occupies. The root has no slot.
    pub fn locate(&self, id: &str) -> Option<Slot> {
        locate_in(&self.root, id)
    }

    /// Put `replacement` where `target_id` is and detach the target.
    pub fn substitute(
        &mut self,
        target_id: &str,
        replacement: Element,
    ) -> Result<Substitution, DomError> {
        if self.root.id == target_id {
            return Err(DomError::RootSubstitution);
        }
        let slot = self
            .locate(target_id)
            .ok_or_else(|| DomError::NotFound(target_id.to_string()))?;
        let replacement_id = replacement.id.clone();
        let original = self.swap_at(&slot, replacement)?;

        log::trace!(
            "[dom] substituted {} with {} at {}[{}]",
            target_id,
            replacement_id,
            slot.parent,
            slot.index
        );

        Ok(Substitution {
            slot,
            replacement_id,
            original,
        })
    }

    /// Reinsert the original at the replacement's current slot and return the
    /// detached replacement.
    pub fn restore(&mut self, substitution: Substitution) -> Result<Element, DomError> {
        let Substitution {
            replacement_id,
            original,
            ..
        } = substitution;
        let slot = self
            .locate(&replacement_id)
            .ok_or_else(|| DomError::NotFound(replacement_id.clone()))?;
        let original_id = original.id.clone();
        let replacement = self.swap_at(&slot, original)?;

        log::trace!(
            "[dom] restored {} in place of {} at {}[{}]",
            original_id,
            replacement_id,
            slot.parent,
            slot.index
        );

        Ok(replacement)
    }

    fn swap_at(&mut self, slot: &Slot, element: Element) -> Result<Element, DomError> {
        let parent = self
            .find_mut(&slot.parent)
            .ok_or_else(|| DomError::NotFound(slot.parent.clone()))?;
        let children = parent.children_mut();
        let existing = children
            .get_mut(slot.index)
            .ok_or_else(|| DomError::NotFound(format!("{}[{}]", slot.parent, slot.index)))?;
        Ok(std::mem::replace(existing, element))
    }
}

fn locate_in(parent: &Element, id: &str) -> Option<Slot> {
    for (index, child) in parent.children().iter().enumerate() {
        if child.id == id {
            return Some(Slot {
                parent: parent.id.clone(),
                index,
            });
        }
        if let Some(slot) = locate_in(child, id) {
            return Some(slot);
        }
    }
    None
}
