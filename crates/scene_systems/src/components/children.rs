//! Ordered list of a scene's game objects
//!
//! List order is update order and render order. Ids are handed out
//! monotonically and never reused within a scene.

use crate::objects::GameObject;

/// Identifier of a child within its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(u64);

impl ChildId {
    /// Raw id value
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Ordered children of a scene
#[derive(Debug, Default)]
pub struct Children {
    entries: Vec<(ChildId, GameObject)>,
    next_id: u64,
}

impl Children {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object; it updates and renders after every existing child
    pub fn add(&mut self, object: GameObject) -> ChildId {
        let id = ChildId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, object));
        id
    }

    /// Remove a child, keeping the order of the rest
    pub fn remove(&mut self, id: ChildId) -> Option<GameObject> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index).1)
    }

    /// Position of a child in the list
    pub fn index_of(&self, id: ChildId) -> Option<usize> {
        self.entries.iter().position(|(child, _)| *child == id)
    }

    /// Look up a child
    pub fn get(&self, id: ChildId) -> Option<&GameObject> {
        self.entries.iter().find(|(child, _)| *child == id).map(|(_, object)| object)
    }

    /// Look up a child mutably
    pub fn get_mut(&mut self, id: ChildId) -> Option<&mut GameObject> {
        self.entries
            .iter_mut()
            .find(|(child, _)| *child == id)
            .map(|(_, object)| object)
    }

    /// Move a child to the end of the list (updated and drawn last)
    pub fn bring_to_top(&mut self, id: ChildId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let entry = self.entries.remove(index);
                self.entries.push(entry);
                true
            }
            None => false,
        }
    }

    /// Move a child to the front of the list (updated and drawn first)
    pub fn send_to_back(&mut self, id: ChildId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let entry = self.entries.remove(index);
                self.entries.insert(0, entry);
                true
            }
            None => false,
        }
    }

    /// Children in list order
    pub fn iter(&self) -> impl Iterator<Item = (ChildId, &GameObject)> + '_ {
        self.entries.iter().map(|(id, object)| (*id, object))
    }

    /// Mutable children in list order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ChildId, &mut GameObject)> + '_ {
        self.entries.iter_mut().map(|(id, object)| (*id, object))
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scene has no children
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every child. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
