use serde::{Deserialize, Serialize};

use crate::color_value::ColorValue;

/// Opaque identifier of a saved color, unique within its list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SavedColorId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedColor {
    pub id: SavedColorId,
    pub color: ColorValue,
}

/// Append-only, in-memory list of colors the user kept.
#[derive(Clone, Debug, Default)]
pub struct SavedColors {
    entries: Vec<SavedColor>,
    next_id: u64,
}

impl SavedColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `color`. Saving the same color twice yields two
    /// entries with distinct ids.
    pub fn push(&mut self, color: ColorValue) -> SavedColorId {
        let id = SavedColorId(self.next_id);
        self.next_id += 1;
        self.entries.push(SavedColor { id, color });
        id
    }

    pub fn get(&self, id: SavedColorId) -> Option<&SavedColor> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedColor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
