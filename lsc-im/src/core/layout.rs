//! Keyboard layout
//!
//! Rows of keys as the rendering layer draws them. The engine itself only
//! needs key identity; the layout is validated once when settings load.

use std::collections::HashSet;

use anyhow::Result;
use lsc_engine::KeyId;

/// A validated keyboard layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<KeyId>>,
}

impl Layout {
    /// Validate and build a layout.
    ///
    /// Fails when the layout has no keys or a key appears more than once.
    pub fn new(rows: Vec<Vec<KeyId>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for key in rows.iter().flatten() {
            if !seen.insert(*key) {
                anyhow::bail!("key '{}' appears more than once in the layout", key);
            }
        }
        if seen.is_empty() {
            anyhow::bail!("keyboard layout has no keys");
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<KeyId>] {
        &self.rows
    }

    /// All keys, row by row
    pub fn keys(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub fn contains(&self, key: KeyId) -> bool {
        self.keys().any(|k| k == key)
    }
}
