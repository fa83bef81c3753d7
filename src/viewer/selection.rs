use std::path::{Path, PathBuf};

/// Insertion-ordered map from image index to file path.
///
/// Iteration order is selection order. Export only ever sees the path
/// sequence, never the index keys.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    entries: Vec<(usize, PathBuf)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.iter().any(|(i, _)| *i == index)
    }

    /// Adds the image at the end, or removes it if already selected.
    /// Returns whether the image is selected afterwards.
    pub fn toggle(&mut self, index: usize, path: &Path) -> bool {
        if let Some(pos) = self.entries.iter().position(|(i, _)| *i == index) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push((index, path.to_path_buf()));
            true
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Image index of the `pos`-th selected entry.
    pub fn index_at(&self, pos: usize) -> Option<usize> {
        self.entries.get(pos).map(|(i, _)| *i)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.entries.iter().map(|(i, p)| (*i, p.as_path()))
    }

    /// Display names in selection order.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(_, p)| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.to_string_lossy().into_owned())
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|(_, p)| p.clone()).collect()
    }
}
