use super::scale::Magnifier;
use super::scanner::scan_folder;
use super::selection::Selection;
use super::zoom::ZoomController;
use crate::error::ViewerError;
use crate::utils::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Browsing state for one loaded folder.
///
/// Every change of the current image resets zoom to base and rotation to 0.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    images: Vec<PathBuf>,
    current: usize,
    selection: Selection,
    magnifier: Magnifier,
    rotation: u16,
}

impl ViewerSession {
    pub fn new(zoom_min: i32, zoom_max: i32, zoom_factor: f64) -> Self {
        Self {
            images: Vec::new(),
            current: 0,
            selection: Selection::new(),
            magnifier: Magnifier::new(ZoomController::new(zoom_min, zoom_max), zoom_factor),
            rotation: 0,
        }
    }

    /// An empty session using the configured zoom bounds and factor.
    ///
    /// Nothing is loaded; callers open `config.start_dir` with
    /// [`load_folder`](Self::load_folder) when they want it.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.zoom_min, config.zoom_max, config.zoom_factor)
    }

    /// Replaces the image list with the contents of `dir` and clears the selection.
    pub fn load_folder(&mut self, dir: &Path) -> Result<usize, ViewerError> {
        let images = scan_folder(dir)?;
        info!("Loaded {} images from {:?}", images.len(), dir);
        self.set_images(images);
        Ok(self.images.len())
    }

    pub fn set_images(&mut self, images: Vec<PathBuf>) {
        self.images = images;
        self.selection.clear();
        self.show(0);
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.current)
    }

    pub fn current_image(&self) -> Option<&Path> {
        self.images.get(self.current).map(PathBuf::as_path)
    }

    pub fn next(&mut self) -> Option<&Path> {
        if self.images.is_empty() {
            return None;
        }
        self.show((self.current + 1) % self.images.len());
        self.current_image()
    }

    pub fn prev(&mut self) -> Option<&Path> {
        if self.images.is_empty() {
            return None;
        }
        let len = self.images.len();
        self.show((self.current + len - 1) % len);
        self.current_image()
    }

    /// Jumps to the image whose file name matches `name`, ignoring case.
    pub fn find(&mut self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        let found = self.images.iter().position(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().to_lowercase() == wanted)
                .unwrap_or(false)
        });

        match found {
            Some(index) => {
                self.show(index);
                true
            }
            None => {
                debug!("No image named {:?}", name);
                false
            }
        }
    }

    /// Returns whether the current image is selected afterwards.
    pub fn toggle_selection(&mut self) -> Option<bool> {
        let path = self.images.get(self.current)?;
        let selected = self.selection.toggle(self.current, path);
        self.show(self.current);
        Some(selected)
    }

    pub fn is_current_selected(&self) -> bool {
        self.current_index()
            .map(|i| self.selection.contains(i))
            .unwrap_or(false)
    }

    /// Shows the image at position `pos` of the selection list.
    pub fn show_selected(&mut self, pos: usize) -> Option<&Path> {
        let index = self.selection.index_at(pos)?;
        self.show(index);
        self.current_image()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The ordered path sequence handed to export.
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.selection.paths()
    }

    /// Rotates a quarter turn clockwise; returns the angle in degrees.
    pub fn rotate(&mut self) -> Option<u16> {
        self.current_image()?;
        self.rotation = (self.rotation + 270) % 360;
        Some(self.rotation)
    }

    pub fn rotation(&self) -> u16 {
        self.rotation
    }

    pub fn magnifier(&self) -> &Magnifier {
        &self.magnifier
    }

    pub fn magnifier_mut(&mut self) -> &mut Magnifier {
        &mut self.magnifier
    }

    fn show(&mut self, index: usize) {
        self.current = index;
        self.rotation = 0;
        self.magnifier.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session_with(names: &[&str]) -> ViewerSession {
        let mut session = ViewerSession::new(-2, 4, 1.2);
        session.set_images(names.iter().map(|n| PathBuf::from("/pics").join(n)).collect());
        session
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut session = session_with(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(session.prev(), Some(Path::new("/pics/c.jpg")));
        assert_eq!(session.next(), Some(Path::new("/pics/a.jpg")));
        assert_eq!(session.next(), Some(Path::new("/pics/b.jpg")));
    }

    #[test]
    fn test_empty_session_is_inert() {
        let mut session = ViewerSession::new(-2, 4, 1.2);
        assert_eq!(session.next(), None);
        assert_eq!(session.toggle_selection(), None);
        assert_eq!(session.rotate(), None);
        assert!(!session.find("a.jpg"));
    }

    #[test]
    fn test_find_ignores_case() {
        let mut session = session_with(&["a.jpg", "Beach.PNG"]);
        assert!(session.find("beach.png"));
        assert_eq!(session.current_index(), Some(1));
        assert!(!session.find("missing.png"));
        assert_eq!(session.current_index(), Some(1));
    }

    #[test]
    fn test_selection_order_and_jump() {
        let mut session = session_with(&["a.jpg", "b.jpg", "c.jpg"]);
        session.next();
        session.next();
        assert_eq!(session.toggle_selection(), Some(true));
        session.next();
        assert_eq!(session.toggle_selection(), Some(true));

        assert_eq!(
            session.selected_paths(),
            vec![PathBuf::from("/pics/c.jpg"), PathBuf::from("/pics/a.jpg")]
        );
        assert_eq!(session.show_selected(0), Some(Path::new("/pics/c.jpg")));
        assert!(session.is_current_selected());
    }

    #[test]
    fn test_image_change_resets_zoom_and_rotation() {
        let mut session = session_with(&["a.jpg", "b.jpg"]);
        session.magnifier_mut().zoom_in();
        assert_eq!(session.rotate(), Some(270));
        assert_eq!(session.rotate(), Some(180));

        session.next();
        assert_eq!(session.rotation(), 0);
        assert!(session.magnifier().zoom().at_base());
    }

    #[test]
    fn test_load_folder_clears_selection() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("one.gif"), b"x").unwrap();
        std::fs::write(dir.path().join("two.bmp"), b"x").unwrap();

        let mut session = session_with(&["old.jpg"]);
        session.toggle_selection();
        assert_eq!(session.load_folder(dir.path()).unwrap(), 2);
        assert!(session.selection().is_empty());
        assert_eq!(session.current_image(), Some(dir.path().join("one.gif").as_path()));
    }

    #[test]
    fn test_from_config_uses_zoom_settings_and_start_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();

        let config = Config {
            zoom_min: -3,
            zoom_max: 2,
            zoom_factor: 1.5,
            start_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let mut session = ViewerSession::from_config(&config);
        assert_eq!(session.magnifier().zoom().min(), -3);
        assert_eq!(session.magnifier().zoom().max(), 2);
        assert_eq!(session.magnifier().factor(), 1.5);

        assert_eq!(session.load_folder(&config.start_dir).unwrap(), 1);
        session.magnifier_mut().zoom_in();
        session.magnifier_mut().zoom_in();
        session.magnifier_mut().zoom_in();
        assert_eq!(session.magnifier().zoom().level(), 2);
        assert_eq!(session.magnifier().scale(), 1.5);
    }
}
