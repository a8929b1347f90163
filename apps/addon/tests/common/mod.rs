//! Common fixtures for the add-on integration tests.

use code_highlighter_addon::{Surface, SurfaceId};

/// Scripted host surface that records every call the add-on makes.
pub struct FakeSurface {
    pub id: SurfaceId,
    /// What `first_selection` reports: `None` models a cursor with no
    /// selection object, `Some("")` a collapsed selection.
    pub selection: Option<String>,
    pub loaded_scripts: Vec<String>,
    pub loaded_stylesheets: Vec<String>,
    pub language_paths: Vec<String>,
    pub replacements: Vec<String>,
    pub highlight_passes: usize,
}

impl FakeSurface {
    pub fn new(id: SurfaceId) -> Self {
        Self {
            id,
            selection: None,
            loaded_scripts: Vec::new(),
            loaded_stylesheets: Vec::new(),
            language_paths: Vec::new(),
            replacements: Vec::new(),
            highlight_passes: 0,
        }
    }

    pub fn with_selection(id: SurfaceId, selection: &str) -> Self {
        let mut surface = Self::new(id);
        surface.selection = Some(selection.to_string());
        surface
    }
}

impl Surface for FakeSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn load_script(&mut self, src: &str) {
        self.loaded_scripts.push(src.to_string());
    }

    fn load_stylesheet(&mut self, href: &str) {
        self.loaded_stylesheets.push(href.to_string());
    }

    fn configure_language_path(&mut self, dir: &str) {
        self.language_paths.push(dir.to_string());
    }

    fn first_selection(&self) -> Option<String> {
        self.selection.clone()
    }

    fn replace_selection(&mut self, text: &str) {
        self.replacements.push(text.to_string());
    }

    fn schedule_highlight(&mut self) {
        self.highlight_passes += 1;
    }
}
