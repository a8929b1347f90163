//! Editor augmenter: asset injection, the insert control, and the
//! transient language picker.

use crate::surface::{ControlDescriptor, Surface, SurfaceId};
use highlighter_core::{AssetRoot, Config};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Body inserted when the selection is empty.
const PLACEHOLDER_BODY: &str = "Type your code here";

/// Command name the insert control is bound to.
pub const INSERT_COMMAND: &str = "insert_code_block";

/// Per-surface asset lifecycle. Absence from the state map means not yet
/// requested; once a surface is tracked the assets are never requested
/// again, whether or not the load ever completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetState {
    Pending,
    Ready,
}

/// The transient language picker.
///
/// At most one instance exists at a time; opening a new one replaces any
/// menu still open, and the host closes it by routing an outside click to
/// [`EditorAugmenter::dismiss_menu`]. The selection is captured when the
/// menu opens so the later choice operates on what the user had selected.
#[derive(Debug, Clone)]
pub struct LanguageMenu {
    surface: SurfaceId,
    entries: Vec<String>,
    captured_selection: String,
}

impl LanguageMenu {
    /// Languages to list, in configuration order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Surface the menu was opened for.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }
}

/// Keeps the editing surface capable of producing fenced blocks and of
/// visually previewing them.
pub struct EditorAugmenter {
    config: Rc<Config>,
    assets: AssetRoot,
    asset_states: HashMap<SurfaceId, AssetState>,
    menu: Option<LanguageMenu>,
}

impl EditorAugmenter {
    pub fn new(config: Rc<Config>, assets: AssetRoot) -> Self {
        Self {
            config,
            assets,
            asset_states: HashMap::new(),
            menu: None,
        }
    }

    /// Idempotently make sure the highlighter script and stylesheet are
    /// loading (or loaded) in `surface`. Safe to call any number of times
    /// without duplicating the loads.
    pub fn ensure_highlighting_assets(&mut self, surface: &mut dyn Surface) {
        if self.asset_states.contains_key(&surface.id()) {
            return;
        }

        debug!(surface = surface.id(), "requesting highlighter assets");
        surface.load_script(&self.assets.highlighter_script());
        surface.load_stylesheet(&self.assets.theme_stylesheet());
        self.asset_states.insert(surface.id(), AssetState::Pending);
    }

    /// Host callback: the script requested by
    /// [`ensure_highlighting_assets`](Self::ensure_highlighting_assets)
    /// finished loading in `surface`.
    pub fn assets_loaded(&mut self, surface: &mut dyn Surface) {
        surface.configure_language_path(&self.assets.languages_dir());
        self.asset_states.insert(surface.id(), AssetState::Ready);
    }

    /// Contribute the insert control to the host's button list.
    pub fn register_insert_control(&self, buttons: &mut Vec<ControlDescriptor>) {
        buttons.push(ControlDescriptor {
            icon: self.assets.button_icon(),
            command: INSERT_COMMAND.to_string(),
            tooltip: "Insert code block (Ctrl+Shift+C)".to_string(),
            shortcut: "Ctrl+Shift+C".to_string(),
        });
    }

    /// Open the language picker for the current selection.
    ///
    /// A cursor with no selection object has nothing to anchor the insert
    /// to: silent no-op, nothing is inserted and no menu opens.
    pub fn insert_fenced_block(&mut self, surface: &mut dyn Surface) {
        let selection = match surface.first_selection() {
            Some(text) => text,
            None => {
                debug!(surface = surface.id(), "no selection range, skipping insert");
                return;
            }
        };

        self.menu = Some(LanguageMenu {
            surface: surface.id(),
            entries: self.config.supported_languages.clone(),
            captured_selection: selection,
        });
    }

    /// Host callback: the user picked `language` from the open menu.
    ///
    /// Replaces the captured selection with a fenced block tagged with the
    /// chosen language (placeholder body when the selection was empty), then
    /// schedules a highlight pass over the rendered code regions.
    pub fn language_chosen(&mut self, surface: &mut dyn Surface, language: &str) {
        let menu = match self.menu.take() {
            Some(menu) => menu,
            None => return,
        };
        if menu.surface != surface.id() {
            return;
        }

        let body = if menu.captured_selection.is_empty() {
            PLACEHOLDER_BODY
        } else {
            menu.captured_selection.as_str()
        };

        surface.replace_selection(&format!("```{}\n{}\n```", language, body));
        surface.schedule_highlight();
    }

    /// Whether the highlighter finished loading in `surface`, meaning a
    /// highlight pass would run right away instead of waiting on the load.
    pub fn assets_ready(&self, surface: SurfaceId) -> bool {
        self.asset_states.get(&surface) == Some(&AssetState::Ready)
    }

    /// Host callback: a click landed outside the open menu.
    pub fn dismiss_menu(&mut self) {
        self.menu = None;
    }

    /// The currently open menu, if any.
    pub fn open_menu(&self) -> Option<&LanguageMenu> {
        self.menu.as_ref()
    }
}
