//! Code syntax highlighter add-on for the flashcard host.
//!
//! Wires two callbacks and one pure text transform into the host's
//! registration points:
//! - "editor initialized" -> load highlighting assets into the surface
//! - "editor buttons being assembled" -> contribute the insert control
//! - "card about to be shown" -> rewrap fenced code regions for display
//!
//! The host owns the event loop and every UI element; this crate only
//! reacts to its callbacks. Nothing here installs a tracing subscriber,
//! since that belongs to the embedding process.

mod editor;
mod hooks;
mod surface;

pub use editor::{EditorAugmenter, LanguageMenu, INSERT_COMMAND};
pub use hooks::{CardId, Hooks, RenderPhase};
pub use surface::{ControlDescriptor, Surface, SurfaceId};

pub use highlighter_core::{render_card, AssetRoot, Config};

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info};

/// Composition root: owns the configuration and the augmenter and
/// subscribes both to the host's hooks.
pub struct Addon {
    config: Rc<Config>,
    assets: AssetRoot,
    augmenter: Rc<RefCell<EditorAugmenter>>,
}

impl Addon {
    /// Load configuration from the host's JSON config file and build the
    /// add-on. A missing file yields the built-in defaults; an unreadable
    /// or malformed one is surfaced to the embedding entry point.
    pub fn load<P: AsRef<Path>>(config_path: P) -> anyhow::Result<Self> {
        let config = Config::load_from_path(config_path)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        let config = Rc::new(config);
        let assets = AssetRoot::default();
        let augmenter = Rc::new(RefCell::new(EditorAugmenter::new(
            Rc::clone(&config),
            assets.clone(),
        )));
        Self {
            config,
            assets,
            augmenter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the augmenter, for routing menu outcomes and asset
    /// load completion back in from the host.
    pub fn augmenter(&self) -> Rc<RefCell<EditorAugmenter>> {
        Rc::clone(&self.augmenter)
    }

    /// Subscribe the add-on to the host's registration points.
    pub fn install(&self, hooks: &mut Hooks) {
        let augmenter = Rc::clone(&self.augmenter);
        hooks.on_editor_did_init(move |surface| {
            augmenter.borrow_mut().ensure_highlighting_assets(surface);
        });

        let augmenter = Rc::clone(&self.augmenter);
        hooks.on_editor_did_init_buttons(move |buttons| {
            augmenter.borrow().register_insert_control(buttons);
        });

        let config = Rc::clone(&self.config);
        let assets = self.assets.clone();
        hooks.on_card_will_show(move |text, card, phase| {
            debug!(card, ?phase, "rendering card text");
            render_card(&text, &config, &assets)
        });

        info!("code syntax highlighter installed");
    }
}
