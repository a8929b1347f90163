//! Host callback registration points.
//!
//! The host exposes three moments the add-on cares about: an editor
//! finishing initialization, the editor's button row being assembled, and a
//! card about to be shown. Subscriptions live in explicit lists owned by
//! whoever composes the add-on with the host, and everything runs on the
//! host's single event loop.

use crate::surface::{ControlDescriptor, Surface};

/// Which side of the card is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Question,
    Answer,
}

/// Identity of the card being shown.
pub type CardId = i64;

type EditorCallback = Box<dyn FnMut(&mut dyn Surface)>;
type ButtonsCallback = Box<dyn FnMut(&mut Vec<ControlDescriptor>)>;
type RenderCallback = Box<dyn FnMut(String, CardId, RenderPhase) -> String>;

/// Subscription lists for the three registration points.
#[derive(Default)]
pub struct Hooks {
    editor_did_init: Vec<EditorCallback>,
    editor_did_init_buttons: Vec<ButtonsCallback>,
    card_will_show: Vec<RenderCallback>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_editor_did_init(&mut self, callback: impl FnMut(&mut dyn Surface) + 'static) {
        self.editor_did_init.push(Box::new(callback));
    }

    pub fn on_editor_did_init_buttons(
        &mut self,
        callback: impl FnMut(&mut Vec<ControlDescriptor>) + 'static,
    ) {
        self.editor_did_init_buttons.push(Box::new(callback));
    }

    pub fn on_card_will_show(
        &mut self,
        callback: impl FnMut(String, CardId, RenderPhase) -> String + 'static,
    ) {
        self.card_will_show.push(Box::new(callback));
    }

    /// Fire "editor initialized" for `surface`.
    pub fn fire_editor_did_init(&mut self, surface: &mut dyn Surface) {
        for callback in &mut self.editor_did_init {
            callback(surface);
        }
    }

    /// Fire "editor buttons being assembled" and return the assembled list.
    pub fn fire_editor_did_init_buttons(
        &mut self,
        mut buttons: Vec<ControlDescriptor>,
    ) -> Vec<ControlDescriptor> {
        for callback in &mut self.editor_did_init_buttons {
            callback(&mut buttons);
        }
        buttons
    }

    /// Fire "card about to be shown". Each subscriber receives the previous
    /// subscriber's output, in registration order.
    pub fn fire_card_will_show(
        &mut self,
        text: String,
        card: CardId,
        phase: RenderPhase,
    ) -> String {
        let mut text = text;
        for callback in &mut self.card_will_show {
            text = callback(text, card, phase);
        }
        text
    }
}
