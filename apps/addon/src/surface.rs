//! Host rendering-surface abstraction.

/// Stable identity for one live rendering surface.
pub type SurfaceId = u64;

/// A live display context (editor pane or card viewer) the add-on injects
/// markup and scripts into.
///
/// Implemented by the host; the add-on only drives it through these calls
/// and keeps its own per-surface state keyed by [`Surface::id`]. All calls
/// happen on the host's event loop, so nothing here is `Send`.
pub trait Surface {
    /// Identity used for per-surface bookkeeping.
    fn id(&self) -> SurfaceId;

    /// Fetch and evaluate a script. Fire-and-forget: the host reports
    /// completion through `EditorAugmenter::assets_loaded`, and if the load
    /// fails no completion ever arrives.
    fn load_script(&mut self, src: &str);

    /// Attach a stylesheet. Fire-and-forget, no completion callback.
    fn load_stylesheet(&mut self, href: &str);

    /// Point the loaded highlighter at the per-language grammar directory.
    fn configure_language_path(&mut self, dir: &str);

    /// Text of the first selection range. Returns `Some("")` for a collapsed
    /// selection and `None` when the cursor has no selection object at all.
    /// Non-contiguous selections report only their first range.
    fn first_selection(&self) -> Option<String>;

    /// Replace the current selection with `text`.
    fn replace_selection(&mut self, text: &str);

    /// Schedule a highlight pass over every rendered code region.
    fn schedule_highlight(&mut self);
}

/// One activatable control contributed to the editor chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// Icon asset URL.
    pub icon: String,
    /// Command name the host binds the control to.
    pub command: String,
    /// Hover text.
    pub tooltip: String,
    /// Keyboard shortcut, in the host's accelerator syntax.
    pub shortcut: String,
}
