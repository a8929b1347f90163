//! Static asset layout and browser-side loader snippets.
//!
//! The highlighter script, theme stylesheet, per-language grammar files and
//! the button icon are all served from a fixed relative path under the
//! add-on's asset root. The highlighter itself is an unmodified third-party
//! library invoked purely through script-tag side effects.

/// Package directory the host serves this add-on's assets under.
pub const DEFAULT_PACKAGE: &str = "code_syntax_highlighter";

/// Script block appended to rendered cards. `__HLJS_SRC__` and
/// `__THEME_HREF__` are filled in from the asset root.
const LOADER_TEMPLATE: &str = "<script>
if (typeof hljs === 'undefined') {
    const script = document.createElement('script');
    script.src = '__HLJS_SRC__';
    script.onload = function() {
        document.querySelectorAll('pre code').forEach((block) => {
            hljs.highlightBlock(block);
        });
    };
    document.head.appendChild(script);

    const style = document.createElement('link');
    style.rel = 'stylesheet';
    style.href = '__THEME_HREF__';
    document.head.appendChild(style);
} else {
    document.querySelectorAll('pre code').forEach((block) => {
        hljs.highlightBlock(block);
    });
}
</script>";

/// Resolves asset URLs under `/_addons/<package>/web`.
#[derive(Debug, Clone)]
pub struct AssetRoot {
    base: String,
}

impl Default for AssetRoot {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

impl AssetRoot {
    pub fn new(package: &str) -> Self {
        Self {
            base: format!("/_addons/{}/web", package),
        }
    }

    /// The packed highlighter script.
    pub fn highlighter_script(&self) -> String {
        format!("{}/highlight.pack.js", self.base)
    }

    /// The default theme stylesheet.
    pub fn theme_stylesheet(&self) -> String {
        format!("{}/styles/default.min.css", self.base)
    }

    /// Directory the highlighter searches for per-language grammars.
    pub fn languages_dir(&self) -> String {
        format!("{}/languages/", self.base)
    }

    /// Icon for the editor's insert-code-block control.
    pub fn button_icon(&self) -> String {
        format!("{}/icon_code.png", self.base)
    }

    /// The `<script>` block appended to card markup: loads the highlighter
    /// and stylesheet if absent, then runs the highlight pass over every
    /// code container; runs the pass immediately when already loaded.
    pub fn loader_snippet(&self) -> String {
        LOADER_TEMPLATE
            .replace("__HLJS_SRC__", &self.highlighter_script())
            .replace("__THEME_HREF__", &self.theme_stylesheet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_live_under_addon_web_root() {
        let assets = AssetRoot::default();
        assert_eq!(
            assets.highlighter_script(),
            "/_addons/code_syntax_highlighter/web/highlight.pack.js"
        );
        assert_eq!(
            assets.theme_stylesheet(),
            "/_addons/code_syntax_highlighter/web/styles/default.min.css"
        );
        assert_eq!(
            assets.languages_dir(),
            "/_addons/code_syntax_highlighter/web/languages/"
        );
        assert_eq!(
            assets.button_icon(),
            "/_addons/code_syntax_highlighter/web/icon_code.png"
        );
    }

    #[test]
    fn custom_package_name_changes_root() {
        let assets = AssetRoot::new("my_addon");
        assert!(assets
            .highlighter_script()
            .starts_with("/_addons/my_addon/web/"));
    }

    #[test]
    fn loader_snippet_references_both_assets() {
        let snippet = AssetRoot::default().loader_snippet();
        assert!(snippet.starts_with("<script>"));
        assert!(snippet.ends_with("</script>"));
        assert!(snippet.contains("highlight.pack.js"));
        assert!(snippet.contains("default.min.css"));
        assert!(!snippet.contains("__HLJS_SRC__"));
        assert!(!snippet.contains("__THEME_HREF__"));
    }
}
