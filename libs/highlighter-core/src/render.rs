//! Card render filter.
//!
//! Pure transform invoked once per card display: rewraps each fenced code
//! region as escaped, language-tagged markup and appends a loader snippet
//! that triggers highlighting once the surface is ready.

use crate::assets::AssetRoot;
use crate::config::Config;
use crate::fence::{self, FencedBlock, FENCE_DELIMITER};
use regex::Captures;

/// Transform card text for display.
///
/// Every well-formed fenced block becomes
/// `<pre><code class="language-{tag}">{escaped-body}</code></pre>`, with the
/// configured default language filling in for untagged fences. Text outside
/// matched spans passes through byte-identical; unterminated fences are left
/// as literal text. The loader snippet is appended whenever the input
/// carried a triple-backtick delimiter, even if no block matched, so an
/// unterminated fence still triggers the asset load.
///
/// Single-pass only: the transform is not idempotent, and running it on its
/// own output would escape the emitted entities a second time.
pub fn render_card(text: &str, config: &Config, assets: &AssetRoot) -> String {
    let mut out = fence::FENCE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            block_to_html(&FencedBlock::from_captures(caps), &config.default_language)
        })
        .into_owned();

    if text.contains(FENCE_DELIMITER) {
        out.push('\n');
        out.push_str(&assets.loader_snippet());
    }

    out
}

fn block_to_html(block: &FencedBlock<'_>, default_language: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        block.language_or(default_language),
        fence::escape_angle_brackets(block.raw_body)
    )
}
