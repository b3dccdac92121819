// src/render/mod.rs
// =============================================================================
// Builds the two markdown outputs from extracted comments.
//
// Submodules:
// - markdown: the RenderState accumulator and the per-unit markdown
//
// Rendering is a fold over units in catalog order. It never looks at fetch
// timing, so the same inputs always give byte-identical outputs.
// =============================================================================

mod markdown;

use crate::catalog::Identifier;
use crate::extract::CommentBlock;

pub use markdown::RenderState;

/// Where the raw lodash sources live (used for the provenance link)
pub const DEFAULT_SOURCE_BASE: &str = "https://raw.githubusercontent.com/lodash/lodash/es6";

/// The published reference document the index rows link into
pub const DEFAULT_INDEX_LINK_BASE: &str =
    "https://github.com/gajus/blog.gajus.com/blob/master/post/lodash-v3/documentation.md";

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub source_base_url: String,
    pub index_link_base: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            source_base_url: DEFAULT_SOURCE_BASE.to_string(),
            index_link_base: DEFAULT_INDEX_LINK_BASE.to_string(),
        }
    }
}

/// The finished outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub document: String,
    pub index: String,
}

/// Renders every unit, in the order given.
pub fn render(config: &RenderConfig, units: &[(Identifier, CommentBlock)]) -> Rendered {
    let mut state = RenderState::new(config.clone());
    for (identifier, block) in units {
        state.push(identifier, block);
    }
    state.finish()
}
