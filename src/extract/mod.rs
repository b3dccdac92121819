// src/extract/mod.rs
// =============================================================================
// Turns raw JavaScript source into structured documentation.
//
// Submodules:
// - block: finds `/** ... */` comments and strips the leading `*` gutter
// - tag: parses `@param`, `@returns`, `@example` and friends
//
// A lodash module file often carries more than one doc comment (helpers
// defined above the exported function), so the LAST comment in the file is
// the one that documents the function.
// =============================================================================

mod block;
mod tag;

use crate::error::NoCommentFound;

pub use block::doc_blocks;
pub use tag::parse_block;

/// What a tag line annotates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagKind {
    Param,
    Returns,
    Example,
    /// Any tag we do not render (`@static`, `@memberOf`, `@category`, ...)
    Other(String),
}

/// One `@tag` annotation, including its continuation lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    /// Parameter name without optional brackets or default value
    pub name: Option<String>,
    /// Type expression without the surrounding braces
    pub type_expr: Option<String>,
    /// `[name]` or `[name=default]` syntax
    pub optional: bool,
    pub default: Option<String>,
    /// May span several lines; examples keep their line breaks verbatim
    pub description: String,
}

/// A parsed documentation comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    /// Free text before the first tag, lines joined with '\n'
    pub description: String,
    /// Tags in source order
    pub tags: Vec<Tag>,
}

impl CommentBlock {
    /// All parameter tags, in the order they were written
    pub fn params(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().filter(|t| t.kind == TagKind::Param)
    }

    /// The first returns tag. Any later ones are ignored.
    pub fn returns(&self) -> Option<&Tag> {
        self.tags.iter().find(|t| t.kind == TagKind::Returns)
    }

    /// The first example tag. Any later ones are ignored.
    pub fn example(&self) -> Option<&Tag> {
        self.tags.iter().find(|t| t.kind == TagKind::Example)
    }
}

/// Extracts the authoritative (last) documentation comment from `text`.
pub fn extract(text: &str) -> Result<CommentBlock, NoCommentFound> {
    let blocks = doc_blocks(text);
    let last = blocks.last().ok_or(NoCommentFound)?;
    Ok(parse_block(last))
}
