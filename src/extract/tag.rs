// src/extract/tag.rs
// =============================================================================
// Parses the cleaned lines of one doc comment into a CommentBlock.
//
// Shapes we understand:
//   @param {type} name description        (also @arg, @argument)
//   @param {type} [name=default] description
//   @returns {type} description           (also @return)
//   @example code...                      (body kept verbatim)
//   @anything else                        (kept as TagKind::Other)
//
// A @param or @returns that does not fit its shape is a malformed tag: it is
// logged and dropped, and the rest of the comment is still used.
// =============================================================================

use super::{CommentBlock, Tag, TagKind};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static RE_TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z][\w-]*)\s*(.*)$").unwrap());

// A tag line plus the lines that continue it
struct RawTag {
    name: String,
    lines: Vec<String>,
}

/// Builds a CommentBlock from the cleaned lines of a single doc comment.
pub fn parse_block(lines: &[String]) -> CommentBlock {
    let mut description: Vec<&str> = Vec::new();
    let mut raw_tags: Vec<RawTag> = Vec::new();

    for line in lines {
        if let Some(caps) = RE_TAG_LINE.captures(line) {
            raw_tags.push(RawTag {
                name: caps[1].to_string(),
                lines: vec![caps[2].to_string()],
            });
        } else if let Some(current) = raw_tags.last_mut() {
            current.lines.push(line.clone());
        } else {
            description.push(line);
        }
    }

    CommentBlock {
        description: join_trimmed(&description),
        tags: raw_tags.into_iter().filter_map(parse_tag).collect(),
    }
}

fn parse_tag(raw: RawTag) -> Option<Tag> {
    // Examples are code and keep their indentation; everything else is prose
    // whose continuation lines are only indented for alignment
    let body = if raw.name == "example" {
        join_trimmed(&raw.lines)
    } else {
        let lines: Vec<&str> = raw.lines.iter().map(|l| l.trim_start()).collect();
        join_trimmed(&lines)
    };

    let tag = match raw.name.as_str() {
        "param" | "arg" | "argument" => parse_param(&body),
        "returns" | "return" => parse_returns(&body),
        "example" => Some(plain_tag(TagKind::Example, body.clone())),
        other => Some(plain_tag(TagKind::Other(other.to_string()), body.clone())),
    };

    if tag.is_none() {
        warn!(tag = %raw.name, "skipping malformed tag: @{} {}", raw.name, body);
    }
    tag
}

fn plain_tag(kind: TagKind, description: String) -> Tag {
    Tag {
        kind,
        name: None,
        type_expr: None,
        optional: false,
        default: None,
        description,
    }
}

// `{type} name description` or `{type} [name=default] description`
fn parse_param(body: &str) -> Option<Tag> {
    let (type_expr, rest) = split_type(body)?;
    let (raw_name, description) = split_name(rest)?;

    let (name, optional, default) = match raw_name
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
    {
        Some(inner) => match inner.split_once('=') {
            Some((name, default)) => (name.trim(), true, Some(default.trim().to_string())),
            None => (inner.trim(), true, None),
        },
        None => (raw_name, false, None),
    };

    if name.is_empty() {
        return None;
    }

    Some(Tag {
        kind: TagKind::Param,
        name: Some(name.to_string()),
        type_expr: Some(type_expr),
        optional,
        default,
        description: description.to_string(),
    })
}

// `{type} description`
fn parse_returns(body: &str) -> Option<Tag> {
    let (type_expr, description) = split_type(body)?;
    Some(Tag {
        kind: TagKind::Returns,
        name: None,
        type_expr: Some(type_expr),
        optional: false,
        default: None,
        description: description.to_string(),
    })
}

// Splits a leading brace-balanced `{...}` off the text.
// `{Object.<string, *>} rest` -> ("Object.<string, *>", "rest")
fn split_type(text: &str) -> Option<(String, &str)> {
    let text = text.trim_start();
    if !text.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let inner = text[1..i].trim();
                    if inner.is_empty() {
                        return None;
                    }
                    return Some((inner.to_string(), text[i + 1..].trim_start()));
                }
            }
            _ => {}
        }
    }

    None
}

// Splits the parameter name off. Bracketed names may contain spaces or
// brackets in their default value (`[chars=' ']`, `[props=[]]`), so they run
// to the `]` that balances the opening one.
fn split_name(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }

    let end = if text.starts_with('[') {
        let mut depth = 0usize;
        let close = text.char_indices().find_map(|(i, ch)| {
            match ch {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            None
        })?;
        close + 1
    } else {
        text.find(char::is_whitespace).unwrap_or(text.len())
    };

    Some((&text[..end], text[end..].trim_start()))
}

// Drops blank lines at both ends and joins the rest with '\n'
fn join_trimmed<S: AsRef<str>>(lines: &[S]) -> String {
    let is_blank = |s: &S| s.as_ref().trim().is_empty();
    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !is_blank(l)).map_or(start, |i| i + 1);

    lines[start..end]
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A static that is built the first time it is used
//    - Compiling a Regex is expensive, so we do it once for the whole run
//
// 2. Why return Option<Tag> from the parse_* helpers?
//    - None means "this line did not have the expected shape"
//    - The ? operator on Option returns None early, which keeps the
//      happy path flat
// -----------------------------------------------------------------------------
