// src/extract/block.rs
// =============================================================================
// Finds documentation comments in JavaScript source.
//
// A documentation comment opens with `/**` and closes at the next `*/`.
// Plain `/* ... */` comments and the empty comment `/**/` are skipped.
// =============================================================================

/// Returns every doc comment in `text`, in source order, as cleaned lines.
pub fn doc_blocks(text: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("/**") {
        let after = &rest[start + 3..];

        // `/**/` closes immediately and documents nothing
        if let Some(tail) = after.strip_prefix('/') {
            rest = tail;
            continue;
        }

        // An unterminated comment runs to the end of the file
        let Some(end) = after.find("*/") else {
            break;
        };

        blocks.push(clean_lines(&after[..end]));
        rest = &after[end + 2..];
    }

    blocks
}

// Strips the ` * ` gutter from each comment line.
//
// Only one space after the `*` is removed, so indentation inside examples
// survives:
//   " *   return x;"  ->  "  return x;"
fn clean_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| {
            let line = line.trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            };
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_blocks_in_order() {
        let text = "/** one */\nvar x;\n/**\n * two\n */\n";
        let blocks = doc_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], vec!["one"]);
        assert_eq!(blocks[1], vec!["", "two", ""]);
    }

    #[test]
    fn test_skips_plain_and_empty_comments() {
        let text = "/* plain */ /**/ var y; // /** not closed";
        assert!(doc_blocks(text).is_empty());
    }

    #[test]
    fn test_keeps_example_indentation() {
        let text = "/**\n * @example\n * if (x) {\n *   y();\n * }\n */";
        let blocks = doc_blocks(text);
        assert_eq!(blocks[0], vec!["", "@example", "if (x) {", "  y();", "}", ""]);
    }
}
