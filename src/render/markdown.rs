// src/render/markdown.rs
// =============================================================================
// The render accumulator.
//
// RenderState owns both output buffers and remembers the last group it
// emitted. It must be fed one unit at a time, in catalog order: a new group
// heading is written whenever the group changes.
//
// Document layout per unit:
//   ### member
//   <source url>
//   description (one paragraph per source line)
//   #### Parameters   (table, only if there are @param tags)
//   #### Returns      (table, only if there is a @returns tag)
//   ```js example```  (only if there is an @example tag)
// =============================================================================

use super::{RenderConfig, Rendered};
use crate::catalog::Identifier;
use crate::extract::CommentBlock;

const TITLE: &str = "Lo-Dash v3 Documentation";
const INTRO: &str = "lo-Dash v3 documentation generated from source code as described in the [article](http://gajus.com/blog/4/lodash).";

#[derive(Debug)]
pub struct RenderState {
    config: RenderConfig,
    document: String,
    index: String,
    last_group: Option<String>,
}

impl RenderState {
    /// Starts a fresh document with its title and intro.
    pub fn new(config: RenderConfig) -> Self {
        RenderState {
            config,
            document: format!("# {}\n\n{}\n\n", TITLE, INTRO),
            index: String::new(),
            last_group: None,
        }
    }

    /// Appends one unit to both outputs.
    pub fn push(&mut self, identifier: &Identifier, block: &CommentBlock) {
        if self.last_group.as_deref() != Some(identifier.group.as_str()) {
            self.start_group(&identifier.group);
        }

        self.push_index_row(identifier, block);
        self.push_section(identifier, block);
    }

    /// Hands the buffers over.
    pub fn finish(self) -> Rendered {
        Rendered {
            document: self.document,
            index: self.index,
        }
    }

    fn start_group(&mut self, group: &str) {
        self.document.push_str(&format!("## {}\n\n", group));

        self.index.push_str(&format!("\n### {}\n\n", group));
        self.index.push_str("| Name | Description |\n");
        self.index.push_str("| --- | --- |\n");

        self.last_group = Some(group.to_string());
    }

    fn push_index_row(&mut self, identifier: &Identifier, block: &CommentBlock) {
        self.index.push_str(&format!(
            "| [`{}`]({}#{}) | {} |\n",
            identifier.member,
            self.config.index_link_base,
            identifier.member.to_lowercase(),
            table_cell(&block.description),
        ));
    }

    fn push_section(&mut self, identifier: &Identifier, block: &CommentBlock) {
        let doc = &mut self.document;

        doc.push_str(&format!("### {}\n\n", identifier.member));
        doc.push_str(&format!(
            "{}/{}/{}.js\n\n",
            self.config.source_base_url.trim_end_matches('/'),
            identifier.group,
            identifier.member
        ));
        // Every source line becomes its own paragraph
        doc.push_str(&block.description.replace('\n', "\n\n"));

        let params: Vec<_> = block.params().collect();
        if !params.is_empty() {
            doc.push_str("\n\n#### Parameters\n\n");
            doc.push_str("| Name | Type | Description |\n");
            doc.push_str("| --- | --- | --- |\n");

            for param in params {
                doc.push_str(&format!(
                    "| `{}` | `{}` | {} |\n",
                    table_cell(param.name.as_deref().unwrap_or_default()),
                    table_cell(param.type_expr.as_deref().unwrap_or_default()),
                    table_cell(&param.description),
                ));
            }
        }

        if let Some(returns) = block.returns() {
            doc.push_str("\n\n#### Returns\n\n");
            doc.push_str("| Type | Description |\n");
            doc.push_str("| --- | --- |\n");
            doc.push_str(&format!(
                "| `{}` | {} |\n",
                table_cell(returns.type_expr.as_deref().unwrap_or_default()),
                table_cell(&returns.description),
            ));
        }

        if let Some(example) = block.example() {
            doc.push_str(&format!("\n```js\n{}\n```", example.description));
        }

        doc.push_str("\n\n");
    }
}

// Keeps a value on one table row: newlines become spaces, pipes are escaped
fn table_cell(text: &str) -> String {
    text.replace('\n', " ").replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use crate::render::render;
    use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

    const PAD: &str = "/**\n * Pads string.\n * @param {string} string The string to pad.\n * @returns {string} Returns the padded string.\n * @example padStart('a', 3);\n */";

    fn unit(name: &str, source: &str) -> (Identifier, CommentBlock) {
        (Identifier::parse(name).unwrap(), extract(source).unwrap())
    }

    // Text of every heading at `level`, in document order
    fn headings(markdown: &str, level: HeadingLevel) -> Vec<String> {
        let mut found = Vec::new();
        let mut current: Option<String> = None;

        for event in Parser::new_ext(markdown, Options::ENABLE_TABLES) {
            match event {
                Event::Start(Tag::Heading(l, _, _)) if l == level => current = Some(String::new()),
                Event::Text(text) | Event::Code(text) => {
                    if let Some(heading) = current.as_mut() {
                        heading.push_str(&text);
                    }
                }
                Event::End(Tag::Heading(l, _, _)) if l == level => {
                    if let Some(heading) = current.take() {
                        found.push(heading);
                    }
                }
                _ => {}
            }
        }

        found
    }

    fn table_body_rows(markdown: &str) -> usize {
        Parser::new_ext(markdown, Options::ENABLE_TABLES)
            .filter(|e| matches!(e, Event::Start(Tag::TableRow)))
            .count()
    }

    #[test]
    fn test_pad_scenario() {
        let rendered = render(&RenderConfig::default(), &[unit("string/pad", PAD)]);
        let doc = &rendered.document;

        assert_eq!(headings(doc, HeadingLevel::H2), vec!["string"]);
        assert_eq!(headings(doc, HeadingLevel::H3), vec!["pad"]);
        assert_eq!(headings(doc, HeadingLevel::H4), vec!["Parameters", "Returns"]);

        assert!(doc.contains("https://raw.githubusercontent.com/lodash/lodash/es6/string/pad.js\n\nPads string."));
        assert!(doc.contains("| `string` | `string` | The string to pad. |\n"));
        assert!(doc.contains("| `string` | Returns the padded string. |\n"));
        assert!(doc.contains("```js\npadStart('a', 3);\n```"));
        assert_eq!(table_body_rows(doc), 2);
    }

    #[test]
    fn test_exact_document_section() {
        let rendered = render(&RenderConfig::default(), &[unit("string/pad", PAD)]);
        let expected = "# Lo-Dash v3 Documentation\n\n\
            lo-Dash v3 documentation generated from source code as described in the [article](http://gajus.com/blog/4/lodash).\n\n\
            ## string\n\n\
            ### pad\n\n\
            https://raw.githubusercontent.com/lodash/lodash/es6/string/pad.js\n\n\
            Pads string.\n\n\
            #### Parameters\n\n\
            | Name | Type | Description |\n\
            | --- | --- | --- |\n\
            | `string` | `string` | The string to pad. |\n\
            \n\n#### Returns\n\n\
            | Type | Description |\n\
            | --- | --- |\n\
            | `string` | Returns the padded string. |\n\
            \n```js\npadStart('a', 3);\n```\n\n";
        assert_eq!(rendered.document, expected);
    }

    #[test]
    fn test_index_rows() {
        let rendered = render(
            &RenderConfig::default(),
            &[unit("string/camelCase", "/**\n * Converts to\n * camel case.\n */")],
        );
        assert_eq!(
            rendered.index,
            "\n### string\n\n| Name | Description |\n| --- | --- |\n\
             | [`camelCase`](https://github.com/gajus/blog.gajus.com/blob/master/post/lodash-v3/documentation.md#camelcase) | Converts to camel case. |\n"
        );
    }

    #[test]
    fn test_group_headings_emitted_once() {
        let units = vec![
            unit("a/x", "/** X. */"),
            unit("a/y", "/** Y. */"),
            unit("b/z", "/** Z. */"),
        ];
        let rendered = render(&RenderConfig::default(), &units);

        assert_eq!(headings(&rendered.document, HeadingLevel::H2), vec!["a", "b"]);
        assert_eq!(headings(&rendered.index, HeadingLevel::H3), vec!["a", "b"]);
        assert_eq!(headings(&rendered.document, HeadingLevel::H3), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_tags_omit_subsections() {
        let rendered = render(&RenderConfig::default(), &[unit("lang/isError", "/**\n * Checks.\n * @static\n */")]);
        let doc = &rendered.document;

        assert!(!doc.contains("Parameters"));
        assert!(!doc.contains("Returns"));
        assert!(!doc.contains("```"));
        assert_eq!(table_body_rows(doc), 0);
    }

    #[test]
    fn test_single_returns_row() {
        let source = "/**\n * Twice.\n * @returns {string} First.\n * @returns {number} Second.\n */";
        let rendered = render(&RenderConfig::default(), &[unit("x/y", source)]);

        assert_eq!(table_body_rows(&rendered.document), 1);
        assert!(rendered.document.contains("| `string` | First. |"));
        assert!(!rendered.document.contains("Second."));
    }

    #[test]
    fn test_description_lines_become_paragraphs() {
        let rendered = render(&RenderConfig::default(), &[unit("x/y", "/**\n * One.\n * Two.\n */")]);
        assert!(rendered.document.contains("One.\n\nTwo.\n\n"));
    }

    #[test]
    fn test_table_cells_escape_pipes_and_newlines() {
        let source = "/**\n * Does.\n * @param {Array|string} value The value\n *  to check.\n */";
        let rendered = render(&RenderConfig::default(), &[unit("x/y", source)]);
        assert!(rendered.document.contains("| `value` | `Array\\|string` | The value to check. |"));
    }

    #[test]
    fn test_example_kept_verbatim() {
        let source = "/**\n * Does.\n * @example\n * if (a) {\n *   b();\n * }\n */";
        let rendered = render(&RenderConfig::default(), &[unit("x/y", source)]);
        assert!(rendered.document.contains("```js\nif (a) {\n  b();\n}\n```"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let units = vec![unit("string/pad", PAD), unit("array/chunk", "/** Chunks. */")];
        let config = RenderConfig::default();
        assert_eq!(render(&config, &units), render(&config, &units));
    }

    #[test]
    fn test_custom_source_base() {
        let config = RenderConfig {
            source_base_url: "https://example.com/lodash/".to_string(),
            ..RenderConfig::default()
        };
        let rendered = render(&config, &[unit("string/pad", PAD)]);
        assert!(rendered.document.contains("https://example.com/lodash/string/pad.js\n"));
    }
}
