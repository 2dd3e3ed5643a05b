/// Tests for template module
#[cfg(test)]
mod tests {
    use crate::template::{Node, generate_markdown};
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        Node::from(value)
    }

    const FLAT_TEMPLATE: &str = "# {{title}}\n{{date}}\n{{items}}\n";

    #[test]
    fn test_replaces_single_tags() {
        let data = node(json!({ "title": "Hello", "items": "one", "date": "2020-01-01T00:00:00.000Z" }));

        let result = generate_markdown(&data, FLAT_TEMPLATE);
        assert_eq!(result, "# Hello\n2020-01-01T00:00:00.000Z\none\n");
    }

    #[test]
    fn test_array_block_repeats_per_element() {
        let data = node(json!({
            "title": "My Document",
            "sections": [
                { "heading": "Introduction", "content": "This is the introduction to my document." },
                { "heading": "Conclusion", "content": "This is the conclusion to my document." },
            ],
        }));
        let template = "# {{title}}\n\n{{sections}}\n## {{heading}}\n{{content}}\n{{/sections}}\n";

        let result = generate_markdown(&data, template);
        assert_eq!(
            result,
            "# My Document\n\n\
             ## Introduction\nThis is the introduction to my document.\n\
             ## Conclusion\nThis is the conclusion to my document.\n"
        );
    }

    #[test]
    fn test_array_block_on_one_line() {
        let data = node(json!({
            "sections": [
                { "heading": "Introduction", "content": "intro" },
                { "heading": "Conclusion", "content": "outro" },
            ],
        }));
        let template = "{{sections}}## {{heading}}\n{{content}}\n{{/sections}}";

        let result = generate_markdown(&data, template);
        assert_eq!(result, "## Introduction\nintro\n## Conclusion\noutro");
    }

    #[test]
    fn test_object_block_renders_once() {
        let data = node(json!({
            "title": "My Document",
            "sections": { "heading": "Introduction", "content": "This is the introduction to my document." },
        }));
        let template = "# {{title}}\n\n{{sections}}\n## {{heading}}\n{{content}}\n{{/sections}}\n";

        let result = generate_markdown(&data, template);
        assert_eq!(result, "# My Document\n\n## Introduction\nThis is the introduction to my document.\n");
    }

    #[test]
    fn test_array_and_object_blocks_together() {
        let data = node(json!({
            "title": "My Document",
            "sections": [
                { "heading": "Introduction", "content": "This is the introduction to my document." },
                { "heading": "Conclusion", "content": "This is the conclusion to my document." },
            ],
            "other": { "heading": "Other", "content": "This is the other section." },
        }));
        let template = "# {{title}}\n\n\
                        {{sections}}\n## {{heading}}\n{{content}}\n{{/sections}}\n\n\
                        {{other}}\n## {{heading}}\n{{content}}\n{{/other}}\n";

        let result = generate_markdown(&data, template);
        assert_eq!(
            result,
            "# My Document\n\n\
             ## Introduction\nThis is the introduction to my document.\n\
             ## Conclusion\nThis is the conclusion to my document.\n\n\
             ## Other\nThis is the other section.\n"
        );
    }

    #[test]
    fn test_empty_object_returns_template() {
        assert_eq!(generate_markdown(&node(json!({})), FLAT_TEMPLATE), FLAT_TEMPLATE);
    }

    #[test]
    fn test_empty_array_returns_template() {
        assert_eq!(generate_markdown(&node(json!([])), FLAT_TEMPLATE), FLAT_TEMPLATE);
    }

    #[test]
    fn test_empty_template_returns_empty() {
        let data = node(json!({ "title": "Hello" }));
        assert_eq!(generate_markdown(&data, ""), "");
    }

    #[test]
    fn test_unresolved_tags_render_empty() {
        let data = node(json!({ "title": "Hello" }));
        assert_eq!(generate_markdown(&data, "[{{title}}][{{missing}}]"), "[Hello][]");
    }

    #[test]
    fn test_scalar_tag_on_collection_renders_empty() {
        let data = node(json!({ "list": [1, 2], "map": { "a": 1 }, "nothing": null }));
        assert_eq!(generate_markdown(&data, "<{{list}}|{{map}}|{{nothing}}>"), "<||>");
    }

    #[test]
    fn test_block_over_scalar_drops_content() {
        let data = node(json!({ "flag": true, "name": "x" }));
        assert_eq!(generate_markdown(&data, "a{{flag}}shown {{name}}{{/flag}}b"), "ab");
    }

    #[test]
    fn test_block_over_missing_key_drops_content() {
        let data = node(json!({ "name": "x" }));
        assert_eq!(generate_markdown(&data, "a{{gone}}{{name}}{{/gone}}b{{name}}"), "abx");
    }

    #[test]
    fn test_block_over_empty_list_renders_nothing() {
        let data = node(json!({ "title": "T", "failed": [] }));
        let template = "# {{title}}\n{{failed}}\n- {{title}}\n{{/failed}}\nend";
        assert_eq!(generate_markdown(&data, template), "# T\n\nend");
    }

    #[test]
    fn test_block_over_empty_object_keeps_nested_template() {
        let data = node(json!({ "title": "T", "meta": {} }));
        // The nested render short-circuits, then the outer scalar pass clears its tags
        assert_eq!(generate_markdown(&data, "{{meta}} {{title}} {{/meta}}"), "T");
    }

    #[test]
    fn test_numbers_and_booleans_print_like_json() {
        let data = node(json!({ "count": 3, "ratio": 1.5, "whole": 12.0, "ok": false }));
        assert_eq!(generate_markdown(&data, "{{count}} {{ratio}} {{whole}} {{ok}}"), "3 1.5 12 false");
    }

    #[test]
    fn test_nested_blocks_descend_recursively() {
        let data = node(json!({
            "files": [
                { "name": "a.js", "tests": [{ "title": "one" }, { "title": "two" }] },
                { "name": "b.js", "tests": [{ "title": "three" }] },
            ],
        }));
        let template = "{{files}}\n### {{name}}\n{{tests}}\n- {{title}}\n{{/tests}}\n{{/files}}";

        let result = generate_markdown(&data, template);
        assert_eq!(result, "### a.js\n- one\n- two\n### b.js\n- three");
    }

    #[test]
    fn test_element_scope_shadows_outer_keys() {
        let data = node(json!({ "title": "outer", "items": [{ "title": "inner" }] }));
        assert_eq!(generate_markdown(&data, "{{title}}:{{items}}{{title}}{{/items}}"), "outer:inner");
    }

    #[test]
    fn test_unbalanced_block_degrades_to_scalar_pass() {
        let data = node(json!({ "open": "o", "name": "n" }));
        assert_eq!(generate_markdown(&data, "{{open}} {{name}} {{/close}}"), "o n ");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let data = node(json!({
            "title": "Report",
            "rows": [{ "k": "a" }, { "k": "b" }],
        }));
        let template = "# {{title}}\n{{rows}}- {{k}}{{/rows}}\n";

        let first = generate_markdown(&data, template);
        let second = generate_markdown(&data, template);
        assert_eq!(first, second);
        assert_eq!(first, "# Report\n- a\n- b\n");
    }

    #[test]
    fn test_terminates_on_deep_nesting_with_empty_leaves() {
        // level N: { "name": N, "cN": <level N+1>, "empty_list": [], "empty_map": {} }
        let depth = 50;
        let mut value = json!({ "name": "leaf", "empty_list": [], "empty_map": {} });
        let mut template = String::from("[{{name}}]");
        for level in (0..depth).rev() {
            let key = format!("c{}", level);
            value = json!({
                "name": level.to_string(),
                key.as_str(): value,
                "empty_list": [],
                "empty_map": {},
            });
            template = format!(
                "{{{{empty_list}}}}x{{{{/empty_list}}}}{{{{empty_map}}}}y{{{{/empty_map}}}}[{{{{name}}}}]{{{{{key}}}}}{template}{{{{/{key}}}}}"
            );
        }

        let result = generate_markdown(&node(value), &template);
        // Empty lists render nothing; an empty map hands its template back untouched
        assert!(result.starts_with("y[0]y[1]y[2]"));
        assert!(result.ends_with("y[49][leaf]"));
        assert!(!result.contains("{{"));
        assert!(!result.contains('x'));
    }

    #[test]
    fn test_top_level_list_data_has_no_keys() {
        let data = node(json!([{ "a": 1 }]));
        assert_eq!(generate_markdown(&data, "<{{a}}>"), "<>");
    }

    #[test]
    fn test_insert_merges_into_map_only() {
        let mut data = node(json!({ "a": "1" }));
        data.insert("title", Node::from("T"));
        assert_eq!(data.get("title"), Some(&Node::Scalar("T".to_string())));

        let mut list = node(json!([]));
        list.insert("title", Node::from("T"));
        assert_eq!(list, Node::List(vec![]));
    }
}
