//! Minimal mustache-like renderer used for Markdown output.
//!
//! Two tag forms are understood:
//!
//! - `{{key}}` is replaced with the scalar stored under `key`
//! - `{{key}}...{{/key}}` renders the enclosed template against the value of
//!   `key`: once per element for a list, once for a map, not at all otherwise
//!
//! Anything that does not resolve renders as the empty string.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

lazy_static! {
    /// A single tag; the key stops at the first `}}` and never spans lines
    static ref TAG: Regex = Regex::new(r"\{\{(.*?)\}\}").unwrap();
}

/// Data a template is rendered against
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    /// Leaf value, already in its printed form
    Scalar(String),
    List(Vec<Node>),
    Map(BTreeMap<String, Node>),
}

impl Node {
    /// Look up `key` when this node is a map
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Set `key` on a map node; other nodes are left alone
    pub fn insert(&mut self, key: impl Into<String>, value: Node) {
        if let Node::Map(map) = self {
            map.insert(key.into(), value);
        }
    }

    /// Empty collections and null have nothing to substitute
    fn is_empty(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Scalar(_) => false,
            Node::List(items) => items.is_empty(),
            Node::Map(map) => map.is_empty(),
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Scalar(b.to_string()),
            Value::Number(n) => Node::Scalar(format_number(&n)),
            Value::String(s) => Node::Scalar(s),
            Value::Array(items) => Node::List(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Map(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect()),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

/// Print whole floats without a trailing `.0`, the way JSON producers wrote them
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Render `template` against `data`.
///
/// Block tags are expanded first, left to right and without overlap, then
/// every remaining scalar tag is substituted. Nested templates are trimmed
/// before rendering and list elements are joined with a newline.
///
/// Empty (or null) data and an empty template return the template untouched.
/// That guard is the base case for recursion into empty collections.
pub fn generate_markdown(data: &Node, template: &str) -> String {
    if data.is_empty() || template.is_empty() {
        return template.to_string();
    }

    let expanded = replace_block_tags(data, template);
    replace_single_tags(data, &expanded)
}

fn replace_block_tags(data: &Node, template: &str) -> String {
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;

    for open in TAG.find_iter(template) {
        // Tags inside an already expanded block
        if open.start() < cursor {
            continue;
        }

        let key = tag_key(open.as_str());
        let closing = format!("{{{{/{}}}}}", key);
        let Some(offset) = template[open.end()..].find(&closing) else {
            continue;
        };

        let nested = &template[open.end()..open.end() + offset];
        output.push_str(&template[cursor..open.start()]);
        output.push_str(&render_block(data, key, nested));
        cursor = open.end() + offset + closing.len();
    }

    output.push_str(&template[cursor..]);
    output
}

/// `{{key}}` -> `key`
fn tag_key(tag: &str) -> &str {
    &tag[2..tag.len() - 2]
}

fn render_block(data: &Node, key: &str, nested: &str) -> String {
    match data.get(key) {
        Some(Node::List(items)) => {
            items.iter().map(|item| generate_markdown(item, nested.trim())).collect::<Vec<_>>().join("\n")
        }
        Some(map @ Node::Map(_)) => generate_markdown(map, nested.trim()),
        // A block over a scalar drops its content
        Some(Node::Scalar(_)) | Some(Node::Null) | None => String::new(),
    }
}

fn replace_single_tags(data: &Node, template: &str) -> String {
    TAG.replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
        Some(Node::Scalar(value)) => value.clone(),
        Some(Node::Null) | Some(Node::List(_)) | Some(Node::Map(_)) | None => String::new(),
    })
    .into_owned()
}

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;
