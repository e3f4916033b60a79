use crate::{JsonError, JsonValue};
use tree_sitter::Node;

pub struct JsonParser {
    parser: tree_sitter::Parser,
}

impl JsonParser {
    pub fn parse(&mut self, code: &str) -> Result<JsonValue, JsonError> {
        let tree = self.parser.parse(code, None).ok_or(JsonError::ParseError)?;
        let root_node = tree.root_node();
        if root_node.has_error() {
            return Err(JsonError::ParseError);
        }

        let json_node = root_node.child(0).ok_or(JsonError::BrokenTree)?;
        Self::parse_json_node(json_node, code)
    }

    pub fn parse_json_node(node: Node, code: &str) -> Result<JsonValue, JsonError> {
        match node.kind() {
            "object" => {
                // Cursor order is document order, which keeps the pairs
                // in the same order they were written.
                let mut pairs = Vec::new();
                let mut cursor = node.walk();
                if cursor.goto_first_child() {
                    loop {
                        if cursor.node().kind() == "pair" {
                            let (key, value) = Self::parse_pair(cursor.node(), code)?;
                            pairs.push((key, value));
                        }
                        if !cursor.goto_next_sibling() {
                            break;
                        }
                    }
                }
                Ok(JsonValue::Object(pairs))
            }
            "array" => {
                let mut array = Vec::new();
                let mut cursor = node.walk();
                if cursor.goto_first_child() {
                    loop {
                        let child_node = cursor.node();
                        if child_node.is_named() {
                            array.push(Self::parse_json_node(child_node, code)?);
                        }
                        if !cursor.goto_next_sibling() {
                            break;
                        }
                    }
                }
                Ok(JsonValue::Array(array))
            }
            "string" => {
                let raw = &code[node.start_byte() + 1..node.end_byte() - 1]; // Remove quotes
                Ok(JsonValue::String(unescape(raw)))
            }
            "number" => {
                let value = &code[node.start_byte()..node.end_byte()];
                Ok(JsonValue::Number(value.parse()?))
            }
            "true" => Ok(JsonValue::Bool(true)),
            "false" => Ok(JsonValue::Bool(false)),
            "null" => Ok(JsonValue::Null),
            _ => Err(JsonError::ParseError), // This line will catch any unexpected node kinds
        }
    }

    pub fn parse_pair(node: Node, code: &str) -> Result<(String, JsonValue), JsonError> {
        let mut cursor = node.walk();
        cursor.goto_first_child();
        let key_node = cursor.node();
        let key = &code[key_node.start_byte() + 1..key_node.end_byte() - 1]; // Remove quotes from the key
        cursor.goto_next_sibling(); // Skip the colon
        cursor.goto_next_sibling(); // Move to the value node
        let value_node = cursor.node();
        let value = Self::parse_json_node(value_node, code)?;
        Ok((unescape(key), value))
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            // Anything else is left as written
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

impl Default for JsonParser {
    fn default() -> Self {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_json::language();
        parser.set_language(language).expect("Error loading JSON parser");
        JsonParser { parser }
    }
}
