//! Function-call syntax recognition.
//!
//! # Responsibilities
//! - Decide whether a path denotes a callable invocation `name(arg,key=value)`
//! - Decode the callable name, positional arguments, and named arguments
//! - Tag each positional argument with an inferred kind (entity, URL, string)
//!
//! # Design Decisions
//! - Runs against the *whole* path, before any `/` splitting, so that URL
//!   arguments containing slashes survive intact
//! - A call is always terminal: the closing parenthesis must end the text
//! - No nested parentheses; any interior `(` or `)` rejects the match
//! - Comma split is flat. A comma inside a URL argument's query string is
//!   mis-split; known-unhandled, kept visible rather than silently patched

use std::collections::BTreeMap;

use serde::Serialize;

use crate::routing::entity::is_entity_id;

/// Inferred shape of a positional argument, decided purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    Entity,
    Url,
    String,
}

/// A positional call argument: the raw text plus its inferred kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgValue {
    pub value: String,
    pub kind: ArgKind,
}

impl ArgValue {
    /// Classify a bare token. Entity-shaped beats URL-shaped beats plain
    /// string; no numeric kind is inferred.
    pub fn classify(value: &str, min_entity_id_len: usize) -> Self {
        let kind = if is_entity_id(value, min_entity_id_len) {
            ArgKind::Entity
        } else if value.starts_with("http://") || value.starts_with("https://") {
            ArgKind::Url
        } else {
            ArgKind::String
        };
        Self {
            value: value.to_string(),
            kind,
        }
    }
}

/// A decoded callable invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCall {
    /// Callable name, possibly dot-namespaced (`papa.parse`).
    pub name: String,

    /// Positional arguments in call order.
    pub args: Vec<ArgValue>,

    /// Named arguments. Keys are unique; insertion order is irrelevant.
    pub kwargs: BTreeMap<String, String>,
}

/// Returns true if `text` parses as a complete function call.
pub fn is_function_call(text: &str) -> bool {
    parse_function_call(text, crate::routing::entity::DEFAULT_MIN_ID_LEN).is_some()
}

/// Parse `name(arg,arg,key=value,...)` into a [`FunctionCall`], or `None` if
/// the text is not a well-formed call.
///
/// Malformed syntax (empty name, unbalanced or nested parentheses, trailing
/// content after `)`) is a non-match, never an error: the classifier simply
/// falls through to segment-based rules.
pub fn parse_function_call(text: &str, min_entity_id_len: usize) -> Option<FunctionCall> {
    let open = text.find('(')?;
    let name = &text[..open];
    if !is_callable_name(name) {
        return None;
    }

    // The call must consume the whole text; a call is always the terminal
    // element of a route.
    if !text.ends_with(')') || text.len() < open + 2 {
        return None;
    }
    let inner = &text[open + 1..text.len() - 1];
    if inner.contains('(') || inner.contains(')') {
        return None;
    }

    let mut args = Vec::new();
    let mut kwargs = BTreeMap::new();
    for token in inner.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match split_kwarg(token) {
            Some((key, value)) => {
                kwargs.insert(key.to_string(), value.to_string());
            }
            None => args.push(ArgValue::classify(token, min_entity_id_len)),
        }
    }

    Some(FunctionCall {
        name: name.to_string(),
        args,
        kwargs,
    })
}

/// `[a-zA-Z_][a-zA-Z0-9_.]*` — dot-separated namespacing allowed, no
/// parentheses or slashes.
fn is_callable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// A token is a named argument only when the text before its first `=` is a
/// bare identifier. URL-shaped tokens containing `=` stay positional.
fn split_kwarg(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None,
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((key, value))
}
