//! The joiner — resolves heterogeneous arguments into class-name tokens,
//! then filters, deduplicates and joins them.
//!
//! Resolution is one pure rule per [`ClassValue`] variant:
//!
//! - **Strings/numbers**: stringified, whitespace-normalized tokens
//! - **Booleans, null, callables**: no token
//! - **Lists**: flattened depth-first, element order preserved
//! - **Mappings**: keys kept iff their value is truthy; a `toString` entry
//!   holding a callable short-circuits the whole mapping
//! - **Custom values**: their `Display` rendering, verbatim
//!
//! The flat token sequence is then filtered (no empty tokens), deduplicated
//! by exact string equality keeping first occurrence, and joined with single
//! spaces. The whole pass is linear in the number of resolved tokens.

use crate::types::ClassValue;
use std::collections::HashSet;

/// Join class-name arguments into one space-separated string.
///
/// Arguments resolve to tokens in left-to-right order, nested lists are
/// flattened in place, falsy values vanish, and duplicate tokens keep only
/// their first occurrence. Zero arguments (or zero surviving tokens) yield
/// the empty string — never a stray space.
///
/// The function is total: any argument shape degrades to "no token" rather
/// than failing. The only way it can unwind is a panic from a caller-supplied
/// [`Callable`](ClassValue::Callable) or `Display` impl, which propagates
/// unmodified.
///
/// # Examples
///
/// ```rust
/// use classmix_core::{join, ClassValue};
///
/// let attr = join(&[
///     ClassValue::from("nav"),
///     ClassValue::list(["nav-item", "nav-item"]),
///     ClassValue::map([("active", true), ("hidden", false)]),
/// ]);
/// assert_eq!(attr, "nav nav-item active");
/// ```
pub fn join(values: &[ClassValue]) -> String {
    let mut tokens = Vec::new();
    for value in values {
        resolve(value, &mut tokens);
    }

    let mut out = String::new();
    let mut seen = HashSet::new();
    for token in &tokens {
        // Empty tokens never reach the output; repeats keep first occurrence.
        if token.is_empty() || !seen.insert(token.as_str()) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Resolve one value into zero or more tokens, appending to `tokens`.
fn resolve(value: &ClassValue, tokens: &mut Vec<String>) {
    match value {
        ClassValue::Null | ClassValue::Bool(_) | ClassValue::Callable(_) => {}
        ClassValue::Int(0) => {}
        ClassValue::Int(n) => tokens.push(n.to_string()),
        // `== 0.0` also matches -0.0
        ClassValue::Float(x) if x.is_nan() || *x == 0.0 => {}
        ClassValue::Float(x) => tokens.push(format_float(*x)),
        ClassValue::Str(s) => tokens.push(normalize_token(s)),
        ClassValue::List(items) => {
            for item in items {
                resolve(item, tokens);
            }
        }
        ClassValue::Map(entries) => resolve_map(entries, tokens),
        ClassValue::Custom(value) => tokens.push(value.to_string()),
    }
}

/// Expand a mapping: each key is a token iff its value is truthy. Keys are
/// emitted verbatim (no whitespace normalization), and key names that collide
/// with built-in method names (`push`, `pop`, ...) are ordinary keys — the
/// pair-vector representation has nothing to dispatch to.
///
/// An entry whose key is literally `toString` and whose value is a callable
/// overrides everything else: the callable runs with no arguments and its
/// return value is the mapping's single token, verbatim.
fn resolve_map(entries: &[(String, ClassValue)], tokens: &mut Vec<String>) {
    for (key, value) in entries {
        if key == "toString" {
            if let ClassValue::Callable(render) = value {
                tokens.push(render());
                return;
            }
        }
    }
    for (key, value) in entries {
        if value.is_truthy() {
            tokens.push(key.clone());
        }
    }
}

/// Normalize a bare string argument: strip leading and trailing whitespace,
/// and collapse each interior run of 2+ whitespace characters down to the
/// run's final character. `"  foo   bar  "` becomes `"foo bar"`; a
/// whitespace-only string becomes empty and is dropped by the output filter.
fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_whitespace() && chars.peek().is_some_and(|next| next.is_whitespace()) {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Render a float the way a dynamic front-end runtime would: whole values in
/// integer form (`1.0` → `"1"`), everything else in shortest fractional form
/// (`0.5` → `"0.5"`).
fn format_float(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < i64::MAX as f64 {
        return (x as i64).to_string();
    }
    x.to_string()
}
