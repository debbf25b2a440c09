//! Canonical scene hashing for determinism fixtures.
//!
//! Regression pinning follows the same scheme everywhere:
//!
//! ```text
//! scene_hash = hex(BLAKE3(canonical_json(scene)))
//! ```
//!
//! where `canonical_json` sorts object keys lexicographically, strips
//! whitespace, and formats numbers per RFC 8785 (JCS). Two scenes hash
//! equal iff their serialized forms are identical, which is exactly the
//! determinism invariant the test suites pin.

use crate::error::SpecError;
use crate::scene::Scene;

/// Computes the canonical BLAKE3 hash of a scene.
///
/// # Returns
/// A 64-character lowercase hexadecimal string.
///
/// # Example
/// ```
/// use lumenfall_spec::{gradient_defs, Scene};
/// use lumenfall_spec::hash::canonical_scene_hash;
///
/// let scene = Scene {
///     streaks: vec![],
///     particles: vec![],
///     gradients: gradient_defs(),
/// };
/// let hash = canonical_scene_hash(&scene).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_scene_hash(scene: &Scene) -> Result<String, SpecError> {
    let value = serde_json::to_value(scene)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_value(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Canonicalizes a JSON value: sorted keys, no whitespace, JCS numbers.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    canonicalize_value(value)
}

fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_jcs_number(n),
        serde_json::Value::String(s) => format_jcs_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut sorted_keys: Vec<&String> = obj.keys().collect();
            sorted_keys.sort();

            let pairs: Vec<String> = sorted_keys
                .iter()
                .map(|k| {
                    let v = obj.get(*k).unwrap();
                    format!("{}:{}", format_jcs_string(k), canonicalize_value(v))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

/// Formats a number according to JCS rules: no leading zeros, no trailing
/// zeros after the decimal point, lowercase exponent.
fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(f) = n.as_f64() {
        if f.is_nan() || f.is_infinite() {
            return "null".to_string(); // JCS treats these as null
        }
        if f == 0.0 {
            return "0".to_string();
        }
        if f.fract() == 0.0 && f.abs() < 1e15 {
            return format!("{}", f as i64);
        }
        let s = format!("{}", f);
        if s.contains('.') && !s.contains('e') && !s.contains('E') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.');
            return trimmed.to_string();
        }
        s
    } else {
        "null".to_string()
    }
}

/// Formats a string with minimal JSON escaping.
fn format_jcs_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
