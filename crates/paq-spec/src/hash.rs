//! Canonical hashing and draw seed derivation.
//!
//! Determinism policy:
//! - questions and parameters are hashed as `hex(BLAKE3(JCS(json)))` so
//!   consumers can pin expected outputs by a single string
//! - every labelled draw gets its own seed derived from the base seed, the
//!   draw method and the label

use crate::params::AdditionParams;
use crate::question::Question;

/// Computes the canonical BLAKE3 hash of a question.
///
/// # Example
/// ```
/// use paq_spec::hash::canonical_question_hash;
/// use paq_spec::Question;
///
/// let q = Question::free_response("Integer Addition", "What is 3 + 9?", "12");
/// let hash = canonical_question_hash(&q).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_question_hash(question: &Question) -> Result<String, serde_json::Error> {
    Ok(canonical_value_hash(&question.to_value()?))
}

/// Computes the canonical BLAKE3 hash of a parameter set.
pub fn canonical_params_hash(params: &AdditionParams) -> Result<String, serde_json::Error> {
    Ok(canonical_value_hash(&params.to_value()?))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
///
/// Returns a 64-character lowercase hexadecimal string.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    blake3_hash(canonicalize_json(value).as_bytes())
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
///
/// Object keys are sorted, there is no whitespace between tokens and strings
/// use minimal escaping.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Null => out.push_str("null"),
        serde_json::Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        serde_json::Value::Number(n) => out.push_str(&format_jcs_number(n)),
        serde_json::Value::String(s) => write_jcs_string(s, out),
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_jcs_string(key, out);
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

/// Formats a number according to JCS rules.
///
/// Magnitudes in `[1e-6, 1e21)` are written in plain decimal, anything outside
/// in exponent form with an explicit sign (`1e+21`, `1e-7`).
fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                "0".to_string()
            } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
                format_jcs_exponent(f)
            } else if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", f as i64)
            } else {
                format!("{}", f)
            }
        }
        _ => "null".to_string(),
    }
}

fn format_jcs_exponent(f: f64) -> String {
    let formatted = format!("{:e}", f);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

fn write_jcs_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Derives the seed for one labelled draw.
///
/// ```text
/// draw_seed = truncate_u32(BLAKE3(base_seed || method || 0x00 || label))
/// ```
///
/// The method name keeps an `integer` draw and a `shuffle` draw with the same
/// label on independent streams.
///
/// # Example
/// ```
/// use paq_spec::hash::derive_draw_seed;
///
/// let left = derive_draw_seed(42, "integer", "left addend");
/// let right = derive_draw_seed(42, "integer", "right addend");
/// assert_ne!(left, right);
/// assert_eq!(left, derive_draw_seed(42, "integer", "left addend"));
/// ```
pub fn derive_draw_seed(base_seed: u32, method: &str, label: &str) -> u32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&base_seed.to_le_bytes());
    hasher.update(method.as_bytes());
    hasher.update(&[0]);
    hasher.update(label.as_bytes());
    let hash = hasher.finalize();

    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[..4]);
    u32::from_le_bytes(bytes)
}

/// Computes a BLAKE3 hash of arbitrary data as lowercase hex.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_question_hash_stability() {
        let q = Question::free_response("Integer Addition", "What is 3 + 9?", "12");
        let hash1 = canonical_question_hash(&q).unwrap();
        let hash2 = canonical_question_hash(&q.clone()).unwrap();
        assert_eq!(hash1, hash2, "hash should be stable across calls");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_question_hash_matches_canonical_form() {
        let q = Question::free_response("Integer Addition", "What is 3 + 9?", "12");
        let canonical = canonicalize_json(&q.to_value().unwrap());
        assert_eq!(
            canonical,
            r#"{"answer":"12","format":"free-response","question":"What is 3 + 9?","title":"Integer Addition"}"#
        );
        assert_eq!(canonical_question_hash(&q).unwrap(), blake3_hash(canonical.as_bytes()));
    }

    #[test]
    fn test_different_questions_different_hashes() {
        let a = Question::free_response("Integer Addition", "What is 3 + 9?", "12");
        let b = Question::free_response("Integer Addition", "What is 4 + 8?", "12");
        assert_ne!(
            canonical_question_hash(&a).unwrap(),
            canonical_question_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_params_hash_distinguishes_explicit_mc() {
        let plain = canonical_params_hash(&AdditionParams::new(10)).unwrap();
        let off = canonical_params_hash(&AdditionParams::new(10).multiple_choice(false)).unwrap();
        assert_ne!(plain, off);
        assert_eq!(plain, canonical_params_hash(&AdditionParams::new(10)).unwrap());
    }

    #[test]
    fn test_canonicalize_json_object_ordering() {
        let json1: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
        let json2: serde_json::Value = serde_json::from_str(r#"{"a": 2, "b": 1}"#).unwrap();

        assert_eq!(canonicalize_json(&json1), canonicalize_json(&json2));
        assert_eq!(canonicalize_json(&json1), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn test_canonicalize_json_nested() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"z": [1, 2.0, 3.5], "a": {"c": true, "b": null}}"#).unwrap();
        assert_eq!(
            canonicalize_json(&json),
            r#"{"a":{"b":null,"c":true},"z":[1,2,3.5]}"#
        );
    }

    #[test]
    fn test_canonicalize_json_number_forms() {
        let cases = [
            (json!(1e21), "1e+21"),
            (json!(1.5e300), "1.5e+300"),
            (json!(-2e22), "-2e+22"),
            (json!(1e-7), "1e-7"),
            (json!(1e20), "100000000000000000000"),
            (json!(0.000001), "0.000001"),
            (json!(-0.0), "0"),
        ];
        for (value, expected) in cases {
            assert_eq!(canonicalize_json(&value), expected, "value: {value}");
        }
    }

    #[test]
    fn test_jcs_string_escapes() {
        let mut out = String::new();
        write_jcs_string("quote\"tab\tback\\slash\u{1}", &mut out);
        assert_eq!(out, "\"quote\\\"tab\\tback\\\\slash\\u0001\"");
    }

    #[test]
    fn test_derive_draw_seed() {
        let base = 42u32;
        let integer = derive_draw_seed(base, "integer", "ordering");
        let shuffle = derive_draw_seed(base, "shuffle", "ordering");
        assert_ne!(integer, shuffle, "methods should use separate streams");

        assert_ne!(
            derive_draw_seed(42, "integer", "left addend"),
            derive_draw_seed(43, "integer", "left addend")
        );
        assert_eq!(
            derive_draw_seed(7, "integer", "x"),
            derive_draw_seed(7, "integer", "x")
        );
    }

    #[test]
    fn test_method_label_boundary_is_unambiguous() {
        assert_ne!(derive_draw_seed(1, "ab", "c"), derive_draw_seed(1, "a", "bc"));
    }

    #[test]
    fn test_blake3_hash() {
        // Verified with: echo -n "hello world" | b3sum
        assert_eq!(
            blake3_hash(b"hello world"),
            "d74981efa70a0c880b8d8c1985d075dbcbf679b99a5f9914e5aaf96b831a9e24"
        );
    }
}
