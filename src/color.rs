//! Color resolution
//!
//! A node's `color` may be absent, a hex literal, or a sequence of numbers.
//! All three resolve to an RGBA [`Vec4`] with components in `[0, 1]`.

use glam::Vec4;
use serde_json::Value;

use crate::defaults;
use crate::document::describe;
use crate::errors::ColorError;

/// Resolve an optional document color to RGBA floats.
///
/// - absent or `null`: [`defaults::COLOR`]
/// - string: a hex literal, see [`parse_hex`]
/// - sequence: the first four components; integers are bytes and get divided
///   by 255, floats are taken as already normalized
pub fn resolve(color: Option<&Value>) -> Result<Vec4, ColorError> {
    match color {
        None | Some(Value::Null) => Ok(defaults::COLOR),
        Some(Value::String(literal)) => parse_hex(literal).map(from_bytes),
        Some(Value::Array(components)) => from_components(components),
        Some(other) => Err(ColorError::UnsupportedValue {
            got: describe(other),
        }),
    }
}

/// Normalize byte components to `[0, 1]`
pub fn from_bytes(bytes: [u8; 4]) -> Vec4 {
    Vec4::from_array(bytes.map(|b| f32::from(b) / 255.0))
}

fn from_components(components: &[Value]) -> Result<Vec4, ColorError> {
    if components.len() < 4 {
        return Err(ColorError::TooFewComponents {
            len: components.len(),
        });
    }

    let mut rgba = [0.0f32; 4];
    for (index, (slot, component)) in rgba.iter_mut().zip(components).enumerate() {
        let number = component
            .as_number()
            .ok_or(ColorError::NonNumericComponent { index })?;
        let value = number.as_f64().unwrap_or_default() as f32;
        if !value.is_finite() {
            return Err(ColorError::OutOfRange { index });
        }
        // i64 or u64 components are bytes
        *slot = if number.is_f64() { value } else { value / 255.0 };
    }
    Ok(Vec4::from_array(rgba))
}

/// Parse a hex color literal into RGBA bytes.
///
/// Grammar: optional `#`, then 3, 4, 6 or 8 hex digits, any case.
/// Short forms (3/4 digits) double each digit; long forms (6/8) read pairs.
/// A missing alpha is fully opaque.
pub fn parse_hex(literal: &str) -> Result<[u8; 4], ColorError> {
    let malformed = || ColorError::MalformedLiteral {
        input: literal.to_string(),
    };

    let digits = literal.strip_prefix('#').unwrap_or(literal);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let nibbles: Vec<u8> = digits.bytes().map(hex_value).collect();

    match nibbles.len() {
        3 | 4 => {
            let alpha = nibbles.get(3).copied().unwrap_or(0xf);
            Ok([nibbles[0], nibbles[1], nibbles[2], alpha].map(|n| n << 4 | n))
        }
        6 | 8 => {
            let pair = |i: usize| nibbles[i] << 4 | nibbles[i + 1];
            let alpha = if nibbles.len() == 8 { pair(6) } else { 0xff };
            Ok([pair(0), pair(2), pair(4), alpha])
        }
        _ => Err(malformed()),
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}
