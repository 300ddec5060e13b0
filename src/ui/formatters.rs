//! Shared formatting utilities for UI components.

use crate::data::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a float with smart precision.
pub fn format_float(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.4}", val)
    }
}

/// One-line rendering of a cell.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Str(s) => s.to_string(),
        Value::Array(items) => format!("[{} items]", items.borrow().len()),
        Value::Buffer(data) => {
            let shape: Vec<String> = data.borrow().shape().iter().map(usize::to_string).collect();
            format!("<f64 {}>", shape.join("x"))
        },
        Value::Object(map) => format!("{{{} keys}}", map.borrow().len()),
    }
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn numbers_get_separators() {
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(12), "12");
    }

    #[test]
    fn cells_render_on_one_line() {
        assert_eq!(format_value(&Value::Int(3)), "3");
        assert_eq!(format_value(&Value::Float(0.5)), "0.5000");
        assert_eq!(format_value(&Value::Float(f64::NAN)), "NaN");
        assert_eq!(format_value(&Value::array(vec![Value::Null])), "[1 items]");
        assert_eq!(
            format_value(&Value::buffer(Array2::<f64>::zeros((2, 3)).into_dyn())),
            "<f64 2x3>"
        );
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abcdef", 0), "");
    }
}
