use crate::core::TotalCalories;
use serde_json::Value;

/// Markup for the `total` element: label followed by the raw response text.
pub fn total_markup(label: &str, total: &TotalCalories, escape: bool) -> String {
    format!("{}{}", label, maybe_escape(total.as_str(), escape))
}

/// Markup for the `recipes` element.
pub fn recipes_markup(label: &str, recipes: &Value, escape: bool) -> String {
    format!("{}{}", label, maybe_escape(&coerce_to_markup(recipes), escape))
}

/// Converts a JSON value to text the way a browser does when the value is
/// assigned to `innerHTML`.
pub fn coerce_to_markup(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(x) => number_to_markup(x),
            None => n.to_string(),
        },
        // 陣列內的 null 會變成空字串
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_markup(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JavaScript `Number.prototype.toString()`: plain decimal for
/// `1e-6 <= |x| < 1e21`, exponent form with an explicit sign otherwise.
fn number_to_markup(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&x.abs()) {
        return x.to_string();
    }

    let formatted = format!("{:e}", x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn maybe_escape(text: &str, escape: bool) -> String {
    if escape {
        escape_markup(text)
    } else {
        text.to_string()
    }
}
