/// Formats a value as a Java float literal (`1.0f`, `0.25f`, `-0.57754374f`).
///
/// Integral values keep an explicit fraction digit so the literal stays a float literal
/// in the emitted source.
pub(crate) fn float_literal(value: f32) -> String {
    let mut s = format!("{value}");
    if !s.contains('.') {
        s.push_str(".0");
    }
    s.push('f');
    s
}

/// Joins state key words into a method-name suffix: `["MouseOver", "Focused"]` becomes
/// `MouseOverAndFocused`.
pub(crate) fn join_keys_camel(keys: &[String]) -> String {
    keys.join("And")
}

/// Joins a state type and its key words into a constant name:
/// `("Background", ["MouseOver", "Focused"])` becomes `BACKGROUND_MOUSEOVER_FOCUSED`.
pub(crate) fn constant_name(kind: &str, keys: &[String]) -> String {
    let mut name = kind.to_uppercase();
    for key in keys {
        name.push('_');
        name.push_str(&key.to_uppercase());
    }
    name
}

#[cfg(test)]
mod tests {
    use super::{constant_name, float_literal, join_keys_camel};

    #[test]
    fn float_literal_keeps_integral_values_float() {
        assert_eq!(float_literal(1.0), "1.0f");
        assert_eq!(float_literal(0.25), "0.25f");
        assert_eq!(float_literal(-2.0), "-2.0f");
        assert_eq!(float_literal(3.0), "3.0f");
    }

    #[test]
    fn float_literal_preserves_small_fractions() {
        assert_eq!(float_literal(0.000001), "0.000001f");
    }

    #[test]
    fn state_names_follow_painter_conventions() {
        let keys = vec!["MouseOver".to_string(), "Focused".to_string()];
        assert_eq!(join_keys_camel(&keys), "MouseOverAndFocused");
        assert_eq!(constant_name("Background", &keys), "BACKGROUND_MOUSEOVER_FOCUSED");
    }
}
