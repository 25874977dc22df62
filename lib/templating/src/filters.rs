use minijinja::Value;

/// Joins the truthy entries of `values` with a space.
///
/// Mirrors the `classnames` helper commonly used in JSX so conditional modifiers
/// can be written as `[base, modifier if flag] | class_names`.
pub(crate) fn class_names(values: Vec<Value>) -> String {
    values
        .iter()
        .filter(|v| v.is_true())
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use minijinja::Value;

    use super::class_names;

    #[test]
    fn should_skip_falsy_values() {
        let values = vec![
            Value::from("category-header"),
            Value::from(()),
            Value::UNDEFINED,
            Value::from(""),
            Value::from("with-browse"),
        ];

        assert_eq!("category-header with-browse", class_names(values));
    }

    #[test]
    fn should_return_empty_string_when_nothing_is_set() {
        assert_eq!("", class_names(vec![Value::from(false)]));
    }
}
