#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::placeholder::{Prefix, extract};
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_colon_placeholders_in_order() {
        let found = extract("age > :min AND age < :max").unwrap();
        assert_eq!(found.names, vec!["min", "max"]);
        assert_eq!(found.prefix, Some(Prefix::Colon));
    }

    #[test]
    fn extract_dedups_repeated_names() {
        let found = extract(
            "(title ILIKE '%' || :search_1 || '%' OR text ILIKE '%' || :search_2 || '%' OR body ILIKE '%' || :search_1 || '%')",
        )
        .unwrap();
        assert_eq!(found.names, vec!["search_1", "search_2"]);
    }

    #[test]
    fn extract_at_prefix() {
        let found = extract("similarity(embedding, @query_vec) DESC").unwrap();
        assert_eq!(found.names, vec!["query_vec"]);
        assert_eq!(found.prefix, Some(Prefix::At));
    }

    #[test]
    fn type_cast_is_not_a_placeholder() {
        let found = extract("age::integer > 18").unwrap();
        assert!(found.is_empty());
        assert_eq!(found.prefix, None);
    }

    #[test]
    fn session_variable_is_not_a_placeholder() {
        let found = extract("@@session_var = true").unwrap();
        assert!(found.is_empty());
        assert_eq!(found.prefix, None);
    }

    #[test]
    fn placeholder_followed_by_cast() {
        let found = extract("created_at > :since::timestamptz").unwrap();
        assert_eq!(found.names, vec!["since"]);
        assert_eq!(found.prefix, Some(Prefix::Colon));
    }

    #[test]
    fn digits_after_colon_are_ignored() {
        let found = extract("opened_at = '10:30'").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn mixed_prefix_in_one_fragment() {
        assert_eq!(extract("a = :a AND b = @b"), Err(Error::MixedPrefix));
    }

    #[test]
    fn no_placeholders() {
        let found = extract("active = true").unwrap();
        assert!(found.names.is_empty());
        assert_eq!(found.prefix, None);
    }

    #[test]
    fn prefix_display() {
        assert_eq!(Prefix::Colon.to_string(), ":");
        assert_eq!(Prefix::At.to_string(), "@");
    }
}
