#[cfg(test)]
mod tests {
    use crate::select::SelectBuilder;
    use crate::value::SqlValue;
    use crate::{distinct_on_cols, params};
    use pretty_assertions::assert_eq;

    fn users() -> SelectBuilder {
        SelectBuilder::new().select(["name", "email"]).from("users")
    }

    #[test]
    fn distinct_basic() {
        let (sql, _) = users().distinct().build().unwrap();
        assert_eq!(sql, "SELECT DISTINCT name, email FROM users");
    }

    #[test]
    fn distinct_with_where() {
        let (sql, args) = users()
            .distinct()
            .where_("active = :active", params! { "active" => true })
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT DISTINCT name, email FROM users WHERE active = :active"
        );
        assert_eq!(args.get("active"), Some(&SqlValue::Bool(true)));
    }

    #[test]
    fn distinct_idempotent() {
        let once = users().distinct().build().unwrap();
        let twice = users().distinct().distinct().build().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn distinct_immutability() {
        let base = users();
        let with_distinct = base.distinct();

        let (q1, _) = base.build().unwrap();
        let (q2, _) = with_distinct.build().unwrap();
        assert_eq!(q1, "SELECT name, email FROM users");
        assert_eq!(q2, "SELECT DISTINCT name, email FROM users");
    }

    #[test]
    fn distinct_on_basic() {
        let (sql, _) = users().distinct_on("name").build().unwrap();
        assert_eq!(sql, "SELECT DISTINCT ON (name) name, email FROM users");
    }

    #[test]
    fn distinct_on_multiple_columns() {
        let (sql, _) = SelectBuilder::new()
            .select(["name", "email", "department"])
            .from("users")
            .distinct_on(["name", "department"])
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT DISTINCT ON (name, department) name, email, department FROM users"
        );
    }

    #[test]
    fn distinct_on_multiple_calls_append() {
        let b = SelectBuilder::new()
            .select(["name", "email", "department"])
            .from("users");
        let b = distinct_on_cols!(b, "name");
        let b = distinct_on_cols!(b, "department");
        let (sql, _) = b.build().unwrap();
        assert_eq!(
            sql,
            "SELECT DISTINCT ON (name, department) name, email, department FROM users"
        );
    }

    #[test]
    fn distinct_on_overrides_distinct_in_either_order() {
        let (a, _) = users().distinct().distinct_on("name").build().unwrap();
        let (b, _) = users().distinct_on("name").distinct().build().unwrap();
        assert_eq!(a, "SELECT DISTINCT ON (name) name, email FROM users");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_on_immutability() {
        let base = users();
        let on = base.distinct_on("name");
        assert_eq!(base.build().unwrap().0, "SELECT name, email FROM users");
        assert_eq!(
            on.build().unwrap().0,
            "SELECT DISTINCT ON (name) name, email FROM users"
        );
    }

    #[test]
    fn distinct_on_with_order_by() {
        let (sql, _) = SelectBuilder::new()
            .select(["name", "email", "created_at"])
            .from("users")
            .distinct_on("name")
            .order_by("name ASC", ())
            .order_by("created_at DESC", ())
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT DISTINCT ON (name) name, email, created_at FROM users ORDER BY name ASC, created_at DESC"
        );
    }
}
