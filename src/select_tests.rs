#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::select::SelectBuilder;
    use crate::value::SqlValue;
    use crate::{params, positional};
    use pretty_assertions::assert_eq;

    #[test]
    fn select_only() {
        let (sql, args) = SelectBuilder::new().select("*").from("users").build().unwrap();
        assert_eq!(sql, "SELECT * FROM users");
        assert!(args.is_empty());
    }

    #[test]
    fn select_appends() {
        let (sql, _) = SelectBuilder::new()
            .select("id")
            .select(["name", "email"])
            .from("users")
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT id, name, email FROM users");
    }

    #[test]
    fn select_keeps_duplicates() {
        let (sql, _) = SelectBuilder::new()
            .select(["id", "id"])
            .from("users")
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT id, id FROM users");
    }

    #[test]
    fn no_columns_error() {
        let err = SelectBuilder::new()
            .select(Vec::<String>::new())
            .from("users")
            .build()
            .unwrap_err();
        assert_eq!(err, Error::NoColumns);
    }

    #[test]
    fn no_from_error() {
        let err = SelectBuilder::new().select("*").build().unwrap_err();
        assert_eq!(err, Error::NoFrom);
    }

    #[test]
    fn no_columns_checked_before_no_from() {
        let err = SelectBuilder::new().build().unwrap_err();
        assert_eq!(err, Error::NoColumns);
    }

    #[test]
    fn from_last_write_wins() {
        let (sql, _) = SelectBuilder::new()
            .select("*")
            .from("users")
            .from("accounts")
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM accounts");
    }

    #[test]
    fn remove_select() {
        let (sql, _) = SelectBuilder::new()
            .select(["id", "name", "email"])
            .remove_select("name")
            .from("users")
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT id, email FROM users");
    }

    #[test]
    fn remove_select_exact_match_only() {
        let (sql, _) = SelectBuilder::new()
            .select(["u.id", "id", "name", "id"])
            .remove_select(["id", "missing"])
            .from("users u")
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT u.id, name FROM users u");
    }

    #[test]
    fn remove_select_immutability() {
        let base = SelectBuilder::new()
            .select(["id", "name", "email"])
            .from("users");
        let reduced = base.remove_select("name");

        let (q1, _) = base.build().unwrap();
        let (q2, _) = reduced.build().unwrap();
        assert_eq!(q1, "SELECT id, name, email FROM users");
        assert_eq!(q2, "SELECT id, email FROM users");
    }

    #[test]
    fn base_builder_reuse() {
        let base = SelectBuilder::new().select("*").from("users");
        let adults = base.where_("age >= :age", params! { "age" => 18 });
        let named = base.where_("name = :name", params! { "name" => "alice" });

        let (q0, p0) = base.build().unwrap();
        let (q1, p1) = adults.build().unwrap();
        let (q2, p2) = named.build().unwrap();

        assert_eq!(q0, "SELECT * FROM users");
        assert!(p0.is_empty());
        assert_eq!(q1, "SELECT * FROM users WHERE age >= :age");
        assert_eq!(p1, params! { "age" => 18 });
        assert_eq!(q2, "SELECT * FROM users WHERE name = :name");
        assert_eq!(p2, params! { "name" => "alice" });
    }

    #[test]
    fn conditional_filtering() {
        let age: Option<i64> = Some(30);
        let name: Option<&'static str> = None;

        let mut q = SelectBuilder::new().select("*").from("users");
        if let Some(age) = age {
            q = q.where_("age = :age", params! { "age" => age });
        }
        if let Some(name) = name {
            q = q.where_("name = :name", params! { "name" => name });
        }

        let (sql, args) = q.build().unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE age = :age");
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn limit_and_offset_zero_render_literally() {
        let (sql, _) = SelectBuilder::new()
            .select("*")
            .from("users")
            .limit(0)
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users LIMIT 0");

        let (sql, _) = SelectBuilder::new()
            .select("*")
            .from("users")
            .offset(0)
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users OFFSET 0");
    }

    #[test]
    fn group_by_multiple_calls() {
        let (sql, _) = SelectBuilder::new()
            .select(["department", "role", "COUNT(*)"])
            .from("employees")
            .group_by("department")
            .group_by("role")
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT department, role, COUNT(*) FROM employees GROUP BY department, role"
        );
    }

    #[test]
    fn having_basic() {
        let (sql, args) = SelectBuilder::new()
            .select(["department", "COUNT(*) AS cnt"])
            .from("employees")
            .group_by("department")
            .having("COUNT(*) > :min_count", params! { "min_count" => 5 })
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT department, COUNT(*) AS cnt FROM employees GROUP BY department HAVING COUNT(*) > :min_count"
        );
        assert_eq!(args.get("min_count"), Some(&SqlValue::I64(5)));
    }

    #[test]
    fn having_multiple_and_joined() {
        let (sql, args) = SelectBuilder::new()
            .select(["department", "COUNT(*) AS cnt", "AVG(salary) AS avg_sal"])
            .from("employees")
            .group_by("department")
            .having("COUNT(*) > :min_count", params! { "min_count" => 5 })
            .having("AVG(salary) > :min_salary", params! { "min_salary" => 50000 })
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT department, COUNT(*) AS cnt, AVG(salary) AS avg_sal FROM employees GROUP BY department HAVING COUNT(*) > :min_count AND AVG(salary) > :min_salary"
        );
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn having_without_group_by() {
        let err = SelectBuilder::new()
            .select(["department", "COUNT(*)"])
            .from("employees")
            .having("COUNT(*) > :c", params! { "c" => 5 })
            .build()
            .unwrap_err();
        assert_eq!(err, Error::HavingWithoutGroupBy);
    }

    #[test]
    fn having_immutability() {
        let base = SelectBuilder::new()
            .select(["department", "COUNT(*)"])
            .from("employees")
            .group_by("department");
        let filtered = base.having("COUNT(*) > 5", ());

        let (q1, _) = base.build().unwrap();
        let (q2, _) = filtered.build().unwrap();
        assert_eq!(
            q1,
            "SELECT department, COUNT(*) FROM employees GROUP BY department"
        );
        assert_eq!(
            q2,
            "SELECT department, COUNT(*) FROM employees GROUP BY department HAVING COUNT(*) > 5"
        );
    }

    #[test]
    fn order_by_multiple() {
        let (sql, _) = SelectBuilder::new()
            .select("*")
            .from("users")
            .order_by("name ASC", ())
            .order_by("age DESC", ())
            .order_by("id", ())
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users ORDER BY name ASC, age DESC, id");
    }

    #[test]
    fn order_by_with_params() {
        let vec = vec![0.1_f64, 0.2, 0.3];
        let (sql, args) = SelectBuilder::new()
            .select(["id", "title"])
            .from("documents")
            .order_by(
                "similarity(embedding, :query_vec) DESC",
                params! { "query_vec" => vec.clone() },
            )
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id, title FROM documents ORDER BY similarity(embedding, :query_vec) DESC"
        );
        assert_eq!(args.get("query_vec"), Some(&SqlValue::from(vec)));
    }

    #[test]
    fn order_by_missing_param() {
        let err = SelectBuilder::new()
            .select("*")
            .from("documents")
            .order_by("similarity(embedding, :query_vec) DESC", ())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingParam {
                name: "query_vec".into()
            }
        );
    }

    #[test]
    fn positional_sugar_on_where() {
        let (sql, args) = SelectBuilder::new()
            .select("*")
            .from("users")
            .where_("age > :min AND age < :max", positional![18, 65])
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE age > :min AND age < :max");
        assert_eq!(args, params! { "min" => 18, "max" => 65 });
    }

    #[test]
    fn first_error_wins_and_later_calls_are_noops() {
        let b = SelectBuilder::new()
            .select("*")
            .from("users")
            .where_("a = :a", ())
            .where_("b = :b", ())
            .order_by("x = @x", params! { "x" => 1 });

        assert_eq!(b.err(), Some(&Error::MissingParam { name: "a".into() }));
        assert_eq!(
            b.build().unwrap_err(),
            Error::MissingParam { name: "a".into() }
        );
    }

    #[test]
    fn deferred_error_reported_before_structural_checks() {
        let err = SelectBuilder::new()
            .where_("a = :a", ())
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingParam { name: "a".into() });
    }

    #[test]
    fn build_does_not_mutate() {
        let b = SelectBuilder::new()
            .select("*")
            .from("users")
            .where_("id = :id", params! { "id" => 7 });
        let first = b.build().unwrap();
        let second = b.build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn builder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SelectBuilder>();
    }
}
