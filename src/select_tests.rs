#[cfg(test)]
mod tests {
    use crate::arg::Arg;
    use crate::select::{
        SelectStatement, distinct_on, from, limit, order, replace_order, replace_select, select,
        where_,
    };
    use crate::writer::{BinaryExpr, build, ident, param, raw, subquery};
    use pretty_assertions::assert_eq;

    fn ints(vs: &[i64]) -> Vec<Arg> {
        vs.iter().map(|&v| Arg::from(v)).collect()
    }

    #[test]
    fn select_only() {
        let a = select("a, b, c", ());
        let (sql, args) = build(&a).unwrap();
        assert_eq!(sql, "select a, b, c");
        assert!(args.is_empty());
    }

    #[test]
    fn from_only_selects_star() {
        let a = from("people", ());
        let (sql, args) = a.build().unwrap();
        assert_eq!(sql, "select * from people");
        assert!(args.is_empty());
    }

    #[test]
    fn where_then_from() {
        let mut a = where_("id=?", [2_i64]);
        a.from("people", ());
        let (sql, args) = a.build().unwrap();
        assert_eq!(sql, "select * from people where (id=$1)");
        assert_eq!(args, ints(&[2]));
    }

    #[test]
    fn distinct_flag() {
        let mut a = select("a, b, c", ());
        a.distinct(true);
        assert_eq!(a.build().unwrap().0, "select distinct a, b, c");

        a.distinct(false);
        assert_eq!(a.build().unwrap().0, "select a, b, c");
    }

    #[test]
    fn distinct_on_accumulates() {
        let mut a = select("a, b, c", ());
        a.distinct_on("a", ());
        assert_eq!(a.build().unwrap().0, "select distinct on (a) a, b, c");

        a.distinct_on("b", ());
        assert_eq!(a.build().unwrap().0, "select distinct on (a, b) a, b, c");

        // distinct on 已隐含 distinct，不重复输出
        a.distinct(true);
        assert_eq!(a.build().unwrap().0, "select distinct on (a, b) a, b, c");
    }

    #[test]
    fn multiple_select() {
        let mut a = select("a", ());
        a.select("b", ());
        assert_eq!(a.build().unwrap().0, "select a, b");
    }

    #[test]
    fn replace_select_then_select() {
        let mut a = select("a", ());
        a.replace_select("b", ());
        assert_eq!(a.build().unwrap().0, "select b");

        a.select("c", ());
        assert_eq!(a.build().unwrap().0, "select b, c");
    }

    #[test]
    fn where_with_args() {
        let mut a = select("a, b, c", ());
        a.from("t", ()).where_("foo=?", [42_i64]);
        let (sql, args) = a.build().unwrap();
        assert_eq!(sql, "select a, b, c from t where (foo=$1)");
        assert_eq!(args, ints(&[42]));
    }

    #[test]
    fn multiple_where_are_anded() {
        let mut a = from("t", ());
        a.where_("a=? or b=?", (1_i64, 2_i64)).where_("c=?", (1_i64,));
        let (sql, args) = a.build().unwrap();
        assert_eq!(sql, "select * from t where (a=$1 or b=$2) and (c=$1)");
        assert_eq!(args, ints(&[1, 2]));
    }

    #[test]
    fn no_where_renders_no_keyword() {
        let a = from("t", ());
        assert!(!a.build().unwrap().0.contains("where"));
    }

    #[test]
    fn order_accumulates() {
        let mut a = select("a, b, c", ());
        a.from("t", ()).order("c desc", ());
        assert_eq!(a.build().unwrap().0, "select a, b, c from t order by c desc");

        a.order("a asc", ());
        assert_eq!(
            a.build().unwrap().0,
            "select a, b, c from t order by c desc, a asc"
        );
    }

    #[test]
    fn replace_order_discards_prior_terms() {
        let mut a = select("a, b, c", ());
        a.from("t", ()).order("c desc", ());
        a.replace_order("a asc", ());
        assert_eq!(a.build().unwrap().0, "select a, b, c from t order by a asc");
    }

    #[test]
    fn limit_and_offset() {
        let mut a = select("a, b, c", ());
        a.from("t", ()).order("c desc", ());
        a.limit(5);
        let (sql, args) = a.build().unwrap();
        assert_eq!(sql, "select a, b, c from t order by c desc limit 5");
        assert!(args.is_empty());

        a.offset(10);
        let (sql, args) = a.build().unwrap();
        assert_eq!(sql, "select a, b, c from t order by c desc limit 5 offset 10");
        assert!(args.is_empty());
    }

    #[test]
    fn apply_merges_where_and_limit() {
        let mut a = select("a, b, c", ());
        a.from("t", ()).order("c desc", ());
        assert_eq!(a.build().unwrap().0, "select a, b, c from t order by c desc");

        let mut b = where_("d=?", [42_i64]);
        b.limit(5);
        a.apply(&b);

        let (sql, args) = a.build().unwrap();
        assert_eq!(
            sql,
            "select a, b, c from t where (d=$1) order by c desc limit 5"
        );
        assert_eq!(args, ints(&[42]));
    }

    #[test]
    fn apply_replace_select() {
        let mut a = select("a, b, c", ());
        a.from("t", ()).order("c desc", ());

        a.apply(&replace_select("a", ()));
        assert_eq!(a.build().unwrap().0, "select a from t order by c desc");

        a.apply(&select("d", ()));
        assert_eq!(a.build().unwrap().0, "select a, d from t order by c desc");
    }

    #[test]
    fn apply_replace_order() {
        let mut a = select("a, b, c", ());
        a.from("t", ()).order("c desc", ());

        a.apply(&replace_order("a desc", ()));
        assert_eq!(a.build().unwrap().0, "select a, b, c from t order by a desc");

        a.apply(&order("d", ()));
        assert_eq!(a.build().unwrap().0, "select a, b, c from t order by a desc, d");
    }

    #[test]
    fn apply_replace_then_accumulate_from_other() {
        let mut x = from("t", ());
        x.order("w", ());

        let mut y = replace_order("z", ());
        y.order("v", ());
        x.apply(&y);
        assert_eq!(x.build().unwrap().0, "select * from t order by z, v");
    }

    #[test]
    fn apply_keeps_unset_singulars() {
        let mut a = from("t", ());
        a.limit(10).offset(20).distinct(true);

        a.apply(&where_("x=?", [1_i64]));
        assert_eq!(
            a.build().unwrap().0,
            "select distinct * from t where (x=$1) limit 10 offset 20"
        );

        a.apply(&limit(3));
        a.apply(&from("u", ()));
        assert_eq!(
            a.build().unwrap().0,
            "select distinct * from u where (x=$1) limit 3 offset 20"
        );
    }

    #[test]
    fn apply_distinct_on_appends() {
        let mut a = select("a, b", ());
        a.distinct_on("a", ());
        a.apply(&distinct_on("b", ()));
        assert_eq!(a.build().unwrap().0, "select distinct on (a, b) a, b");
    }

    #[test]
    fn apply_does_not_touch_source() {
        let mut a = from("t", ());
        let b = replace_select("x", ());
        a.apply(&b);
        a.select("y", ());
        assert_eq!(b.build().unwrap().0, "select x");
    }

    #[test]
    fn args_dedup_across_clauses() {
        let mut a = select("coalesce(a, ?) as a", ["none"]);
        a.from("t", ())
            .where_("b=?", ["x"])
            .where_("c=? or d=?", ("none", 7_i64))
            .order("e <-> ?", ["x"]);
        let (sql, args) = a.build().unwrap();
        assert_eq!(
            sql,
            "select coalesce(a, $1) as a from t where (b=$2) and (c=$1 or d=$3) order by e <-> $2"
        );
        assert_eq!(
            args,
            vec![Arg::from("none"), Arg::from("x"), Arg::from(7_i64)]
        );
    }

    #[test]
    fn format_markers_follow_global_numbering() {
        let mut a = where_("x=?", [1_i64]);
        a.from("t", ()).where_("y in (?, ?)", [2_i64, 1]);
        let (sql, _) = a.build().unwrap();
        assert_eq!(sql, "select * from t where (x=$1) and (y in ($2, $1))");
    }

    #[test]
    fn fragments_as_clauses() {
        let mut a = SelectStatement::new();
        a.select_expr(ident(["people", "name"]))
            .from_expr(ident(["public", "people"]))
            .where_expr(BinaryExpr::new(ident(["id"]), "=", param(9_i64)));
        let (sql, args) = a.build().unwrap();
        assert_eq!(
            sql,
            r#"select "people"."name" from "public"."people" where (("id" = $1))"#
        );
        assert_eq!(args, ints(&[9]));
    }

    #[test]
    fn subquery_shares_numbering() {
        let mut inner = select("id", ());
        inner.from("orders", ()).where_("total > ?", [100_i64]);

        let mut outer = from("people", ());
        outer
            .where_("kind=?", [100_i64])
            .where_expr(BinaryExpr::new(raw("id"), "in", subquery(inner)));
        let (sql, args) = outer.build().unwrap();
        assert_eq!(
            sql,
            "select * from people where (kind=$1) and ((id in (select id from orders where (total > $1))))"
        );
        assert_eq!(args, ints(&[100]));
    }

    #[test]
    fn subquery_in_from_with_alias() {
        let mut inner = select("id, total", ());
        inner.from("orders", ()).where_("status=?", ["paid"]);

        let mut outer = select("sum(o.total)", ());
        outer
            .from_expr(subquery(inner).alias("o"))
            .where_("o.total > ?", [10_i64]);
        let (sql, args) = outer.build().unwrap();
        assert_eq!(
            sql,
            "select sum(o.total) from (select id, total from orders where (status=$1)) as o where (o.total > $2)"
        );
        assert_eq!(args, vec![Arg::from("paid"), Arg::from(10_i64)]);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let mut a = select("a", ());
        a.where_("b=?", ["c"]).limit(1);
        assert_eq!(a.build().unwrap(), a.build().unwrap());
    }

    #[test]
    fn arg_count_mismatch_is_an_error() {
        let a = where_("a=? and b=?", [1_i64]);
        assert!(a.build().is_err());
    }
}
