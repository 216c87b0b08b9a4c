use datatable_lib::filter::row_matches;
use datatable_lib::{Column, DataTable, Row, SortDirection, TableOptions, Value};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-5i64..5).prop_map(Value::Int),
        "[a-cA-C ]{0,3}".prop_map(Value::Text),
    ]
}

fn row_strategy() -> impl Strategy<Value = Row> {
    (value_strategy(), value_strategy()).prop_map(|(a, b)| Row::new().set("a", a).set("b", b))
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(row_strategy(), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| row.set("id", i as i64))
            .collect()
    })
}

fn filter_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("y".to_string()),
        Just("no".to_string()),
        "[a-c1-]{1,2}",
    ]
}

fn table(rows: Vec<Row>) -> DataTable {
    DataTable::new(vec![Column::new("a", "A"), Column::new("b", "B")])
        .with_options(TableOptions::new())
        .with_rows(rows)
}

fn ids(table: &DataTable) -> Vec<String> {
    table.displayed().map(|r| r.text("id")).collect()
}

proptest! {
    #[test]
    fn filter_is_conjunction(rows in rows_strategy(), fa in filter_strategy(), fb in filter_strategy()) {
        let mut t = table(rows.clone());
        t.set_filter("a", fa.clone());
        t.set_filter("b", fb.clone());

        let expected: Vec<String> = rows
            .iter()
            .filter(|r| row_matches(r, "a", &fa) && row_matches(r, "b", &fb))
            .map(|r| r.text("id"))
            .collect();
        prop_assert_eq!(ids(&t), expected);
    }

    #[test]
    fn sort_is_stable(rows in rows_strategy(), clicks in 1usize..3) {
        let mut t = table(rows);
        for _ in 0..clicks {
            t.click_header("a");
        }
        let shown: Vec<&Row> = t.displayed().collect();
        for pair in shown.windows(2) {
            let (x, y) = (pair[0], pair[1]);
            if x.value("a") == y.value("a") {
                let xi = x.value("id").as_number().unwrap_or_default();
                let yi = y.value("id").as_number().unwrap_or_default();
                prop_assert!(xi < yi);
            }
        }
    }

    #[test]
    fn three_clicks_reset_sort(rows in rows_strategy()) {
        let mut t = table(rows.clone());
        t.click_header("b");
        let first = (t.state().sort_key().map(String::from), t.state().sort_direction(), ids(&t));
        t.click_header("b");
        t.click_header("b");
        prop_assert_eq!(t.state().sort_key(), None);
        prop_assert_eq!(t.state().sort_direction(), SortDirection::Unsorted);
        prop_assert_eq!(ids(&t), ids(&table(rows)));

        t.click_header("b");
        let fourth = (t.state().sort_key().map(String::from), t.state().sort_direction(), ids(&t));
        prop_assert_eq!(first, fourth);
    }

    #[test]
    fn no_filter_no_sort_is_identity(rows in rows_strategy()) {
        let t = table(rows.clone());
        let expected: Vec<String> = rows.iter().map(|r| r.text("id")).collect();
        prop_assert_eq!(ids(&t), expected);
        prop_assert_eq!(t.displayed_len(), rows.len());
    }

    #[test]
    fn boolean_filter_fails_closed(flags in prop::collection::vec(any::<bool>(), 0..10), text in "[c-eg-mo-sw-xz]{1,3}") {
        let rows = flags.into_iter().map(|f| Row::new().set("a", f)).collect();
        let mut t = table(rows);
        t.set_filter("a", text);
        prop_assert_eq!(t.displayed_len(), 0);
    }
}
