use indexmap::IndexMap;

use crate::engine::core::column::column_values::ColumnValues;
use crate::engine::core::file::view::{ResultView, Selection};
use crate::engine::core::stats::StatsMap;
use crate::engine::errors::FileError;

fn sample_view() -> ResultView {
    let mut frame = IndexMap::new();
    frame.insert("a".to_string(), ColumnValues::Int(vec![1, 3]));
    frame.insert("b".to_string(), ColumnValues::Text(vec!["a".into(), "f".into()]));
    frame.insert("d".to_string(), ColumnValues::Bool(vec![true, false]));

    let mut stats = StatsMap::new();
    stats.insert("a".into(), IndexMap::from([("min".to_string(), 1.0)]));
    ResultView::new(frame, stats)
}

#[test]
fn column_names_follow_insertion_order() {
    let view = sample_view();
    assert_eq!(view.column_names(), vec!["a", "b", "d"]);
    assert_eq!(view.len(), 3);
}

#[test]
fn select_all_returns_every_column_in_order() {
    let view = sample_view();
    let cols = view.select(&Selection::All).unwrap();
    assert_eq!(cols.len(), 3);
    assert_eq!(*cols[0], ColumnValues::Int(vec![1, 3]));
    assert_eq!(*cols[2], ColumnValues::Bool(vec![true, false]));
}

#[test]
fn select_names_follows_requested_order() {
    let view = sample_view();
    let cols = view.select(&Selection::names(["d", "a"])).unwrap();
    assert_eq!(
        cols,
        vec![
            &ColumnValues::Bool(vec![true, false]),
            &ColumnValues::Int(vec![1, 3])
        ]
    );
}

#[test]
fn select_unknown_name_fails() {
    let view = sample_view();
    let err = view.select(&Selection::names(["a", "zz"])).unwrap_err();
    assert!(matches!(err, FileError::UnknownColumn(name) if name == "zz"));
}

#[test]
fn stats_are_readable_and_replaceable() {
    let mut view = sample_view();
    assert_eq!(view.stats()["a"]["min"], 1.0);

    view.stats_mut()
        .entry("a".into())
        .or_default()
        .insert("max".into(), 3.0);
    assert_eq!(view.stats()["a"]["max"], 3.0);

    view.set_stats(StatsMap::new());
    assert!(view.stats().is_empty());
}

#[test]
fn into_columns_hands_out_the_frame() {
    let cols = sample_view().into_columns();
    assert_eq!(cols.get("b").unwrap().get_str_at(1), Some("f"));
}
