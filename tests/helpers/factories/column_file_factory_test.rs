use crate::engine::core::column::format::ColumnType;
use crate::test_helpers::factories::{ColumnFileFactory, RowsFactory, SchemaFactory};

#[test]
fn mixed_schema_and_rows_line_up() {
    let schema = SchemaFactory::mixed();
    let rows = RowsFactory::mixed();
    assert_eq!(schema.len(), 4);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.len() == schema.len()));
}

#[test]
fn generated_rows_follow_schema_types() {
    let schema = SchemaFactory::new()
        .with_column("t", ColumnType::Text)
        .with_column("n", ColumnType::Int)
        .create();
    let rows = RowsFactory::generated(&schema, 5);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2][0].as_str(), Some("row-2"));
    assert_eq!(rows[2][1].as_i32(), Some(-36));
}

#[test]
fn file_factory_writes_into_its_temp_dir() {
    let factory = ColumnFileFactory::new();
    factory.write();
    assert!(factory.path().exists());
    assert_eq!(&factory.bytes()[..4], b"CCF6");
}

#[test]
fn factory_entry_points_hand_out_builders() {
    use crate::test_helpers::factory::Factory;

    let schema = Factory::schema()
        .with_column("only", ColumnType::Bool)
        .create();
    let rows = Factory::rows().with_row(vec![true.into()]).create();
    let file = Factory::column_file().with_schema(schema).with_rows(rows);

    let stats = file.write();
    assert_eq!(stats["only"]["max"], 1.0);
    let view = file.reader().read_all().unwrap();
    assert_eq!(view.column("only").unwrap().get_bool_at(0), Some(true));
}
