//! File-backed reader tests

use colstat_io::csv_reader::CsvOptions;
use colstat_io::{open_file, CellValue, ColumnType, IoError};
use rstest::rstest;
use std::io::Write;
use tempfile::Builder;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[rstest]
#[case(".csv", "x,label\n1,a\n2,b\n,c\n")]
#[case(".tsv", "x\tlabel\n1\ta\n2\tb\n\tc\n")]
fn test_open_file_by_extension(#[case] suffix: &str, #[case] contents: &str) {
    let file = write_temp(suffix, contents);
    let path = file.path().to_str().unwrap();

    let reader = open_file(path, &CsvOptions::default()).unwrap();
    assert_eq!(reader.format_name(), "CSV");
    assert_eq!(reader.path(), Some(path));

    let table = reader.read_table().unwrap();
    assert_eq!(table.column_names(), vec!["x", "label"]);
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.schema().columns[0].dtype, ColumnType::Numeric);
    assert_eq!(table.cell(2, "x"), Some(&CellValue::Missing));
}

#[test]
fn test_custom_delimiter_and_markers() {
    let file = write_temp(".csv", "x;y\n1;?\n2;5\n");
    let options = CsvOptions {
        delimiter: b';',
        missing_markers: vec!["?".to_string()],
        ..CsvOptions::default()
    };

    let table = open_file(file.path().to_str().unwrap(), &options)
        .unwrap()
        .read_table()
        .unwrap();

    assert_eq!(table.cell(0, "y"), Some(&CellValue::Missing));
    assert_eq!(table.cell(1, "y"), Some(&CellValue::Number(5.0)));
}

#[test]
fn test_missing_file_reported() {
    let result = open_file("/no/such/dir/data.csv", &CsvOptions::default());
    assert!(matches!(result, Err(IoError::FileNotFound(_))));
}

#[test]
fn test_duplicate_header_reported() {
    let file = write_temp(".csv", "x,x\n1,2\n");
    let result = open_file(file.path().to_str().unwrap(), &CsvOptions::default())
        .unwrap()
        .read_table();
    assert!(matches!(result, Err(IoError::DuplicateColumn(name)) if name == "x"));
}
