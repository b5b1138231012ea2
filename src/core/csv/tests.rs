use super::*;

fn fields(rows: &[(usize, Vec<String>)]) -> Vec<Vec<&str>> {
    rows.iter()
        .map(|(_, r)| r.iter().map(|s| s.as_str()).collect())
        .collect()
}

#[test]
fn test_parse_simple_rows() {
    let rows = parse_rows("name,position\nJosh Allen,QB\n");
    assert_eq!(
        fields(&rows),
        vec![vec!["name", "position"], vec!["Josh Allen", "QB"]]
    );
}

#[test]
fn test_parse_quoted_commas_and_quotes() {
    let rows = parse_rows("\"Smith, Jr.\",\"He said \"\"go\"\"\"\n");
    assert_eq!(fields(&rows), vec![vec!["Smith, Jr.", "He said \"go\""]]);
}

#[test]
fn test_parse_crlf_and_blank_lines() {
    let rows = parse_rows("a,b\r\n\r\n,\r\nc,d");
    assert_eq!(fields(&rows), vec![vec!["a", "b"], vec!["c", "d"]]);
    assert_eq!(rows[0].0, 1);
    assert_eq!(rows[1].0, 4);
}

#[test]
fn test_line_numbers_skip_multiline_fields() {
    let rows = parse_rows("h\n\"two\nlines\"\nnext\n");
    assert_eq!(rows[1].0, 2);
    assert_eq!(rows[2].0, 4);
}

#[test]
fn test_apostrophes_are_plain_text() {
    let rows = parse_rows("Ja'Marr Chase,WR\n");
    assert_eq!(fields(&rows), vec![vec!["Ja'Marr Chase", "WR"]]);
}

#[test]
fn test_write_row_quotes_when_needed() {
    let mut buf = Vec::new();
    write_row(&mut buf, &["1", "Smith, Jr.", "say \"hi\"", "Depth/Handcuff"]).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "1,\"Smith, Jr.\",\"say \"\"hi\"\"\",Depth/Handcuff\n"
    );
}

#[test]
fn test_write_then_parse_preserves_awkward_cells() {
    let original = vec!["A.J. Brown".to_string(), "x,\"y\"".to_string(), String::new()];
    let mut buf = Vec::new();
    write_row(&mut buf, &original).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let rows = parse_rows(&format!("{text}z\n"));
    assert_eq!(rows[0].1, original);
}

#[test]
fn test_table_case_insensitive_columns() {
    let table = Table::parse("\u{feff}Name, Position ,TIER\nBijan Robinson,RB,1\n").unwrap();
    assert_eq!(table.column("name"), Some(0));
    assert_eq!(table.column("position"), Some(1));
    assert_eq!(table.column("Tier"), Some(2));
    assert_eq!(table.column("team"), None);
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].0, 2);
}

#[test]
fn test_table_empty_input() {
    assert!(Table::parse("").is_none());
    assert!(Table::parse("\n\n").is_none());
}

#[test]
fn test_cell_missing_trailing_value() {
    let row = vec!["a".to_string(), " b ".to_string()];
    assert_eq!(cell(&row, 1), "b");
    assert_eq!(cell(&row, 5), "");
}
