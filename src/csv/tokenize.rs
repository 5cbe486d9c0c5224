//! Quoted-field CSV scanner.

use super::Delimiter;

/// Split `text` into rows of cells.
///
/// Never fails. Malformed quoting degrades instead: an unterminated quoted
/// field swallows the rest of the input as one cell. The pending row at end
/// of input is kept only if something other than `\r` was scanned after the
/// last line break, so a trailing newline adds no empty row while blank
/// interior lines come back as `[""]`.
pub fn tokenize(text: &str, delimiter: Delimiter) -> Vec<Vec<String>> {
    let delimiter = delimiter.as_char();
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut touched = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            touched = true;
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(c);
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                touched = true;
            }
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
                touched = false;
            }
            '\r' => {}
            c if c == delimiter => {
                row.push(std::mem::take(&mut cell));
                touched = true;
            }
            c => {
                cell.push(c);
                touched = true;
            }
        }
    }

    if touched {
        row.push(cell);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &str) -> Vec<Vec<String>> {
        tokenize(text, Delimiter::COMMA)
    }

    fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_simple_table() {
        assert_eq!(
            rows("name,age\nAlice,30\nBob,25"),
            owned(&[&["name", "age"], &["Alice", "30"], &["Bob", "25"]])
        );
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        assert_eq!(
            rows(r#""He said ""hi""""#),
            owned(&[&[r#"He said "hi""#]])
        );
    }

    #[test]
    fn test_quoted_delimiter_and_newline() {
        assert_eq!(
            rows("\"a,b\",\"line1\nline2\",c"),
            owned(&[&["a,b", "line1\nline2", "c"]])
        );
    }

    #[test]
    fn test_crlf_is_stripped() {
        assert_eq!(
            rows("a,b\r\n1,2\r\n"),
            owned(&[&["a", "b"], &["1", "2"]])
        );
    }

    #[test]
    fn test_trailing_newline_adds_no_row() {
        assert_eq!(rows("a\n"), owned(&[&["a"]]));
        assert_eq!(rows("a\n\r"), owned(&[&["a"]]));
    }

    #[test]
    fn test_blank_interior_line_is_kept() {
        assert_eq!(rows("a\n\nb"), owned(&[&["a"], &[""], &["b"]]));
        assert_eq!(rows("a\n\n"), owned(&[&["a"], &[""]]));
    }

    #[test]
    fn test_final_quoted_empty_is_a_row() {
        assert_eq!(rows("a\n\"\""), owned(&[&["a"], &[""]]));
    }

    #[test]
    fn test_empty_input() {
        assert!(rows("").is_empty());
        assert!(rows("\r").is_empty());
    }

    #[test]
    fn test_empty_cells() {
        assert_eq!(rows(",,"), owned(&[&["", "", ""]]));
        assert_eq!(rows("a,\n,b"), owned(&[&["a", ""], &["", "b"]]));
    }

    #[test]
    fn test_unterminated_quote_consumes_rest() {
        assert_eq!(
            rows("a,\"open,b\nc,d"),
            owned(&[&["a", "open,b\nc,d"]])
        );
    }

    #[test]
    fn test_quote_mid_cell_toggles_mode() {
        // Quotes are honoured anywhere, not only at cell start.
        assert_eq!(rows("ab\"c,d\"e,f"), owned(&[&["abc,de", "f"]]));
    }

    #[test]
    fn test_custom_delimiter() {
        let semi = Delimiter::new(';').unwrap();
        assert_eq!(
            tokenize("a;b,c\n\"x;y\";z", semi),
            owned(&[&["a", "b,c"], &["x;y", "z"]])
        );

        let tab = Delimiter::new('\t').unwrap();
        assert_eq!(tokenize("a\tb", tab), owned(&[&["a", "b"]]));
    }

    #[test]
    fn test_unicode_cells() {
        assert_eq!(rows("é,日本\n😀,x"), owned(&[&["é", "日本"], &["😀", "x"]]));
    }
}
