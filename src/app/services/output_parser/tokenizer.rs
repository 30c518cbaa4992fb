//! Row tokenization
//!
//! Splits file content into one [`StringRecord`] per non-blank line, keeping
//! the 1-based physical line number of each record for error reporting.
//! Tab-delimited content goes through a `csv` reader; column-aligned
//! content is split on runs of whitespace.

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};

use crate::config::FieldSeparator;
use crate::constants::TAB_DELIMITER;
use crate::{Error, Result};

/// Records of one file with their line numbers
#[derive(Debug, Clone, Default)]
pub struct TokenizedContent {
    /// `(line number, fields)` for every non-blank line, header first
    pub records: Vec<(usize, StringRecord)>,

    /// Lines skipped because they held only whitespace
    pub blank_lines: usize,
}

/// Tokenize content with the given separator
///
/// Fields are trimmed. In tab mode an empty field stays in the record, so
/// `a\t\tb` has three fields and a trailing tab adds an empty last field.
pub fn tokenize(
    content: &str,
    separator: FieldSeparator,
    source: &str,
) -> Result<TokenizedContent> {
    let mut line_numbers = Vec::new();
    let mut blank_lines = 0;
    for (index, line) in content.lines().enumerate() {
        if is_blank(line) {
            blank_lines += 1;
        } else {
            line_numbers.push(index + 1);
        }
    }

    let records = match separator {
        FieldSeparator::Tab => read_tab_records(content, source)?,
        FieldSeparator::Whitespace => content
            .lines()
            .filter(|line| !is_blank(line))
            .map(|line| line.split_whitespace().collect::<StringRecord>())
            .collect(),
    };

    if records.len() != line_numbers.len() {
        return Err(Error::configuration(format!(
            "Tokenizer found {} records but {} non-blank lines in file '{}'",
            records.len(),
            line_numbers.len(),
            source
        )));
    }

    Ok(TokenizedContent {
        records: line_numbers.into_iter().zip(records).collect(),
        blank_lines,
    })
}

fn is_blank(line: &str) -> bool {
    line.trim_ascii().is_empty()
}

fn read_tab_records(content: &str, source: &str) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(TAB_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::csv_parsing(source, e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(record: &StringRecord) -> Vec<&str> {
        record.iter().collect()
    }

    #[test]
    fn test_tab_fields_trimmed() {
        let content = "Longitude\tLatitude\t Year \r\n";
        let tokenized = tokenize(content, FieldSeparator::Tab, "t.out").unwrap();

        assert_eq!(tokenized.records.len(), 1);
        assert_eq!(
            fields(&tokenized.records[0].1),
            vec!["Longitude", "Latitude", "Year"]
        );
    }

    #[test]
    fn test_tab_keeps_empty_fields() {
        let tokenized = tokenize("a\t\tb\n1\t2\t\n", FieldSeparator::Tab, "t.out").unwrap();

        assert_eq!(fields(&tokenized.records[0].1), vec!["a", "", "b"]);
        assert_eq!(fields(&tokenized.records[1].1), vec!["1", "2", ""]);
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let content = "a\tb\n\n1\t2\n \t \n3\t4\n";
        let tokenized = tokenize(content, FieldSeparator::Tab, "t.out").unwrap();

        let lines: Vec<usize> = tokenized.records.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, vec![1, 3, 5]);
        assert_eq!(tokenized.blank_lines, 2);
    }

    #[test]
    fn test_whitespace_split() {
        let content = "  Lon    Lat  Year\n\n   151.25   -33.75  2000\n";
        let tokenized = tokenize(content, FieldSeparator::Whitespace, "t.out").unwrap();

        assert_eq!(tokenized.records[1].0, 3);
        assert_eq!(
            fields(&tokenized.records[1].1),
            vec!["151.25", "-33.75", "2000"]
        );
        assert_eq!(tokenized.blank_lines, 1);
    }
}
