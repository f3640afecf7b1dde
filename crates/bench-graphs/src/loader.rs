// File: crates/bench-graphs/src/loader.rs
// Summary: Parses benchmark result files into insertion-ordered named series.
// Format: one series per line, `name,v1,v2,...`. No header, no quoting.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// Series name -> samples, iterated in the order names first appeared in the file.
/// The first entry is the baseline for comparisons.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    entries: Vec<(String, Vec<f64>)>,
}

impl SeriesSet {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace `name`. A replaced name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = values,
            None => self.entries.push((name, values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_slice())
    }

    /// The first series, by insertion order.
    pub fn baseline(&self) -> Option<(&str, &[f64])> {
        self.entries.first().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Load one benchmark file. Any unreadable line or bad number fails the whole load.
pub fn load_benchmark_file(path: impl AsRef<Path>) -> Result<SeriesSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    let set = parse_benchmark_data(file)?;
    debug!(path = %path.display(), series = set.len(), "loaded benchmark file");
    Ok(set)
}

/// Parse benchmark rows from any reader. Blank lines are skipped.
pub fn parse_benchmark_data<R: Read>(reader: R) -> Result<SeriesSet, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut set = SeriesSet::new();
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        let mut fields = rec.iter();
        let Some(name) = fields.next() else { continue; };
        if rec.len() == 1 && name.trim().is_empty() {
            continue;
        }

        let values = fields
            .map(|token| {
                token.trim().parse::<f64>().map_err(|source| LoadError::Parse {
                    line,
                    series: name.to_string(),
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        set.insert(name, values);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_file_order() {
        let data = "galloc,1,2,3\nother,4.5,5e1,-6\n";
        let set = parse_benchmark_data(data.as_bytes()).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["galloc", "other"]);
        assert_eq!(set.get("galloc"), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(set.get("other"), Some(&[4.5, 50.0, -6.0][..]));
        assert_eq!(set.baseline().map(|(n, _)| n), Some("galloc"));
    }

    #[test]
    fn tolerates_whitespace_around_values_and_crlf() {
        let set = parse_benchmark_data("a, 1 ,2\r\nb,3,4 \r\n".as_bytes()).unwrap();
        assert_eq!(set.get("a"), Some(&[1.0, 2.0][..]));
        assert_eq!(set.get("b"), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn names_are_kept_verbatim() {
        let set = parse_benchmark_data(" spaced name ,1\n\"quoted\",2\n".as_bytes()).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec![" spaced name ", "\"quoted\""]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let set = parse_benchmark_data("a,1\n\n\nb,2\n".as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
    }

    // Treated as blank rather than as an empty series named by its whitespace.
    #[test]
    fn whitespace_only_line_is_not_a_series() {
        let set = parse_benchmark_data("a,1\n   \n\t\nb,2\n".as_bytes()).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.baseline().map(|(n, _)| n), Some("a"));
    }

    #[test]
    fn whitespace_name_with_values_is_still_a_series() {
        let set = parse_benchmark_data("  ,1\n".as_bytes()).unwrap();
        assert_eq!(set.get("  "), Some(&[1.0][..]));
    }

    #[test]
    fn rows_may_differ_in_length() {
        let set = parse_benchmark_data("a,1,2,3\nb,1\nc\n".as_bytes()).unwrap();
        assert_eq!(set.get("a").map(<[f64]>::len), Some(3));
        assert_eq!(set.get("b").map(<[f64]>::len), Some(1));
        assert_eq!(set.get("c"), Some(&[][..]));
    }

    #[test]
    fn repeated_name_replaces_values_in_place() {
        let set = parse_benchmark_data("a,1\nb,2\na,3\n".as_bytes()).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.get("a"), Some(&[3.0][..]));
    }

    #[test]
    fn bad_number_aborts_the_load() {
        let err = parse_benchmark_data("a,1,2\nb,3,four,5\n".as_bytes()).unwrap_err();
        match err {
            LoadError::Parse { line, series, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(series, "b");
                assert_eq!(token, "four");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_value_token_is_a_parse_error() {
        assert!(matches!(
            parse_benchmark_data("a,1,,2\n".as_bytes()),
            Err(LoadError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_benchmark_file(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
