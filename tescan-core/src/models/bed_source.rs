use std::io::{BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};

use crate::errors::BedError;
use crate::models::Region;
use crate::utils::get_dynamic_reader;

///
/// A replayable source of [Region] records backed by a BED-like file on disk.
///
/// Every call to [`BedSource::records`] opens a fresh reader, so the same
/// source can be iterated multiple times. Window scanning needs this: one
/// pass to count the total number of records, a second pass to aggregate,
/// without buffering the whole file in memory.
///
#[derive(Clone, Debug)]
pub struct BedSource {
    path: PathBuf,
}

impl BedSource {
    ///
    /// Create a new [BedSource] from a path to a bed file on disk.
    /// Plain and gzip'd files are both accepted.
    ///
    pub fn open(path: &Path) -> Result<Self, BedError> {
        // probe the file once so a bad path fails here, not mid-pipeline
        get_dynamic_reader(path)?;
        Ok(BedSource {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    ///
    /// Start a new iteration over the records in the file, from line 1.
    ///
    pub fn records(&self) -> Result<BedRecords, BedError> {
        let reader = get_dynamic_reader(&self.path)?;
        Ok(BedRecords {
            lines: reader.lines(),
            line: 0,
        })
    }
}

/// Streaming iterator over the records of one pass through a [BedSource].
pub struct BedRecords {
    lines: Lines<BufReader<Box<dyn Read>>>,
    line: u64,
}

impl Iterator for BedRecords {
    type Item = Result<Region, BedError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(BedError::Io(e))),
            };
            self.line += 1;

            // browser/track/# lines are headers, not records
            if line.starts_with("browser") || line.starts_with("track") || line.starts_with('#') {
                continue;
            }

            return Some(parse_bed_line(&line, self.line));
        }
    }
}

/// Parse one tab-delimited line into a [Region].
///
/// Only the first three columns (chr, start, end) are interpreted; any
/// remaining columns are preserved verbatim in `rest`. A line with fewer
/// than 3 fields or a non-integer coordinate is an error carrying the
/// 1-based line number.
fn parse_bed_line(line: &str, line_no: u64) -> Result<Region, BedError> {
    let mut fields = line.split('\t');

    let chr = fields.next().filter(|c| !c.is_empty());
    let start = fields.next();
    let end = fields.next();

    let (Some(chr), Some(start), Some(end)) = (chr, start, end) else {
        return Err(BedError::Malformed { line: line_no });
    };

    let start: u32 = start.parse().map_err(|_| BedError::InvalidCoordinate {
        line: line_no,
        field: "start",
        value: start.to_string(),
    })?;
    let end: u32 = end.parse().map_err(|_| BedError::InvalidCoordinate {
        line: line_no,
        field: "end",
        value: end.to_string(),
    })?;

    let rest = fields.collect::<Vec<&str>>().join("\t");

    Ok(Region {
        chr: chr.to_string(),
        start,
        end,
        rest: Some(rest).filter(|s| !s.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn source_from(contents: &str) -> (tempfile::NamedTempFile, BedSource) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        let source = BedSource::open(file.path()).unwrap();
        (file, source)
    }

    #[rstest]
    fn test_parses_three_column_records() {
        let (_file, source) = source_from("chr1\t10\t95\nchr1\t200\t450\n");

        let regions: Vec<Region> = source.records().unwrap().map(|r| r.unwrap()).collect();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].chr, "chr1");
        assert_eq!(regions[0].start, 10);
        assert_eq!(regions[0].end, 95);
        assert_eq!(regions[0].rest, None);
        assert_eq!(regions[1].end, 450);
    }

    #[rstest]
    fn test_extra_columns_kept_in_rest() {
        let (_file, source) = source_from("chr1\t10\t95\tLTR/Gypsy\t+\n");

        let regions: Vec<Region> = source.records().unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(regions[0].rest.as_deref(), Some("LTR/Gypsy\t+"));
    }

    #[rstest]
    #[case("# a comment\nchr1\t0\t5\n")]
    #[case("track name=tes\nchr1\t0\t5\n")]
    #[case("browser position chr1\nchr1\t0\t5\n")]
    fn test_header_lines_skipped(#[case] contents: &str) {
        let (_file, source) = source_from(contents);
        let regions: Vec<Region> = source.records().unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].chr, "chr1");
    }

    #[rstest]
    fn test_short_row_reports_line_number() {
        // header on line 1, bad row on line 3
        let (_file, source) = source_from("# header\nchr1\t0\t5\nchr1\t10\n");

        let results: Vec<Result<Region, BedError>> = source.records().unwrap().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        match results[1].as_ref().unwrap_err() {
            BedError::Malformed { line } => assert_eq!(*line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_blank_line_is_malformed() {
        let (_file, source) = source_from("chr1\t0\t5\n\n");
        let results: Vec<Result<Region, BedError>> = source.records().unwrap().collect();
        assert!(matches!(
            results[1].as_ref().unwrap_err(),
            BedError::Malformed { line: 2 }
        ));
    }

    #[rstest]
    #[case("chr1\tzero\t5\n", "start")]
    #[case("chr1\t0\tfive\n", "end")]
    fn test_non_integer_coordinate(#[case] contents: &str, #[case] expected_field: &str) {
        let (_file, source) = source_from(contents);
        let err = source.records().unwrap().next().unwrap().unwrap_err();
        match err {
            BedError::InvalidCoordinate { line, field, .. } => {
                assert_eq!(line, 1);
                assert_eq!(field, expected_field);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_records_can_be_replayed() {
        let (_file, source) = source_from("chr1\t0\t5\nchr1\t6\t9\n");

        let first_pass = source.records().unwrap().count();
        let second_pass = source.records().unwrap().count();

        assert_eq!(first_pass, 2);
        assert_eq!(second_pass, 2);
    }

    #[rstest]
    fn test_open_missing_file_fails() {
        let err = BedSource::open(Path::new("does/not/exist.bed")).unwrap_err();
        assert!(matches!(err, BedError::Open { .. }));
    }
}
