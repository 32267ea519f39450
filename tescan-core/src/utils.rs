use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::BedError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, BedError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| BedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_plain_file_reads_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "chr1\t0\t100").unwrap();

        let mut reader = get_dynamic_reader(file.path()).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert_eq!(contents, "chr1\t0\t100");
    }

    #[rstest]
    fn test_gzipped_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("regions.bed.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"chr1\t0\t100\n").unwrap();
        encoder.finish().unwrap();

        let mut reader = get_dynamic_reader(&path).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert_eq!(contents, "chr1\t0\t100\n");
    }

    #[rstest]
    fn test_missing_file_reports_path() {
        let err = get_dynamic_reader(Path::new("no/such/file.bed")).err().unwrap();
        assert!(matches!(err, BedError::Open { .. }));
        assert!(err.to_string().contains("file.bed"));
    }
}
