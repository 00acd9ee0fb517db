use serde::de::DeserializeOwned;

use crate::error::{Error, RawRow};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes every row of a GTFS file into a record
///
/// Unknown columns are ignored and rows may be shorter or longer than the header.
///
/// ```no_run
///let stops: Vec<gtfs_records::Stop> = gtfs_records::RecordReader::default()
///    .trim_fields(false)
///    .read_path("fixtures/basic/stops.txt")?;
/// # Ok::<(), gtfs_records::Error>(())
///```
#[derive(Derivative, Debug, Clone, Copy)]
#[derivative(Default)]
pub struct RecordReader {
    /// Strip the whitespaces around headers and fields
    #[derivative(Default(value = "true"))]
    pub trim_fields: bool,
}

impl RecordReader {
    /// Sets [RecordReader::trim_fields], can be chained
    pub fn trim_fields(mut self, trim_fields: bool) -> Self {
        self.trim_fields = trim_fields;
        self
    }

    /// Decodes the file at `path`, which is closed before returning
    pub fn read_path<O, P>(&self, path: P) -> Result<Vec<O>, Error>
    where
        O: DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match File::open(path) {
            Ok(file) => self.read(file, &file_name),
            Err(source) => Err(Error::Io { file_name, source }),
        }
    }

    /// Decodes `input`, `file_name` only shows up in the errors
    ///
    /// An empty input, or one with only a header, gives no record
    pub fn read<O, R>(&self, input: R, file_name: &str) -> Result<Vec<O>, Error>
    where
        O: DeserializeOwned,
        R: Read,
    {
        let mut input = BufReader::new(input);
        skip_bom(&mut input).map_err(|source| Error::Io {
            file_name: file_name.to_owned(),
            source,
        })?;

        let csv_error = |source: csv::Error, row: Option<RawRow>| Error::Csv {
            file_name: file_name.to_owned(),
            source,
            row,
        };
        let mut rows = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(if self.trim_fields {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(input);
        let headers = rows.headers().map_err(|e| csv_error(e, None))?.clone();

        rows.records()
            .map(|row| {
                let row = row.map_err(|e| csv_error(e, None))?;
                row.deserialize(Some(&headers))
                    .map_err(|e| csv_error(e, Some(RawRow::new(&headers, &row))))
            })
            .collect()
    }
}

fn skip_bom<R: BufRead>(input: &mut R) -> io::Result<()> {
    if input.fill_buf()?.starts_with(UTF8_BOM) {
        input.consume(UTF8_BOM.len());
    }
    Ok(())
}
