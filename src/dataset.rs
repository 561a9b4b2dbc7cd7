//! Reading `country,gdp` datasets into records

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};
use thiserror::Error;

use crate::record::GdpRecord;

/// Field separator of the dataset
const DELIMITER: char = ',';

/// Failure to load a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset could not be opened or read
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
    /// The dataset is empty
    #[error("dataset has no header line")]
    MissingHeader,
}

/// Opens the dataset at `path` and reads at most `limit` records from it.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be opened or read, or is empty.
pub fn load_records(path: impl AsRef<Path>, limit: usize) -> Result<Vec<GdpRecord>, DatasetError> {
    let path = path.as_ref();
    debug!("loading at most {limit} records from {}", path.display());

    let file = File::open(path)?;
    read_records(BufReader::new(file), limit)
}

/// Reads at most `limit` records from a delimited dataset.
///
/// The first line is a header and is skipped. Each following line must hold exactly
/// two fields, a country and an integer GDP; lines with another shape, an empty GDP
/// or a GDP that is not an `i32` are skipped and do not count toward `limit`.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
///
/// # Errors
///
/// Returns [`DatasetError`] if reading fails or the input has no header line.
pub fn read_records<R: BufRead>(
    mut reader: R,
    limit: usize,
) -> Result<Vec<GdpRecord>, DatasetError> {
    let mut buf = Vec::new();
    if read_line(&mut reader, &mut buf)?.is_none() {
        return Err(DatasetError::MissingHeader);
    }

    let mut records = Vec::new();
    while records.len() < limit {
        let Some(line) = read_line(&mut reader, &mut buf)? else {
            break;
        };

        match parse_line(&line) {
            Some(record) => records.push(record),
            None => trace!("skipping line {line:?}"),
        }
    }

    debug!("read {} records", records.len());
    Ok(records)
}

/// Reads the next line without its terminator, or `None` at end of input
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buf.as_slice());
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
}

/// Parses one `country,gdp` line
fn parse_line(line: &str) -> Option<GdpRecord> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    // trailing empty fields do not count
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    let [country, gdp] = fields.as_slice() else {
        return None;
    };

    let gdp = gdp.trim();
    if gdp.is_empty() {
        return None;
    }

    gdp.parse().ok().map(|gdp| GdpRecord::new(country.trim(), gdp))
}
