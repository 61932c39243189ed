use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use super::error::{Result, SeriesError};
use super::model::{HeaderSkip, Series};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Open `path` and parse a series of `capacity` entries from it.
pub fn load_file(path: &Path, capacity: usize, mode: HeaderSkip) -> Result<Series> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| SeriesError::io(origin.clone(), e))?;
    debug!("{origin}: opened for {mode} parsing");
    parse_named(file, origin, capacity, mode)
}

/// Parse a series of `capacity` entries from `source`.
///
/// The source is consumed: it is dropped before this returns, whether
/// parsing succeeded or not. Tokens past `capacity` are left unread.
///
/// Layouts:
/// * [`HeaderSkip::LineSkip`]  – first line discarded, index 0 is `0`,
///   then `capacity - 1` whitespace-delimited integers.
/// * [`HeaderSkip::FieldSkip`] – three header fields and one delimiter
///   character discarded, then `capacity` single ASCII digits.
pub fn parse_series<R: Read>(source: R, capacity: usize, mode: HeaderSkip) -> Result<Series> {
    parse_named(source, "<stream>".to_string(), capacity, mode)
}

fn parse_named<R: Read>(
    source: R,
    origin: String,
    capacity: usize,
    mode: HeaderSkip,
) -> Result<Series> {
    if capacity == 0 {
        return Err(SeriesError::InvalidArgument(
            "capacity must be greater than zero".to_string(),
        ));
    }

    let mut scanner = Scanner::new(BufReader::new(source), origin);
    let values = match mode {
        HeaderSkip::LineSkip => read_line_skip(&mut scanner, capacity)?,
        HeaderSkip::FieldSkip => read_field_skip(&mut scanner, capacity)?,
    };
    debug!("{}: parsed {} entries", scanner.origin, values.len());

    Ok(Series::new(values))
}

// ---------------------------------------------------------------------------
// Line-skip layout
// ---------------------------------------------------------------------------

fn read_line_skip<R: BufRead>(scanner: &mut Scanner<R>, capacity: usize) -> Result<Vec<i64>> {
    let expected = HeaderSkip::LineSkip.data_entries(capacity);

    let header_len = scanner.skip_line()?;
    if header_len == 0 {
        return Err(SeriesError::TruncatedInput {
            parsed: 0,
            expected,
            in_header: true,
        });
    }
    debug!("{}: skipped {header_len}-byte header line", scanner.origin);

    let mut values = Vec::with_capacity(capacity);
    // Index 0 belongs to the header.
    values.push(0);

    for index in 1..capacity {
        let token = scanner
            .next_token()?
            .ok_or(SeriesError::TruncatedInput {
                parsed: index - 1,
                expected,
                in_header: false,
            })?;
        values.push(parse_integer(&token, index)?);
    }

    Ok(values)
}

fn parse_integer(token: &[u8], index: usize) -> Result<i64> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| SeriesError::MalformedToken {
            index,
            text: String::from_utf8_lossy(token).into_owned(),
        })
}

// ---------------------------------------------------------------------------
// Field-skip layout
// ---------------------------------------------------------------------------

const HEADER_FIELDS: usize = 3;

fn read_field_skip<R: BufRead>(scanner: &mut Scanner<R>, capacity: usize) -> Result<Vec<i64>> {
    let expected = HeaderSkip::FieldSkip.data_entries(capacity);
    let truncated_header = || SeriesError::TruncatedInput {
        parsed: 0,
        expected,
        in_header: true,
    };

    for _ in 0..HEADER_FIELDS {
        if scanner.next_token()?.is_none() {
            return Err(truncated_header());
        }
    }
    scanner.skip_whitespace()?;
    let Some(delimiter) = scanner.next_byte()? else {
        return Err(truncated_header());
    };
    debug!(
        "{}: skipped {HEADER_FIELDS} header fields and delimiter {:?}",
        scanner.origin, delimiter as char
    );

    let mut values = Vec::with_capacity(capacity);
    for index in 0..capacity {
        scanner.skip_whitespace()?;
        let byte = scanner.next_byte()?.ok_or(SeriesError::TruncatedInput {
            parsed: index,
            expected,
            in_header: false,
        })?;
        if !byte.is_ascii_digit() {
            return Err(SeriesError::MalformedToken {
                index,
                text: String::from_utf8_lossy(&[byte]).into_owned(),
            });
        }
        values.push(i64::from(byte - b'0'));
    }

    Ok(values)
}

// -- Byte scanner --

/// Whitespace-aware reader over a buffered source.
struct Scanner<R> {
    inner: R,
    origin: String,
}

impl<R: BufRead> Scanner<R> {
    fn new(inner: R, origin: String) -> Self {
        Scanner { inner, origin }
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SeriesError::io(self.origin.clone(), e)),
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    /// Discard up to and including the next newline; returns the bytes dropped.
    fn skip_line(&mut self) -> Result<usize> {
        let mut discarded = Vec::new();
        self.inner
            .read_until(b'\n', &mut discarded)
            .map_err(|e| SeriesError::io(self.origin.clone(), e))
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.inner.consume(1);
        }
        Ok(())
    }

    /// Next whitespace-delimited token, or `None` once the source is exhausted.
    fn next_token(&mut self) -> Result<Option<Vec<u8>>> {
        self.skip_whitespace()?;
        let mut token = Vec::new();
        while let Some(byte) = self.peek()? {
            if byte.is_ascii_whitespace() {
                break;
            }
            token.push(byte);
            self.inner.consume(1);
        }
        Ok((!token.is_empty()).then_some(token))
    }
}
