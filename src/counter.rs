use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::CountError;

/// Count the characters of the file at `path`, decoded as UTF-8.
///
/// Returns `CountError::NotFound` when the path does not exist and
/// `CountError::IoOrDecode` for every other open, read or decode failure.
/// Nothing is printed here; reporting is left to the caller.
pub fn count_characters(path: &Path) -> Result<usize, CountError> {
    debug!(path = %path.display(), "counting characters");

    let count = File::open(path)
        .and_then(count_reader)
        .map_err(|err| CountError::from_io(path, err))
        .inspect_err(|err| warn!(path = %path.display(), error = %err, "count failed"))?;

    debug!(path = %path.display(), count, "counted characters");
    Ok(count)
}

/// Read `reader` to the end as UTF-8 and count its characters.
///
/// Line endings are counted as in [`count_str`]. Invalid UTF-8 is reported
/// as an `io::ErrorKind::InvalidData` error.
pub fn count_reader<R: Read>(mut reader: R) -> io::Result<usize> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(count_str(&contents))
}

/// Count the characters of `text`, with `\r\n` and a lone `\r` each read as one `\n`.
pub fn count_str(text: &str) -> usize {
    let mut chars = text.chars().peekable();
    let mut count = 0;
    while let Some(c) = chars.next() {
        if c == '\r' {
            chars.next_if_eq(&'\n');
        }
        count += 1;
    }
    count
}
