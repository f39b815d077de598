use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;

/// Read the whole file at `path` as raw bytes.
///
/// The handle is dropped before returning on both the success and the
/// error path. I/O failures keep their original [`std::io::Error`].
pub fn fetch_file(path: &Path) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path).map_err(|err| Error::io(path, err))?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|err| Error::io(path, err))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "read dotenv file");
    Ok(content)
}
