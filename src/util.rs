use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.seek(SeekFrom::Current(0))?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Open a path as a buffered reader, transparently decompressing `.gz`
/// input (detected by extension or magic bytes).
pub fn open_input(path: &Path) -> Result<Box<dyn io::BufRead + Send>, crate::error::TrimError> {
    let f = open_file(path)?;
    let is_gz = path.extension().and_then(|s| s.to_str()) == Some("gz")
        || looks_like_gzip(&f).unwrap_or(false);

    if is_gz {
        #[cfg(feature = "gzip")]
        {
            let dec = flate2::read::MultiGzDecoder::new(f);
            Ok(Box::new(io::BufReader::with_capacity(256 * 1024, dec)))
        }
        #[cfg(not(feature = "gzip"))]
        {
            Err(crate::error::FormatError::GzipDisabled.into())
        }
    } else {
        Ok(Box::new(io::BufReader::with_capacity(256 * 1024, f)))
    }
}
