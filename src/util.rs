use std::fs::File;
use std::io::{self, BufRead, Chain, Cursor, Read, Seek, SeekFrom};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == GZIP_MAGIC)
}

/// Same check for unseekable streams (stdin). Pipes may hand over fewer than
/// two bytes per read, so the magic is collected across reads and chained back
/// in front of the remaining stream.
pub fn sniff_gzip<R: BufRead>(mut r: R) -> io::Result<(bool, Chain<Cursor<Vec<u8>>, R>)> {
    let mut head = Vec::with_capacity(GZIP_MAGIC.len());
    while head.len() < GZIP_MAGIC.len() {
        let buf = match r.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        let take = (GZIP_MAGIC.len() - head.len()).min(buf.len());
        head.extend_from_slice(&buf[..take]);
        r.consume(take);
    }
    let is_gz = head == GZIP_MAGIC;
    Ok((is_gz, Cursor::new(head).chain(r)))
}

pub fn open_file(path: &std::path::Path) -> io::Result<File> {
    std::fs::File::open(path)
}
