use crate::error::{GrepFasError, IoContext};
use crate::util::{looks_like_gzip, open_file, sniff_gzip};

use std::io::{self, BufRead, BufReader};
use std::path::Path;

const BUF_CAPACITY: usize = 256 * 1024;

/// Streaming line source (plain/.gz). Yields one line at a time with the
/// terminator (`\n` or `\r\n`) stripped, reusing a single buffer.
pub struct LineReader {
    rdr: Box<dyn BufRead + Send>,
    buf: Vec<u8>,
    line_num: u64,
    byte_pos: u64,
}

impl LineReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GrepFasError> {
        let path = path.as_ref();
        let f = open_file(path).map_err(|e| GrepFasError::io_err(e, IoContext::default()))?;

        let is_gz = path.extension().and_then(|s| s.to_str()) == Some("gz")
            || looks_like_gzip(&f).unwrap_or(false);

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                let dec = flate2::read::MultiGzDecoder::new(f);
                Box::new(BufReader::with_capacity(BUF_CAPACITY, dec))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(GrepFasError::GzipDisabled);
            }
        } else {
            Box::new(BufReader::with_capacity(BUF_CAPACITY, f))
        };

        Ok(Self::from_boxed(rdr))
    }

    /// Standard input, decompressed on the fly when it starts with the gzip magic.
    pub fn stdin() -> Result<Self, GrepFasError> {
        let rdr = BufReader::with_capacity(BUF_CAPACITY, io::stdin());
        Self::from_bufread_detect(rdr)
    }

    /// Wrap an arbitrary `BufRead`, sniffing for gzip. The sniffed bytes are
    /// replayed, so nothing is lost for plain input.
    pub fn from_bufread_detect<R: BufRead + Send + 'static>(
        reader: R,
    ) -> Result<Self, GrepFasError> {
        let (is_gz, reader) =
            sniff_gzip(reader).map_err(|e| GrepFasError::io_err(e, IoContext::default()))?;
        if !is_gz {
            return Ok(Self::from_bufread(reader));
        }

        #[cfg(feature = "gzip")]
        {
            let dec = flate2::bufread::MultiGzDecoder::new(reader);
            Ok(Self::from_boxed(Box::new(BufReader::with_capacity(
                BUF_CAPACITY,
                dec,
            ))))
        }
        #[cfg(not(feature = "gzip"))]
        {
            log::warn!("input looks gzip-compressed but the `gzip` feature is disabled; reading as plain text");
            Ok(Self::from_bufread(reader))
        }
    }

    /// Wrap an arbitrary `BufRead` as plain text.
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::from_boxed(Box::new(reader))
    }

    fn from_boxed(rdr: Box<dyn BufRead + Send>) -> Self {
        Self {
            rdr,
            buf: Vec::with_capacity(256),
            line_num: 0,
            byte_pos: 0,
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, GrepFasError> {
        self.buf.clear();
        let n = match self.rdr.read_until(b'\n', &mut self.buf) {
            Ok(n) => n,
            Err(e) => return Err(GrepFasError::io_err(e, self.ctx())),
        };
        if n == 0 {
            return Ok(None);
        }
        self.line_num += 1;
        self.byte_pos += n as u64;
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
        }
        if self.buf.ends_with(b"\r") {
            self.buf.pop();
        }
        Ok(Some(self.buf.as_slice()))
    }

    #[inline]
    pub fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}
