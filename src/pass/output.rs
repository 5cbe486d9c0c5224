//! Batch output of generated passwords.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use rand::RngCore;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::charset::Pool;
use super::generate_from_pool;
use crate::error::Result;

const BUF_CAPACITY: usize = 64 * 1024;

/// Buffered writer that zeroizes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        SecureBufWriter {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Write `count` passwords, one per line.
pub fn write_batch<W: Write, R: RngCore + ?Sized>(
    pool: &Pool,
    length: usize,
    count: usize,
    rng: &mut R,
    out: W,
) -> Result<()> {
    let mut out = SecureBufWriter::new(out);
    for _ in 0..count {
        let mut pass = generate_from_pool(pool, length, rng)?;
        pass.push('\n');
        let written = out.write_all(pass.as_bytes());
        pass.zeroize();
        written?;
    }
    out.flush()?;
    debug!(count, length, "passwords written");
    Ok(())
}

/// Collect `count` passwords, newline separated, for the clipboard.
pub fn collect_batch<R: RngCore + ?Sized>(
    pool: &Pool,
    length: usize,
    count: usize,
    rng: &mut R,
) -> Result<Zeroizing<String>> {
    let mut all = Zeroizing::new(String::with_capacity(count * (length + 1)));
    for i in 0..count {
        if i > 0 {
            all.push('\n');
        }
        let mut pass = generate_from_pool(pool, length, rng)?;
        all.push_str(&pass);
        pass.zeroize();
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{self, PassConfig};
    use crate::rand::Rng;

    #[test]
    fn test_write_batch_lines() {
        let mut rng = Rng::new();
        let pool = charset::build(&PassConfig::default()).unwrap();
        let mut out = Vec::new();
        write_batch(&pool, 12, 5, &mut rng, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_collect_batch_has_no_trailing_newline() {
        let mut rng = Rng::new();
        let pool = charset::build(&PassConfig::default()).unwrap();
        let all = collect_batch(&pool, 8, 3, &mut rng).unwrap();
        assert_eq!(all.lines().count(), 3);
        assert!(!all.ends_with('\n'));
    }

    #[test]
    fn test_write_batch_propagates_pass_error() {
        let mut rng = Rng::new();
        let pool = charset::build(&PassConfig::default()).unwrap();
        let mut out = Vec::new();
        assert!(write_batch(&pool, 2, 1, &mut rng, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_secure_writer_large_write_passes_through() {
        let mut out = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut out);
            w.write_all(b"head").unwrap();
            w.write_all(&vec![b'x'; BUF_CAPACITY]).unwrap();
            w.write_all(b"tail").unwrap();
        }
        assert_eq!(out.len(), 8 + BUF_CAPACITY);
        assert!(out.starts_with(b"headx"));
        assert!(out.ends_with(b"xtail"));
    }

    #[test]
    fn test_open_append_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        {
            let mut f = open_append(&path).unwrap();
            f.write_all(b"one\n").unwrap();
        }
        {
            let mut f = open_append(&path).unwrap();
            f.write_all(b"two\n").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
