use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use snafu::prelude::*;
use tracing::trace;

/// Anything that can copy the value of an extended attribute into a caller-provided buffer.
///
/// Mirrors `getxattr(path, name, buf, size)`: on success the number of bytes written
/// to `buf` is returned and nothing past that count is meaningful.
pub trait AttributeSource {
    fn query(&self, path: &Path, name: &OsStr, buf: &mut [u8]) -> Result<usize, SourceError>;
}

impl<S: AttributeSource + ?Sized> AttributeSource for &S {
    fn query(&self, path: &Path, name: &OsStr, buf: &mut [u8]) -> Result<usize, SourceError> {
        (**self).query(path, name, buf)
    }
}

/// Reads attributes from the local filesystem, following symlinks.
#[derive(Debug, Default, Clone, Copy)]
pub struct XattrSource;

impl AttributeSource for XattrSource {
    fn query(&self, path: &Path, name: &OsStr, buf: &mut [u8]) -> Result<usize, SourceError> {
        trace!("querying {} on {}", name.to_string_lossy(), path.display());

        let value = xattr::get(path, name)
            .with_context(|_| XAttrSnafu { path, name })?
            .with_context(|| MissingSnafu { path, name })?;

        ensure!(
            value.len() <= buf.len(),
            TooLargeSnafu {
                path,
                name,
                len: value.len(),
                capacity: buf.len(),
            }
        );

        buf[..value.len()].copy_from_slice(&value);
        Ok(value.len())
    }
}

/// The attribute could not be retrieved. The reader treats every variant the same way.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SourceError {
    #[snafu(display("attribute {} is not set on {}", name.to_string_lossy(), path.display()))]
    Missing { path: PathBuf, name: OsString },
    #[snafu(display(
        "could not get extended file attribute {} of {}: {source}",
        name.to_string_lossy(),
        path.display()
    ))]
    XAttr {
        path: PathBuf,
        name: OsString,
        source: std::io::Error,
    },
    #[snafu(display(
        "attribute {} of {} is {len} bytes but the buffer only holds {capacity}",
        name.to_string_lossy(),
        path.display()
    ))]
    TooLarge {
        path: PathBuf,
        name: OsString,
        len: usize,
        capacity: usize,
    },
}
