use std::{
    io,
    path::Path,
    process::{Command, Output},
};

use tempfile::NamedTempFile;

const E2BIG: i32 = 7;
const ENOSPC: i32 = 28;
const EOPNOTSUPP: i32 = 95;

pub type Result<T = (), E = Box<dyn std::error::Error + 'static>> = std::result::Result<T, E>;

/// Runs the built binary with a clean environment so only `envs` affect it.
pub fn getxattr<I, S>(args: I, envs: &[(&str, &str)]) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::new(env!("CARGO_BIN_EXE_getxattr"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("GETXATTR_BUFFER_CAPACITY")
        .env_remove("GETXATTR_EXIT_POLICY")
        .envs(envs.iter().copied())
        .output()?;
    Ok(output)
}

/// A temp file carrying the given attributes, or `None` when the temp dir's
/// filesystem cannot store them.
pub fn tagged_file(attrs: &[(&str, &[u8])]) -> Result<Option<NamedTempFile>> {
    let file = NamedTempFile::new()?;
    for (name, value) in attrs {
        if !set(file.path(), name, value)? {
            return Ok(None);
        }
    }
    Ok(Some(file))
}

fn set(path: &Path, name: &str, value: &[u8]) -> Result<bool> {
    match xattr::set(path, name, value) {
        Ok(()) => Ok(true),
        Err(e)
            if e.kind() == io::ErrorKind::Unsupported
                || matches!(e.raw_os_error(), Some(EOPNOTSUPP | E2BIG | ENOSPC)) =>
        {
            eprintln!("skipping: cannot set {name} in temp dir: {e}");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
