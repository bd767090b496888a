use std::{ffi::OsString, path::PathBuf};

use snafu::prelude::*;
use tracing::debug;

pub const USAGE: &str = "usage: getxattr <path> <attribute-name>";

/// The two positional arguments of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub name: OsString,
}

impl Invocation {
    /// Parses a full argument vector, program name first.
    ///
    /// Only absence is rejected; empty strings are passed on to the OS, which
    /// reports them like any other bad path or name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().skip(1).map(Into::into);

        let path = args.next().context(InvalidArgumentsSnafu {
            missing: Positional::Path,
        })?;
        let name = args.next().context(InvalidArgumentsSnafu {
            missing: Positional::Name,
        })?;

        let extra = args.count();
        if extra > 0 {
            debug!("ignoring {extra} extra argument(s)");
        }

        Ok(Self {
            path: path.into(),
            name,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positional {
    Path,
    Name,
}

impl std::fmt::Display for Positional {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Path => f.write_str("<path>"),
            Self::Name => f.write_str("<attribute-name>"),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ArgsError {
    #[snafu(display("missing argument {missing}\n{USAGE}"))]
    InvalidArguments { missing: Positional },
}
