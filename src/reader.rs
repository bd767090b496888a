use std::io::Write;

use snafu::prelude::*;
use tracing::debug;

use crate::{
    AttributeBuffer, AttributeSource, Config, ExitPolicy, Invocation, SourceError, XattrSource,
};

/// What a run ended up writing.
#[derive(Debug)]
pub enum Outcome {
    Printed { len: usize },
    Silent(Silence),
}

/// Why nothing was written.
#[derive(Debug)]
pub enum Silence {
    Empty,
    Unavailable(SourceError),
}

impl Outcome {
    /// Applies `policy`: under [`ExitPolicy::Strict`] an unavailable attribute becomes an error.
    pub fn into_result(self, policy: ExitPolicy) -> Result<(), SourceError> {
        match (self, policy) {
            (Self::Silent(Silence::Unavailable(e)), ExitPolicy::Strict) => Err(e),
            _ => Ok(()),
        }
    }
}

/// Queries `inv` once through `source` and, if the value is non-empty, writes it
/// to `out` followed by a newline.
///
/// Retrieval failures never surface as errors here; they are returned as
/// [`Silence::Unavailable`]. Only failing to write `out` is an error.
pub fn read_attribute<S, W>(
    inv: &Invocation,
    source: &S,
    buf: &mut AttributeBuffer,
    out: &mut W,
) -> Result<Outcome, ReadError>
where
    S: AttributeSource + ?Sized,
    W: Write + ?Sized,
{
    let len = match source.query(&inv.path, &inv.name, buf.as_mut_slice()) {
        Ok(len) => len,
        Err(e) => {
            debug!("nothing to print: {e}");
            return Ok(Outcome::Silent(Silence::Unavailable(e)));
        }
    };

    let value = buf.filled(len);
    if value.is_empty() {
        debug!(
            "attribute {} of {} is empty",
            inv.name.to_string_lossy(),
            inv.path.display()
        );
        return Ok(Outcome::Silent(Silence::Empty));
    }

    out.write_all(value).context(OutputSnafu)?;
    out.write_all(b"\n").context(OutputSnafu)?;
    out.flush().context(OutputSnafu)?;

    Ok(Outcome::Printed { len: value.len() })
}

pub struct AttributeReader<S = XattrSource> {
    source: S,
    capacity: usize,
}

impl AttributeReader {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_source(XattrSource, config.buffer_capacity)
    }
}

impl<S: AttributeSource> AttributeReader<S> {
    pub const fn with_source(source: S, capacity: usize) -> Self {
        Self { source, capacity }
    }

    /// Runs one invocation with a freshly allocated buffer.
    pub fn run<W: Write + ?Sized>(
        &self,
        inv: &Invocation,
        out: &mut W,
    ) -> Result<Outcome, ReadError> {
        let mut buf = AttributeBuffer::with_capacity(self.capacity);
        read_attribute(inv, &self.source, &mut buf, out)
    }
}

#[derive(Debug, Snafu)]
pub enum ReadError {
    #[snafu(display("could not write attribute value to output: {source}"))]
    Output { source: std::io::Error },
}
