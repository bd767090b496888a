#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, reason = "Too much nagging")]

mod args;
mod buffer;
mod config;
mod reader;
mod source;

pub use args::{ArgsError, Invocation, Positional, USAGE};
pub use buffer::{AttributeBuffer, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use config::{Config, ConfigError, ExitPolicy, load_config};
pub use reader::{AttributeReader, Outcome, ReadError, Silence, read_attribute};
pub use source::{AttributeSource, SourceError, XattrSource};
