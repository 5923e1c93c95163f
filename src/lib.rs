//! File-backed data sources for parameterized test cases.
//!
//! A [`FileData`] names a JSON or XML file on disk, optionally followed by
//! trailing literal parameters. Resolving it against the target test
//! function's [`TestSignature`] yields the argument [`Row`] for one
//! invocation of that test: the deserialized file content in slot 0 and the
//! literals behind it, in declared order. [`DataSet`] collects the sources
//! attached to one function and concatenates their rows at discovery time.

mod macros;

pub mod discovery;
pub mod error;
pub mod resolver;
pub mod signature;
pub mod source;
pub mod typed;

pub use discovery::DataSet;
pub use error::{DescriptorError, DeserializeError, Error, IoError, Result};
pub use resolver::{resolve, resolve_untyped, resolve_wrapped, Row};
pub use signature::{Param, TestSignature};
pub use source::{FileData, Format, Literal};
pub use typed::Typed;
