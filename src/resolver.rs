//! Resolution core: turn one data source plus the target test's signature
//! into the argument row for one test invocation.
//!
//! Each `resolve*` call is stateless, synchronous, and one-shot. The return
//! value is a sequence with exactly one row; a test function carrying
//! several sources gets one row from each, concatenated by the caller (see
//! [`crate::discovery::DataSet`]).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::{DescriptorError, DeserializeError, IoError, Result};
use crate::signature::TestSignature;
use crate::source::{FileData, Format, Literal};
use crate::typed::Typed;

/// One resolved argument row: the data value in slot 0 followed by the
/// source's trailing literals in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<S> {
    data: S,
    extra: Vec<Literal>,
}

impl<S> Row<S> {
    /// Slot 0: the deserialized data value (or its wrapper).
    pub fn data(&self) -> &S {
        &self.data
    }

    /// The trailing literal parameters, in declared order.
    pub fn extra(&self) -> &[Literal] {
        &self.extra
    }

    /// Total number of argument slots, always `1 + extra.len()`.
    pub fn arity(&self) -> usize {
        1 + self.extra.len()
    }

    pub fn into_parts(self) -> (S, Vec<Literal>) {
        (self.data, self.extra)
    }
}

/// Resolve with the target type taken from the test's first parameter.
///
/// The caller supplies that type as `T`; the runner is the place that knows
/// the signature, so the type decision stays at its boundary.
pub fn resolve<T>(source: &FileData, signature: &TestSignature) -> Result<Vec<Row<T>>>
where
    T: DeserializeOwned,
{
    let (path, content) = load(source, signature)?;
    let value = deserialize::<T>(source.format(), &path, &content)?;
    Ok(vec![assemble(source, value)])
}

/// Resolve with an explicitly requested target type `E`.
///
/// Slot 0 is always a [`Typed<E>`] wrapper, never the bare value, so tests
/// can take one wrapper parameter across sources with different concrete
/// types and still see what was requested.
pub fn resolve_wrapped<E>(source: &FileData, signature: &TestSignature) -> Result<Vec<Row<Typed<E>>>>
where
    E: DeserializeOwned,
{
    let (path, content) = load(source, signature)?;
    let value = deserialize::<E>(source.format(), &path, &content)?;
    Ok(vec![assemble(source, Typed::new(content, value))])
}

/// Resolve with no usable target type: slot 0 is the format's generic
/// value tree. XML content is projected through the same serde path into a
/// [`serde_json::Value`] (elements become maps, text becomes strings).
pub fn resolve_untyped(
    source: &FileData,
    signature: &TestSignature,
) -> Result<Vec<Row<serde_json::Value>>> {
    let (path, content) = load(source, signature)?;
    let value = deserialize::<serde_json::Value>(source.format(), &path, &content)?;
    Ok(vec![assemble(source, value)])
}

/// Shared front half of every resolution: shape checks, path resolution,
/// existence check, content load. The existence check runs before any
/// deserialization attempt so a missing file is always reported as such.
fn load(source: &FileData, signature: &TestSignature) -> Result<(PathBuf, String)> {
    if source.path().as_os_str().is_empty() {
        return Err(DescriptorError::EmptyPath.into());
    }
    if signature.first_param().is_none() {
        return Err(DescriptorError::no_parameters(signature.function()).into());
    }

    let path = resolve_path(source.path())?;
    trace!(path = %path.display(), format = %source.format(), "resolved data file path");

    if !path.is_file() {
        return Err(IoError::file_not_found(path).into());
    }

    let content = fs::read_to_string(&path).map_err(|e| IoError::read_error(&path, e))?;
    debug!(
        path = %path.display(),
        bytes = content.len(),
        function = signature.function(),
        "loaded data file"
    );

    Ok((path, content))
}

/// Absolute paths are used verbatim; relative paths resolve against the
/// current working directory at call time, not the declaring source file.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(IoError::working_dir)?;
    Ok(cwd.join(path))
}

fn deserialize<T>(format: Format, path: &Path, content: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = match format {
        Format::Json => {
            serde_json::from_str(content).map_err(|e| DeserializeError::json(path, e))?
        }
        Format::Xml => {
            quick_xml::de::from_str(content).map_err(|e| DeserializeError::xml(path, e))?
        }
    };
    Ok(value)
}

fn assemble<S>(source: &FileData, data: S) -> Row<S> {
    Row {
        data,
        extra: source.extra().to_vec(),
    }
}
