//! Runner-side half of the contract: collect the data sources attached to
//! one test function, resolve each once, and concatenate the rows.
//!
//! Resolution happens up front, before any test body runs, so a bad source
//! surfaces as a discovery error for the whole set rather than a mid-run
//! test failure.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::resolver::{resolve, resolve_untyped, resolve_wrapped, Row};
use crate::signature::TestSignature;
use crate::source::FileData;
use crate::typed::Typed;

/// The ordered data sources feeding one test function.
#[derive(Debug, Clone)]
pub struct DataSet {
    signature: TestSignature,
    sources: Vec<FileData>,
}

impl DataSet {
    pub fn new(signature: TestSignature) -> Self {
        Self {
            signature,
            sources: Vec::new(),
        }
    }

    /// Append one data source; each contributes exactly one row.
    pub fn with_source(mut self, source: FileData) -> Self {
        self.sources.push(source);
        self
    }

    pub fn signature(&self) -> &TestSignature {
        &self.signature
    }

    pub fn sources(&self) -> &[FileData] {
        &self.sources
    }

    /// Resolve every source into the test's first-parameter type and
    /// concatenate the rows in source order. Fails on the first bad source.
    pub fn rows<T>(&self) -> Result<Vec<Row<T>>>
    where
        T: DeserializeOwned,
    {
        self.collect_rows(|source| resolve::<T>(source, &self.signature))
    }

    /// As [`DataSet::rows`], with every slot 0 wrapped in [`Typed<E>`].
    pub fn rows_wrapped<E>(&self) -> Result<Vec<Row<Typed<E>>>>
    where
        E: DeserializeOwned,
    {
        self.collect_rows(|source| resolve_wrapped::<E>(source, &self.signature))
    }

    /// As [`DataSet::rows`], with slot 0 as the format's generic value tree.
    pub fn rows_untyped(&self) -> Result<Vec<Row<serde_json::Value>>> {
        self.collect_rows(|source| resolve_untyped(source, &self.signature))
    }

    /// Resolve everything, then invoke `body` once per row. A resolution
    /// failure means the body is never called.
    pub fn run<T, F>(&self, mut body: F) -> Result<()>
    where
        T: DeserializeOwned,
        F: FnMut(Row<T>),
    {
        for row in self.rows::<T>()? {
            body(row);
        }
        Ok(())
    }

    /// As [`DataSet::run`] for the explicit-type path.
    pub fn run_wrapped<E, F>(&self, mut body: F) -> Result<()>
    where
        E: DeserializeOwned,
        F: FnMut(Row<Typed<E>>),
    {
        for row in self.rows_wrapped::<E>()? {
            body(row);
        }
        Ok(())
    }

    fn collect_rows<S>(
        &self,
        resolve_one: impl Fn(&FileData) -> Result<Vec<Row<S>>>,
    ) -> Result<Vec<Row<S>>> {
        let nested = self
            .sources
            .iter()
            .map(resolve_one)
            .collect::<Result<Vec<_>>>()?;
        let rows: Vec<Row<S>> = nested.into_iter().flatten().collect();
        debug!(
            function = self.signature.function(),
            sources = self.sources.len(),
            rows = rows.len(),
            "resolved data set"
        );
        Ok(rows)
    }
}
