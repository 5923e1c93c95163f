use std::fmt;
use std::path::{Path, PathBuf};

/// On-disk format of a data file.
///
/// Fixed by the constructor used on [`FileData`], never sniffed from the
/// file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

/// A trailing literal parameter attached to a data source.
///
/// These occupy the argument slots after the data value, in declared order.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Declarative data source for one row of a parameterized test: a file path,
/// the format to parse it as, and trailing literal parameters.
///
/// Relative paths resolve against the process's current working directory at
/// resolution time, not against the declaring source file. `cargo test` runs
/// with the package root as working directory, so paths like
/// `tests/assets/sample.json` work as-is; see the `include_json_data!` macro
/// for a compile-time alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct FileData {
    path: PathBuf,
    format: Format,
    extra: Vec<Literal>,
}

impl FileData {
    /// Data source backed by a JSON document.
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: Format::Json,
            extra: Vec::new(),
        }
    }

    /// Data source backed by an XML document.
    pub fn xml(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: Format::Xml,
            extra: Vec::new(),
        }
    }

    /// Append one trailing literal parameter.
    pub fn with_param(mut self, param: impl Into<Literal>) -> Self {
        self.extra.push(param.into());
        self
    }

    /// Append several trailing literal parameters, preserving order.
    pub fn with_params<I, L>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        self.extra.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn extra(&self) -> &[Literal] {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_constructor_sets_format() {
        let source = FileData::json("tests/assets/sample.json");
        assert_eq!(source.format(), Format::Json);
        assert_eq!(source.path(), Path::new("tests/assets/sample.json"));
        assert!(source.extra().is_empty());
    }

    #[test]
    fn test_with_param_preserves_declared_order() {
        let source = FileData::xml("data.xml")
            .with_param("first")
            .with_param(2i64)
            .with_param(true);
        assert_eq!(
            source.extra(),
            &[
                Literal::Str("first".to_string()),
                Literal::Int(2),
                Literal::Bool(true),
            ]
        );
    }

    #[test]
    fn test_with_params_extends_in_order() {
        let source = FileData::json("data.json")
            .with_param("head")
            .with_params(["a", "b"]);
        assert_eq!(source.extra().len(), 3);
        assert_eq!(source.extra()[2], Literal::Str("b".to_string()));
    }

    #[test]
    fn test_literal_accessors() {
        assert_eq!(Literal::from("x").as_str(), Some("x"));
        assert_eq!(Literal::from(7i64).as_int(), Some(7));
        assert_eq!(Literal::from(1.5f64).as_float(), Some(1.5));
        assert_eq!(Literal::from(false).as_bool(), Some(false));
        assert_eq!(Literal::from(7i64).as_str(), None);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!(Format::Xml.to_string(), "xml");
    }
}
