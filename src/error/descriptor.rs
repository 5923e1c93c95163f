use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("data source has an empty file path")]
    EmptyPath,

    #[error("test function '{function}' has no parameters to bind the data value to")]
    NoParameters { function: String },
}

impl DescriptorError {
    pub fn no_parameters(function: impl Into<String>) -> Self {
        Self::NoParameters {
            function: function.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_display() {
        assert_eq!(
            DescriptorError::EmptyPath.to_string(),
            "data source has an empty file path"
        );
    }

    #[test]
    fn test_no_parameters_display() {
        let err = DescriptorError::no_parameters("my_test");
        assert_eq!(
            err.to_string(),
            "test function 'my_test' has no parameters to bind the data value to"
        );
    }
}
