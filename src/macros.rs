/// Deserialize a JSON fixture embedded at compile time with `include_str!`.
///
/// The path is relative to the calling source file, which sidesteps the
/// working-directory dependence of [`crate::FileData`] when the fixture
/// location is static. Panics on malformed content; intended for use inside
/// tests.
#[macro_export]
macro_rules! include_json_data {
    ($file:expr) => {
        serde_json::from_str(include_str!($file)).expect("failed to deserialize test data")
    };
}

/// XML counterpart of [`include_json_data!`].
#[macro_export]
macro_rules! include_xml_data {
    ($file:expr) => {
        quick_xml::de::from_str(include_str!($file)).expect("failed to deserialize test data")
    };
}
