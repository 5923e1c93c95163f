//! XML mirror of the JSON suite; the two formats share every resolution
//! rule and differ only in the deserializer dispatched to.

use anyhow::Result;
use filecase::{resolve, resolve_untyped, resolve_wrapped, FileData, Param, TestSignature};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    #[serde(rename = "sampleProp")]
    sample_prop: String,
}

fn signature() -> TestSignature {
    TestSignature::new(
        "xml_file_case",
        [Param::typed("Sample"), Param::typed("String")],
    )
}

#[test]
fn resolves_into_the_first_parameter_type() -> Result<()> {
    let source = FileData::xml("tests/assets/sample.xml").with_param("data");
    let rows = resolve::<Sample>(&source, &signature())?;

    let row = &rows[0];
    assert_eq!(Some(row.data().sample_prop.as_str()), row.extra()[0].as_str());
    Ok(())
}

#[test]
fn slot_zero_matches_direct_deserialization() -> Result<()> {
    let content = std::fs::read_to_string("tests/assets/sample.xml")?;
    let direct: Sample = quick_xml::de::from_str(&content)?;

    let source = FileData::xml("tests/assets/sample.xml");
    let rows = resolve::<Sample>(&source, &signature())?;

    assert_eq!(rows[0].data(), &direct);
    Ok(())
}

#[test]
fn explicit_type_always_yields_a_wrapper() -> Result<()> {
    let source = FileData::xml("tests/assets/sample.xml").with_param("data");
    let rows = resolve_wrapped::<Sample>(&source, &signature())?;

    let wrapper = rows[0].data();
    assert!(wrapper.declared_type().contains("Sample"));
    assert_eq!(wrapper.value().sample_prop, "data");
    assert_eq!(
        wrapper.raw(),
        std::fs::read_to_string("tests/assets/sample.xml")?
    );
    Ok(())
}

#[test]
fn untyped_resolution_yields_a_navigable_tree() -> Result<()> {
    let source = FileData::xml("tests/assets/sample.xml");
    let signature = TestSignature::new("untyped_case", [Param::Untyped]);
    let rows = resolve_untyped(&source, &signature)?;

    assert_eq!(
        rows[0].data().get("sampleProp"),
        Some(&serde_json::json!("data"))
    );
    Ok(())
}

#[test]
fn missing_file_error_names_the_resolved_path() {
    let source = FileData::xml("tests/assets/does_not_exist.xml");
    let err = resolve::<Sample>(&source, &signature()).unwrap_err();

    let expected = std::env::current_dir()
        .unwrap()
        .join("tests/assets/does_not_exist.xml");
    assert!(err.to_string().contains(expected.to_str().unwrap()));
}

#[test]
fn compile_time_embedding_macro_parses_the_same_fixture() {
    let sample: Sample = filecase::include_xml_data!("assets/sample.xml");
    assert_eq!(sample.sample_prop, "data");
}
