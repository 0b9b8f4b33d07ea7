//! Codec round-trips through realistic payload shapes.

use restwire_http::{BodyCodec, BodyError, MediaType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Author {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Recipe {
    title: String,
    servings: u32,
    author: Author,
    steps: Vec<String>,
}

fn recipe() -> Recipe {
    Recipe {
        title: "Red beans and rice".into(),
        servings: 6,
        author: Author {
            name: "Léah".into(),
        },
        steps: vec!["soak".into(), "simmer".into(), "serve".into()],
    }
}

#[test]
fn nested_payload_round_trips_as_json() {
    let codec = BodyCodec::new();
    let text = codec
        .serialize(Some(&recipe()), MediaType::Json)
        .expect("serializable")
        .expect("body present");

    let back: Recipe = codec.deserialize(&text, MediaType::Json).expect("well-formed");
    assert_eq!(back, recipe());
}

#[test]
fn nested_payload_round_trips_as_xml() {
    let codec = BodyCodec::new();
    let text = codec
        .serialize(Some(&recipe()), MediaType::Xml)
        .expect("serializable")
        .expect("body present");

    assert!(text.starts_with("<Recipe>"));
    assert!(text.ends_with("</Recipe>"));

    let back: Recipe = codec.deserialize(&text, MediaType::Xml).expect("well-formed");
    assert_eq!(back, recipe());
}

#[test]
fn wrong_shape_reports_the_expected_type() {
    let codec = BodyCodec::new();
    let err = codec
        .deserialize::<Recipe>(r#"{"title":"x"}"#, MediaType::Json)
        .expect_err("missing fields");

    match err {
        BodyError::Deserialize { expected, .. } => assert!(expected.contains("Recipe")),
        other => panic!("unexpected error: {other}"),
    }
}
