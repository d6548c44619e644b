//! Strict validation of the generated JSON and local enrichment into cards

use persona_core::images::ImageMap;
use persona_types::{Card, RawCard};
use serde_json::{Map, Value};

use crate::GenerationError;

pub const TRAIT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("expected a JSON array at the top level")]
    NotAnArray,

    #[error("the array is empty")]
    Empty,

    #[error("element {index} is not an object")]
    NotAnObject { index: usize },

    #[error("element {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("element {index} has a non-string `{field}`")]
    WrongType { index: usize, field: &'static str },

    #[error("element {index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("element {index} has {count} generic traits, expected exactly 3")]
    TraitCount { index: usize, count: usize },
}

/// Parse the model's text output into raw cards.
///
/// Any element violating the shape rejects the whole response.
pub fn parse_cards(text: &str) -> Result<Vec<RawCard>, GenerationError> {
    let value: Value = serde_json::from_str(text.trim())?;
    let items = value.as_array().ok_or(ShapeError::NotAnArray)?;
    if items.is_empty() {
        return Err(ShapeError::Empty.into());
    }

    let cards = items
        .iter()
        .enumerate()
        .map(|(index, item)| raw_card(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cards)
}

fn raw_card(index: usize, item: &Value) -> Result<RawCard, ShapeError> {
    let object = item.as_object().ok_or(ShapeError::NotAnObject { index })?;

    let field = "genericTraits";
    let traits = object
        .get(field)
        .ok_or(ShapeError::MissingField { index, field })?
        .as_array()
        .ok_or(ShapeError::WrongType { index, field })?;
    if traits.len() != TRAIT_COUNT {
        return Err(ShapeError::TraitCount {
            index,
            count: traits.len(),
        });
    }
    let generic_traits = traits
        .iter()
        .map(|t| non_empty(index, field, t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawCard {
        animal_name: string_field(object, index, "animalName")?,
        representative: string_field(object, index, "representative")?,
        generic_description: string_field(object, index, "genericDescription")?,
        generic_traits,
        personalized_description: string_field(object, index, "personalizedDescription")?,
    })
}

fn string_field(
    object: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ShapeError> {
    let value = object
        .get(field)
        .ok_or(ShapeError::MissingField { index, field })?;
    non_empty(index, field, value)
}

fn non_empty(index: usize, field: &'static str, value: &Value) -> Result<String, ShapeError> {
    let text = value
        .as_str()
        .ok_or(ShapeError::WrongType { index, field })?;
    if text.trim().is_empty() {
        return Err(ShapeError::EmptyField { index, field });
    }
    Ok(text.to_string())
}

/// Whitespace runs in the animal name become `-`, then the position is appended
pub fn card_id(animal_name: &str, position: usize) -> String {
    let mut slug = String::with_capacity(animal_name.len());
    let mut in_gap = false;
    for c in animal_name.chars() {
        if c.is_whitespace() {
            if !in_gap {
                slug.push('-');
            }
            in_gap = true;
        } else {
            slug.push(c);
            in_gap = false;
        }
    }
    format!("{slug}-{position}")
}

pub fn enrich(raw: Vec<RawCard>, images: &ImageMap) -> Vec<Card> {
    raw.into_iter()
        .enumerate()
        .map(|(position, raw)| {
            let id = card_id(&raw.animal_name, position);
            let image_url = images.resolve(&raw.animal_name).to_string();
            Card::from_raw(raw, id, image_url)
        })
        .collect()
}

/// Parse and enrich in one step
pub fn shape_response(text: &str, images: &ImageMap) -> Result<Vec<Card>, GenerationError> {
    Ok(enrich(parse_cards(text)?, images))
}

#[cfg(test)]
mod tests {
    use persona_core::images::{ANIMAL_IMAGES, FALLBACK_IMAGE};
    use serde_json::json;

    use super::*;

    fn element(animal: &str, traits: Value) -> Value {
        json!({
            "animalName": animal,
            "representative": "Mayowa",
            "genericDescription": "Hunts in packs across the tundra.",
            "genericTraits": traits,
            "personalizedDescription": "Mayowa leads with foresight.",
        })
    }

    fn shape_err(text: &str) -> ShapeError {
        match parse_cards(text) {
            Err(GenerationError::Shape(e)) => e,
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_well_formed_response() {
        let body = json!([element("Arctic Wolf", json!(["Loyal", "Enduring", "Strategic"]))]);
        let cards = parse_cards(&format!("  {body}\n")).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].animal_name, "Arctic Wolf");
        assert_eq!(cards[0].generic_traits, ["Loyal", "Enduring", "Strategic"]);
    }

    #[test]
    fn test_rejects_non_array() {
        let body = element("Dog", json!(["a", "b", "c"]));
        assert_eq!(shape_err(&body.to_string()), ShapeError::NotAnArray);
    }

    #[test]
    fn test_rejects_empty_array() {
        assert_eq!(shape_err("[]"), ShapeError::Empty);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_cards("[{\"animalName\":"),
            Err(GenerationError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_wrong_trait_count_rejects_whole_response() {
        for traits in [json!(["a", "b"]), json!(["a", "b", "c", "d"]), json!([])] {
            let count = traits.as_array().unwrap().len();
            let body = json!([
                element("Dog", json!(["a", "b", "c"])),
                element("Cat", traits),
            ]);
            assert_eq!(
                shape_err(&body.to_string()),
                ShapeError::TraitCount { index: 1, count }
            );
        }
    }

    #[test]
    fn test_rejects_missing_field() {
        let mut item = element("Dog", json!(["a", "b", "c"]));
        item.as_object_mut().unwrap().remove("representative");
        assert_eq!(
            shape_err(&json!([item]).to_string()),
            ShapeError::MissingField {
                index: 0,
                field: "representative"
            }
        );
    }

    #[test]
    fn test_rejects_wrong_types_and_blanks() {
        let body = json!([element("Dog", json!(["a", 2, "c"]))]);
        assert_eq!(
            shape_err(&body.to_string()),
            ShapeError::WrongType {
                index: 0,
                field: "genericTraits"
            }
        );

        let body = json!([element("  ", json!(["a", "b", "c"]))]);
        assert_eq!(
            shape_err(&body.to_string()),
            ShapeError::EmptyField {
                index: 0,
                field: "animalName"
            }
        );

        assert_eq!(shape_err("[1]"), ShapeError::NotAnObject { index: 0 });
    }

    #[test]
    fn test_card_id_collapses_whitespace() {
        assert_eq!(card_id("Arctic Wolf", 2), "Arctic-Wolf-2");
        assert_eq!(card_id("Sea \t  Turtle", 9), "Sea-Turtle-9");
        assert_eq!(card_id("Owl", 0), "Owl-0");
    }

    #[test]
    fn test_card_id_keeps_edge_whitespace_as_dash() {
        assert_eq!(card_id(" Dog", 0), "-Dog-0");
        assert_eq!(card_id("Red Fox\n", 4), "Red-Fox--4");
    }

    #[test]
    fn test_enrich_ids_unique_for_duplicate_animals() {
        let body = json!([
            element("Dog", json!(["a", "b", "c"])),
            element("Dog", json!(["a", "b", "c"])),
            element("Pangolin", json!(["a", "b", "c"])),
        ]);
        let cards = shape_response(&body.to_string(), &ANIMAL_IMAGES).unwrap();

        assert_eq!(cards[0].id, "Dog-0");
        assert_eq!(cards[1].id, "Dog-1");
        assert_eq!(cards[0].image_url, cards[1].image_url);
        assert_eq!(cards[2].image_url, FALLBACK_IMAGE);
    }

    #[test]
    fn test_enrich_resolves_image_by_substring() {
        let body = json!([element("Arctic Wolf", json!(["a", "b", "c"]))]);
        let cards = shape_response(&body.to_string(), &ANIMAL_IMAGES).unwrap();
        assert_eq!(cards[0].image_url, ANIMAL_IMAGES.resolve("Wolf"));
    }

    #[test]
    fn test_error_message_mentions_shape() {
        let err = parse_cards("{}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "API did not return a valid array of animal data: expected a JSON array at the top level"
        );
    }
}
