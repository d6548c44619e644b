use persona_core::directory::DirectoryEntry;
use serde_json::{Value, json};

pub const REQUIRED_FIELDS: [&str; 5] = [
    "animalName",
    "representative",
    "genericDescription",
    "genericTraits",
    "personalizedDescription",
];

/// Single prompt embedding every directory entry
pub fn build_prompt(directory: &[DirectoryEntry]) -> String {
    let people = directory
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Based on this list of people, their chosen spirit animals, and their self-described \
personality traits (gender is provided where known): {people}.
Generate a JSON array. For each person, create an object with the following keys: \
'animalName', 'representative', 'genericDescription', 'genericTraits', and 'personalizedDescription'.

- 'animalName': The name of the animal (e.g., \"Dog\", \"Red Fox\").
- 'representative': The name of the person.
- 'genericDescription': A concise and engaging description of the animal's typical natural \
behaviors and key characteristics. This should be about the animal in general, not the person.
- 'genericTraits': An array of exactly three evocative, one-or-two-word traits summarizing the \
animal's general nature (e.g., \"Loyal\", \"Majestic\").
- 'personalizedDescription': A rich, personalized narrative, 2-3 sentences long, that explains \
why the person identifies with this animal, deeply integrating their self-described traits in a \
compelling and inspiring professional tone. Use gender-appropriate pronouns where gender is specified.

The entire output must be a single, valid JSON array."
    )
}

/// Structured output constraint matching `RawCard`
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "animalName": { "type": "STRING" },
                "representative": { "type": "STRING" },
                "genericDescription": { "type": "STRING" },
                "genericTraits": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "An array of exactly three general animal traits."
                },
                "personalizedDescription": { "type": "STRING" }
            },
            "required": REQUIRED_FIELDS,
        }
    })
}

#[cfg(test)]
mod tests {
    use persona_core::directory::DIRECTORY;

    use super::*;

    #[test]
    fn test_prompt_embeds_every_entry() {
        let prompt = build_prompt(DIRECTORY);
        for entry in DIRECTORY {
            assert!(prompt.contains(&entry.to_string()), "missing {}", entry.name);
        }
        assert!(prompt.contains("Kingsley: Dog; Opeyemi (male): Elephant"));
        assert!(prompt.contains("exactly three"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 5);
        for field in REQUIRED_FIELDS {
            assert!(schema["items"]["properties"].get(field).is_some());
        }
        assert_eq!(
            schema["items"]["properties"]["genericTraits"]["items"]["type"],
            "STRING"
        );
    }
}
