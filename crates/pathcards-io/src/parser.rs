//! Parse raw index-card JSON into domain cards

use crate::error::CardIoError;
use pathcards_domain::participant::{ABSENT_ENTITY_TYPE, PROTEIN_FAMILY_ENTITY_TYPE};
use pathcards_domain::{IndexCard, InteractionType, Modification, Participant, Translocation};
use serde_json::{Map, Value};

/// Object holding the extracted interaction fields
pub const EXTRACTED_INFORMATION: &str = "extracted_information";

/// A parsed card together with the JSON it came from
///
/// The raw value is kept so annotated output preserves every field of the
/// input, including ones the comparator never looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDocument {
    /// Card exactly as read
    pub raw: Value,

    /// Domain view of the card
    pub card: IndexCard,
}

impl CardDocument {
    /// Parse a raw card
    ///
    /// `index` is the card's position in its input and is only used in the
    /// error.
    pub fn parse(raw: Value, index: usize) -> Result<Self, CardIoError> {
        let card = parse_card(&raw).map_err(|reason| CardIoError::MalformedCard { index, reason })?;
        Ok(Self { raw, card })
    }
}

/// Split a JSON document into raw cards
///
/// A top-level array holds one card per element; anything else is a single
/// card.
pub fn split_cards(json: Value) -> Vec<Value> {
    match json {
        Value::Array(cards) => cards,
        card => vec![card],
    }
}

/// Parse a single card from JSON
///
/// Interaction fields are read from `extracted_information` when the card
/// has it, otherwise from the card itself. Translocation endpoints fall back
/// to top-level `from_location`/`to_location`.
pub fn parse_card(json: &Value) -> Result<IndexCard, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Card is not a JSON object".to_string())?;

    let info = match obj.get(EXTRACTED_INFORMATION) {
        Some(Value::Object(info)) => info,
        Some(_) => return Err(format!("'{}' is not an object", EXTRACTED_INFORMATION)),
        None => obj,
    };

    let interaction_type = info
        .get("interaction_type")
        .and_then(Value::as_str)
        .ok_or_else(|| "Missing or invalid 'interaction_type'".to_string())?;
    let interaction_type = InteractionType::new(interaction_type)?;

    let participant_a = parse_participant(info.get("participant_a"))
        .map_err(|e| format!("participant_a: {}", e))?;
    let participant_b = parse_participant(info.get("participant_b"))
        .map_err(|e| format!("participant_b: {}", e))?;

    let mut card = IndexCard::new(interaction_type, participant_a, participant_b)
        .with_modifications(parse_modifications(info.get("modifications"))?)
        .with_translocation(parse_translocation(info, obj)?);

    if let Some(model_element) = string_field(obj, "model_element")?.or(string_field(info, "model_element")?) {
        card = card.with_model_element(model_element);
    }

    Ok(card)
}

/// Parse a participant
///
/// Arrays are complexes. Objects with entity type `"N/A"` are absent, and
/// `protein_family` objects become families, keeping `family_members` when
/// listed.
pub fn parse_participant(json: Option<&Value>) -> Result<Participant, String> {
    let obj = match json {
        None | Some(Value::Null) => return Ok(Participant::Absent),
        Some(Value::Array(members)) => {
            let members = members
                .iter()
                .map(|member| parse_participant(Some(member)))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Participant::Complex(members));
        }
        Some(Value::Object(obj)) => obj,
        Some(other) => return Err(format!("Expected object or array, got {}", other)),
    };

    let entity_type = string_field(obj, "entity_type")?;
    let identifier = string_field(obj, "identifier")?;

    match entity_type.as_deref() {
        Some(ABSENT_ENTITY_TYPE) => Ok(Participant::Absent),
        Some(PROTEIN_FAMILY_ENTITY_TYPE) => {
            let members = match obj.get("family_members") {
                None | Some(Value::Null) => None,
                Some(Value::Array(members)) => Some(
                    members
                        .iter()
                        .map(|member| parse_participant(Some(member)))
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                Some(_) => return Err("'family_members' is not an array".to_string()),
            };
            Ok(Participant::Family { identifier, members })
        }
        _ => Ok(Participant::Simple {
            identifier,
            entity_type,
        }),
    }
}

/// Parse the modification list, expanding position arrays
pub fn parse_modifications(json: Option<&Value>) -> Result<Vec<Modification>, String> {
    let entries = match json {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err("'modifications' is not an array".to_string()),
    };

    let mut modifications = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let obj = entry
            .as_object()
            .ok_or_else(|| format!("Modification {} is not an object", idx))?;

        let modification_type = string_field(obj, "modification_type")?
            .ok_or_else(|| format!("Modification {} is missing 'modification_type'", idx))?;

        match obj.get("position") {
            None | Some(Value::Null) => modifications.push(Modification::new(modification_type, None)),
            Some(Value::Array(positions)) => {
                let positions = positions
                    .iter()
                    .filter_map(scalar_text)
                    .collect::<Vec<_>>();
                modifications.extend(Modification::expand_positions(&modification_type, &positions));
            }
            Some(position) => {
                let position = scalar_text(position)
                    .ok_or_else(|| format!("Modification {} has an invalid 'position'", idx))?;
                modifications.push(Modification::new(modification_type, Some(position.as_str())));
            }
        }
    }

    Ok(modifications)
}

fn parse_translocation(info: &Map<String, Value>, card: &Map<String, Value>) -> Result<Translocation, String> {
    let from = match string_field(info, "from_location")? {
        Some(from) => Some(from),
        None => string_field(card, "from_location")?,
    };
    let to = match string_field(info, "to_location")? {
        Some(to) => Some(to),
        None => string_field(card, "to_location")?,
    };

    Ok(Translocation { from, to })
}

/// Optional string field; empty strings count as missing
fn string_field(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, String> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(format!("'{}' is not a string", key)),
    }
}

/// Text of a string or number value
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
