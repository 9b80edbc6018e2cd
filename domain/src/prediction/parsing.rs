//! Prediction response parsing.
//!
//! Turns the free-form text returned by a hosted model into validated
//! [`SubQueryPrediction`]s. Pure domain logic: no I/O, no provider details.
//!
//! # Accepted shapes
//!
//! ```json
//! {"predictions": [{"sub_query": "...", "probability": 0.8, "reasoning": "..."}]}
//! ```
//!
//! or a bare array of the same objects. Surrounding prose and markdown code
//! fences are ignored. Any invalid entry rejects the whole response.

use crate::core::error::SchemaError;
use crate::core::probability::Probability;
use crate::prediction::entities::SubQueryPrediction;
use serde_json::Value;

/// Span from the first `open` to the last `close` in `response`.
fn span(response: &str, open: char, close: char) -> Option<(usize, &str)> {
    let start = response.find(open)?;
    let end = response.rfind(close)?;
    (end > start).then(|| (start, &response[start..=end]))
}

/// Candidate JSON payloads in `response`, most likely first.
///
/// The object span comes first. The array span is a candidate only when it
/// does not start inside the object span, so `{"queries": []}` is judged as
/// an object.
fn json_candidates(response: &str) -> Vec<&str> {
    let object = span(response, '{', '}');
    let array = span(response, '[', ']');
    match (object, array) {
        (Some((object_start, object)), Some((array_start, array))) => {
            if array_start < object_start {
                vec![object, array]
            } else {
                vec![object]
            }
        }
        (Some((_, json)), None) | (None, Some((_, json))) => vec![json],
        (None, None) => Vec::new(),
    }
}

/// The prediction entries of one candidate payload.
fn prediction_items(json: &str) -> Result<Vec<Value>, SchemaError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| SchemaError::Malformed(e.to_string()))?;

    match parsed {
        Value::Array(items) => Ok(items),
        Value::Object(mut object) => match object.remove("predictions") {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(SchemaError::Malformed(
                "\"predictions\" is not an array".to_string(),
            )),
            None => Err(SchemaError::Malformed(
                "missing \"predictions\" array".to_string(),
            )),
        },
        _ => Err(SchemaError::Malformed("expected object or array".to_string())),
    }
}

fn optional_string(item: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    item.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse and validate a model response.
///
/// `max_predictions` bounds the number of entries; responses with zero or
/// more than `max_predictions` entries are rejected.
pub fn parse_prediction_response(
    response: &str,
    max_predictions: usize,
) -> Result<Vec<SubQueryPrediction>, SchemaError> {
    let mut first_error = None;
    for candidate in json_candidates(response) {
        match prediction_items(candidate) {
            Ok(items) => return validate_items(&items, max_predictions),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }
    Err(first_error.unwrap_or(SchemaError::NoJson))
}

fn validate_items(
    items: &[Value],
    max_predictions: usize,
) -> Result<Vec<SubQueryPrediction>, SchemaError> {
    if items.is_empty() {
        return Err(SchemaError::TooFew);
    }
    if items.len() > max_predictions {
        return Err(SchemaError::TooMany {
            count: items.len(),
            max: max_predictions,
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item))
        .collect()
}

fn parse_item(index: usize, item: &Value) -> Result<SubQueryPrediction, SchemaError> {
    let object = item
        .as_object()
        .ok_or_else(|| SchemaError::Malformed(format!("prediction {} is not an object", index)))?;

    let text = match object.get("sub_query") {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(_) => {
            return Err(SchemaError::Malformed(format!(
                "prediction {}: sub_query is not a string",
                index
            )));
        }
        None => {
            return Err(SchemaError::Malformed(format!(
                "prediction {}: missing sub_query",
                index
            )));
        }
    };
    if text.is_empty() {
        return Err(SchemaError::EmptySubQuery { index });
    }

    let value = object
        .get("probability")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            SchemaError::Malformed(format!(
                "prediction {}: probability missing or not a number",
                index
            ))
        })?;
    let probability = Probability::try_new(value)
        .ok_or(SchemaError::ProbabilityOutOfRange { index, value })?;

    Ok(SubQueryPrediction {
        text,
        probability,
        rationale: optional_string(object, "reasoning"),
        facet: optional_string(object, "facet"),
        intent: optional_string(object, "intent_type"),
    })
}
