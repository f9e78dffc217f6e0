//! Resolution of caller-supplied parameters against a cipher's declared schema.
//!
//! Resolution never looks at parameters the cipher does not declare, fills in
//! declared defaults, clamps integers into range and rejects values that cannot
//! be made valid.

use common::{DecodeError, ParamValue, Parameters};
use tracing::debug;

use crate::registry::{CipherSpec, ParamKind, ParamSpec};

/// Parameters after validation: one value per declared parameter, all valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParams {
    values: Vec<(&'static str, ParamValue)>,
}

impl ResolvedParams {
    /// Integer value of a declared `Int` parameter.
    ///
    /// # Errors
    ///
    /// Returns a `DecodingError` if `name` was not resolved as an integer,
    /// which means the cipher routine asked for a parameter it does not declare.
    pub fn int(&self, name: &str) -> Result<i64, DecodeError> {
        match self.get(name) {
            Some(ParamValue::Int(v)) => Ok(*v),
            _ => Err(undeclared(name)),
        }
    }

    /// Text value of a declared `Alphabetic` or `Choice` parameter.
    ///
    /// # Errors
    ///
    /// Returns a `DecodingError` if `name` was not resolved as text.
    pub fn text(&self, name: &str) -> Result<&str, DecodeError> {
        match self.get(name) {
            Some(ParamValue::Text(v)) => Ok(v),
            _ => Err(undeclared(name)),
        }
    }

    fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

fn undeclared(name: &str) -> DecodeError {
    DecodeError::decoding(format!("parameter {name} was not resolved"))
}

/// Validate `params` against every parameter `spec` declares.
///
/// # Errors
///
/// Returns an `InvalidParameter` error for a missing required parameter, a
/// value of the wrong type, an empty or non-alphabetic key, or a choice outside
/// the allowed options.
pub fn resolve(spec: &CipherSpec, params: &Parameters) -> Result<ResolvedParams, DecodeError> {
    let values = spec
        .params
        .iter()
        .map(|p| resolve_one(p, params.get(p.name)).map(|v| (p.name, v)))
        .collect::<Result<Vec<_>, DecodeError>>()?;
    Ok(ResolvedParams { values })
}

fn resolve_one(spec: &ParamSpec, value: Option<&ParamValue>) -> Result<ParamValue, DecodeError> {
    let name = spec.name;
    match (spec.kind, value) {
        (ParamKind::Int { default, .. }, None) => Ok(ParamValue::Int(default)),
        (ParamKind::Int { min, max, .. }, Some(ParamValue::Int(v))) => {
            let clamped = (*v).clamp(min, max);
            if clamped != *v {
                debug!(param = name, requested = *v, clamped, "parameter clamped into range");
            }
            Ok(ParamValue::Int(clamped))
        }
        (ParamKind::Int { .. }, Some(ParamValue::Text(_))) => Err(DecodeError::invalid_parameter(
            format!("{name} must be an integer"),
        )),

        (ParamKind::Alphabetic { default: Some(d) }, None) => Ok(ParamValue::Text(d.to_owned())),
        (ParamKind::Alphabetic { default: None }, None) => Err(DecodeError::invalid_parameter(
            format!("{name} is required"),
        )),
        (ParamKind::Alphabetic { .. }, Some(ParamValue::Text(s))) => {
            if s.is_empty() {
                Err(DecodeError::invalid_parameter(format!("{name} must not be empty")))
            } else if !s.chars().all(|c| c.is_ascii_alphabetic()) {
                Err(DecodeError::invalid_parameter(format!(
                    "{name} must contain only letters A-Z"
                )))
            } else {
                Ok(ParamValue::Text(s.clone()))
            }
        }
        (ParamKind::Alphabetic { .. }, Some(ParamValue::Int(_))) => Err(
            DecodeError::invalid_parameter(format!("{name} must be a string of letters")),
        ),

        (ParamKind::Choice { default, .. }, None) => Ok(ParamValue::Text(default.to_owned())),
        (ParamKind::Choice { options, .. }, Some(ParamValue::Text(s)))
            if options.contains(&s.as_str()) =>
        {
            Ok(ParamValue::Text(s.clone()))
        }
        (ParamKind::Choice { options, .. }, Some(_)) => Err(DecodeError::invalid_parameter(
            format!("{name} must be one of {}", options.join(", ")),
        )),
    }
}
