//! Coercion of raw editor input to a descriptor's declared type, and
//! validation against its bounds.

use crate::domain::catalog::{ParameterKind, ParameterType};
use crate::domain::prompt::ParameterValue;

use super::error::{ParameterError, RangeBound};

/// Coerce `raw` to the declared type of `descriptor`, then validate it.
pub fn coerce(
    descriptor: &ParameterType,
    raw: ParameterValue,
) -> Result<ParameterValue, ParameterError> {
    let value = match descriptor.kind {
        ParameterKind::Number => ParameterValue::Number(coerce_number(descriptor, raw)?),
        ParameterKind::Boolean => ParameterValue::Boolean(coerce_boolean(descriptor, raw)?),
        ParameterKind::String | ParameterKind::Array => match raw {
            ParameterValue::String(s) => ParameterValue::String(s),
            other => ParameterValue::String(other.to_string()),
        },
    };
    validate(descriptor, &value)?;
    Ok(value)
}

/// Check an already-typed value against the descriptor's bounds.
pub fn validate(descriptor: &ParameterType, value: &ParameterValue) -> Result<(), ParameterError> {
    match (descriptor.kind, value) {
        (ParameterKind::Number, ParameterValue::Number(n)) => check_range(descriptor, *n),
        (ParameterKind::String, ParameterValue::String(s)) => check_length(descriptor, s),
        _ => Ok(()),
    }
}

fn invalid(descriptor: &ParameterType, raw: &ParameterValue) -> ParameterError {
    ParameterError::InvalidValue {
        name: descriptor.name.clone(),
        expected: descriptor.kind,
        raw: raw.to_string(),
    }
}

fn coerce_number(descriptor: &ParameterType, raw: ParameterValue) -> Result<f64, ParameterError> {
    let number = match &raw {
        ParameterValue::Number(n) => Some(*n),
        ParameterValue::String(s) => s.trim().parse::<f64>().ok(),
        ParameterValue::Boolean(_) => None,
    };
    number.filter(|n| n.is_finite()).ok_or_else(|| invalid(descriptor, &raw))
}

fn coerce_boolean(
    descriptor: &ParameterType,
    raw: ParameterValue,
) -> Result<bool, ParameterError> {
    match &raw {
        ParameterValue::Boolean(b) => Ok(*b),
        ParameterValue::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
        ParameterValue::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(invalid(descriptor, &raw)),
    }
}

fn check_range(descriptor: &ParameterType, value: f64) -> Result<(), ParameterError> {
    let out_of_range = |bound| ParameterError::OutOfRange {
        name: descriptor.name.clone(),
        value,
        bound,
    };

    if let Some(limit) = descriptor.min_value {
        let exclusive = descriptor.is_min_value_exclusive;
        let ok = if exclusive { value > limit } else { value >= limit };
        if !ok {
            return Err(out_of_range(RangeBound::Min { limit, exclusive }));
        }
    }

    if let Some(limit) = descriptor.max_value {
        let exclusive = descriptor.is_max_value_exclusive;
        let ok = if exclusive { value < limit } else { value <= limit };
        if !ok {
            return Err(out_of_range(RangeBound::Max { limit, exclusive }));
        }
    }

    Ok(())
}

fn check_length(descriptor: &ParameterType, value: &str) -> Result<(), ParameterError> {
    let Some(max_length) = descriptor.max_length else {
        return Ok(());
    };
    let length = value.chars().count();
    if length > max_length {
        return Err(ParameterError::TooLong { name: descriptor.name.clone(), length, max_length });
    }
    Ok(())
}
