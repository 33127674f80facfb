//! Generic structural mapping.
//!
//! Copies same-named fields from any serializable source into a destination
//! type that can be built from an empty document (`#[serde(default)]`). The
//! empty document plays the part of a zero-argument constructor.
//!
//! Copying is best-effort per field: a field whose source value does not fit
//! the destination type keeps its default, and the remaining fields are still
//! copied. There is no type coercion.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{error, trace};

use shelter_core::{application::ApplicationError, error::RegistryResult};

/// Build a `T` from the same-named fields of `source`.
///
/// # Errors
///
/// - `ConstructorUndefined` when `T` cannot be built from an empty document.
/// - `MappingFailure` when either side does not serialize as a structure.
pub fn map_to<T, S>(source: &S) -> RegistryResult<T>
where
    T: Serialize + DeserializeOwned,
    S: Serialize + ?Sized,
{
    let type_name = simple_type_name::<T>();

    let blank: T = serde_json::from_value(Value::Object(Map::new())).map_err(|_| {
        let err = ApplicationError::ConstructorUndefined {
            type_name: type_name.to_string(),
        };
        error!("{err}");
        err
    })?;

    let mut fields = as_object(&blank, type_name, "destination")?;
    let source_fields = as_object(source, type_name, "source")?;

    let names: Vec<String> = fields.keys().cloned().collect();
    for name in names {
        let Some(value) = source_fields.get(&name) else {
            continue;
        };
        let previous = fields.insert(name.clone(), value.clone());
        if serde_json::from_value::<T>(Value::Object(fields.clone())).is_err() {
            trace!(field = %name, destination = type_name, "Incompatible field left at default");
            if let Some(previous) = previous {
                fields.insert(name, previous);
            }
        }
    }

    Ok(serde_json::from_value(Value::Object(fields))
        .map_err(|e| mapping_failure(type_name, e.to_string()))?)
}

/// The last path segment of `T`'s type name, e.g. `AddressRecord`.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn as_object<V: Serialize + ?Sized>(
    value: &V,
    type_name: &str,
    side: &str,
) -> RegistryResult<Map<String, Value>> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(mapping_failure(
            type_name,
            format!("{side} is not a structure (found {})", kind_of(&other)),
        )
        .into()),
        Err(e) => Err(mapping_failure(type_name, e.to_string()).into()),
    }
}

fn mapping_failure(type_name: &str, reason: String) -> ApplicationError {
    let err = ApplicationError::MappingFailure {
        type_name: type_name.to_string(),
        reason,
    };
    error!("{err}");
    err
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
