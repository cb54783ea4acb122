//! Query string helpers shared by the parameter structs.

use serde::Serializer;

/// Serialize a list filter as a single comma-joined value (`10-K,10-Q`).
///
/// Pair with `skip_serializing_if = "Vec::is_empty"` so an empty list is
/// omitted instead of sent as an empty string.
pub(crate) fn comma_joined<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&values.join(","))
}
