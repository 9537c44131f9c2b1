use serde::de::DeserializeOwned;
use survey_core::enums::BucketKind;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a bucket name such as `reports` or `need-approval`.
pub fn parse_bucket(raw: &str) -> anyhow::Result<BucketKind> {
    parse_enum(raw, "bucket")
}
