use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Deserializes a YouTube counter, which the API sends as a decimal string.
/// Plain numbers and `null` are accepted as well.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CountVisitor)
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = Option<u64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative count as string or number")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(Some)
            .map_err(|_| E::custom(format!("negative count: {value}")))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid count \"{value}\": {e}")))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::VideoStatistics;

    #[test]
    fn test_counts_from_strings_and_numbers() {
        let stats: VideoStatistics =
            serde_json::from_str(r#"{"likeCount": "42", "viewCount": 1000, "commentCount": null}"#)
                .expect("valid statistics");
        assert_eq!(stats.like_count, Some(42));
        assert_eq!(stats.view_count, Some(1000));
        assert_eq!(stats.comment_count, None);
    }

    #[test]
    fn test_garbage_count_is_rejected() {
        let result = serde_json::from_str::<VideoStatistics>(r#"{"likeCount": "lots"}"#);
        assert!(result.is_err());
    }
}
