use std::time::Duration;

use humantime::parse_duration;
use serde::Deserialize;
use serde_with::DeserializeAs;

/// Reads durations written as `"10s"`, `"1m 30s"` or `"750ms"`.
pub(crate) struct HumantimeDuration;

impl<'de> DeserializeAs<'de, Duration> for HumantimeDuration {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Duration, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_duration(raw.trim()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::HumantimeDuration;
    use serde::Deserialize;
    use serde_with::serde_as;
    use std::time::Duration;

    #[serde_as]
    #[derive(Deserialize)]
    struct Timeouts {
        #[serde_as(as = "HumantimeDuration")]
        request: Duration,
    }

    #[test]
    fn parses_compound_durations() {
        let sample: Timeouts = match serde_json::from_str(r#"{"request":"1m 30s"}"#) {
            Ok(value) => value,
            Err(err) => panic!("failed to parse sample json: {err}"),
        };
        assert_eq!(sample.request, Duration::from_secs(90));
    }

    #[test]
    fn rejects_bare_numbers() {
        assert!(serde_json::from_str::<Timeouts>(r#"{"request":"10"}"#).is_err());
    }
}
