use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use serde_with::serde_as;

use crate::Result;
use crate::types::SeverityType;
use crate::wire::{NumStr, wire_enum};
use crate::zbx_client::{Params, ZbxClient};

use super::common::HostId;

wire_enum! {
    /// What generated an event (`source`); also an action's `eventsource`.
    pub enum EventSource {
        Trigger = 0,
        DiscoveryRule = 1,
        AutoRegistration = 2,
        Internal = 3,
        Service = 4,
    }
}

/// Event object. Events are created by the server and only read here.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "eventid")]
    pub event_id: String,
    pub source: EventSource,
    #[serde_as(as = "NumStr")]
    pub object: u8,
    #[serde(rename = "objectid")]
    pub object_id: String,
    #[serde_as(as = "NumStr")]
    pub clock: i64,
    #[serde_as(as = "NumStr")]
    pub value: u8,
    #[serde_as(as = "NumStr")]
    pub acknowledged: u8,
    pub name: String,
    pub severity: SeverityType,
    /// Filled when `selectHosts` is passed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<HostId>,
}

pub type Events = Vec<Event>;

impl Event {
    #[must_use]
    pub const fn is_acknowledged(&self) -> bool {
        self.acknowledged == 1
    }
}

const ACK_ACTION_ACKNOWLEDGE: u8 = 2;
const ACK_ACTION_MESSAGE: u8 = 4;
const ACK_ACTION_UNACKNOWLEDGE: u8 = 16;

impl ZbxClient {
    /// Wrapper for `event.get`; asks for `output: extend` unless set.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn events_get(&self, mut params: Params) -> Result<Events> {
        params.insert_default("output", "extend");
        self.call("event.get", &params).await
    }

    /// Acknowledge (`ack = true`) or unacknowledge events, optionally
    /// attaching a message.
    ///
    /// # Errors
    ///
    /// Propagates any transport or API error.
    pub async fn events_acknowledge(
        &self,
        event_ids: &[String],
        ack: bool,
        message: Option<&str>,
    ) -> Result<()> {
        let _: Value = self
            .call("event.acknowledge", &acknowledge_params(event_ids, ack, message))
            .await?;
        Ok(())
    }
}

fn acknowledge_params(event_ids: &[String], ack: bool, message: Option<&str>) -> Params {
    let mut action = if ack {
        ACK_ACTION_ACKNOWLEDGE
    } else {
        ACK_ACTION_UNACKNOWLEDGE
    };
    let mut params = Params::new().with("eventids", json!(event_ids));
    if let Some(msg) = message.filter(|msg| !msg.is_empty()) {
        params.insert("message", msg);
        action |= ACK_ACTION_MESSAGE;
    }
    params.with("action", action)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::{Event, EventSource, acknowledge_params};
    use crate::types::SeverityType;

    #[test]
    fn acknowledge_action_flags() {
        let ids = vec!["42".to_string()];
        let plain = acknowledge_params(&ids, true, None);
        assert_eq!(plain.get("action"), Some(&json!(2)));
        assert!(!plain.contains("message"));

        let with_message = acknowledge_params(&ids, true, Some("on it"));
        assert_eq!(with_message.get("action"), Some(&json!(6)));
        assert_eq!(with_message.get("message"), Some(&json!("on it")));

        let unack = acknowledge_params(&ids, false, Some(""));
        assert_eq!(unack.get("action"), Some(&json!(16)));
        assert_eq!(unack.get("eventids"), Some(&json!(["42"])));
    }

    #[test]
    fn decodes_problem_event() {
        let event: Event = serde_json::from_value(json!({
            "eventid": "9695",
            "source": "0",
            "object": "0",
            "objectid": "13926",
            "clock": "1347970410",
            "value": "1",
            "acknowledged": "1",
            "ns": "413316245",
            "name": "MySQL is down",
            "severity": "5"
        }))
        .unwrap();
        assert_eq!(event.source, EventSource::Trigger);
        assert_eq!(event.severity, SeverityType::Disaster);
        assert!(event.is_acknowledged());
        assert_eq!(event.clock, 1_347_970_410);
    }
}
