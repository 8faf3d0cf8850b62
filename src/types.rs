//! Enumerations shared by several API objects.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::wire::wire_enum;

wire_enum! {
    /// `status` of hosts, items, triggers, actions and user group members.
    pub enum StatusType {
        Enabled = 0,
        Disabled = 1,
    }
}

wire_enum! {
    /// Trigger `priority`.
    pub enum SeverityType {
        NotClassified = 0,
        Information = 1,
        Warning = 2,
        Average = 3,
        High = 4,
        Disaster = 5,
    }
}

wire_enum! {
    /// Host and interface `available`.
    pub enum AvailableType {
        Undetermined = 0,
        Available = 1,
        Unavailable = 2,
    }
}

wire_enum! {
    /// Host `inventory_mode`.
    pub enum InventoryMode {
        Disabled = -1,
        Manual = 0,
        Automatic = 1,
    }
}

wire_enum! {
    /// `evaluationtype` of action conditions and discovery rule filters.
    pub enum EvaluationType {
        AndOr = 0,
        And = 1,
        Or = 2,
        Custom = 3,
    }
}

impl SeverityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotClassified => "Not classified",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Average => "Average",
            Self::High => "High",
            Self::Disaster => "Disaster",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl Display for SeverityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "not classified" | "not_classified" | "0" => Ok(Self::NotClassified),
            "info" | "information" | "1" => Ok(Self::Information),
            "warn" | "warning" | "2" => Ok(Self::Warning),
            "average" | "3" => Ok(Self::Average),
            "high" | "4" => Ok(Self::High),
            "disaster" | "5" => Ok(Self::Disaster),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

impl StatusType {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::{AvailableType, SeverityType, StatusType};
    use std::str::FromStr;

    #[test]
    fn severity_from_str_accepts_names_and_codes() {
        assert_eq!(SeverityType::from_str("High"), Ok(SeverityType::High));
        assert_eq!(SeverityType::from_str("warn"), Ok(SeverityType::Warning));
        assert_eq!(SeverityType::from_str("5"), Ok(SeverityType::Disaster));
        assert!(SeverityType::from_str("loud").is_err());
    }

    #[test]
    fn codes_match_zabbix_documentation() {
        assert_eq!(SeverityType::from(4), SeverityType::High);
        assert_eq!(SeverityType::Disaster.code(), 5);
        assert_eq!(StatusType::from(1), StatusType::Disabled);
        assert!(StatusType::Enabled.is_enabled());
        assert_eq!(AvailableType::from(2), AvailableType::Unavailable);
        assert_eq!(SeverityType::from(9).to_string(), "Unknown");
    }
}
