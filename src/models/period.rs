use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LeaderboardError;

/// Time bucket selected in the period control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
    AllTime,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Weekly, Period::Monthly, Period::AllTime];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::AllTime => "all_time",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::AllTime => "All Time",
        }
    }

    /// Next period in tab order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Period::Weekly => Period::Monthly,
            Period::Monthly => Period::AllTime,
            Period::AllTime => Period::Weekly,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Period::Weekly => 0,
            Period::Monthly => 1,
            Period::AllTime => 2,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Period::Weekly),
            "monthly" | "month" | "m" => Ok(Period::Monthly),
            "all_time" | "all-time" | "alltime" | "all" => Ok(Period::AllTime),
            _ => Err(LeaderboardError::InvalidPeriod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing() {
        assert_eq!("weekly".parse::<Period>().unwrap(), Period::Weekly);
        assert_eq!("Monthly".parse::<Period>().unwrap(), Period::Monthly);
        assert_eq!("all_time".parse::<Period>().unwrap(), Period::AllTime);
        assert_eq!("all-time".parse::<Period>().unwrap(), Period::AllTime);
        assert!("yearly".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_wire_names() {
        assert_eq!(serde_json::to_string(&Period::AllTime).unwrap(), "\"all_time\"");
        let parsed: Period = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, Period::Monthly);
    }

    #[test]
    fn test_period_cycle() {
        assert_eq!(Period::Weekly.next(), Period::Monthly);
        assert_eq!(Period::Monthly.next(), Period::AllTime);
        assert_eq!(Period::AllTime.next(), Period::Weekly);
    }
}
