//! Status snapshot

use crate::error::{CtlError, Result};
use serde::{Deserialize, Serialize};

/// What `status` reports: current preset and panel placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub preset: String,
    pub panel: String,
}

impl Status {
    /// Wire form: `preset <name>\npanel <placement>\n`.
    pub fn to_text(&self) -> String {
        format!("preset {}\npanel {}\n", self.preset, self.panel)
    }

    pub fn parse(text: &str) -> Result<Status> {
        let mut preset = None;
        let mut panel = None;
        for line in text.lines() {
            match line.trim().split_once(' ') {
                Some(("preset", v)) => preset = Some(v.trim().to_string()),
                Some(("panel", v)) => panel = Some(v.trim().to_string()),
                _ => {}
            }
        }
        match (preset, panel) {
            (Some(preset), Some(panel)) => Ok(Status { preset, panel }),
            _ => Err(CtlError::Protocol(format!("bad status {text:?}"))),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CtlError::Protocol(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_json() {
        let s = Status {
            preset: "dark".into(),
            panel: "top".into(),
        };
        assert_eq!(s.to_text(), "preset dark\npanel top\n");
        assert_eq!(Status::parse(&s.to_text()).unwrap(), s);

        let json: serde_json::Value = serde_json::from_str(&s.to_json().unwrap()).unwrap();
        assert_eq!(json["preset"], "dark");
        assert_eq!(json["panel"], "top");
    }

    #[test]
    fn test_parse_rejects_partial() {
        assert!(Status::parse("preset dark\n").is_err());
        assert!(Status::parse("").is_err());
    }
}
