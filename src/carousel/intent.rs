use std::str::FromStr;

use crate::error::IntentParseError;

/// User navigation forwarded by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Previous,
    Next,
    JumpTo(usize),
}

impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "prev" | "previous" => return Ok(Intent::Previous),
            "next" => return Ok(Intent::Next),
            _ => {}
        }

        let Some(target) = lowered.strip_prefix("jump:") else {
            return Err(IntentParseError::Unknown(s.trim().to_string()));
        };
        target
            .trim()
            .parse()
            .map(Intent::JumpTo)
            .map_err(|_| IntentParseError::BadIndex(target.to_string()))
    }
}

/// An intent pinned to the host-loop frame it should be dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedIntent {
    pub frame: u64,
    pub intent: Intent,
}

impl FromStr for ScriptedIntent {
    type Err = IntentParseError;

    // "<frame>:<intent>", e.g. "120:next" or "300:jump:2"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frame, intent) = s
            .split_once(':')
            .ok_or_else(|| IntentParseError::MissingFrame(s.to_string()))?;
        let frame = frame
            .trim()
            .parse()
            .map_err(|_| IntentParseError::MissingFrame(s.to_string()))?;

        Ok(Self {
            frame,
            intent: intent.parse()?,
        })
    }
}
