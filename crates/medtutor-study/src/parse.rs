// SPDX-FileCopyrightText: 2026 Medtutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-stage parsing of model replies: locate the JSON, then deserialize it.

use medtutor_core::MedTutorError;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Result of parsing a model reply that should contain JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T> {
    Parsed(T),
    /// The reply could not be turned into `T`. `raw` is the full reply.
    Malformed { raw: String, reason: String },
}

impl<T> ParseOutcome<T> {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    /// The parsed value, discarding the failure details.
    pub fn parsed(self) -> Option<T> {
        match self {
            ParseOutcome::Parsed(value) => Some(value),
            ParseOutcome::Malformed { .. } => None,
        }
    }

    /// Treat malformed output as a provider error.
    pub fn into_result(self) -> Result<T, MedTutorError> {
        match self {
            ParseOutcome::Parsed(value) => Ok(value),
            ParseOutcome::Malformed { reason, .. } => Err(MedTutorError::provider(format!(
                "malformed model output: {reason}"
            ))),
        }
    }

    /// Apply a semantic check to a parsed value. A failing check turns the
    /// outcome into `Malformed` with the check's message as reason.
    pub fn validate(self, raw: &str, check: impl FnOnce(&T) -> Result<(), String>) -> Self {
        match self {
            ParseOutcome::Parsed(value) => match check(&value) {
                Ok(()) => ParseOutcome::Parsed(value),
                Err(reason) => {
                    warn!(%reason, "model output failed validation");
                    ParseOutcome::Malformed {
                        raw: raw.to_string(),
                        reason,
                    }
                }
            },
            malformed => malformed,
        }
    }
}

/// Find the JSON value inside a model reply.
///
/// Strips a surrounding markdown code fence, then returns the span from the
/// first `{` or `[` to the last matching closer. Returns `None` when the
/// reply has no such span.
pub fn extract_json(reply: &str) -> Option<&str> {
    let body = strip_code_fence(reply.trim());

    let start = body.find(['{', '['])?;
    let closer = if body[start..].starts_with('{') { '}' } else { ']' };
    let end = body.rfind(closer)?;
    (end > start).then(|| &body[start..=end])
}

fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    // Skip the info string (```json) up to the end of the fence line.
    let after_open = &text[open + 3..];
    let body_start = after_open.find('\n').map_or(0, |i| i + 1);
    let body = &after_open[body_start..];
    match body.rfind("```") {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

/// Extract and deserialize the JSON in `reply`.
pub fn parse_json<T: DeserializeOwned>(reply: &str) -> ParseOutcome<T> {
    let Some(json) = extract_json(reply) else {
        warn!("model reply contains no JSON value");
        debug!(raw = reply, "unparsed reply");
        return ParseOutcome::Malformed {
            raw: reply.to_string(),
            reason: "no JSON object or array found".to_string(),
        };
    };

    match serde_json::from_str::<T>(json) {
        Ok(value) => ParseOutcome::Parsed(value),
        Err(e) => {
            warn!("failed to parse model reply: {e}");
            debug!(raw = reply, "unparsed reply");
            ParseOutcome::Malformed {
                raw: reply.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Card {
        front: String,
        back: String,
    }

    #[test]
    fn extract_bare_array() {
        assert_eq!(extract_json("[1, 2]"), Some("[1, 2]"));
    }

    #[test]
    fn extract_from_code_fence() {
        let reply = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(reply), Some("{\"a\": 1}"));
    }

    #[test]
    fn extract_from_fence_without_language() {
        let reply = "Here you go:\n```\n[{\"a\": 1}]\n```\nGood luck!";
        assert_eq!(extract_json(reply), Some("[{\"a\": 1}]"));
    }

    #[test]
    fn extract_with_surrounding_prose() {
        let reply = "Sure! {\"overview\": \"x\"} Hope this helps.";
        assert_eq!(extract_json(reply), Some("{\"overview\": \"x\"}"));
    }

    #[test]
    fn object_wins_when_it_comes_first() {
        let reply = "{\"items\": [1, 2]}";
        assert_eq!(extract_json(reply), Some(reply));
    }

    #[test]
    fn no_json_returns_none() {
        assert_eq!(extract_json("I cannot help with that."), None);
        assert_eq!(extract_json("} backwards {"), None);
    }

    #[test]
    fn parse_cards_from_fenced_reply() {
        let reply = "```json\n[{\"front\": \"Normal K+?\", \"back\": \"3.5-5.0 mEq/L\"}]\n```";
        let outcome: ParseOutcome<Vec<Card>> = parse_json(reply);
        assert_eq!(
            outcome,
            ParseOutcome::Parsed(vec![Card {
                front: "Normal K+?".into(),
                back: "3.5-5.0 mEq/L".into(),
            }])
        );
    }

    #[test]
    fn prose_reply_is_malformed_not_empty() {
        let outcome: ParseOutcome<Vec<Card>> = parse_json("Flashcards are a great idea!");
        match outcome {
            ParseOutcome::Malformed { raw, reason } => {
                assert_eq!(raw, "Flashcards are a great idea!");
                assert!(reason.contains("no JSON"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_malformed_with_serde_reason() {
        let outcome: ParseOutcome<Vec<Card>> = parse_json("[{\"front\": \"only front\"}]");
        let ParseOutcome::Malformed { reason, .. } = outcome else {
            panic!("expected Malformed");
        };
        assert!(reason.contains("back"), "reason: {reason}");
    }

    #[test]
    fn validate_demotes_failed_check() {
        let outcome = ParseOutcome::Parsed(vec![1, 2, 3]).validate("[1,2,3]", |v| {
            if v.len() > 2 {
                Err("too many".to_string())
            } else {
                Ok(())
            }
        });
        assert_eq!(
            outcome,
            ParseOutcome::Malformed {
                raw: "[1,2,3]".into(),
                reason: "too many".into()
            }
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn malformed_reply_is_logged() {
        let _: ParseOutcome<Vec<Card>> = parse_json("no cards today");
        assert!(logs_contain("model reply contains no JSON value"));
    }

    #[test]
    fn into_result_maps_malformed_to_provider_error() {
        let outcome: ParseOutcome<u8> = ParseOutcome::Malformed {
            raw: "x".into(),
            reason: "bad".into(),
        };
        let err = outcome.into_result().unwrap_err();
        assert!(matches!(err, MedTutorError::Provider { .. }));
        assert_eq!(ParseOutcome::Parsed(3u8).into_result().unwrap(), 3);
    }
}
