//! Reply marker parsing for the ReAct loop.
//!
//! Model output is free text; the loop recognizes a trailing
//! `Answer: <text>` marker or the first `Action: <tool>[<input>]`
//! marker, in that precedence. A reply with neither marker stands as
//! an implicit final answer. Parsing lives in this one function so a
//! stricter output format (e.g. structured function calling) can be
//! substituted later without touching the loop.

use once_cell::sync::Lazy;
use regex::Regex;

static ANSWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Answer:\s*(.*)$").expect("answer marker regex"));

static ACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Action:\s*([^\[]+)\[([^\]]+)\]").expect("action marker regex"));

/// What one assistant reply asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    /// Trailing `Answer:` marker with its captured text, trimmed.
    FinalAnswer(String),
    /// First `Action:` marker; later markers in the same reply are
    /// ignored.
    Action { tool: String, input: String },
    /// No marker; the trimmed raw reply.
    Bare(String),
}

/// Parse one assistant reply into a loop decision.
pub fn parse_reply(reply: &str) -> ParsedReply {
    let reply = reply.trim_end();

    if let Some(caps) = ANSWER_RE.captures(reply) {
        return ParsedReply::FinalAnswer(caps[1].trim().to_string());
    }

    if let Some(caps) = ACTION_RE.captures(reply) {
        return ParsedReply::Action {
            tool: caps[1].trim().to_string(),
            input: caps[2].trim().to_string(),
        };
    }

    ParsedReply::Bare(reply.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_answer_marker_wins() {
        let reply = "Thought: done\nAnswer: 56088";
        assert_eq!(
            parse_reply(reply),
            ParsedReply::FinalAnswer("56088".to_string())
        );
    }

    #[test]
    fn answer_takes_precedence_over_action() {
        let reply = "Action: Calculator[1+1]\nAnswer: 2";
        assert_eq!(parse_reply(reply), ParsedReply::FinalAnswer("2".to_string()));
    }

    #[test]
    fn answer_marker_must_be_on_the_final_line() {
        // Text after the marker line means it is not a final answer.
        let reply = "Answer: not yet\nAction: Calculator[1+1]";
        assert_eq!(
            parse_reply(reply),
            ParsedReply::Action {
                tool: "Calculator".to_string(),
                input: "1+1".to_string(),
            }
        );
    }

    #[test]
    fn first_action_marker_wins() {
        let reply = "Action: Calculator[1+1]\nAction: Calculator[2+2]";
        assert_eq!(
            parse_reply(reply),
            ParsedReply::Action {
                tool: "Calculator".to_string(),
                input: "1+1".to_string(),
            }
        );
    }

    #[test]
    fn action_input_stops_at_first_closing_bracket() {
        let reply = "Action: Search[a[b]c]";
        assert_eq!(
            parse_reply(reply),
            ParsedReply::Action {
                tool: "Search".to_string(),
                input: "a[b".to_string(),
            }
        );
    }

    #[test]
    fn unmarked_reply_is_bare() {
        assert_eq!(
            parse_reply("The answer is 42.\n"),
            ParsedReply::Bare("The answer is 42.".to_string())
        );
    }

    #[test]
    fn trailing_newline_does_not_hide_the_answer() {
        assert_eq!(
            parse_reply("Answer: 42\n"),
            ParsedReply::FinalAnswer("42".to_string())
        );
    }

    #[test]
    fn whitespace_only_reply_is_empty_bare() {
        assert_eq!(parse_reply("  \n "), ParsedReply::Bare(String::new()));
    }
}
