use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("fenced block pattern is valid")
});

type Strategy = fn(&str) -> Option<Value>;

/// Tried in order, first success wins.
const STRATEGIES: [(&str, Strategy); 3] = [
    ("whole_reply", parse_whole),
    ("fenced_block", parse_fenced_block),
    ("brace_span", parse_brace_span),
];

/// Extracts the JSON structure from a model reply.
///
/// Models regularly wrap their JSON in prose or markdown fences even when told not to.
/// `None` means no strategy found valid JSON; callers treat it as an expected outcome.
pub fn parse_ai_response(response_text: &str) -> Option<Value> {
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let parsed = strategy(response_text);
        if parsed.is_none() {
            tracing::debug!(strategy = name, "AI reply not parsable with strategy");
        }
        parsed
    })
}

fn parse_whole(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

fn parse_fenced_block(text: &str) -> Option<Value> {
    let captures = FENCED_BLOCK.captures(text)?;
    serde_json::from_str(captures.get(1)?.as_str()).ok()
}

fn parse_brace_span(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json_is_parsed_directly() {
        let reply = r#"{"status": "clear", "total_calories": 447}"#;

        assert_eq!(
            parse_ai_response(reply),
            Some(json!({"status": "clear", "total_calories": 447}))
        );
    }

    #[test]
    fn any_valid_json_is_returned_as_is() {
        assert_eq!(parse_ai_response("[1, 2]"), Some(json!([1, 2])));
        assert_eq!(parse_ai_response("null"), Some(Value::Null));
    }

    #[test]
    fn fenced_json_block_is_unwrapped() {
        let reply = "好的，分析如下：\n```json\n{\"status\": \"clear\", \"foods\": []}\n```\n希望对你有帮助！";

        assert_eq!(
            parse_ai_response(reply),
            Some(json!({"status": "clear", "foods": []}))
        );
    }

    #[test]
    fn untagged_fence_is_unwrapped() {
        let reply = "```\n{\"health_score\": 80}\n```";

        assert_eq!(parse_ai_response(reply), Some(json!({"health_score": 80})));
    }

    #[test]
    fn brace_span_is_used_when_there_is_no_fence() {
        let reply = "结果是 {\"status\": \"clear\", \"foods\": [{\"name\": \"馒头\"}]} 以上。";

        assert_eq!(
            parse_ai_response(reply),
            Some(json!({"status": "clear", "foods": [{"name": "馒头"}]}))
        );
    }

    #[test]
    fn broken_fence_falls_through_to_brace_span() {
        let reply = "```json\n{\"a\": 1,}\n``` but really {\"a\": 2}";

        // The fenced block is invalid JSON and the outer span covers both objects,
        // so nothing can be recovered.
        assert_eq!(parse_ai_response(reply), None);

        let reply = "```json\nnot json\n``` then {\"a\": 2}";
        assert_eq!(parse_ai_response(reply), Some(json!({"a": 2})));
    }

    #[test]
    fn text_without_json_is_unparsable() {
        assert_eq!(parse_ai_response("抱歉，我无法分析这段内容。"), None);
        assert_eq!(parse_ai_response(""), None);
        assert_eq!(parse_ai_response("} reversed {"), None);
    }
}
