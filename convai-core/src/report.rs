use std::collections::BTreeSet;

use serde_json::Value;

use crate::model::{Conversation, Turn};

const NO_TOOL_CALLS_PLACEHOLDER: &str = "No tool calls detected.";
const NO_METRICS_PLACEHOLDER: &str = "No per-turn metrics recorded.";
const NO_MESSAGE_PLACEHOLDER: &str = "(no message)";
const ABSENT_CELL: &str = "-";

/// Renders the full Markdown report. Pure; identical input yields
/// byte-identical output.
pub fn render_report(conversation: &Conversation) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Conversation Report: {}\n\n",
        conversation.conversation_id
    ));

    render_summary(&mut output, conversation);
    render_transcript_summary(&mut output, conversation);
    render_tool_calls(&mut output, conversation);
    render_metrics(&mut output, conversation);
    render_transcript(&mut output, conversation);

    output
}

/// Integer minutes plus remainder seconds, no zero padding: 105 -> "1m 45s".
#[must_use]
pub fn format_duration(total_secs: u64) -> String {
    format!("{}m {}s", total_secs / 60, total_secs % 60)
}

fn render_summary(output: &mut String, conversation: &Conversation) {
    output.push_str("## Summary\n\n");
    output.push_str(&format!("- Agent: {}\n", conversation.agent_id));
    output.push_str(&format!("- Status: {}\n", conversation.status));
    output.push_str(&format!(
        "- Duration: {}\n",
        format_duration(conversation.metadata.call_duration_secs)
    ));
    match conversation.metadata.cost {
        Some(cost) => output.push_str(&format!("- Cost: {cost} credits\n")),
        None => output.push_str(&format!("- Cost: {ABSENT_CELL}\n")),
    }
    if let Some(verdict) = conversation
        .analysis
        .as_ref()
        .and_then(|analysis| analysis.call_successful.as_deref())
    {
        output.push_str(&format!("- Call successful: {verdict}\n"));
    }
    output.push('\n');
}

fn render_transcript_summary(output: &mut String, conversation: &Conversation) {
    let Some(summary) = conversation
        .analysis
        .as_ref()
        .and_then(|analysis| analysis.transcript_summary.as_deref())
    else {
        return;
    };

    output.push_str("## Transcript Summary\n\n");
    output.push_str(summary.trim());
    output.push_str("\n\n");
}

fn render_tool_calls(output: &mut String, conversation: &Conversation) {
    output.push_str("## Tool Calls\n\n");

    let turns_with_calls: Vec<&Turn> = conversation
        .transcript
        .iter()
        .filter(|turn| !turn.tool_calls.is_empty())
        .collect();

    if turns_with_calls.is_empty() {
        output.push_str(NO_TOOL_CALLS_PLACEHOLDER);
        output.push_str("\n\n");
        return;
    }

    // Numbered by occurrence among tool-call turns, not transcript position.
    for (idx, turn) in turns_with_calls.iter().enumerate() {
        output.push_str(&format!(
            "### {}. Turn at {}s\n\n",
            idx + 1,
            turn.time_in_call_secs
        ));

        for call in &turn.tool_calls {
            let params = if call.params_as_json.is_empty() {
                "{}"
            } else {
                call.params_as_json.as_str()
            };
            output.push_str(&format!(
                "- {} (`{}`): {params}\n",
                call.tool_name, call.request_id
            ));
        }

        output.push_str("\nResults:\n");
        for call in &turn.tool_calls {
            let result = turn
                .tool_results
                .iter()
                .find(|result| result.request_id == call.request_id);
            match result {
                Some(result) => match &result.error {
                    Some(error) => output.push_str(&format!(
                        "- [error] `{}`: {error}\n",
                        call.request_id
                    )),
                    None => {
                        let payload = result
                            .result_value
                            .as_ref()
                            .map_or_else(|| "null".to_string(), Value::to_string);
                        output.push_str(&format!("- [ok] `{}`: {payload}\n", call.request_id));
                    }
                },
                None => output.push_str(&format!("- [pending] `{}`\n", call.request_id)),
            }
        }
        output.push('\n');
    }
}

fn render_metrics(output: &mut String, conversation: &Conversation) {
    output.push_str("## Performance Metrics\n\n");

    let rows: Vec<(usize, &Turn)> = conversation
        .transcript
        .iter()
        .enumerate()
        .filter(|(_, turn)| turn.conversation_turn_metrics.is_some())
        .collect();

    if rows.is_empty() {
        output.push_str(NO_METRICS_PLACEHOLDER);
        output.push_str("\n\n");
        return;
    }

    let mut columns = BTreeSet::new();
    for (_, turn) in &rows {
        if let Some(metrics) = &turn.conversation_turn_metrics {
            columns.extend(metrics.metrics.keys());
        }
    }

    output.push_str("| Turn |");
    for column in &columns {
        output.push_str(&format!(" {column} |"));
    }
    output.push('\n');
    output.push_str("| --- |");
    for _ in &columns {
        output.push_str(" --- |");
    }
    output.push('\n');

    for (idx, turn) in &rows {
        output.push_str(&format!("| {} |", idx + 1));
        for column in &columns {
            let cell = turn
                .conversation_turn_metrics
                .as_ref()
                .and_then(|metrics| metrics.metrics.get(*column))
                .map_or_else(
                    || ABSENT_CELL.to_string(),
                    |metric| format!("{:.3}", metric.elapsed_time),
                );
            output.push_str(&format!(" {cell} |"));
        }
        output.push('\n');
    }
    output.push('\n');
}

fn render_transcript(output: &mut String, conversation: &Conversation) {
    output.push_str("## Transcript\n\n");

    for turn in &conversation.transcript {
        output.push_str(&format!("### {} ({}s)\n\n", turn.role, turn.time_in_call_secs));
        match turn.message.as_deref().filter(|text| !text.trim().is_empty()) {
            Some(text) => output.push_str(text),
            None => output.push_str(NO_MESSAGE_PLACEHOLDER),
        }
        output.push_str("\n\n");
    }
}
