use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvaiError, Result};
use crate::model::{Conversation, ConversationListItem};

pub fn conversation_to_json(conversation: &Conversation) -> Result<String> {
    Ok(serde_json::to_string_pretty(conversation)?)
}

#[must_use]
pub fn render_list_markdown(items: &[ConversationListItem]) -> String {
    let mut output = String::new();
    output.push_str("# Conversations\n\n");

    if items.is_empty() {
        output.push_str("No conversations found.\n");
        return output;
    }

    output.push_str("| Conversation | Agent | Started (unix) | Result |\n");
    output.push_str("| --- | --- | --- | --- |\n");
    for item in items {
        let agent = item.agent_name.as_deref().unwrap_or(&item.agent_id);
        let started = item
            .start_time_unix_secs
            .map_or_else(|| "-".to_string(), |secs| secs.to_string());
        let result = item.call_successful.as_deref().unwrap_or("-");
        output.push_str(&format!(
            "| {} | {agent} | {started} | {result} |\n",
            item.conversation_id
        ));
    }

    output
}

#[must_use]
pub fn default_conversation_path(conversation_id: &str) -> PathBuf {
    PathBuf::from("conversations").join(format!("{conversation_id}.json"))
}

#[must_use]
pub fn default_audio_path(conversation_id: &str) -> PathBuf {
    PathBuf::from("audio").join(format!("{conversation_id}.mp3"))
}

/// Creates missing parent directories before writing.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ConvaiError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, bytes).map_err(|source| ConvaiError::Io {
        path: path.to_path_buf(),
        source,
    })
}
