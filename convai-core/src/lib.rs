pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod service;

pub use client::{BASE_URL_VAR, ConvaiClient, DEFAULT_BASE_URL};
pub use config::{API_KEY_VAR, Config, DEFAULT_ENV_FILE};
pub use error::{ConvaiError, Result};
pub use model::{
    Analysis, Conversation, ConversationListItem, ConversationListPage, ConversationMetadata,
    LatencyMetric, Role, ToolCall, ToolResult, Turn, TurnMetrics,
};
pub use report::{format_duration, render_report};
pub use service::{
    conversation_to_json, default_audio_path, default_conversation_path, render_list_markdown,
    write_output,
};
