//! Shared constants for chat-merge.

/// `ItemTable` key under which VS Code persists the chat-session index.
pub const SESSION_INDEX_KEY: &str = "chat.ChatSessionStore.index";

/// Index format version. Always written as-is; VS Code never writes any
/// other value.
pub const INDEX_VERSION: u32 = 1;
