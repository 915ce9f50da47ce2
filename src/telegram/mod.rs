//! All Telegram-specific functionality

pub mod client;
pub mod typing;

// Re-export main types for convenience
pub use client::{Chat, Message, TelegramClient, Update};
pub use typing::{TypingGuard, start_typing};
