use crate::models::{Conversation, ConversationSummary, Corpus, Message, RecentChats, Role};
use crate::store::CorpusStore;

/// Number of conversations listed by [`recent_chats`]
pub const RECENT_LIMIT: usize = 10;

/// Maximum preview length, in characters
pub const PREVIEW_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Up to [`RECENT_LIMIT`] conversation previews, newest `create_time` first.
pub fn recent_chats(store: &impl CorpusStore) -> RecentChats {
    let summaries = store.with_corpus(summarize_recent);
    RecentChats { total: summaries.len(), summaries }
}

/// Build previews from a corpus.
///
/// Ties on `create_time` keep insertion order. Conversations whose messages
/// are no longer present are left out.
pub fn summarize_recent(corpus: &Corpus) -> Vec<ConversationSummary> {
    let mut conversations: Vec<&Conversation> = corpus.conversations.iter().collect();
    conversations.sort_by(|a, b| b.create_time.total_cmp(&a.create_time));

    conversations
        .into_iter()
        .take(RECENT_LIMIT)
        .filter_map(|conversation| summarize(conversation, &corpus.messages))
        .collect()
}

fn summarize(conversation: &Conversation, messages: &[Message]) -> Option<ConversationSummary> {
    let mut own = messages.iter().filter(|m| m.conversation_id == conversation.id).peekable();
    own.peek()?;

    let mut user_message = None;
    let mut assistant_message = None;
    for message in own {
        match message.role {
            Role::User if user_message.is_none() => user_message = Some(&message.content),
            Role::Assistant if assistant_message.is_none() => {
                assistant_message = Some(&message.content)
            }
            _ => {}
        }
        if user_message.is_some() && assistant_message.is_some() {
            break;
        }
    }

    Some(ConversationSummary {
        conversation_id: conversation.id.clone(),
        title: conversation.title.clone(),
        service: conversation.service.clone(),
        create_time: conversation.create_time,
        message_count: conversation.message_count,
        user_message: user_message.map(|c| truncate_preview(c)).unwrap_or_default(),
        assistant_message: assistant_message.map(|c| truncate_preview(c)).unwrap_or_default(),
    })
}

/// Cut `content` to [`PREVIEW_CHARS`] characters, appending `...` only when
/// something was cut.
pub fn truncate_preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((byte_index, _)) => format!("{}{}", &content[..byte_index], ELLIPSIS),
        None => content.to_string(),
    }
}
