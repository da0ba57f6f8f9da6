//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a directory of chat export files
pub struct ExportDirBuilder {
    temp_dir: TempDir,
}

impl ExportDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with the given raw content
    pub fn with_file(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        let mut file = fs::File::create(path).expect("Failed to create export file");
        file.write_all(content.as_ref()).expect("Failed to write export file");
        self
    }

    /// Add a ChatGPT `conversations.json`-style export
    pub fn with_chatgpt_export(
        self,
        name: &str,
        conversations: &[ChatGptConversationBuilder],
    ) -> Self {
        let export: Vec<Value> = conversations.iter().map(|c| c.to_json()).collect();
        self.with_file(name, Value::Array(export).to_string())
    }

    /// Add an OpenAI API message array
    pub fn with_api_messages(self, name: &str, turns: &[(&str, &str)]) -> Self {
        self.with_file(name, api_messages(turns))
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one conversation inside a ChatGPT export
pub struct ChatGptConversationBuilder {
    id: Option<String>,
    title: Option<String>,
    create_time: Option<f64>,
    nodes: Vec<(String, Value)>,
}

impl ChatGptConversationBuilder {
    /// Create a conversation with the given id and no messages
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            title: Some(format!("Conversation {}", id)),
            create_time: Some(1_700_000_000.0),
            nodes: vec![("root".to_string(), json!({"message": null}))],
        }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the conversation create_time
    pub fn create_time(mut self, create_time: f64) -> Self {
        self.create_time = Some(create_time);
        self
    }

    /// Remove the id so a synthetic one is assigned
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Remove id, title and create_time so defaults apply
    pub fn without_metadata(mut self) -> Self {
        self.id = None;
        self.title = None;
        self.create_time = None;
        self
    }

    /// Add a message node with the given author role and text parts
    pub fn message(mut self, role: &str, parts: &[&str]) -> Self {
        let key = format!("node-{}", self.nodes.len());
        self.nodes.push((
            key,
            json!({"message": {"author": {"role": role}, "content": {"parts": parts}}}),
        ));
        self
    }

    /// Add a user message
    pub fn user(self, text: &str) -> Self {
        self.message("user", &[text])
    }

    /// Add an assistant message
    pub fn assistant(self, text: &str) -> Self {
        self.message("assistant", &[text])
    }

    /// Add a raw mapping node
    pub fn raw_node(mut self, node: Value) -> Self {
        let key = format!("node-{}", self.nodes.len());
        self.nodes.push((key, node));
        self
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        let mut mapping = serde_json::Map::new();
        for (key, node) in &self.nodes {
            mapping.insert(key.clone(), node.clone());
        }

        let mut conversation = serde_json::Map::new();
        if let Some(id) = &self.id {
            conversation.insert("id".to_string(), json!(id));
        }
        if let Some(title) = &self.title {
            conversation.insert("title".to_string(), json!(title));
        }
        if let Some(create_time) = self.create_time {
            conversation.insert("create_time".to_string(), json!(create_time));
        }
        conversation.insert("mapping".to_string(), Value::Object(mapping));
        Value::Object(conversation)
    }
}

/// Render an OpenAI API message array
pub fn api_messages(turns: &[(&str, &str)]) -> String {
    let items: Vec<Value> =
        turns.iter().map(|(role, content)| json!({"role": role, "content": content})).collect();
    Value::Array(items).to_string()
}

/// Render a text transcript from (prefix, text) turns, one line per turn
pub fn transcript(turns: &[(&str, &str)]) -> String {
    turns.iter().map(|(prefix, text)| format!("{} {}", prefix, text)).collect::<Vec<_>>().join("\n")
}

/// Paths of every file directly under `dir`, sorted
pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| entry.expect("Failed to read entry").path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

/// Helper to create an empty export directory
pub fn empty_export_dir() -> TempDir {
    ExportDirBuilder::new().build()
}

/// Helper to create a directory with one export per supported service
pub fn realistic_export_dir() -> TempDir {
    ExportDirBuilder::new()
        .with_chatgpt_export(
            "chatgpt.json",
            &[
                ChatGptConversationBuilder::new("gpt-1")
                    .title("Ownership basics")
                    .create_time(1_700_000_100.0)
                    .user("How does ownership work in Rust?")
                    .assistant("Each value has a single owner."),
                ChatGptConversationBuilder::new("gpt-2")
                    .title("Dinner ideas")
                    .create_time(1_600_000_000.0)
                    .user("What should I cook tonight?")
                    .assistant("Try a mushroom risotto."),
            ],
        )
        .with_file(
            "claude.txt",
            transcript(&[
                ("Human:", "Explain Rust lifetimes briefly."),
                ("Assistant:", "Lifetimes name how long references stay valid."),
            ]),
        )
        .with_file(
            "gemini.txt",
            transcript(&[("User:", "Plan a hike"), ("Gemini:", "Start early.")]),
        )
        .with_file("grok.txt", transcript(&[("You:", "Any news?"), ("Grok:", "Plenty.")]))
        .with_api_messages(
            "openai.json",
            &[("system", "You are helpful."), ("user", "Is RUST fast?"), ("assistant", "Yes.")],
        )
        .build()
}
