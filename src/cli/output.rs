//! Text and JSON rendering for command results.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::error::IngestError;
use crate::ingest::IngestReport;
use crate::models::{RecentChats, SearchResponse, ServiceInfo, Stats};
use crate::utils::format_epoch_seconds;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a IngestReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn print_ingest(
    results: &[(PathBuf, Result<IngestReport, IngestError>)],
    json: bool,
) -> Result<()> {
    if json {
        let rows: Vec<FileResult<'_>> = results
            .iter()
            .map(|(path, result)| FileResult {
                path: path.display().to_string(),
                report: result.as_ref().ok(),
                error: result.as_ref().err().map(ToString::to_string),
            })
            .collect();
        return print_json(&rows);
    }

    let mut last_stats = None;
    for (path, result) in results {
        match result {
            Ok(report) => {
                println!(
                    "{}: {} ({} messages, {} conversations)",
                    path.display(),
                    report.format,
                    report.messages,
                    report.conversations
                );
                for failure in &report.failures {
                    println!("  skipped {}: {}", failure.item, failure.reason);
                }
                last_stats = Some(report.stats);
            }
            Err(e) => println!("{}: error: {}", path.display(), e),
        }
    }

    let stats = last_stats.unwrap_or_default();
    println!();
    println!("Total messages: {}", stats.messages);
    println!("Total conversations: {}", stats.conversations);
    Ok(())
}

pub fn print_search(response: &SearchResponse, json: bool) -> Result<()> {
    if json {
        return print_json(response);
    }

    println!("{} result(s) for {:?}", response.total, response.query);
    for hit in &response.results {
        println!();
        println!(
            "[{}] {} / {} ({})",
            hit.message.service,
            hit.message.conversation_title,
            hit.message.role,
            format_epoch_seconds(hit.message.timestamp)
        );
        println!("  {}", hit.highlighted_content);
    }
    Ok(())
}

pub fn print_recent(recent: &RecentChats, json: bool) -> Result<()> {
    if json {
        return print_json(recent);
    }

    if recent.summaries.is_empty() {
        println!("No conversations.");
        return Ok(());
    }
    for summary in &recent.summaries {
        println!(
            "{} [{}] {} ({} messages)",
            format_epoch_seconds(summary.create_time),
            summary.service,
            summary.title,
            summary.message_count
        );
        if !summary.user_message.is_empty() {
            println!("  user: {}", summary.user_message);
        }
        if !summary.assistant_message.is_empty() {
            println!("  assistant: {}", summary.assistant_message);
        }
    }
    Ok(())
}

pub fn print_stats(stats: &Stats, json: bool) -> Result<()> {
    if json {
        return print_json(stats);
    }

    println!("Chat Corpus Statistics");
    println!("======================");
    println!("Total messages: {}", stats.total_messages);
    println!("Total conversations: {}", stats.total_conversations);
    println!("Total searches: {}", stats.total_searches);
    if !stats.service_breakdown.is_empty() {
        println!();
        for (service, counts) in &stats.service_breakdown {
            println!(
                "  {}: {} messages, {} conversations",
                service, counts.messages, counts.conversations
            );
        }
    }
    Ok(())
}

pub fn print_services(services: &[ServiceInfo], json: bool) -> Result<()> {
    if json {
        return print_json(services);
    }

    for service in services {
        println!("{:<12} {:<12} {}", service.id, service.name, service.formats.join(", "));
    }
    Ok(())
}
