// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `kora shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline history.
//! Built-in commands are handled here; everything else is a chat turn.

use std::time::{Duration, Instant};

use colored::Colorize;
use kora_config::KoraConfig;
use kora_core::KoraError;
use kora_persona::PersonalityEngine;
use kora_search::{NEWS_CATEGORIES, NewsDesk};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use crate::setup::assemble;
use crate::status::{print_memory_stats, print_status};

/// Headlines per news digest.
const NEWS_COUNT: usize = 5;

/// How long quitting waits for background writes.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// One line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    Empty,
    Quit,
    Help,
    Status,
    MemoryStats,
    /// `news` or `news <category or topic>`.
    News(Option<&'a str>),
    /// `personality` or `personality <name>`.
    Personality(Option<&'a str>),
    Chat(&'a str),
}

/// Classify a line. Command words are case-insensitive.
pub fn parse_command(line: &str) -> ShellCommand<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellCommand::Empty;
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (trimmed, None),
    };

    match (head.to_lowercase().as_str(), rest) {
        ("quit" | "exit", None) => ShellCommand::Quit,
        ("help", None) => ShellCommand::Help,
        ("status", None) => ShellCommand::Status,
        ("memory", Some(arg)) if arg.eq_ignore_ascii_case("stats") => ShellCommand::MemoryStats,
        ("news", arg) => ShellCommand::News(arg),
        ("personality", arg) => ShellCommand::Personality(arg),
        _ => ShellCommand::Chat(trimmed),
    }
}

/// Runs the `kora shell` interactive REPL.
pub async fn run_shell(config: KoraConfig) -> Result<(), KoraError> {
    let assembled = assemble(&config).await?;
    let mut orchestrator = assembled.orchestrator;
    let news = NewsDesk::new(assembled.search);
    let speak_replies = config.speech.enabled;

    let mut rl = DefaultEditor::new()
        .map_err(|e| KoraError::Internal(format!("failed to initialize readline: {e}")))?;

    let personality = orchestrator.personality_info();
    println!("{}", "kora shell".bold().green());
    println!(
        "Personality: {} ({})",
        personality.name.cyan(),
        personality.style
    );
    println!("Type {} for commands, {} to exit.\n", "help".yellow(), "quit".yellow());
    println!("{}", orchestrator.greeting());

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        };

        let command = parse_command(&line);
        if command != ShellCommand::Empty {
            let _ = rl.add_history_entry(line.as_str());
        }

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => print_help(),
            ShellCommand::Status => {
                let status = orchestrator.status().await;
                print_status(&status, true);
            }
            ShellCommand::MemoryStats => {
                let status = orchestrator.status().await;
                print_memory_stats(&status);
            }
            ShellCommand::News(arg) => {
                let digest = match arg {
                    None => news.latest("general", NEWS_COUNT).await,
                    Some(arg) if NEWS_CATEGORIES.contains(&arg.to_lowercase().as_str()) => {
                        news.latest(arg, NEWS_COUNT).await
                    }
                    Some(topic) => news.by_topic(topic).await,
                };
                println!("\n{digest}");
                if speak_replies {
                    orchestrator.speak("Here are the latest news headlines.");
                }
            }
            ShellCommand::Personality(None) => {
                let current = orchestrator.personality_info().name;
                println!("\nAvailable personalities:");
                for p in PersonalityEngine::available() {
                    let name = p.to_string();
                    if name == current {
                        println!("  {} {}", "*".green(), name.green());
                    } else {
                        println!("    {name}");
                    }
                }
            }
            ShellCommand::Personality(Some(name)) => {
                if orchestrator.set_personality(name) {
                    let info = orchestrator.personality_info();
                    println!("Personality set to {} ({}).", info.name.cyan(), info.style);
                    println!("{}", orchestrator.greeting());
                } else {
                    println!(
                        "{} unknown personality '{name}'; still {}.",
                        "note:".yellow(),
                        orchestrator.personality_info().name
                    );
                }
            }
            ShellCommand::Chat(text) => {
                let started = Instant::now();
                let reply = orchestrator.smart_response(text).await;
                println!("\n{}", "kora:".bold().cyan());
                println!("{reply}");
                if config.agent.debug {
                    println!(
                        "{}",
                        format!("response time: {:.2}s", started.elapsed().as_secs_f64()).dimmed()
                    );
                }
                if speak_replies {
                    orchestrator.speak(&reply);
                }
            }
        }
    }

    println!("Goodbye! Thanks for chatting.");
    info!("shell exiting");
    orchestrator.shutdown(SHUTDOWN_GRACE).await;
    Ok(())
}

fn print_help() {
    println!();
    println!("  {:<24}Exit", "quit");
    println!("  {:<24}System status overview", "status");
    println!("  {:<24}Latest headlines", "news [category|topic]");
    println!("  {:<24}Memory and learning counters", "memory stats");
    println!("  {:<24}List or switch personalities", "personality [name]");
    println!("  {:<24}Anything else is sent to the assistant", "<text>");
    println!("\n  News categories: {}", NEWS_CATEGORIES.join(", "));
}
