//! A terminal front-end for the legal-aid demo session.

#[macro_use]
extern crate tracing;

mod command;

use std::io::Write as _;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use lexaid::core::conversation::QUICK_QUESTIONS;
use lexaid::core::intake::Phase;
use lexaid::core::{
    ConversationState, ErrorKind, IntakeState, Notice, NoticeLevel,
};
use lexaid::model::{Language, Sender};
use lexaid::{Session, SessionBuilder, SessionConfig, candidate_from_path};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::select;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::sleep;

use crate::command::{Command, HELP};

enum SessionEvent {
    Conversation(ConversationState),
    Intake(IntakeState),
    Notice(Notice),
}

type Input = Lines<BufReader<Stdin>>;

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let session = SessionBuilder::with_config(SessionConfig::from_env())
        .on_conversation({
            let event_tx = event_tx.clone();
            move |state| {
                event_tx
                    .send(SessionEvent::Conversation(state.clone()))
                    .ok();
            }
        })
        .on_intake({
            let event_tx = event_tx.clone();
            move |state| {
                event_tx.send(SessionEvent::Intake(state.clone())).ok();
            }
        })
        .on_notice({
            let event_tx = event_tx.clone();
            move |notice| {
                event_tx.send(SessionEvent::Notice(notice)).ok();
            }
        })
        .build();

    if let Ok(state) = session.conversation().snapshot().await {
        for message in state.history() {
            print_reply(message.text());
        }
    }
    println!("{}", "Type /help for commands.".dimmed());

    let mut input = BufReader::new(io::stdin()).lines();

    loop {
        drain_events(&mut event_rx);
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line(&mut input).await else {
            break;
        };
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                print_error(&message);
                continue;
            }
        };

        match command {
            Command::Send(text) => {
                if !ask(&session, &mut event_rx, &text).await {
                    break;
                }
            }
            Command::SendDraft => {
                let draft = match session.conversation().snapshot().await {
                    Ok(state) => state.draft().to_owned(),
                    Err(err) => {
                        print_error(&err.to_string());
                        break;
                    }
                };
                if !ask(&session, &mut event_rx, &draft).await {
                    break;
                }
            }
            Command::Upload(path) => {
                if !upload(&session, &mut event_rx, &path).await {
                    break;
                }
            }
            Command::Remove => match session.intake().remove().await {
                Ok(()) => println!("{}", "Document removed.".dimmed()),
                Err(err) => print_error(&err.to_string()),
            },
            Command::Status => print_status(&session).await,
            Command::Language(None) => {
                let current = session
                    .conversation()
                    .snapshot()
                    .await
                    .map(|state| state.language())
                    .unwrap_or_default();
                for language in Language::ALL {
                    let marker = if language == current { "*" } else { " " };
                    println!(
                        "{marker} {:<4}{}",
                        language.iso_code(),
                        language.label()
                    );
                }
            }
            Command::Language(Some(code)) => {
                match session.conversation().set_language(&code).await {
                    Ok(()) => {
                        let label = Language::from_code(&code)
                            .unwrap_or_default()
                            .label();
                        let message = format!("Language set to {label}.");
                        println!("{}", message.dimmed());
                    }
                    Err(err) => print_error(&err.to_string()),
                }
            }
            Command::Quick(None) => {
                for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
                    println!("{}. {question}", i + 1);
                }
            }
            Command::Quick(Some(n)) => {
                let Some(question) = QUICK_QUESTIONS.get(n - 1) else {
                    print_error(&format!(
                        "there are only {} quick questions",
                        QUICK_QUESTIONS.len()
                    ));
                    continue;
                };
                match session.conversation().quick_fill(*question).await {
                    Ok(()) => {
                        println!("{} {question}", "Draft:".dimmed());
                        println!("{}", "Type /send to ask it.".dimmed());
                    }
                    Err(err) => print_error(&err.to_string()),
                }
            }
            Command::Glossary { query, category } => {
                print_glossary(&session, &query, &category)
            }
            Command::Dump => dump(&session).await,
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    session.shutdown();
}

/// Submits a question and waits for the assistant's reply.
///
/// Returns `false` once the session can no longer be used.
async fn ask(
    session: &Session,
    event_rx: &mut UnboundedReceiver<SessionEvent>,
    text: &str,
) -> bool {
    drain_events(event_rx);
    if let Err(err) = session.send_message(text).await {
        print_error(&err.to_string());
        return err.kind() != ErrorKind::Closed;
    }

    let Some(event) = wait_for(event_rx, "🤔 Thinking...", |event| {
        matches!(
            event,
            SessionEvent::Conversation(state) if !state.is_busy()
        )
    })
    .await
    else {
        return false;
    };

    if let SessionEvent::Conversation(state) = event {
        match state.last_message() {
            Some(reply) if reply.sender() == Sender::Assistant => {
                print_reply(reply.text());
            }
            _ => {}
        }
    }
    true
}

/// Uploads a file and waits until it is processed.
///
/// Returns `false` once the session can no longer be used.
async fn upload(
    session: &Session,
    event_rx: &mut UnboundedReceiver<SessionEvent>,
    path: &Path,
) -> bool {
    let file = match candidate_from_path(path).await {
        Ok(file) => file,
        Err(err) => {
            print_error(&format!("cannot read {}: {err}", path.display()));
            return true;
        }
    };

    drain_events(event_rx);
    if let Err(err) = session.intake().accept(file).await {
        // Rejections also arrive as notices.
        debug!("upload rejected: {err}");
        drain_events(event_rx);
        return err.kind() != ErrorKind::Closed;
    }

    let event = wait_for(event_rx, "📄 Processing document...", |event| {
        matches!(event, SessionEvent::Notice(_))
            || matches!(
                event,
                SessionEvent::Intake(state) if !state.is_processing()
            )
    })
    .await;
    match event {
        Some(SessionEvent::Notice(notice)) => {
            print_notice(&notice);
            true
        }
        Some(_) => true,
        None => false,
    }
}

/// Shows a spinner until an event matches `done`, and returns that event.
async fn wait_for(
    event_rx: &mut UnboundedReceiver<SessionEvent>,
    message: &'static str,
    mut done: impl FnMut(&SessionEvent) -> bool,
) -> Option<SessionEvent> {
    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(progress_style);
    progress_bar.set_message(message);

    loop {
        progress_bar.inc(1);

        let sleep = sleep(Duration::from_millis(100));
        let event = select! {
            event = event_rx.recv() => {
                let Some(event) = event else {
                    progress_bar.finish_and_clear();
                    return None;
                };
                event
            },
            _ = sleep => {
                continue;
            }
        };

        if done(&event) {
            progress_bar.finish_and_clear();
            return Some(event);
        }
        if let SessionEvent::Notice(notice) = &event {
            progress_bar.suspend(|| print_notice(notice));
        }
    }
}

/// Prints queued notices and drops stale snapshots.
fn drain_events(event_rx: &mut UnboundedReceiver<SessionEvent>) {
    while let Ok(event) = event_rx.try_recv() {
        if let SessionEvent::Notice(notice) = event {
            print_notice(&notice);
        }
    }
}

async fn read_line(input: &mut Input) -> Option<String> {
    match input.next_line().await {
        Ok(line) => line,
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

async fn print_status(session: &Session) {
    let (chat, intake) = match (
        session.conversation().snapshot().await,
        session.intake().snapshot().await,
    ) {
        (Ok(chat), Ok(intake)) => (chat, intake),
        (Err(err), _) | (_, Err(err)) => {
            print_error(&err.to_string());
            return;
        }
    };

    let bar = BAR_CHAR.bright_blue();
    println!("{bar}Language: {}", chat.language().label());
    println!("{bar}Messages: {}", chat.history().len());
    if !chat.draft().is_empty() {
        println!("{bar}Draft:    {}", chat.draft());
    }
    match (intake.phase(), intake.current()) {
        (Phase::Processing, Some(doc)) => println!(
            "{bar}Document: {} ({}), processing",
            doc.name(),
            doc.display_size()
        ),
        (_, Some(doc)) => println!(
            "{bar}Document: {} ({}), ready",
            doc.name(),
            doc.display_size()
        ),
        (_, None) => println!("{bar}Document: none"),
    }
}

fn print_glossary(session: &Session, query: &str, category: &str) {
    let entries = session.search_glossary(query, category);
    if entries.is_empty() {
        println!(
            "{}",
            "No terms found. Try a different search or category.".dimmed()
        );
        println!(
            "{} {}",
            "Categories:".dimmed(),
            session.glossary().categories().join(", ").dimmed()
        );
        return;
    }

    for entry in entries {
        let bar = BAR_CHAR.bright_magenta();
        println!(
            "{bar}{} {}",
            entry.term.bright_white().bold(),
            format!("[{} · {}]", entry.category, entry.difficulty).dimmed()
        );
        println!("{bar}{}", entry.definition);
        println!("{bar}{} {}", "Simple Example:".italic(), entry.example);
        println!();
    }
}

async fn dump(session: &Session) {
    let (chat, intake) = match (
        session.conversation().snapshot().await,
        session.intake().snapshot().await,
    ) {
        (Ok(chat), Ok(intake)) => (chat, intake),
        (Err(err), _) | (_, Err(err)) => {
            print_error(&err.to_string());
            return;
        }
    };

    let json = serde_json::to_value(&chat).and_then(|chat| {
        let intake = serde_json::to_value(&intake)?;
        serde_json::to_string_pretty(&serde_json::json!({
            "conversation": chat,
            "intake": intake,
        }))
    });
    match json {
        Ok(json) => println!("{json}"),
        Err(err) => error!("failed to serialize the session: {err}"),
    }
}

fn print_reply(text: &str) {
    println!("{}⚖️  {}", BAR_CHAR.bright_cyan(), text.bright_white());
}

fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => println!(
            "{}✅ {}\n{}{}",
            BAR_CHAR.bright_green(),
            notice.title.bold(),
            BAR_CHAR.bright_green(),
            notice.description
        ),
        NoticeLevel::Error => println!(
            "{}❌ {}\n{}{}",
            BAR_CHAR.bright_red(),
            notice.title.bold(),
            BAR_CHAR.bright_red(),
            notice.description
        ),
    }
}

fn print_error(message: &str) {
    eprintln!("{}", message.bright_red());
}
