//! Chat command implementations

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use purse_core::{
    models::{Message, Role, Transaction},
    store::{manual_entry, parse_amount, parse_date},
    Session,
};

const CHAT_HELP: &str = "Commands:
  /add <date|today> <category> <amount> [description]   Add a transaction
                                                       (+expense, -saving)
  /history                                             Show the conversation
  /help                                                Show this help
  /quit                                                Leave the chat
Anything else is sent to the assistant.";

/// A line of chat input
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    Add(Transaction),
    History,
    Help,
    Quit,
    Message(String),
    Empty,
}

/// Parse one line of chat input
pub fn parse_chat_line(line: &str) -> Result<ChatCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ChatCommand::Empty);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Ok(ChatCommand::Message(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    match parts.next().unwrap_or("") {
        "add" => parse_add(&parts.collect::<Vec<_>>()).map(ChatCommand::Add),
        "history" => Ok(ChatCommand::History),
        "help" => Ok(ChatCommand::Help),
        "quit" | "exit" => Ok(ChatCommand::Quit),
        other => anyhow::bail!("Unknown command: /{}. Type /help for commands", other),
    }
}

/// Parse `/add` arguments into a transaction
fn parse_add(args: &[&str]) -> Result<Transaction> {
    let [date, category, amount, description @ ..] = args else {
        anyhow::bail!("Usage: /add <date|today> <category> <amount> [description]");
    };

    let date = if date.eq_ignore_ascii_case("today") {
        None
    } else {
        Some(parse_date(date).context("Invalid date")?)
    };
    let amount = parse_amount(amount).context("Invalid amount")?;
    let description = description.join(" ");

    Ok(manual_entry(
        date,
        Some(*category),
        amount,
        Some(description.as_str()),
    )?)
}

/// Render the conversation, marking the user's messages
pub fn render_history(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| match m.role {
            Role::User => format!("You: {}", m.text),
            Role::Assistant => m.text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn cmd_ask(session: &mut Session, message: &str) -> Result<()> {
    let reply = session
        .ask(message)
        .ok_or_else(|| anyhow::anyhow!("Message is empty"))?;
    println!("{}", reply.text);
    Ok(())
}

/// Run the interactive chat loop until end of input or /quit
pub fn run_chat<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    if let Some(greeting) = session.messages().first() {
        writeln!(out, "💬 {}", greeting.text)?;
        writeln!(out, "   Type /help for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("Failed to read input")?;

        let command = match parse_chat_line(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "⚠️  {:#}", e)?;
                continue;
            }
        };

        match command {
            ChatCommand::Empty => {}
            ChatCommand::Quit => break,
            ChatCommand::Help => writeln!(out, "{}", CHAT_HELP)?,
            ChatCommand::History => writeln!(out, "{}", render_history(session.messages()))?,
            ChatCommand::Add(tx) => {
                writeln!(
                    out,
                    "✅ Transaction added: {} {} {}",
                    tx.date, tx.category, tx.amount
                )?;
                session.add_transaction(tx);
            }
            ChatCommand::Message(text) => {
                if let Some(reply) = session.ask(&text) {
                    writeln!(out, "{}", reply.text)?;
                    writeln!(out)?;
                }
            }
        }
    }

    Ok(())
}

pub fn cmd_chat(session: &mut Session) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_chat(session, stdin.lock(), stdout.lock())
}
