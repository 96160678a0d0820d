//! Assistant CLI commands

use std::thread;

use crate::assistant::{insights, Assistant, InsightKind};
use crate::error::SpenceResult;
use crate::session::Session;

/// Handle the ask command
///
/// Sleeps for the reply's simulated typing delay before printing, unless
/// `instant` is set.
pub fn handle_ask_command(session: &Session, question: &str, instant: bool) -> SpenceResult<()> {
    let assistant = Assistant::new(session);

    println!("{}", Assistant::greeting());
    println!();
    println!("> {}", question);

    let reply = assistant.respond(question)?;
    if !instant {
        thread::sleep(reply.delay);
    }

    println!();
    println!("{}", reply.text);

    Ok(())
}

/// Handle the insights command
pub fn handle_insights_command(session: &Session) -> SpenceResult<()> {
    let cards = insights(session)?;

    if cards.is_empty() {
        println!("No insights for this session.");
        return Ok(());
    }

    println!("Smart Insights");
    for card in cards {
        let marker = match card.kind {
            InsightKind::Warning => "!",
            InsightKind::Info => "i",
            InsightKind::Success => "+",
        };
        println!("[{}] {}", marker, card.title);
        println!("    {}", card.detail);
    }

    Ok(())
}
