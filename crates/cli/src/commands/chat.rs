use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use sqlscout_core::Conversation;
use sqlscout_service::QueryService;

use super::print_outcome;

/// Interactive REPL threading one conversation value across turns.
pub async fn run(service: &QueryService) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut conversation = Conversation::new();

    println!("SQL Scout interactive mode.");
    println!("Ask a question, /reset to clear memory, exit to quit.");

    loop {
        match rl.readline("sqlscout> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                let _ = rl.add_history_entry(line);

                if line == "/reset" {
                    conversation.clear();
                    println!("Conversation memory cleared.");
                    continue;
                }

                match service.ask(line, &mut conversation).await {
                    Ok(outcome) => print_outcome(&outcome),
                    Err(e) => eprintln!("request failed: {e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
