//! Simple interactive CLI mode
//!
//! Line-based criteria editor without TUI. Each input line is one scheduling
//! tick: the command is applied, then any pending recompute runs.

use crate::core::{CriterionError, Edit};
use crate::filter::Session;
use crate::output::display::{print_session, print_window};
use std::io::{self, Write};
use std::time::Instant;

/// A parsed REPL line
///
/// Criteria are numbered from 1 on screen; indices here are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Add,
    Remove(usize),
    Set { index: usize, edit: Edit },
    More,
    Show,
    Help,
    Quit,
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl ReplCommand {
    /// Parse one input line
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Self::Show);
        };

        match command.to_lowercase().as_str() {
            "add" | "a" => Ok(Self::Add),
            "rm" | "remove" | "del" => {
                let index = parse_index(words.next())?;
                Ok(Self::Remove(index))
            }
            "set" | "s" => {
                let index = parse_index(words.next())?;
                let field = words.next().ok_or("usage: set <n> <field> [value]")?;
                // Letters may legitimately be empty, or contain anything but whitespace
                let value = words.next().unwrap_or_default();
                let edit = Edit::parse(field, value).map_err(|e: CriterionError| e.to_string())?;
                Ok(Self::Set { index, edit })
            }
            "more" | "m" => Ok(Self::More),
            "show" | "ls" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{other}' (try 'help')")),
        }
    }
}

fn parse_index(arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.ok_or("missing criterion number")?;
    let number: usize = arg
        .parse()
        .map_err(|_| format!("'{arg}' is not a criterion number"))?;
    number
        .checked_sub(1)
        .ok_or_else(|| "criteria are numbered from 1".to_string())
}

/// Apply one command to the session and run the tick that follows it
///
/// Returns the loop flow and whether the result set was recomputed.
pub fn execute(session: &mut Session, command: ReplCommand) -> (Flow, bool) {
    match command {
        ReplCommand::Add => session.add_criterion(),
        ReplCommand::Remove(index) => {
            if !session.remove_criterion(index) {
                println!("No criterion #{}", index + 1);
            }
        }
        ReplCommand::Set { index, edit } => {
            if !session.edit_criterion(index, edit) {
                println!("No criterion #{}", index + 1);
            }
        }
        ReplCommand::More => {
            session.load_more();
        }
        ReplCommand::Show => {}
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => return (Flow::Quit, false),
    }

    (Flow::Continue, session.tick(Instant::now()))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Filter - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{}", session.status());
    print_help();
    print_session(session);

    loop {
        let Some(line) = get_user_input("filter")? else {
            println!("\n👋 Bye!\n");
            return Ok(());
        };

        match ReplCommand::parse(&line) {
            Ok(command) => {
                let is_more = command == ReplCommand::More;
                let is_show = command == ReplCommand::Show;
                match execute(session, command) {
                    (Flow::Quit, _) => {
                        println!("\n👋 Bye!\n");
                        return Ok(());
                    }
                    (Flow::Continue, true) => print_session(session),
                    (Flow::Continue, false) if is_show => print_session(session),
                    (Flow::Continue, false) if is_more => print_window(session.engine()),
                    (Flow::Continue, false) => {}
                }
            }
            Err(message) => println!("❌ {message}"),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add                      append an empty criterion");
    println!("  rm <n>                   remove criterion n");
    println!("  set <n> kind <k>         exclude | include | is | not");
    println!("  set <n> scope <s>        all | 1-5");
    println!("  set <n> letters [abc]    letters to test (omit to clear)");
    println!("  more                     show the next page of results");
    println!("  show                     print criteria and results");
    println!("  quit\n");
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}> ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
