//! # Interactive Session
//!
//! Line-oriented front end over a [`SelectionState`]. Two pages: a
//! welcome screen, then the calculator. After every command that changes
//! the session the whole view is rendered again from the session.

use crate::cli::resolve_subject_key;
use crate::render::{gauge_bar, session_view};
use sgpa_core::{Department, GradeSymbol, Semester, SelectionState, SessionError};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const WELCOME: &str = "Welcome to SGPA Calculator\nType 'start' to begin or 'quit' to leave.";

const HELP: &str = "\
Commands:
  dept <CIVIL|MECH|EEE|ECE|CSE>   select department (clears grades and arrears)
  sem <1-7>                       select semester (clears grades, keeps arrears)
  list | show                     show subjects, grades and result
  grade <N|CODE|NAME> <GRADE>     pick a grade (O, A+, A, B+, B, C, D, E, RA)
  arrear                          open the arrear form
  submit <CODE>                   add an arrear subject
  cancel                          close the arrear form
  calc                            calculate SGPA
  help                            this text
  quit                            leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Welcome,
    Calculator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Start,
    Department(Department),
    Semester(Semester),
    Show,
    Grade { target: String, grade: GradeSymbol },
    OpenArrear,
    Submit(String),
    Cancel,
    Calculate,
    Help,
    Quit,
    Nothing,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, r)| (v, r.trim()));

    let command = match verb.to_ascii_lowercase().as_str() {
        "" => Command::Nothing,
        "start" => Command::Start,
        "dept" | "department" => Command::Department(rest.parse::<Department>().map_err(|e| format!("{e}"))?),
        "sem" | "semester" => Command::Semester(rest.parse::<Semester>().map_err(|e| format!("{e}"))?),
        "list" | "show" => Command::Show,
        "grade" => {
            let Some((target, grade)) = rest.rsplit_once(char::is_whitespace) else {
                return Err("usage: grade <N|CODE|NAME> <GRADE>".to_string());
            };
            let grade = grade.parse::<GradeSymbol>().map_err(|e| format!("{e}"))?;
            Command::Grade {
                target: target.trim().to_string(),
                grade,
            }
        }
        "arrear" => Command::OpenArrear,
        "submit" => {
            if rest.is_empty() {
                return Err("usage: submit <CODE>".to_string());
            }
            Command::Submit(rest.to_string())
        }
        "cancel" => Command::Cancel,
        "calc" | "calculate" => Command::Calculate,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(command)
}

/// Resolve a 1-based index, code or name to a subject display name.
fn resolve_target(state: &SelectionState, target: &str) -> Option<String> {
    if let Ok(index) = target.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| state.combined_subjects().into_iter().nth(i))
            .map(|s| s.name);
    }
    resolve_subject_key(state, target)
}

/// Apply one calculator command. Returns whether to render the view again.
fn execute<W: Write>(state: &mut SelectionState, command: Command, out: &mut W) -> io::Result<bool> {
    match command {
        Command::Start | Command::Nothing => Ok(false),
        Command::Department(department) => {
            state.select_department(department);
            Ok(true)
        }
        Command::Semester(semester) => {
            state.select_semester(semester);
            Ok(true)
        }
        Command::Show => Ok(true),
        Command::Grade { target, grade } => match resolve_target(state, &target) {
            Some(name) => {
                state.set_grade(name, grade.label());
                Ok(true)
            }
            None => {
                writeln!(out, "No subject '{target}' in the current list.")?;
                Ok(false)
            }
        },
        Command::OpenArrear => {
            if state.department().is_none() {
                writeln!(out, "Select a department first.")?;
                return Ok(false);
            }
            state.open_arrear_form();
            Ok(true)
        }
        Command::Submit(code) => {
            if !state.arrear_form().is_open() {
                writeln!(out, "Open the arrear form first with 'arrear'.")?;
                return Ok(false);
            }
            state.edit_arrear_code();
            match state.submit_arrear_form(&code) {
                Ok(subject) => writeln!(out, "Added arrear {} {}.", subject.code, subject.name)?,
                Err(err) => warn!(code = %code.trim(), %err, "arrear rejected"),
            }
            Ok(true)
        }
        Command::Cancel => {
            state.cancel_arrear_form();
            Ok(true)
        }
        Command::Calculate => match state.calculate() {
            Ok(result) => {
                writeln!(out, "SGPA {}  {}", result.average, gauge_bar(result.average))?;
                Ok(true)
            }
            Err(SessionError::IncompleteSelection { ungraded }) => {
                writeln!(
                    out,
                    "Calculate is disabled: {} subject(s) still need a grade.",
                    ungraded.len()
                )?;
                Ok(false)
            }
        },
        Command::Help => {
            writeln!(out, "{HELP}")?;
            Ok(false)
        }
        // Handled by the caller.
        Command::Quit => Ok(false),
    }
}

/// Run the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(mut state: SelectionState, input: R, out: &mut W) -> io::Result<()> {
    let mut page = Page::Welcome;
    writeln!(out, "{WELCOME}")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        debug!(?page, ?command, "command");

        if command == Command::Quit {
            break;
        }

        match page {
            Page::Welcome => {
                if command == Command::Start {
                    page = Page::Calculator;
                    writeln!(out, "{HELP}")?;
                    write!(out, "{}", session_view(&state))?;
                } else if command != Command::Nothing {
                    writeln!(out, "Type 'start' to begin.")?;
                }
            }
            Page::Calculator => {
                if execute(&mut state, command, out)? {
                    write!(out, "{}", session_view(&state))?;
                }
            }
        }
        out.flush()?;
    }

    writeln!(out, "Bye.")?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("start"), Ok(Command::Start));
        assert_eq!(
            parse_command("dept cse"),
            Ok(Command::Department(Department::Cse))
        );
        assert!(parse_command("sem 9").is_err());
        assert_eq!(parse_command("   "), Ok(Command::Nothing));
        assert_eq!(
            parse_command("grade Data Structures a+"),
            Ok(Command::Grade {
                target: "Data Structures".to_string(),
                grade: GradeSymbol::APlus
            })
        );
        assert!(parse_command("grade 1 F").is_err());
        assert!(parse_command("grade").is_err());
        assert!(parse_command("submit").is_err());
        assert!(parse_command("frobnicate").is_err());
    }
}
