//! # Menu Loop
//!
//! Reads choices line by line and dispatches them to the commands.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render menu ──► read choice                                            │
//! │                    │                                                    │
//! │                    ├── not a number ──► "Invalid input: …" ──► again    │
//! │                    ├── 1..=5 ─────────► prompt, run command, print      │
//! │                    ├── other ─────────► "Invalid choice …" ──► again    │
//! │                    └── 0 or end of input ──► save both files, goodbye   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command failures print `Error: <message>` on the error stream and the
//! menu comes back. Only a failing terminal stream ends the loop early.

use std::io::{self, BufRead, Write};

use rail_core::validation::parse_menu_number;
use rail_core::ValidationError;
use tracing::debug;

use crate::commands::{booking, train};
use crate::error::AppError;
use crate::state::Session;
use crate::view;

/// Input and output streams for one run.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

/// What a prompt produced.
enum Input<T> {
    Value(T),
    /// Already reported to the user
    Invalid,
    /// Input stream closed
    Closed,
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Console { input, out, err }
    }

    /// Hands back the streams, mainly so tests can inspect the output.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }

    /// One line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn read_text(&mut self, prompt: &str) -> io::Result<Input<String>> {
        self.prompt(prompt)?;
        Ok(match self.read_line()? {
            Some(line) => Input::Value(line),
            None => Input::Closed,
        })
    }

    fn read_number(&mut self) -> io::Result<Input<u32>> {
        let Some(line) = self.read_line()? else {
            return Ok(Input::Closed);
        };
        match parse_menu_number(&line) {
            Ok(number) => Ok(Input::Value(number)),
            Err(e) => {
                self.report_invalid_number(&e)?;
                Ok(Input::Invalid)
            }
        }
    }

    fn report_invalid_number(&mut self, err: &ValidationError) -> io::Result<()> {
        writeln!(self.err, "Invalid input: {err}")?;
        writeln!(self.err, "Please enter a valid number.")
    }

    fn report(&mut self, err: &AppError) -> io::Result<()> {
        debug!(code = %err.code, message = %err.message, "Command failed");
        writeln!(self.err, "Error: {err}")
    }
}

/// Runs the menu until the user exits or input ends, then saves.
pub fn run_menu<R, W, E>(session: &mut Session, console: &mut Console<R, W, E>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        view::render_menu(&mut console.out)?;

        let choice = match console.read_number()? {
            Input::Value(choice) => choice,
            Input::Invalid => {
                writeln!(console.out, "Please try again.")?;
                continue;
            }
            Input::Closed => break,
        };
        debug!(choice, "Menu choice");

        let flow = match choice {
            0 => Flow::Exit,
            1 => display_trains(session, console)?,
            2 => show_availability(session, console)?,
            3 => book(session, console)?,
            4 => cancel(session, console)?,
            5 => show_ticket(session, console)?,
            _ => {
                writeln!(
                    console.err,
                    "Invalid choice. Please enter a number between 0 and 5."
                )?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    session.save(&mut console.out, &mut console.err)?;
    writeln!(
        console.out,
        "Thank you for using Railway Reservation System. Goodbye!"
    )?;
    console.out.flush()
}

// =============================================================================
// Menu Actions
// =============================================================================

fn display_trains<R: BufRead, W: Write, E: Write>(
    session: &Session,
    console: &mut Console<R, W, E>,
) -> io::Result<Flow> {
    view::render_trains(&mut console.out, &train::list_trains(session))?;
    Ok(Flow::Continue)
}

fn show_availability<R: BufRead, W: Write, E: Write>(
    session: &Session,
    console: &mut Console<R, W, E>,
) -> io::Result<Flow> {
    console.prompt("Enter Train ID: ")?;
    let train_id = match console.read_number()? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };

    match train::check_seat_availability(session, train_id) {
        Ok(availability) => view::render_availability(&mut console.out, &availability)?,
        Err(e) => console.report(&e)?,
    }
    Ok(Flow::Continue)
}

fn book<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    console: &mut Console<R, W, E>,
) -> io::Result<Flow> {
    console.prompt("Enter Train ID: ")?;
    let train_id = match console.read_number()? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };
    let name = match console.read_text("Enter Passenger Name: ")? {
        Input::Value(name) => name,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };

    match booking::book_ticket(session, train_id, &name) {
        Ok(ticket) => {
            writeln!(console.out, "Ticket booked successfully!")?;
            view::render_ticket(&mut console.out, &ticket)?;
        }
        Err(e) => {
            console.report(&e)?;
            writeln!(console.err, "Ticket booking failed.")?;
        }
    }
    Ok(Flow::Continue)
}

fn cancel<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    console: &mut Console<R, W, E>,
) -> io::Result<Flow> {
    let booking_id = match console.read_text("Enter Booking ID: ")? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };

    match booking::cancel_ticket(session, &booking_id) {
        Ok(ticket) => writeln!(
            console.out,
            "Ticket with Booking ID {} cancelled successfully!",
            ticket.booking_id()
        )?,
        Err(e) => console.report(&e)?,
    }
    Ok(Flow::Continue)
}

fn show_ticket<R: BufRead, W: Write, E: Write>(
    session: &Session,
    console: &mut Console<R, W, E>,
) -> io::Result<Flow> {
    let booking_id = match console.read_text("Enter Booking ID: ")? {
        Input::Value(id) => id,
        Input::Invalid => return Ok(Flow::Continue),
        Input::Closed => return Ok(Flow::Exit),
    };

    match booking::check_ticket_status(session, &booking_id) {
        Ok(ticket) => {
            writeln!(console.out, "Ticket found! Here are the details:")?;
            view::render_ticket(&mut console.out, &ticket)?;
        }
        Err(e) => console.report(&e)?,
    }
    Ok(Flow::Continue)
}

// =============================================================================
// Unit Tests
// =============================================================================
