//! Interactive menu session around one [`EventStore`].

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use datebook::{CalendarDate, EventStore};

use crate::input::TokenReader;

const MENU: &str = "\n1. Add Event\n2. View Events\n3. Display Calendar\n4. Exit\nEnter your choice: ";

/// What a single menu action asks the loop to do next.
enum Flow {
    Continue,
    Exit,
}

/// Owns the event store for the lifetime of one interactive session.
#[derive(Default)]
pub struct Session {
    store: EventStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the menu loop until the user picks Exit or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        let mut reader = TokenReader::new(input);
        tracing::info!("interactive session started");

        loop {
            prompt(&mut out, MENU)?;
            let Some(choice) = reader.next_token()? else {
                break;
            };
            tracing::debug!(%choice, "menu choice");

            let flow = match choice.as_str() {
                "1" => self.add(&mut reader, &mut out)?,
                "2" => self.view(&mut reader, &mut out)?,
                "3" => self.calendar(&mut reader, &mut out)?,
                "4" => Flow::Exit,
                _ => {
                    writeln!(out, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        tracing::info!(events = self.store.len(), "interactive session ended");
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, reader: &mut TokenReader<R>, out: &mut W) -> Result<Flow> {
        prompt(out, "Enter date (day month year): ")?;
        let Some(date) = read_date(reader, out)? else {
            return Ok(Flow::Exit);
        };
        prompt(out, "Enter event description: ")?;
        let Some(description) = reader.rest_of_line()? else {
            return Ok(Flow::Exit);
        };

        if let Some(date) = date {
            self.store.add_event(date, description);
            writeln!(out, "Event added.")?;
        }
        Ok(Flow::Continue)
    }

    fn view<R: BufRead, W: Write>(&self, reader: &mut TokenReader<R>, out: &mut W) -> Result<Flow> {
        prompt(out, "Enter date (day month year): ")?;
        match read_date(reader, out)? {
            None => Ok(Flow::Exit),
            Some(None) => Ok(Flow::Continue),
            Some(Some(date)) => {
                write!(out, "{}", self.store.render_day(&date))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn calendar<R: BufRead, W: Write>(&self, reader: &mut TokenReader<R>, out: &mut W) -> Result<Flow> {
        prompt(out, "Enter month and year: ")?;
        let (Some(month), Some(year)) = (reader.next_token()?, reader.next_token()?) else {
            return Ok(Flow::Exit);
        };

        let rendered = parse_number::<u32>(&month)
            .and_then(|month| Ok((month, parse_number::<i32>(&year)?)))
            .and_then(|(month, year)| {
                self.store
                    .display_calendar(month, year)
                    .map_err(|e| e.to_string())
            });
        match rendered {
            Ok(text) => write!(out, "{}", text)?,
            Err(message) => writeln!(out, "Error: {}", message)?,
        }
        Ok(Flow::Continue)
    }
}

/// Read three tokens as a date.
///
/// Returns `None` at end of input, `Some(None)` when the date was rejected (the
/// reason has already been printed), and `Some(Some(date))` otherwise.
fn read_date<R: BufRead, W: Write>(
    reader: &mut TokenReader<R>,
    out: &mut W,
) -> Result<Option<Option<CalendarDate>>> {
    let (Some(day), Some(month), Some(year)) =
        (reader.next_token()?, reader.next_token()?, reader.next_token()?)
    else {
        return Ok(None);
    };

    let parsed = parse_number::<u32>(&day).and_then(|day| {
        let month = parse_number::<u32>(&month)?;
        let year = parse_number::<i32>(&year)?;
        CalendarDate::new(day, month, year).map_err(|e| e.to_string())
    });

    match parsed {
        Ok(date) => Ok(Some(Some(date))),
        Err(message) => {
            tracing::warn!(%message, "rejected date");
            writeln!(out, "Error: {}", message)?;
            Ok(Some(None))
        }
    }
}

fn parse_number<T: std::str::FromStr>(token: &str) -> std::result::Result<T, String> {
    token
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", token))
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush().context("Failed to flush stdout")
}
