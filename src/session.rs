// src/session.rs
//! The interactive loop.
//!
//! ```text
//! AwaitingState --known state--> AwaitingSelection --"back"--> AwaitingState
//!       |                          |   ^
//!       |                          +---+ number in range: show nearby places
//!       +------ "exit" ------------+------> Terminated
//! ```
//!
//! The sites fetched when a state is entered are held for the whole of
//! `AwaitingSelection`; picking a number never re-scrapes the state.
use std::io::{self, BufRead, Write};

use url::Url;

use crate::{
    config::AppOptions,
    core::{net::Fetch, sanitize::{normalize_input, parse_menu_number}},
    data::{Site, StateDirectory, StateEntry},
    error::{Error, InputError},
    places::PlacesQuery,
    progress::Progress,
    scrape,
};

const RULE: &str = "--------------------------------------------";
const STATE_PROMPT: &str = r#"Enter a state name (e.g. Michigan, michigan) or "exit": "#;
const SELECTION_PROMPT: &str = r#"Choose the number for detail search or "exit" or "back": "#;

/// Sites of the state currently on screen, in listing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub state: String,
    pub sites: Vec<Site>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingState,
    AwaitingSelection(Selection),
    Terminated,
}

pub struct Session<'a> {
    fetch: &'a dyn Fetch,
    base: Url,
    directory: StateDirectory,
    places: PlacesQuery,
    phase: Phase,
}

impl<'a> Session<'a> {
    pub fn new(fetch: &'a dyn Fetch, options: &AppOptions, directory: StateDirectory) -> Self {
        Self {
            fetch,
            base: options.site.base_url.clone(),
            directory,
            places: PlacesQuery::new(options.places.clone()),
            phase: Phase::AwaitingState,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    pub fn prompt(&self) -> &'static str {
        match self.phase {
            Phase::AwaitingSelection(_) => SELECTION_PROMPT,
            _ => STATE_PROMPT,
        }
    }

    /// Handle one line of input. Only terminal I/O errors escape; everything
    /// else is reported on `out` and the session stays usable.
    pub fn handle(&mut self, line: &str, out: &mut dyn Write) -> io::Result<()> {
        let input = normalize_input(line);
        let phase = std::mem::replace(&mut self.phase, Phase::Terminated);
        self.phase = match phase {
            Phase::AwaitingState => self.on_state_input(&input, out)?,
            Phase::AwaitingSelection(sel) => self.on_selection_input(sel, &input, out)?,
            Phase::Terminated => Phase::Terminated,
        };
        Ok(())
    }

    /// Input closed: leave like "exit" does.
    pub fn end_of_input(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if !self.is_terminated() {
            logf!("input closed");
            self.phase = goodbye(out)?;
        }
        Ok(())
    }

    fn lookup_state(&self, input: &str) -> Result<StateEntry, InputError> {
        self.directory
            .lookup(input)
            .cloned()
            .ok_or_else(|| InputError::UnknownState(s!(input)))
    }

    fn on_state_input(&self, input: &str, out: &mut dyn Write) -> io::Result<Phase> {
        let entry = match self.lookup_state(input) {
            Ok(entry) => entry,
            Err(_) if is_word(input, "exit") => return goodbye(out),
            Err(e) => {
                report(out, &Error::from(e))?;
                return Ok(Phase::AwaitingState);
            }
        };

        logf!("loading sites for {}", entry.name);
        let (loaded, broken) = {
            let mut progress = TerminalProgress::new(&mut *out);
            let loaded =
                scrape::collect_state_sites(self.fetch, &self.base, &entry.url, Some(&mut progress));
            (loaded, progress.take_error())
        };
        if let Some(e) = broken {
            return Err(e);
        }

        let sites = match loaded {
            Ok(sites) => sites,
            Err(e) => {
                report(out, &e)?;
                return Ok(Phase::AwaitingState);
            }
        };

        if sites.is_empty() {
            writeln!(out, "\nNo national sites listed for {}", entry.name)?;
            return Ok(Phase::AwaitingState);
        }

        writeln!(out, "\n{RULE}")?;
        writeln!(out, "List of national sites in {}", entry.name)?;
        writeln!(out, "{RULE}")?;
        for (i, site) in sites.iter().enumerate() {
            writeln!(out, "[{}] {}", i + 1, site.info())?;
        }
        writeln!(out, "{RULE}")?;

        Ok(Phase::AwaitingSelection(Selection { state: entry.name, sites }))
    }

    fn on_selection_input(
        &self,
        sel: Selection,
        input: &str,
        out: &mut dyn Write,
    ) -> io::Result<Phase> {
        if is_word(input, "exit") {
            return goodbye(out);
        }
        if is_word(input, "back") {
            logd!("leaving {}", sel.state);
            return Ok(Phase::AwaitingState);
        }

        let index = match parse_selection(input, sel.sites.len()) {
            Ok(i) => i,
            Err(e) => {
                report(out, &Error::from(e))?;
                return Ok(Phase::AwaitingSelection(sel));
            }
        };

        let site = &sel.sites[index];
        writeln!(out, "\nFetching")?;
        match self.places.find_nearby(self.fetch, &site.postal_code) {
            Ok(places) => {
                writeln!(out, "{RULE}")?;
                writeln!(out, "Places near {}", site.name)?;
                writeln!(out, "{RULE}")?;
                for place in &places {
                    writeln!(out, "{place}")?;
                }
                writeln!(out, "{RULE}")?;
            }
            Err(e) => report(out, &e)?,
        }

        Ok(Phase::AwaitingSelection(sel))
    }
}

/// Map a 1-based menu number onto an index into a list of `len` sites.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, InputError> {
    match parse_menu_number(input) {
        Some(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(InputError::InvalidSelection { input: s!(input), len }),
    }
}

/// Drive `session` over line input until it terminates or input runs out.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_>, mut input: R, mut out: W) -> io::Result<()> {
    while !session.is_terminated() {
        write!(out, "\n{}", session.prompt())?;
        out.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            session.end_of_input(&mut out)?;
            break;
        }
        match String::from_utf8(buf) {
            Ok(line) => session.handle(&line, &mut out)?,
            // undecodable bytes are bad input, not a broken terminal
            Err(_) => report(&mut out, &Error::from(InputError::NotText))?,
        }
    }
    out.flush()
}

fn is_word(input: &str, word: &str) -> bool {
    input.eq_ignore_ascii_case(word)
}

fn goodbye(out: &mut dyn Write) -> io::Result<Phase> {
    writeln!(out, "\nGoodbye!")?;
    Ok(Phase::Terminated)
}

fn report(out: &mut dyn Write, err: &Error) -> io::Result<()> {
    match err {
        Error::Input(e) => logd!("input rejected: {e:?}"),
        other => loge!("{other}"),
    }
    writeln!(out, "\n[Error] {err}")
}

/// Prints a "Fetching" line per site page while a state loads.
/// `Progress` cannot fail, so the first write error is held until the
/// caller collects it with `take_error`; later writes are skipped.
struct TerminalProgress<'w> {
    out: &'w mut dyn Write,
    total: usize,
    error: Option<io::Error>,
}

impl<'w> TerminalProgress<'w> {
    fn new(out: &'w mut dyn Write) -> Self {
        Self { out, total: 0, error: None }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn attempt(&mut self, write: impl FnOnce(&mut dyn Write) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(e) = write(&mut *self.out) {
                self.error = Some(e);
            }
        }
    }
}

impl Progress for TerminalProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        self.attempt(|out| writeln!(out, "{msg}"));
    }

    fn item_done(&mut self, index: usize) {
        let line = format!("Fetching [{}/{}]", index + 1, self.total);
        self.log(&line);
    }

    fn finish(&mut self) {
        self.attempt(|out| out.flush());
    }
}
