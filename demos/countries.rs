//! Country Search Demo
//!
//! A minimal terminal host for the dropdown controller:
//! - Type to search, the `change` event drives refiltering
//! - Up/Down to navigate, Enter to select, Esc to quit
//! - Events are drained after dispatch, so reacting to `change` with
//!   `set_items` never re-enters the controller

use std::fs::File;
use std::io::{Write, stdout};
use std::sync::{Arc, Mutex, RwLock};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use droplist::{Dropdown, DropdownEvent, DropdownOption, InputSurface, Key, Label, ListSurface};
use simplelog::{Config, LevelFilter, WriteLogger};

const COUNTRIES: &[(&str, &str)] = &[
    ("us", "United States"),
    ("uk", "United Kingdom"),
    ("de", "Germany"),
    ("fr", "France"),
    ("es", "Spain"),
    ("it", "Italy"),
    ("nl", "Netherlands"),
    ("be", "Belgium"),
    ("se", "Sweden"),
    ("no", "Norway"),
    ("dk", "Denmark"),
    ("fi", "Finland"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("at", "Austria"),
    ("ch", "Switzerland"),
    ("ie", "Ireland"),
    ("gr", "Greece"),
    ("jp", "Japan"),
    ("ca", "Canada"),
    ("mx", "Mexico"),
    ("br", "Brazil"),
    ("au", "Australia"),
    ("nz", "New Zealand"),
    ("za", "South Africa"),
];

/// Input surface backed by a shared string the host edits on key presses.
#[derive(Clone, Default)]
struct SearchField(Arc<RwLock<String>>);

impl SearchField {
    fn push(&self, c: char) {
        if let Ok(mut guard) = self.0.write() {
            guard.push(c);
        }
    }

    fn pop(&self) {
        if let Ok(mut guard) = self.0.write() {
            guard.pop();
        }
    }
}

impl InputSurface for SearchField {
    fn value(&self) -> String {
        self.0
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct SuggestionState {
    visible: bool,
    labels: Vec<String>,
    marked: Option<usize>,
}

/// List surface that the host redraws after every interaction.
#[derive(Clone, Default)]
struct SuggestionList(Arc<RwLock<SuggestionState>>);

impl ListSurface for SuggestionList {
    type Node = ();

    fn replace_rows(&mut self, rows: Vec<DropdownOption<()>>) {
        if let Ok(mut state) = self.0.write() {
            state.labels = rows
                .into_iter()
                .map(|option| match option.label {
                    Label::Text(text) => text,
                    Label::Node(()) => String::new(),
                })
                .collect();
            state.marked = None;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if let Ok(mut state) = self.0.write() {
            state.visible = visible;
        }
    }

    fn mark_preselected(&mut self, index: usize) {
        if let Ok(mut state) = self.0.write() {
            state.marked = Some(index);
        }
    }

    fn clear_preselected(&mut self, index: usize) {
        if let Ok(mut state) = self.0.write()
            && state.marked == Some(index)
        {
            state.marked = None;
        }
    }
}

fn draw(field: &SearchField, list: &SuggestionList, status: &str) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "Search: {}\r\n", field.value())?;
    write!(out, "{status}\r\n\r\n")?;
    if let Ok(state) = list.0.read()
        && state.visible
    {
        for (index, label) in state.labels.iter().enumerate() {
            let marker = if state.marked == Some(index) { ">" } else { " " };
            write!(out, "{marker} {label}\r\n")?;
        }
    }
    out.flush()
}

/// React to drained events: refilter on `change`, report on `select`.
fn apply_events(
    dropdown: &mut Dropdown<SearchField, SuggestionList>,
    queue: &Mutex<Vec<DropdownEvent>>,
    status: &mut String,
) {
    let drained: Vec<DropdownEvent> = match queue.lock() {
        Ok(mut guard) => std::mem::take(&mut *guard),
        Err(_) => Vec::new(),
    };
    for event in drained {
        match event {
            DropdownEvent::Change { query } => {
                let needle = query.to_lowercase();
                let matches: Vec<(String, String)> = COUNTRIES
                    .iter()
                    .filter(|(_, name)| name.to_lowercase().contains(&needle))
                    .map(|(code, name)| (code.to_string(), name.to_string()))
                    .collect();
                *status = format!("searching '{}' ({} matches)", query, matches.len());
                dropdown.set_items(&matches, query);
            }
            DropdownEvent::Select { value, .. } => {
                *status = format!("selected: {value}");
            }
            DropdownEvent::Preselect { .. } => {}
        }
    }
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("countries.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let field = SearchField::default();
    let list = SuggestionList::default();
    let mut dropdown = Dropdown::attach(field.clone(), list.clone());

    let queue: Arc<Mutex<Vec<DropdownEvent>>> = Arc::default();
    for name in [
        DropdownEvent::CHANGE,
        DropdownEvent::PRESELECT,
        DropdownEvent::SELECT,
    ] {
        let queue = Arc::clone(&queue);
        dropdown.on(
            name,
            Arc::new(move |event: &DropdownEvent| {
                if let Ok(mut guard) = queue.lock() {
                    guard.push(event.clone());
                }
            }),
        );
    }

    terminal::enable_raw_mode()?;
    let mut status = String::from("type to search, up/down to move, enter to select, esc to quit");

    // Focusing an empty field still diverges from the unset committed query,
    // which populates the initial (unfiltered) list.
    dropdown.handle_focus();
    apply_events(&mut dropdown, &queue, &mut status);
    draw(&field, &list, &status)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Esc {
            break;
        }

        // Edit the field first, as a browser input would before keyup fires.
        match key.code {
            KeyCode::Char(c) => field.push(c),
            KeyCode::Backspace => field.pop(),
            _ => {}
        }

        // Terminals rarely report key releases, so one press stands in for
        // the down/up pair.
        let key: Key = key.code.into();
        dropdown.handle_key_down(key);
        dropdown.handle_key_up(key);

        apply_events(&mut dropdown, &queue, &mut status);
        draw(&field, &list, &status)?;
    }

    terminal::disable_raw_mode()?;
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
