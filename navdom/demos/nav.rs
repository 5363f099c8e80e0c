use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, MouseButton as CtMouseButton, MouseEventKind,
};
use crossterm::style::Print;
use crossterm::{cursor, execute, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

use navdom::{
    bind_toggles, Document, Element, Event, MarkerBackend, Rect, RegionMap, ToggleBinding,
};

const MENU_ITEMS: [&str; 3] = ["Home", "Posts", "About"];

/// Puts the terminal into raw mode with mouse capture and restores it on drop.
struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("nav.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(ui());
    let controller = bind_toggles(
        &doc,
        MarkerBackend::Structured,
        [ToggleBinding::new("nav")
            .target("nav", "close")
            .target("nav-menu", "show")],
    )
    .map_err(|err| io::Error::other(err.to_string()))?;

    let mut screen = Screen::new()?;
    let (mut width, mut height) = terminal::size()?;

    loop {
        let regions = place(width, height);
        draw(&mut screen.stdout, &doc)?;

        match event::read()? {
            CtEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            },
            CtEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(btn @ CtMouseButton::Left) = mouse.kind {
                    let click = doc.click_at(&regions, mouse.column, mouse.row, btn.into());
                    controller.handle(&mut doc, &click);
                }
            }
            CtEvent::Resize(w, h) => {
                // The controller ignores non-click events
                controller.handle(&mut doc, &Event::Resize { width: w, height: h });
                width = w;
                height = h;
            }
            _ => {}
        }
    }
}

fn ui() -> Element {
    Element::box_()
        .id("root")
        .child(Element::text("☰ menu").id("nav").clickable(true))
        .child(
            Element::box_()
                .id("nav-menu")
                .children(MENU_ITEMS.map(Element::text)),
        )
}

/// Fixed placements: the nav button on the top line, the menu below it.
fn place(width: u16, height: u16) -> RegionMap {
    let mut regions = RegionMap::new();
    regions.insert("root".to_string(), Rect::from_size(width, height));
    regions.insert("nav".to_string(), Rect::new(0, 0, 8, 1));
    regions.insert(
        "nav-menu".to_string(),
        Rect::new(0, 1, 12, MENU_ITEMS.len() as u16),
    );
    regions
}

fn draw(stdout: &mut io::Stdout, doc: &Document) -> io::Result<()> {
    let open = doc
        .get("nav-menu")
        .is_some_and(|menu| menu.classes.contains("show"));
    let icon = if doc.get("nav").is_some_and(|nav| nav.classes.contains("close")) {
        "✕ menu"
    } else {
        "☰ menu"
    };

    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        Print(icon)
    )?;

    if open {
        for (row, item) in MENU_ITEMS.iter().enumerate() {
            execute!(
                stdout,
                cursor::MoveTo(2, 1 + row as u16),
                Print(item)
            )?;
        }
    }

    let footer = "click the menu button to toggle, q to quit";
    execute!(stdout, cursor::MoveTo(0, 6), Print(footer))?;
    stdout.flush()
}
