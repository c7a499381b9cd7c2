use std::fs::File;

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use simplelog::{Config, LevelFilter, WriteLogger};

use navdom::{
    translate_events, Border, Collapsible, CollapsibleOptions, Color, Edges, Element, Event, Rule,
    Selector, Size, Style, Stylesheet, Terminal, Viewport,
};

fn main() -> std::io::Result<()> {
    // Set up file logging; stdout belongs to the renderer
    let log_file = File::create("navbar.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let sheet = stylesheet();
    let mut root = ui();

    // Render once so the widget attaches against real rects
    term.render(&root, &sheet)?;
    let (width, _) = term.size();
    let widget = Collapsible::attach(
        &mut root,
        "#topbar",
        CollapsibleOptions {
            min_width_em: 24,
            ..Default::default()
        },
        term.layout(),
        Viewport::new(width),
    )
    .expect("selectors are well-formed");

    loop {
        term.render(&root, &sheet)?;

        let raw = term.poll(None)?;
        for event in &raw {
            if let CrosstermEvent::Key(key) = event {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
        }

        let events = translate_events(&raw, &root, term.layout());

        // A resize changes the rects the widget measures against, so
        // re-layout at the new size before letting it decide.
        if events.iter().any(|e| matches!(e, Event::Resize { .. })) {
            term.render(&root, &sheet)?;
        }

        let (width, _) = term.size();
        widget.process_events(&events, &mut root, term.layout(), Viewport::new(width));
    }
}

fn stylesheet() -> Stylesheet {
    Stylesheet::new()
        .rule(
            Selector::class("collapsible-toggle"),
            Rule::style(Style::new().bold().foreground(Color::oklch(0.9, 0.05, 250.0))),
        )
        .rule(Selector::class("collapsed"), Rule::hide())
        .rule(
            Selector::class("visible"),
            Rule::show().and_style(Style::new().background(Color::oklch(0.35, 0.12, 250.0))),
        )
}

fn ui() -> Element {
    Element::col()
        .id("app")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(topbar())
        .child(body())
}

fn topbar() -> Element {
    Element::row()
        .id("topbar")
        .width(Size::Fill)
        .height(Size::Fixed(3))
        .style(
            Style::new()
                .background(Color::oklch(0.3, 0.1, 250.0))
                .border(Border::Rounded),
        )
        .child(
            Element::text("navdom")
                .id("brand")
                .style(Style::new().bold())
                .margin(Edges::horizontal(1)),
        )
        .child(entries())
        .child(
            Element::text("≡ menu")
                .id("toggle")
                .class("collapsible-toggle")
                .clickable(true)
                .margin(Edges::horizontal(1)),
        )
}

fn entries() -> Element {
    Element::row().id("entries").class("collapsible-content").children(
        ["dashboard", "projects", "reports", "settings", "about"]
            .into_iter()
            .map(|label| Element::text(label).margin(Edges::horizontal(2))),
    )
}

fn body() -> Element {
    Element::box_()
        .id("body")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
        .child(Element::text(
            "Resize the terminal to collapse the navigation bar.\nPress 'q' to quit.",
        ))
}
