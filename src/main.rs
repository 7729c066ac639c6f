mod content;
mod engine;
mod logging;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::ThreadRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::info;
use tui_textarea::TextArea;

use content::load_embedded;
use engine::scenes::Status;
use engine::{Flow, Game, Narration};

enum Screen {
    TitleScreen,
    Playing,
}

/// Title screen choices, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Departure {
    SetOut,
    StayHome,
}

impl Departure {
    const ALL: [Departure; 2] = [Departure::SetOut, Departure::StayHome];

    fn label(self) -> &'static str {
        match self {
            Departure::SetOut => "SET OUT FOR THE FIELD",
            Departure::StayHome => "STAY HOME",
        }
    }

    // Two entries, so up and down both just toggle.
    fn toggle(self) -> Self {
        match self {
            Departure::SetOut => Departure::StayHome,
            Departure::StayHome => Departure::SetOut,
        }
    }
}

struct App<'a> {
    game: Game<ThreadRng>,
    input: TextArea<'a>,
    message: String,
    message_style: Style,
    narrative_scroll: u16,
    state: Screen,
    departure: Departure,
}

impl<'a> App<'a> {
    fn new(game: Game<ThreadRng>) -> Self {
        let message = game.prompt().to_string();
        App {
            game,
            input: new_input(),
            message,
            message_style: Style::default().fg(Color::Yellow),
            narrative_scroll: 0,
            state: Screen::TitleScreen,
            departure: Departure::SetOut,
        }
    }

    fn start_game(&mut self) {
        self.state = Screen::Playing;
        self.show_prompt();
    }

    fn show_prompt(&mut self) {
        self.message = self.game.prompt().to_string();
        self.message_style = Style::default().fg(Color::Yellow);
    }

    fn submit(&mut self) -> Flow {
        let line = self.input.lines().concat();
        self.input = new_input();

        if let Some(command) = line.trim().strip_prefix(':') {
            return self.run_command(command);
        }

        match self.game.submit(&line) {
            Ok(flow) => {
                self.narrative_scroll = 0;
                self.show_prompt();
                flow
            }
            Err(err) => {
                self.message = format!("{err}:");
                self.message_style = Style::default().fg(Color::Red);
                Flow::Continue
            }
        }
    }

    fn run_command(&mut self, command: &str) -> Flow {
        match command.trim() {
            "q" | "quit" => return Flow::Exit,
            "help" => {
                self.message = "Commands: :q (quit), :help (this list)".to_string();
                self.message_style = Style::default().fg(Color::Cyan);
            }
            "" => self.show_prompt(),
            other => {
                self.message = format!("Unknown command: {other}");
                self.message_style = Style::default().fg(Color::Red);
            }
        }
        Flow::Continue
    }
}

fn new_input<'a>() -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Move [Enter: Answer | :q Quit] "),
    );
    input.set_cursor_line_style(Style::default());
    input
}

fn main() -> Result<()> {
    logging::init();
    let content = load_embedded()?;
    info!("starting wildflower");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Game::new(content, rand::thread_rng()));
    let outcome = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    outcome?;

    let score = app.game.session().score;
    info!(score, "shutting down");
    match app.game.status() {
        Some(Status::Won) => println!("\nThe village is safe. Final score: {score}\n"),
        Some(Status::Lost) => println!("\nThe village mourns. Final score: {score}\n"),
        None => println!("\nThe field will be waiting.\n"),
    }

    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }

            match app.state {
                Screen::TitleScreen => {
                    match key.code {
                        KeyCode::Up | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('k') => {
                            app.departure = app.departure.toggle();
                        }
                        KeyCode::Enter => match app.departure {
                            Departure::SetOut => app.start_game(),
                            Departure::StayHome => return Ok(()),
                        },
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                    continue;
                }
                Screen::Playing => {}
            }

            match key.code {
                KeyCode::Enter => {
                    if app.submit() == Flow::Exit {
                        return Ok(());
                    }
                }
                KeyCode::Esc => {
                    app.message = format!("Type :q to quit. {}", app.game.prompt());
                    app.message_style = Style::default().fg(Color::DarkGray);
                }
                KeyCode::PageDown => {
                    let lines = app.game.transcript().entries().len() as u16;
                    if app.narrative_scroll < lines.saturating_sub(5) {
                        app.narrative_scroll += 3;
                    }
                }
                KeyCode::PageUp => {
                    app.narrative_scroll = app.narrative_scroll.saturating_sub(3);
                }
                _ => {
                    app.input.input(key);
                }
            }
        }
    }
}

fn highlight() -> Style {
    Style::default().fg(Color::LightGreen)
}

fn mark() -> Style {
    Style::default().fg(Color::Black).bg(Color::LightYellow)
}

fn narration_line(entry: &Narration) -> Line<'_> {
    match entry {
        Narration::Line(text) => Line::raw(text.as_str()),
        Narration::Choice { key, label } => Line::from(vec![
            Span::raw("> "),
            Span::styled(format!("({key})"), highlight()),
            Span::raw(format!(" {label}")),
        ]),
        Narration::Score(total) => Line::from(vec![
            Span::styled("Your current total score is:", mark()),
            Span::raw(" "),
            Span::styled(total.to_string(), highlight()),
        ]),
        Narration::Banner(text) => {
            Line::from(Span::styled(text.as_str(), mark().add_modifier(Modifier::BOLD)))
        }
    }
}

fn draw_ui(f: &mut Frame, app: &App) {
    if matches!(app.state, Screen::TitleScreen) {
        draw_title_screen(f, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    // Status bar
    let session = app.game.session();
    let status = Line::from(vec![
        Span::styled(
            " WILDFLOWER ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", app.game.scene().title()),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Score: {} ", session.score),
            Style::default().fg(if session.score > 0 {
                Color::Green
            } else if session.score == 0 {
                Color::Yellow
            } else {
                Color::Red
            }),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Weapon: {} ({}) ", session.weapon.name, session.weapon.damage),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    let status_block = Paragraph::new(status).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status_block, chunks[0]);

    // Narrative
    let entries = app.game.transcript().entries();
    let narrative_title = match app.game.status() {
        Some(_) => " The End ".to_string(),
        None => format!(" {} ", app.game.scene().title()),
    };
    let narrative_title = if entries.len() as u16 > chunks[1].height.saturating_sub(2) {
        let scroll_keys = if cfg!(target_os = "macos") {
            "Fn+Up/Down"
        } else {
            "PgUp/PgDn"
        };
        format!("{narrative_title}[{scroll_keys} to scroll] ")
    } else {
        narrative_title
    };
    let narrative = Paragraph::new(entries.iter().map(narration_line).collect::<Vec<_>>())
        .block(Block::default().borders(Borders::ALL).title(narrative_title))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White))
        .scroll((app.narrative_scroll, 0));
    f.render_widget(narrative, chunks[1]);

    f.render_widget(&app.input, chunks[2]);

    let message = Paragraph::new(app.message.as_str())
        .block(Block::default().borders(Borders::ALL).title(" The Genie Whispers "))
        .wrap(Wrap { trim: false })
        .style(app.message_style);
    f.render_widget(message, chunks[3]);
}

fn draw_title_screen(f: &mut Frame, app: &App) {
    let title_art = r#"
    ╔═══════════════════════════════════════════════╗
    ║                                               ║
    ║        W  I  L  D  F  L  O  W  E  R           ║
    ║                                               ║
    ║     "An open field. A house. A dark cave."    ║
    ║                                               ║
    ╚═══════════════════════════════════════════════╝
"#;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Length(2 * Departure::ALL.len() as u16 + 1),
            Constraint::Min(1),
        ])
        .split(f.area());

    let title = Paragraph::new(title_art)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    // The antagonist stays a secret until the field tale names it.
    let rumor = Paragraph::new(vec![
        Line::from(Span::styled(
            "Something has been terrifying the village.",
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            "Someone has to go and look.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(rumor, chunks[1]);

    let menu: Vec<Line> = Departure::ALL
        .iter()
        .flat_map(|option| {
            let line = if *option == app.departure {
                Line::from(vec![
                    Span::styled("> ", highlight()),
                    Span::styled(format!(" {} ", option.label()), mark().add_modifier(Modifier::BOLD)),
                    Span::styled(" <", highlight()),
                ])
            } else {
                Line::from(Span::styled(option.label(), Style::default().fg(Color::Gray)))
            };
            [line, Line::raw("")]
        })
        .collect();
    f.render_widget(Paragraph::new(menu).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("↑/↓ choose  •  ENTER go  •  q stay home")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}
