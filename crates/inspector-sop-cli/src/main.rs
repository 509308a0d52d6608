use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use inspector_sop_config::Config;
use inspector_sop_engine::{Corpus, OutlineCache, Section, render_html, render_text};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: inspector-sop-cli [--list | --html <section-id> | --text <section-id>] [corpus-dir]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Browse,
    List,
    Html(String),
    Text(String),
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    corpus_dir: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Invocation> {
    let mut rest = args.iter().skip(1);
    let mut command = Command::Browse;
    let mut corpus_dir = None;

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--list" if command == Command::Browse => command = Command::List,
            "--html" if command == Command::Browse => command = Command::Html(rest.next()?.clone()),
            "--text" if command == Command::Browse => command = Command::Text(rest.next()?.clone()),
            flag if flag.starts_with("--") => return None,
            path if corpus_dir.is_none() => corpus_dir = Some(PathBuf::from(path)),
            _ => return None,
        }
    }

    Some(Invocation {
        command,
        corpus_dir,
    })
}

struct App {
    corpus: Corpus,
    cache: OutlineCache,
    /// Corpus positions of the sections matching `query`.
    visible: Vec<usize>,
    section_list_state: ListState,
    query: String,
    searching: bool,
    current_content: Vec<String>,
}

impl App {
    fn new(corpus: Corpus, start_section: Option<&str>) -> Self {
        let visible = (0..corpus.len()).collect();
        let mut app = Self {
            corpus,
            cache: OutlineCache::new(),
            visible,
            section_list_state: ListState::default(),
            query: String::new(),
            searching: false,
            current_content: Vec::new(),
        };

        let start = start_section.and_then(|id| {
            let position = app.corpus.position(id);
            if position.is_none() {
                log::warn!("start section {id:?} is not in the corpus");
            }
            position
        });

        // Select the configured section, or the first one if available
        if let Some(position) = start {
            app.section_list_state.select(Some(position));
        } else if !app.visible.is_empty() {
            app.section_list_state.select(Some(0));
        }
        app.update_content_for_selection();

        app
    }

    fn selected_section(&self) -> Option<&Section> {
        let index = self.section_list_state.selected()?;
        let position = *self.visible.get(index)?;
        self.corpus.sections().get(position)
    }

    fn next_section(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.section_list_state.selected() {
            Some(i) => (i + 1) % self.visible.len(),
            None => 0,
        };
        self.section_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_section(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.section_list_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.section_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.apply_filter();
    }

    fn pop_query_char(&mut self) {
        self.query.pop();
        self.apply_filter();
    }

    fn clear_query(&mut self) {
        self.query.clear();
        self.searching = false;
        self.apply_filter();
    }

    /// Recomputes the visible sections, keeping the current selection when it
    /// still matches.
    fn apply_filter(&mut self) {
        let selected_id = self.selected_section().map(|s| s.id.clone());

        self.visible = self
            .corpus
            .search(&self.query)
            .into_iter()
            .filter_map(|s| self.corpus.position(&s.id))
            .collect();

        let index = selected_id
            .and_then(|id| {
                self.visible
                    .iter()
                    .position(|&p| self.corpus.sections()[p].id == id)
            })
            .or(if self.visible.is_empty() { None } else { Some(0) });
        self.section_list_state.select(index);
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(position) = self
            .section_list_state
            .selected()
            .and_then(|i| self.visible.get(i).copied())
        else {
            self.current_content = Vec::new();
            return;
        };

        let section = &self.corpus.sections()[position];
        let forest = self.cache.get_or_parse(&section.id, &section.text);
        self.current_content = render_text(forest);
    }
}

fn load_corpus(corpus_dir: Option<PathBuf>, config: Option<&Config>) -> Corpus {
    let (path, from_config) = match corpus_dir {
        Some(path) => (path, false),
        None => match config.and_then(|c| c.corpus_path.clone()) {
            Some(path) => (path, true),
            None => {
                log::info!("using built-in corpus");
                return Corpus::builtin();
            }
        },
    };

    match Corpus::load_dir(&path) {
        Ok(corpus) => {
            log::info!(
                "loaded corpus {:?} with {} sections from {}",
                corpus.title,
                corpus.len(),
                path.display()
            );
            corpus
        }
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", Config::config_path().display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Corpus path '{}'{} is invalid: {e}",
                path.display(),
                source
            );
            process::exit(1);
        }
    }
}

fn print_section(corpus: &Corpus, id: &str, html: bool) {
    let Some(section) = corpus.section(id) else {
        eprintln!("Error: No section with id '{id}'");
        eprintln!("Run with --list to see available sections");
        process::exit(1);
    };

    let forest = section.outline();
    if html {
        println!("{}", render_html(&forest));
    } else {
        println!("{}", section.title);
        println!();
        for line in render_text(&forest) {
            println!("{line}");
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(invocation) = parse_args(&args) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let corpus = load_corpus(invocation.corpus_dir, config.as_ref());

    match invocation.command {
        Command::List => {
            for section in corpus.sections() {
                println!("{}\t{}", section.id, section.title);
            }
            return Ok(());
        }
        Command::Html(id) => {
            print_section(&corpus, &id, true);
            return Ok(());
        }
        Command::Text(id) => {
            print_section(&corpus, &id, false);
            return Ok(());
        }
        Command::Browse => {}
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let start_section = config.as_ref().and_then(|c| c.start_section.as_deref());
    let mut app = App::new(corpus, start_section);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.searching {
            match key.code {
                KeyCode::Enter => app.searching = false,
                KeyCode::Esc => app.clear_query(),
                KeyCode::Backspace => app.pop_query_char(),
                KeyCode::Char(c) => app.push_query_char(c),
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') => return Ok(()),
            KeyCode::Down | KeyCode::Char('j') => app.next_section(),
            KeyCode::Up | KeyCode::Char('k') => app.previous_section(),
            KeyCode::Char('/') => app.searching = true,
            KeyCode::Esc => app.clear_query(),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Section list panel
    let section_items: Vec<ListItem> = app
        .visible
        .iter()
        .map(|&position| {
            let section = &app.corpus.sections()[position];
            ListItem::new(vec![Line::from(vec![Span::raw(section.title.clone())])])
        })
        .collect();

    let list_title = if app.query.is_empty() {
        app.corpus.title.clone()
    } else {
        format!("Sections matching \"{}\"", app.query)
    };
    let sections_list = List::new(section_items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(sections_list, chunks[0], &mut app.section_list_state);

    // Content panel
    let content_title = app
        .selected_section()
        .map(|s| s.title.clone())
        .unwrap_or_else(|| "Content".to_string());
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("No section selected")]
    } else {
        app.current_content
            .iter()
            .map(|line| {
                // Unindented lines are headings or root-level prose
                if !line.starts_with(' ') && !line.is_empty() {
                    Line::from(Span::styled(
                        line.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(vec![Span::raw(line.clone())])
                }
            })
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(content_title))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions or search prompt
    let help_text = if app.searching {
        Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(app.query.clone()),
            Span::raw("  (Enter: Done | Esc: Clear)"),
        ])
    } else {
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k: Previous | "),
            Span::raw("↓/j: Next | "),
            Span::raw("/: Search | Esc: Clear search"),
        ])
    };

    f.render_widget(Paragraph::new(vec![help_text]), rows[1]);
}
