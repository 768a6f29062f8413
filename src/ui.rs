//! Interactive ratatui dashboard.
//!
//! Stat cards, a search/filter/sort control line, a paginated price table,
//! and a snapshot picker popup. Fetches run on worker threads and report
//! back over an mpsc channel, so the interface stays responsive while a
//! request is in flight; whichever request completes last wins.
//!
//! Keys: / search, t filter, s sort column, o sort order, r refresh,
//! f file picker, arrows navigate, q quits.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
};
use ratatui::{Frame, Terminal};

use crate::api::{HttpApi, PriceApi};
use crate::filter::{sort_view, visible, InterfaceFilter, SortColumn};
use crate::model::{DiskPriceRecord, SnapshotDescriptor};
use crate::source::{Severity, SourceManager};
use crate::stats::PriceStats;
use crate::util::format_snapshot_date;

const PAGE_SIZE: usize = 10;
const NOTICE_TTL: Duration = Duration::from_secs(5);
const TICK: Duration = Duration::from_millis(100);

/// Result of one background fetch, sent from a worker thread.
enum FetchOutcome {
    Latest(Result<Vec<DiskPriceRecord>>),
    Files(Result<Vec<SnapshotDescriptor>>),
    Snapshot(String, Result<Vec<DiskPriceRecord>>),
}

#[derive(PartialEq)]
enum Mode {
    Browse,
    Search,
    Picker,
}

struct App {
    mgr: SourceManager,
    search: String,
    filter: InterfaceFilter,
    sort: SortColumn,
    ascending: bool,
    page: usize,
    selected: usize,
    mode: Mode,
    picker_index: usize,
    notice: Option<(String, Severity, Instant)>,
    should_quit: bool,
    api: Arc<HttpApi>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl App {
    fn new(api: HttpApi) -> Self {
        let (tx, rx) = mpsc::channel();
        App {
            mgr: SourceManager::new(),
            search: String::new(),
            filter: InterfaceFilter::All,
            sort: SortColumn::Name,
            ascending: true,
            page: 0,
            selected: 0,
            mode: Mode::Browse,
            picker_index: 0,
            notice: None,
            should_quit: false,
            api: Arc::new(api),
            tx,
            rx,
        }
    }

    /// The filtered, sorted view the table renders from.
    fn view(&self) -> Vec<&DiskPriceRecord> {
        let mut view = visible(&self.mgr.dataset, &self.search, self.filter);
        sort_view(&mut view, self.sort, self.ascending);
        view
    }

    fn page_count(&self, view_len: usize) -> usize {
        view_len.div_ceil(PAGE_SIZE).max(1)
    }

    fn clamp_cursor(&mut self) {
        let view_len = self.view().len();
        let pages = self.page_count(view_len);
        if self.page >= pages {
            self.page = pages - 1;
        }
        let page_len = view_len
            .saturating_sub(self.page * PAGE_SIZE)
            .min(PAGE_SIZE);
        if page_len == 0 {
            self.selected = 0;
        } else if self.selected >= page_len {
            self.selected = page_len - 1;
        }
    }

    fn fetch_latest(&mut self) {
        self.mgr.begin_load();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(FetchOutcome::Latest(api.latest()));
        });
    }

    fn fetch_files(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(FetchOutcome::Files(api.snapshot_list()));
        });
    }

    fn load_snapshot(&mut self, name: String) {
        self.mgr.begin_load();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = api.snapshot(&name);
            let _ = tx.send(FetchOutcome::Snapshot(name, result));
        });
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Latest(result) => {
                let notices = self.mgr.apply_latest(result);
                let severity = notices
                    .iter()
                    .map(|n| n.severity())
                    .max_by_key(|s| match s {
                        Severity::Info => 0,
                        Severity::Warning => 1,
                        Severity::Error => 2,
                    })
                    .unwrap_or(Severity::Info);
                let message = notices
                    .iter()
                    .map(|n| n.message())
                    .collect::<Vec<_>>()
                    .join("; ");
                self.set_notice(message, severity);
            }
            FetchOutcome::Files(result) => {
                self.mgr.apply_snapshot_list(result);
                if self.picker_index >= self.mgr.snapshots.len() {
                    self.picker_index = 0;
                }
            }
            FetchOutcome::Snapshot(name, result) => {
                let notice = self.mgr.apply_snapshot(&name, result);
                self.set_notice(notice.message(), notice.severity());
            }
        }
        self.clamp_cursor();
    }

    fn set_notice(&mut self, message: String, severity: Severity) {
        self.notice = Some((message, severity, Instant::now()));
    }

    fn expire_notice(&mut self) {
        if let Some((_, _, since)) = &self.notice {
            if since.elapsed() > NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    fn on_key(&mut self, code: KeyCode) {
        match self.mode {
            Mode::Search => self.on_search_key(code),
            Mode::Picker => self.on_picker_key(code),
            Mode::Browse => self.on_browse_key(code),
        }
    }

    fn on_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('t') => {
                self.filter = self.filter.next();
                self.page = 0;
                self.selected = 0;
            }
            KeyCode::Char('s') => self.sort = self.sort.next(),
            KeyCode::Char('o') => self.ascending = !self.ascending,
            KeyCode::Char('r') => self.fetch_latest(),
            KeyCode::Char('f') => {
                // picker is disabled while the listing is empty
                if !self.mgr.snapshots.is_empty() {
                    self.mode = Mode::Picker;
                    self.picker_index = 0;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.page = self.page.saturating_sub(1);
                self.selected = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.page += 1;
                self.selected = 0;
                self.clamp_cursor();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_cursor();
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                self.search.pop();
                self.clamp_cursor();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.page = 0;
                self.selected = 0;
            }
            _ => {}
        }
    }

    fn on_picker_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Up | KeyCode::Char('k') => {
                self.picker_index = self.picker_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.picker_index + 1 < self.mgr.snapshots.len() {
                    self.picker_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(file) = self.mgr.snapshots.get(self.picker_index) {
                    let name = file.name.clone();
                    self.mode = Mode::Browse;
                    self.load_snapshot(name);
                }
            }
            _ => {}
        }
    }
}

pub fn run(api: HttpApi) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(api);
    app.fetch_latest();
    app.fetch_files();

    let result = run_loop(&mut terminal, &mut app);

    // restore the terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        while let Ok(outcome) = app.rx.try_recv() {
            app.apply(outcome);
        }
        app.expire_notice();

        terminal.draw(|f| draw(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // stat cards
            Constraint::Length(3), // controls
            Constraint::Min(5),    // table
            Constraint::Length(1), // selected-row urls
            Constraint::Length(1), // notice
            Constraint::Length(1), // help
        ])
        .split(f.area());

    draw_stats(f, chunks[0], app);
    draw_controls(f, chunks[1], app);

    let view = app.view();
    draw_table(f, chunks[2], app, &view);
    draw_detail(f, chunks[3], app, &view);
    draw_notice(f, chunks[4], app);
    draw_help(f, chunks[5], app, view.len());

    if app.mode == Mode::Picker {
        draw_picker(f, app);
    }
}

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let stats = PriceStats::compute(&app.mgr.dataset);
    let data_date = app
        .mgr
        .dataset
        .first()
        .map(|r| r.date_scraped.clone())
        .unwrap_or_else(|| "-".to_string());

    let cards = [
        ("products", stats.count.to_string()),
        ("data date", data_date),
        ("avg price", format!("${:.2}", stats.avg)),
        (
            "price range",
            format!("${:.2} - ${:.2}", stats.min, stats.max),
        ),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (i, (title, value)) in cards.iter().enumerate() {
        let card = Paragraph::new(Line::from(Span::styled(
            value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(*title));
        f.render_widget(card, columns[i]);
    }
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let search_style = if app.mode == Mode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::raw("search: "),
        Span::styled(
            if app.search.is_empty() && app.mode != Mode::Search {
                "<none>".to_string()
            } else {
                format!("{}_", app.search)
            },
            search_style,
        ),
        Span::raw("   type: "),
        Span::styled(
            app.filter.label(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   sort: "),
        Span::raw(format!(
            "{} {}",
            app.sort.label(),
            if app.ascending { "asc" } else { "desc" }
        )),
        Span::raw("   source: "),
        Span::styled(
            app.mgr.active.label(),
            Style::default().fg(Color::Green),
        ),
    ];

    if app.mgr.loading {
        spans.push(Span::styled(
            "   loading...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let controls = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("disk prices"));
    f.render_widget(controls, area);
}

fn draw_table(f: &mut Frame, area: Rect, app: &App, view: &[&DiskPriceRecord]) {
    let start = app.page * PAGE_SIZE;
    let page: Vec<&&DiskPriceRecord> = view.iter().skip(start).take(PAGE_SIZE).collect();

    let header = Row::new(vec![
        "product", "capacity", "price", "$/TB", "interface", "form", "seller", "rating",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = page
        .iter()
        .map(|r| {
            Row::new(vec![
                r.product_name.clone(),
                r.capacity.clone(),
                r.price.clone(),
                r.price_per_tb.clone(),
                r.interface.clone(),
                r.form_factor.clone(),
                r.seller.clone(),
                r.rating.clone().unwrap_or_else(|| "-".to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(28),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !page.is_empty() {
        state.select(Some(app.selected.min(page.len() - 1)));
    }

    f.render_stateful_widget(table, area, &mut state);
}

fn draw_detail(f: &mut Frame, area: Rect, app: &App, view: &[&DiskPriceRecord]) {
    let index = app.page * PAGE_SIZE + app.selected;
    let line = match view.get(index) {
        Some(r) => format!(
            "product: {}   seller: {}",
            r.product_url.as_deref().unwrap_or("-"),
            r.seller_url.as_deref().unwrap_or("-"),
        ),
        None => String::new(),
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_notice(f: &mut Frame, area: Rect, app: &App) {
    let Some((message, severity, _)) = &app.notice else {
        return;
    };

    let color = match severity {
        Severity::Info => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    };

    f.render_widget(
        Paragraph::new(message.clone()).style(Style::default().fg(color)),
        area,
    );
}

fn draw_help(f: &mut Frame, area: Rect, app: &App, view_len: usize) {
    let pages = app.page_count(view_len);
    let help = format!(
        "page {}/{} ({} rows)   / search  t type  s sort  o order  r refresh  f files  q quit",
        app.page + 1,
        pages,
        view_len
    );
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_picker(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = app
        .mgr
        .snapshots
        .iter()
        .map(|file: &SnapshotDescriptor| {
            ListItem::new(format!(
                "{} ({})",
                file.name,
                format_snapshot_date(&file.date)
            ))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("data files (enter to load, esc to close)"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.picker_index));

    f.render_stateful_widget(list, area, &mut state);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
