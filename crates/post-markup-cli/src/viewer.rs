use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use post_markup_engine::BlockNode;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Size},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

use crate::terminal;

/// Scrollable view over a formatted post.
pub struct Viewer {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
    /// Wrapped row count of the post at the last draw.
    rows: usize,
    /// Inner size of the post pane at the last draw.
    viewport: Size,
}

impl Viewer {
    pub fn new(title: impl Into<String>, blocks: &[BlockNode]) -> Self {
        let lines = terminal::to_lines(blocks);
        Self {
            title: title.into(),
            rows: lines.len(),
            lines,
            scroll: 0,
            viewport: Size::new(0, 1),
        }
    }

    /// Furthest scroll that still fills the pane, so the last wrapped row
    /// sits at the bottom.
    fn max_scroll(&self) -> u16 {
        let max = self.rows.saturating_sub(usize::from(self.viewport.height.max(1)));
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    /// Records the pane size and wrapped row count from a draw, then
    /// re-clamps the scroll position.
    fn set_layout(&mut self, viewport: Size, rows: usize) {
        self.viewport = viewport;
        self.rows = rows;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn top(&mut self) {
        self.scroll = 0;
    }

    pub fn bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Applies a key press. Returns `true` when the viewer should close.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Home | KeyCode::Char('g') => self.top(),
            KeyCode::End | KeyCode::Char('G') => self.bottom(),
            _ => {}
        }
        false
    }
}

/// Raw mode and the alternate screen, restored when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

/// Takes over the terminal and shows `viewer` until the user quits.
pub fn run(mut viewer: Viewer) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    run_loop(&mut terminal, &mut viewer)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, viewer))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && viewer.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, viewer: &mut Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let content = if viewer.lines.is_empty() {
        vec![Line::from("(empty post)")]
    } else {
        viewer.lines.clone()
    };

    let frame = Block::default()
        .borders(Borders::ALL)
        .title(viewer.title.clone());
    let inner = frame.inner(chunks[0]);
    let body = Paragraph::new(content).wrap(Wrap { trim: false });
    viewer.set_layout(Size::new(inner.width, inner.height), body.line_count(inner.width));

    let post = body.block(frame).scroll((viewer.scroll, 0));
    f.render_widget(post, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}
