// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use strix_app::{
    Conversation, ConversationId, Role, Tab, TabId, Workspace, WorkspaceCommand, WorkspaceEvent,
};

/// Estimated cells per tab. A guess, not a measurement: the strip never
/// inspects rendered label widths.
pub const TAB_WIDTH: u16 = 22;
/// Reserved room for the overflow trigger at the right edge of the strip.
pub const OVERFLOW_BUTTON_WIDTH: u16 = 4;
pub const STRIP_PADDING: u16 = 2;

const SIDEBAR_WIDTH: u16 = 30;
const TAB_LABEL_CHARS: usize = 14;
const TRANSCRIPT_KEEP: usize = 40;
const GENERATING_MARKER: &str = "generating response...";

pub const QUICK_ACTIONS: [&str; 4] =
    ["Homework Help", "Revise Topic", "Science Lab", "Take a Quiz"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEvent {
    Ready {
        request_id: u64,
        conversation: ConversationId,
        body: String,
    },
    Failed {
        request_id: u64,
        error: String,
    },
}

impl ReplyEvent {
    const fn request_id(&self) -> u64 {
        match self {
            Self::Ready { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    Reply(ReplyEvent),
}

/// The seam between the UI and whatever produces assistant replies. The
/// provided `spawn_reply` composes the body up front, then hands it to a
/// one-shot timer thread that delivers it after the fixed delay -- the
/// reply always lands on the conversation it was composed for, regardless
/// of where the user has navigated meanwhile. `cancel_reply` exists for
/// backends that can abandon a scheduled reply; nothing here calls it, so
/// several sends in flight each deliver their own reply.
pub trait ChatBackend {
    fn compose_reply(&mut self, conversation: &ConversationId) -> Result<String>;

    fn reply_delay(&self) -> Duration;

    fn spawn_reply(
        &mut self,
        request_id: u64,
        conversation: &ConversationId,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let event = match self.compose_reply(conversation) {
            Ok(body) => InternalEvent::Reply(ReplyEvent::Ready {
                request_id,
                conversation: conversation.clone(),
                body,
            }),
            Err(error) => InternalEvent::Reply(ReplyEvent::Failed {
                request_id,
                error: error.to_string(),
            }),
        };
        let delay = self.reply_delay();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(event);
        });
        Ok(())
    }

    fn cancel_reply(&mut self, _request_id: u64) -> Result<()> {
        Ok(())
    }
}

/// Inline-visible tabs versus dropdown-reachable tabs. Derived every draw;
/// never stored between frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabPartition {
    pub visible: Vec<Tab>,
    pub overflow: Vec<Tab>,
}

/// Splits the tab sequence against an estimated per-tab width. Home is
/// pinned visible no matter how narrow the strip, the active tab gets the
/// next claim on space, and the rest are first-fit in original order.
/// The fit test is strictly less-than, so a tab is hidden even when it
/// would fit exactly.
pub fn partition_tabs(tabs: &[Tab], active: &TabId, available_width: u16) -> TabPartition {
    let mut visible = Vec::new();
    let mut overflow = Vec::new();
    let mut consumed: u16 = 0;

    if let Some(home) = tabs.iter().find(|tab| tab.is_home()) {
        consumed = consumed.saturating_add(TAB_WIDTH);
        visible.push(home.clone());
    }

    if !active.is_home()
        && let Some(tab) = tabs.iter().find(|tab| &tab.id == active)
    {
        if consumed.saturating_add(TAB_WIDTH) < available_width {
            consumed = consumed.saturating_add(TAB_WIDTH);
            visible.push(tab.clone());
        } else {
            overflow.push(tab.clone());
        }
    }

    for tab in tabs {
        if tab.is_home() || &tab.id == active {
            continue;
        }
        if consumed.saturating_add(TAB_WIDTH) < available_width {
            consumed = consumed.saturating_add(TAB_WIDTH);
            visible.push(tab.clone());
        } else {
            overflow.push(tab.clone());
        }
    }

    TabPartition { visible, overflow }
}

pub fn strip_budget(strip_width: u16) -> u16 {
    strip_width.saturating_sub(OVERFLOW_BUTTON_WIDTH + STRIP_PADDING)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum InputMode {
    #[default]
    Nav,
    Compose,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct OverflowMenuUiState {
    visible: bool,
    cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingReply {
    request_id: u64,
    conversation: ConversationId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewData {
    mode: InputMode,
    composer: String,
    sidebar_cursor: usize,
    overflow_menu: OverflowMenuUiState,
    pending: Vec<PendingReply>,
    next_request_id: u64,
    status: Option<String>,
    status_token: u64,
    help_visible: bool,
    strip_width: u16,
}

impl Default for ViewData {
    fn default() -> Self {
        Self {
            mode: InputMode::Nav,
            composer: String::new(),
            sidebar_cursor: 0,
            overflow_menu: OverflowMenuUiState::default(),
            pending: Vec::new(),
            next_request_id: 0,
            status: None,
            status_token: 0,
            help_visible: false,
            strip_width: 80,
        }
    }
}

impl ViewData {
    fn has_pending(&self, conversation: &ConversationId) -> bool {
        self.pending
            .iter()
            .any(|entry| &entry.conversation == conversation)
    }
}

pub fn run_app<B: ChatBackend>(workspace: &mut Workspace, backend: &mut B) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend_impl = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_impl).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        process_internal_events(workspace, &mut view_data, &internal_tx, &internal_rx);

        if let Ok(size) = terminal.size() {
            view_data.strip_width = size.width;
        }

        if let Err(error) = terminal.draw(|frame| render(frame, workspace, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(workspace, backend, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                // The partition is recomputed from the frame size on every
                // draw, so a resize needs no bookkeeping here.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    workspace: &mut Workspace,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                view_data.status = None;
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Reply(reply) => {
                handle_reply_event(workspace, view_data, tx, reply);
            }
        }
    }
}

fn handle_reply_event(
    workspace: &mut Workspace,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    reply: ReplyEvent,
) {
    view_data
        .pending
        .retain(|entry| entry.request_id != reply.request_id());

    match reply {
        ReplyEvent::Ready {
            conversation, body, ..
        } => {
            workspace.dispatch(WorkspaceCommand::AppendReply { conversation, body });
        }
        ReplyEvent::Failed { error, .. } => {
            emit_status(view_data, tx, format!("reply failed: {error}"));
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(view_data: &mut ViewData, internal_tx: &Sender<InternalEvent>, message: impl Into<String>) {
    view_data.status = Some(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<B: ChatBackend>(
    workspace: &mut Workspace,
    backend: &mut B,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.overflow_menu.visible {
        handle_overflow_menu_key(workspace, view_data, key);
        return false;
    }

    match view_data.mode {
        InputMode::Compose => handle_composer_key(workspace, backend, view_data, internal_tx, key),
        InputMode::Nav => handle_nav_key(workspace, backend, view_data, internal_tx, key),
    }

    false
}

fn handle_nav_key<B: ChatBackend>(
    workspace: &mut Workspace,
    backend: &mut B,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Tab => cycle_tab(workspace, 1),
        KeyCode::BackTab => cycle_tab(workspace, -1),
        KeyCode::Char('w') => {
            let active = workspace.tabs.active().clone();
            workspace.dispatch(WorkspaceCommand::CloseTab(active));
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let count = workspace.store.conversations().len();
            if count > 0 && view_data.sidebar_cursor + 1 < count {
                view_data.sidebar_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.sidebar_cursor = view_data.sidebar_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let selected = workspace
                .store
                .conversations()
                .get(view_data.sidebar_cursor)
                .map(|conversation| conversation.id.clone());
            if let Some(id) = selected {
                workspace.dispatch(WorkspaceCommand::OpenConversation(id));
            }
        }
        KeyCode::Char('o') => {
            let partition = partition_tabs(
                workspace.tabs.tabs(),
                workspace.tabs.active(),
                strip_budget(view_data.strip_width),
            );
            if !partition.overflow.is_empty() {
                view_data.overflow_menu.visible = true;
                view_data.overflow_menu.cursor = 0;
            }
        }
        KeyCode::Char('i') => {
            view_data.mode = InputMode::Compose;
        }
        KeyCode::Char(digit @ '1'..='4') => {
            if workspace.tabs.active().is_home() {
                let index = digit as usize - '1' as usize;
                start_and_schedule(
                    workspace,
                    backend,
                    view_data,
                    internal_tx,
                    QUICK_ACTIONS[index],
                );
            }
        }
        KeyCode::Char('?') => {
            view_data.help_visible = true;
        }
        _ => {}
    }
}

fn handle_composer_key<B: ChatBackend>(
    workspace: &mut Workspace,
    backend: &mut B,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            view_data.mode = InputMode::Nav;
        }
        KeyCode::Enter => submit_composer(workspace, backend, view_data, internal_tx),
        KeyCode::Backspace => {
            view_data.composer.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.composer.push(c);
        }
        _ => {}
    }
}

fn handle_overflow_menu_key(workspace: &mut Workspace, view_data: &mut ViewData, key: KeyEvent) {
    let partition = partition_tabs(
        workspace.tabs.tabs(),
        workspace.tabs.active(),
        strip_budget(view_data.strip_width),
    );
    if partition.overflow.is_empty() {
        view_data.overflow_menu = OverflowMenuUiState::default();
        return;
    }
    let cursor = view_data
        .overflow_menu
        .cursor
        .min(partition.overflow.len() - 1);
    view_data.overflow_menu.cursor = cursor;

    match key.code {
        KeyCode::Esc | KeyCode::Char('o') => {
            view_data.overflow_menu = OverflowMenuUiState::default();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if cursor + 1 < partition.overflow.len() {
                view_data.overflow_menu.cursor = cursor + 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.overflow_menu.cursor = cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let id = partition.overflow[cursor].id.clone();
            workspace.dispatch(WorkspaceCommand::ActivateTab(id));
            view_data.overflow_menu = OverflowMenuUiState::default();
        }
        KeyCode::Char('x') => {
            let id = partition.overflow[cursor].id.clone();
            workspace.dispatch(WorkspaceCommand::CloseTab(id));
            if partition.overflow.len() == 1 {
                view_data.overflow_menu = OverflowMenuUiState::default();
            } else {
                view_data.overflow_menu.cursor = cursor.saturating_sub(1);
            }
        }
        _ => {}
    }
}

fn cycle_tab(workspace: &mut Workspace, delta: isize) {
    let tabs = workspace.tabs.tabs();
    if tabs.is_empty() {
        return;
    }
    let current = tabs
        .iter()
        .position(|tab| tab.id == *workspace.tabs.active())
        .unwrap_or(0) as isize;
    let len = tabs.len() as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    let id = tabs[next].id.clone();
    workspace.dispatch(WorkspaceCommand::ActivateTab(id));
}

fn submit_composer<B: ChatBackend>(
    workspace: &mut Workspace,
    backend: &mut B,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let trimmed = view_data.composer.trim().to_owned();
    if trimmed.is_empty() {
        // Whitespace-only input never reaches the store.
        return;
    }
    view_data.composer.clear();

    match workspace.tabs.active().clone() {
        TabId::Home => {
            start_and_schedule(workspace, backend, view_data, internal_tx, &trimmed);
        }
        TabId::Conversation(id) => {
            let events = workspace.dispatch(WorkspaceCommand::SendMessage {
                conversation: id.clone(),
                text: trimmed,
            });
            if !events.is_empty() {
                schedule_reply(backend, view_data, internal_tx, id);
            }
        }
    }
}

fn start_and_schedule<B: ChatBackend>(
    workspace: &mut Workspace,
    backend: &mut B,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    text: &str,
) {
    let events = workspace.dispatch(WorkspaceCommand::StartConversation(text.to_owned()));
    let started = events.iter().find_map(|event| match event {
        WorkspaceEvent::ConversationStarted(id) => Some(id.clone()),
        _ => None,
    });
    if let Some(id) = started {
        schedule_reply(backend, view_data, internal_tx, id);
    }
}

fn schedule_reply<B: ChatBackend>(
    backend: &mut B,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    conversation: ConversationId,
) {
    view_data.next_request_id = view_data.next_request_id.wrapping_add(1);
    let request_id = view_data.next_request_id;
    match backend.spawn_reply(request_id, &conversation, internal_tx.clone()) {
        Ok(()) => {
            view_data.pending.push(PendingReply {
                request_id,
                conversation,
            });
        }
        Err(error) => {
            emit_status(view_data, internal_tx, format!("reply failed: {error}"));
        }
    }
}

fn render(frame: &mut ratatui::Frame<'_>, workspace: &Workspace, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let partition = partition_tabs(
        workspace.tabs.tabs(),
        workspace.tabs.active(),
        strip_budget(layout[0].width),
    );
    let strip = Paragraph::new(tab_strip_line(&partition, workspace.tabs.active()))
        .block(Block::default().title("strix").borders(Borders::ALL));
    frame.render_widget(strip, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(layout[1]);

    let sidebar = Paragraph::new(render_sidebar_text(workspace, view_data))
        .block(Block::default().title("history").borders(Borders::ALL));
    frame.render_widget(sidebar, body[0]);

    match workspace.tabs.active() {
        TabId::Home => {
            let home = Paragraph::new(render_home_text(view_data))
                .wrap(Wrap { trim: false })
                .block(Block::default().title("wise owl").borders(Borders::ALL));
            frame.render_widget(home, body[1]);
        }
        TabId::Conversation(id) => {
            let conversation = workspace.store.conversation(id);
            let title = conversation.map_or("conversation", |c| c.title.as_str());
            let text = render_transcript_text(conversation, view_data.has_pending(id), view_data);
            let pane = Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(Block::default().title(title.to_owned()).borders(Borders::ALL));
            frame.render_widget(pane, body[1]);
        }
    }

    let status = Paragraph::new(status_text(view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if view_data.overflow_menu.visible {
        let area = overflow_menu_rect(frame.area(), partition.overflow.len() as u16);
        frame.render_widget(Clear, area);
        let menu = Paragraph::new(render_overflow_menu_text(
            &partition,
            view_data.overflow_menu.cursor,
        ))
        .block(
            Block::default()
                .title("more tabs")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(menu, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn tab_strip_line(partition: &TabPartition, active: &TabId) -> Line<'static> {
    let mut spans = Vec::new();
    for tab in &partition.visible {
        let close_mark = if tab.is_home() { "" } else { " x" };
        let label = format!(" {}{} ", tab_label(tab), close_mark);
        let style = if &tab.id == active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("|"));
    }
    if !partition.overflow.is_empty() {
        spans.push(Span::styled(
            format!(" >>{} ", partition.overflow.len()),
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

fn tab_label(tab: &Tab) -> String {
    let mut label: String = tab.title.chars().take(TAB_LABEL_CHARS).collect();
    if tab.title.chars().count() > TAB_LABEL_CHARS {
        label.push('~');
    }
    label
}

fn render_sidebar_text(workspace: &Workspace, view_data: &ViewData) -> String {
    let conversations = workspace.store.conversations();
    if conversations.is_empty() {
        return "no conversations yet\n\npress i and ask something".to_owned();
    }

    let mut lines = Vec::with_capacity(conversations.len());
    for (index, conversation) in conversations.iter().enumerate() {
        let cursor = if index == view_data.sidebar_cursor {
            ">"
        } else {
            " "
        };
        let open_mark = if workspace
            .tabs
            .contains(&TabId::Conversation(conversation.id.clone()))
        {
            "*"
        } else {
            " "
        };
        lines.push(format!("{cursor}{open_mark} {}", conversation.title));
    }
    lines.push(String::new());
    lines.push("press i and ask something".to_owned());
    lines.join("\n")
}

fn render_home_text(view_data: &ViewData) -> String {
    let mut lines = vec![
        "Welcome back!".to_owned(),
        "Ask anything to wise owl.".to_owned(),
        String::new(),
    ];
    for (index, action) in QUICK_ACTIONS.iter().enumerate() {
        lines.push(format!("  {}. {action}", index + 1));
    }
    lines.push(String::new());
    lines.push(composer_line(view_data));
    lines.join("\n")
}

fn render_transcript_text(
    conversation: Option<&Conversation>,
    pending: bool,
    view_data: &ViewData,
) -> String {
    let mut lines = Vec::new();
    if let Some(conversation) = conversation {
        let keep = conversation.messages.len().saturating_sub(TRANSCRIPT_KEEP);
        for message in conversation.messages.iter().skip(keep) {
            let label = match message.role {
                Role::User => "you",
                Role::Assistant => "owl",
            };
            lines.push(format!("{label}: {}", message.content));
            lines.push(String::new());
        }
    }
    if pending {
        lines.push(format!("owl: {GENERATING_MARKER}"));
        lines.push(String::new());
    }
    lines.push(composer_line(view_data));
    lines.join("\n")
}

fn composer_line(view_data: &ViewData) -> String {
    match view_data.mode {
        InputMode::Compose => format!("> {}_", view_data.composer),
        InputMode::Nav => "press i to ask".to_owned(),
    }
}

fn render_overflow_menu_text(partition: &TabPartition, cursor: usize) -> String {
    let mut lines = Vec::with_capacity(partition.overflow.len());
    for (index, tab) in partition.overflow.iter().enumerate() {
        let mark = if index == cursor { ">" } else { " " };
        lines.push(format!("{mark} {}", tab.title));
    }
    lines.push(String::new());
    lines.push("enter open | x close | esc".to_owned());
    lines.join("\n")
}

fn status_text(view_data: &ViewData) -> String {
    let mode = match view_data.mode {
        InputMode::Nav => "NAV",
        InputMode::Compose => "ASK",
    };
    let pending = if view_data.pending.is_empty() {
        String::new()
    } else {
        format!(" | {} pending", view_data.pending.len())
    };
    let default = "tab cycle | w close | j/k enter | o more | i ask | 1-4 quick | ? | ctrl+q";
    match &view_data.status {
        Some(status) => format!("{mode}{pending} | {status}"),
        None => format!("{mode}{pending} | {default}"),
    }
}

fn help_overlay_text() -> String {
    [
        "tab / shift-tab   cycle through open tabs",
        "w                 close the active tab (home never closes)",
        "j / k, enter      pick a conversation from the sidebar",
        "o                 open the overflowed-tabs menu",
        "i                 focus the composer; esc leaves it",
        "1-4               quick actions (home tab only)",
        "ctrl+q            quit",
    ]
    .join("\n")
}

fn overflow_menu_rect(area: Rect, entries: u16) -> Rect {
    let width = 34.min(area.width);
    let height = (entries + 4).min(area.height);
    let x = area.width.saturating_sub(width + 1);
    Rect::new(area.x + x, area.y + 2, width, height)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
