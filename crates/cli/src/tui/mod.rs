pub mod data;
pub mod dialog;

use std::io::{self, stdout, Write};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use restock_config::settings::Settings;
use restock_config::theme::Theme;
use restock_core::columns::{Alignment, COLUMNS, COLUMN_COUNT};
use restock_engine::editor::GridEditor;
use restock_engine::grid::{EditOutcome, Grid};
use restock_io::store::LocalStore;

use crate::util;
use data::GridLayout;
use dialog::ConfirmButton;

/// Map a theme color onto the terminal.
pub(crate) fn tc(c: restock_config::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Navigate,
    Edit,
}

struct TuiApp {
    editor: GridEditor,
    store: LocalStore,
    settings: Settings,
    theme: Theme,
    layout: GridLayout,
    mode: Mode,
    /// Text being typed for the cell under the cursor (Edit mode only)
    edit_buffer: String,
    cursor_row: usize,
    cursor_col: usize,
    scroll_row: usize,
    scroll_col: usize,
    /// Which button the delete prompt will activate on Enter
    confirm_focus: ConfirmButton,
    /// One-shot message shown in the status bar until the next key
    status_message: Option<String>,
    /// Unsaved changes since the last save (or since opening)
    dirty: bool,
    store_name: String,
    should_quit: bool,
    show_help: bool,
}

impl TuiApp {
    fn new(editor: GridEditor, store: LocalStore, store_name: String, settings: Settings) -> Self {
        let theme = Theme::from_variant(settings.theme_variant);
        let layout = GridLayout::compute(
            editor.grid(),
            settings.min_column_width as usize,
            settings.max_column_width as usize,
        );
        Self {
            editor,
            store,
            settings,
            theme,
            layout,
            mode: Mode::Navigate,
            edit_buffer: String::new(),
            cursor_row: 0,
            cursor_col: 0,
            scroll_row: 0,
            scroll_col: 0,
            confirm_focus: ConfirmButton::Yes,
            status_message: None,
            dirty: false,
            store_name,
            should_quit: false,
            show_help: false,
        }
    }

    fn refresh_layout(&mut self) {
        self.layout = GridLayout::compute(
            self.editor.grid(),
            self.settings.min_column_width as usize,
            self.settings.max_column_width as usize,
        );
    }

    fn clamp_cursor(&mut self) {
        let num_rows = self.editor.grid().row_count();
        if num_rows == 0 {
            self.cursor_row = 0;
        } else if self.cursor_row >= num_rows {
            self.cursor_row = num_rows - 1;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            // Any key dismisses help
            self.show_help = false;
            return;
        }

        self.status_message = None;

        if self.editor.confirm_visible() {
            self.handle_confirm_key(key);
            return;
        }

        match self.mode {
            Mode::Navigate => self.handle_navigate_key(key),
            Mode::Edit => self.handle_edit_key(key),
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirm_focus = self.confirm_focus.other();
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => self.delete_confirmed(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.delete_cancelled(),
            KeyCode::Enter => match self.confirm_focus {
                ConfirmButton::Yes => self.delete_confirmed(),
                ConfirmButton::Cancel => self.delete_cancelled(),
            },
            _ => {}
        }
    }

    fn delete_confirmed(&mut self) {
        let before = self.editor.grid().row_count();
        self.editor.confirm_delete();
        let removed = before - self.editor.grid().row_count();
        self.refresh_layout();
        self.clamp_cursor();
        self.confirm_focus = ConfirmButton::Yes;
        self.dirty = true;
        self.status_message = Some(if removed == 1 {
            "deleted 1 row".to_string()
        } else {
            format!("deleted {} rows", removed)
        });
    }

    fn delete_cancelled(&mut self) {
        self.editor.cancel_delete();
        self.confirm_focus = ConfirmButton::Yes;
    }

    fn handle_navigate_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.save(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char('k') if self.settings.vim_keys => self.move_cursor(-1, 0),
            KeyCode::Char('j') if self.settings.vim_keys => self.move_cursor(1, 0),
            KeyCode::Char('h') if self.settings.vim_keys => self.move_cursor(0, -1),
            KeyCode::Char('l') if self.settings.vim_keys => self.move_cursor(0, 1),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.cursor_row = 0,
            KeyCode::End | KeyCode::Char('G') => {
                let num_rows = self.editor.grid().row_count();
                if num_rows > 0 {
                    self.cursor_row = num_rows - 1;
                }
            }
            KeyCode::Char('0') => self.cursor_col = 0,
            KeyCode::Char('$') => self.cursor_col = COLUMN_COUNT - 1,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.move_cursor(0, -1);
                } else {
                    self.move_cursor(0, 1);
                }
            }
            KeyCode::BackTab => self.move_cursor(0, -1),
            KeyCode::Char(' ') => self.editor.toggle_row_selection(self.cursor_row),
            KeyCode::Enter | KeyCode::Char('i') => self.begin_edit(),
            KeyCode::Char('a') => {
                self.editor.add_row();
                self.cursor_row = self.editor.grid().row_count() - 1;
                self.dirty = true;
                self.refresh_layout();
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.editor.selection().is_empty() {
                    self.status_message = Some("no rows marked for deletion".to_string());
                } else {
                    self.confirm_focus = ConfirmButton::Yes;
                    self.editor.request_delete();
                }
            }
            KeyCode::Char('w') => self.save(),
            _ => {}
        }
    }

    fn begin_edit(&mut self) {
        let grid = self.editor.grid();
        if grid.is_empty() {
            return;
        }
        self.edit_buffer = grid.rows()[self.cursor_row].cell(self.cursor_col).to_string();
        self.mode = Mode::Edit;
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Navigate;
                self.edit_buffer.clear();
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }

    fn commit_edit(&mut self) {
        let outcome = self
            .editor
            .edit_cell(self.cursor_row, self.cursor_col, &self.edit_buffer);
        match outcome {
            EditOutcome::Committed => {
                self.dirty = true;
                self.refresh_layout();
            }
            // Rejected input never lands; the warning highlight on the
            // row is the only signal the user gets.
            EditOutcome::Rejected => {}
            EditOutcome::OutOfBounds => {}
        }
        self.mode = Mode::Navigate;
        self.edit_buffer.clear();
    }

    fn save(&mut self) {
        match restock_io::save_grid(&self.store, self.editor.grid()) {
            Ok(()) => {
                self.dirty = false;
                self.status_message = Some("table data saved".to_string());
            }
            Err(e) => {
                self.status_message = Some(format!("save failed: {}", e));
            }
        }
    }

    // A click moves the cursor and flips the row's delete mark in one
    // gesture, even when it lands mid-edit.
    fn handle_mouse(&mut self, mouse: MouseEvent, visible_rows: usize) {
        if self.show_help || self.editor.confirm_visible() {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            // Data rows start below the title and header lines
            let first_data_line = 2u16;
            if mouse.row < first_data_line {
                return;
            }
            let offset = (mouse.row - first_data_line) as usize;
            if offset >= visible_rows {
                return;
            }
            let clicked = self.scroll_row + offset;
            if clicked >= self.editor.grid().row_count() {
                return;
            }
            if self.mode == Mode::Edit {
                self.mode = Mode::Navigate;
                self.edit_buffer.clear();
            }
            self.cursor_row = clicked;
            self.editor.toggle_row_selection(clicked);
        }
    }

    fn move_cursor(&mut self, drow: i32, dcol: i32) {
        let num_rows = self.editor.grid().row_count();
        if num_rows == 0 {
            return;
        }
        let new_row = (self.cursor_row as i32 + drow)
            .max(0)
            .min(num_rows as i32 - 1) as usize;
        let new_col = (self.cursor_col as i32 + dcol)
            .max(0)
            .min(COLUMN_COUNT as i32 - 1) as usize;
        self.cursor_row = new_row;
        self.cursor_col = new_col;
    }

    fn page_up(&mut self) {
        let jump = 20;
        self.cursor_row = self.cursor_row.saturating_sub(jump);
    }

    fn page_down(&mut self) {
        let jump = 20;
        let num_rows = self.editor.grid().row_count();
        if num_rows > 0 {
            self.cursor_row = (self.cursor_row + jump).min(num_rows - 1);
        }
    }

    fn ensure_visible(&mut self, visible_rows: usize, area_width: u16) {
        if self.cursor_row < self.scroll_row {
            self.scroll_row = self.cursor_row;
        }
        if visible_rows > 0 && self.cursor_row >= self.scroll_row + visible_rows {
            self.scroll_row = self.cursor_row - visible_rows + 1;
        }

        let available = (area_width as usize).saturating_sub(self.layout.row_num_width + 1);
        let vis_cols = self.visible_columns(self.scroll_col, available);

        if self.cursor_col < self.scroll_col {
            self.scroll_col = self.cursor_col;
        }
        if !vis_cols.is_empty() {
            let last_vis = vis_cols[vis_cols.len() - 1];
            if self.cursor_col > last_vis {
                let mut sc = self.scroll_col;
                loop {
                    let cols = self.visible_columns(sc, available);
                    if cols.is_empty() || *cols.last().unwrap() >= self.cursor_col {
                        break;
                    }
                    sc += 1;
                    if sc >= COLUMN_COUNT {
                        break;
                    }
                }
                self.scroll_col = sc;
            }
        }
    }

    fn visible_columns(&self, start_col: usize, available: usize) -> Vec<usize> {
        let mut cols = Vec::new();
        let mut used = 0usize;
        for c in start_col..COLUMN_COUNT {
            let w = self.layout.col_widths.get(c).copied().unwrap_or(3) + 1;
            if used + w > available && !cols.is_empty() {
                break;
            }
            used += w;
            cols.push(c);
        }
        cols
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        if self.settings.show_status_bar {
            let chunks = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

            self.draw_title(frame, chunks[0]);
            self.draw_grid(frame, chunks[1]);
            self.draw_status(frame, chunks[2]);
        } else {
            let chunks =
                Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

            self.draw_title(frame, chunks[0]);
            self.draw_grid(frame, chunks[1]);
        }

        if self.editor.confirm_visible() {
            dialog::draw_confirm(frame, area, self.confirm_focus, &self.theme);
        }
        if self.show_help {
            self.draw_help(frame, area);
        }
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let dirty_mark = if self.dirty { " *" } else { "" };
        let title = format!(
            " restock: {} | {} rows{} ",
            self.store_name,
            self.editor.grid().row_count(),
            dirty_mark
        );
        let para = Paragraph::new(Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(tc(self.theme.title_fg))
                .bg(tc(self.theme.title_bg))
                .add_modifier(Modifier::BOLD),
        )]))
        .style(Style::default().bg(tc(self.theme.title_bg)));
        frame.render_widget(para, area);
    }

    fn draw_grid(&self, frame: &mut Frame, area: Rect) {
        let grid = self.editor.grid();
        if grid.is_empty() {
            let msg = Paragraph::new("(empty)")
                .style(Style::default().fg(tc(self.theme.text_dim)));
            frame.render_widget(msg, area);
            return;
        }

        let grid_available =
            (area.width as usize).saturating_sub(self.layout.row_num_width + 1);
        let vis_cols = self.visible_columns(self.scroll_col, grid_available);

        let header_height: u16 = 1;
        let data_height = area.height.saturating_sub(header_height);

        // Header line
        let gutter_blank = " ".repeat(self.layout.row_num_width);
        let mut header_spans = vec![Span::styled(
            format!("{} ", gutter_blank),
            Style::default().bg(tc(self.theme.header_bg)),
        )];
        for &c in &vis_cols {
            let col = &COLUMNS[c];
            let w = self.layout.col_widths[c];
            let display = pad_cell(col.label, w, col.alignment);
            let mut style = Style::default()
                .fg(tc(self.theme.header_fg))
                .bg(tc(self.theme.header_bg))
                .add_modifier(Modifier::BOLD);
            if c == self.cursor_col {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            header_spans.push(Span::styled(format!("{} ", display), style));
        }

        // Data lines
        let visible_rows = data_height as usize;
        let end_row = (self.scroll_row + visible_rows).min(grid.row_count());

        let mut lines: Vec<Line> = Vec::with_capacity(visible_rows + 1);
        lines.push(Line::from(header_spans));

        for r in self.scroll_row..end_row {
            let row = &grid.rows()[r];
            let is_cursor_row = r == self.cursor_row;
            let highlighted = self.editor.row_highlighted(r);

            let row_num_style = if highlighted {
                Style::default()
                    .fg(tc(self.theme.warning_fg))
                    .bg(tc(self.theme.warning_bg))
            } else if is_cursor_row {
                Style::default()
                    .fg(tc(self.theme.header_fg))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(tc(self.theme.text_dim))
            };

            let mut spans = vec![Span::styled(
                format!("{:>width$} ", r + 1, width = self.layout.row_num_width),
                row_num_style,
            )];

            for &c in &vis_cols {
                let w = self.layout.col_widths[c];
                let editing = self.mode == Mode::Edit && is_cursor_row && c == self.cursor_col;
                let text = if editing {
                    self.edit_buffer.as_str()
                } else {
                    row.cell(c)
                };
                let display = pad_cell(text, w, COLUMNS[c].alignment);

                let style = if editing {
                    Style::default()
                        .fg(tc(self.theme.cursor_fg))
                        .bg(tc(self.theme.cursor_bg))
                        .add_modifier(Modifier::UNDERLINED)
                } else if is_cursor_row && c == self.cursor_col {
                    Style::default()
                        .fg(tc(self.theme.cursor_fg))
                        .bg(tc(self.theme.cursor_bg))
                        .add_modifier(Modifier::BOLD)
                } else if highlighted {
                    Style::default()
                        .fg(tc(self.theme.warning_fg))
                        .bg(tc(self.theme.warning_bg))
                } else {
                    Style::default().fg(tc(self.theme.text))
                };

                spans.push(Span::styled(format!("{} ", display), style));
            }

            lines.push(Line::from(spans));
        }

        let para = Paragraph::new(lines);
        frame.render_widget(para, area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let grid = self.editor.grid();
        let label = COLUMNS[self.cursor_col].label;

        let mut left = if grid.is_empty() {
            " (no rows)".to_string()
        } else if self.mode == Mode::Edit {
            format!(
                " editing {} {} = {:?}",
                label,
                self.cursor_row + 1,
                self.edit_buffer
            )
        } else {
            let value = grid.rows()[self.cursor_row].cell(self.cursor_col);
            format!(" {} {} = {:?}", label, self.cursor_row + 1, value)
        };
        if let Some(msg) = &self.status_message {
            left.push_str(" | ");
            left.push_str(msg);
        }

        let marked = self.editor.selection().len();
        let hint_head = "a: add  space: mark  ";
        let hint_delete = if marked > 0 {
            format!("d: delete ({})  ", marked)
        } else {
            "d: delete  ".to_string()
        };
        let hint_tail = "w: save  ?: help ";

        let used = util::display_width(&left)
            + util::display_width(hint_head)
            + util::display_width(&hint_delete)
            + util::display_width(hint_tail);
        let padding = (area.width as usize).saturating_sub(used);

        let base = Style::default()
            .fg(tc(self.theme.status_fg))
            .bg(tc(self.theme.status_bg));
        let delete_style = if marked > 0 {
            base.add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(tc(self.theme.text_dim))
                .bg(tc(self.theme.status_bg))
        };

        let spans = vec![
            Span::styled(left, base),
            Span::styled(" ".repeat(padding), base),
            Span::styled(hint_head, base),
            Span::styled(hint_delete, delete_style),
            Span::styled(hint_tail, base),
        ];
        let para = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(tc(self.theme.status_bg)));
        frame.render_widget(para, area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let mut help_lines = vec![
            "",
            "  Navigation",
            "  ----------",
            "  arrows            Move cursor",
        ];
        if self.settings.vim_keys {
            help_lines.push("  hjkl              Move cursor");
        }
        help_lines.extend_from_slice(&[
            "  PgUp / PgDn       Page up/down",
            "  Home / g          First row",
            "  End  / G          Last row",
            "  0 / $             First/last column",
            "  Tab / Shift+Tab   Next/prev column",
            "",
            "  Editing",
            "  -------",
            "  Enter / i         Edit cell",
            "  Esc               Cancel edit",
            "  a                 Add row",
            "  w / Ctrl+S        Save",
            "",
            "  Deleting",
            "  --------",
            "  space / click     Mark row for deletion",
            "  d / Del           Delete marked rows",
            "",
            "  General",
            "  -------",
            "  q / Esc           Quit",
            "  ?                 Toggle this help",
            "",
        ]);
        let help_width: u16 = 46;
        let help_height: u16 = help_lines.len() as u16;

        let x = area.width.saturating_sub(help_width) / 2;
        let y = area.height.saturating_sub(help_height) / 2;
        let popup = Rect::new(
            area.x + x,
            area.y + y,
            help_width.min(area.width),
            help_height.min(area.height),
        );

        let lines: Vec<Line> = help_lines
            .iter()
            .map(|s| Line::from(Span::styled(*s, Style::default().fg(tc(self.theme.text)))))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tc(self.theme.header_fg)))
            .title(" Keybindings ")
            .title_style(
                Style::default()
                    .fg(tc(self.theme.header_fg))
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(tc(self.theme.header_bg)));

        frame.render_widget(Clear, popup);
        let para = Paragraph::new(lines).block(block);
        frame.render_widget(para, popup);
    }
}

fn pad_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let truncated = util::truncate_display(text, width);
    match alignment {
        Alignment::Left => util::pad_right(&truncated, width),
        Alignment::Right => util::pad_left(&truncated, width),
    }
}

/// Run the interactive grid editor. Blocks until the user quits.
pub fn run(
    editor: GridEditor,
    store: LocalStore,
    store_name: String,
    settings: Settings,
) -> Result<(), String> {
    let app = TuiApp::new(editor, store, store_name, settings);
    run_app(app)
}

fn run_app(mut app: TuiApp) -> Result<(), String> {
    terminal::enable_raw_mode()
        .map_err(|e| format!("failed to enable raw mode: {}", e))?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| format!("failed to enter alternate screen: {}", e))?;
    stdout()
        .execute(EnableMouseCapture)
        .map_err(|e| format!("failed to enable mouse capture: {}", e))?;

    struct Cleanup;
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = stdout().execute(DisableMouseCapture);
            let _ = stdout().execute(LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        }
    }
    let _cleanup = Cleanup;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create terminal: {}", e))?;

    loop {
        let term_size = terminal
            .size()
            .map(|s| Rect::new(0, 0, s.width, s.height))
            .unwrap_or_default();
        let chrome = if app.settings.show_status_bar { 3u16 } else { 2u16 };
        let visible_rows = term_size.height.saturating_sub(chrome) as usize;
        app.ensure_visible(visible_rows, term_size.width);

        terminal
            .draw(|frame| app.draw(frame))
            .map_err(|e| format!("draw error: {}", e))?;

        if event::poll(Duration::from_millis(100))
            .map_err(|e| format!("event poll error: {}", e))?
        {
            match event::read().map_err(|e| format!("event read error: {}", e))? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, visible_rows),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Print the grid as a plain text table to stdout (no TUI, no raw mode).
/// Rows with a rejected min value get a `!` next to the row number.
pub fn print_plain(grid: &Grid, settings: &Settings, max_rows: usize) -> Result<(), String> {
    let out = io::stdout();
    let mut w = out.lock();
    let layout = GridLayout::compute(
        grid,
        settings.min_column_width as usize,
        settings.max_column_width as usize,
    );
    let num_rows = grid.row_count();
    let limit = if max_rows == 0 {
        num_rows
    } else {
        max_rows.min(num_rows)
    };

    // Header
    write!(w, "{:>width$} ", "", width = layout.row_num_width + 1)
        .map_err(|e| e.to_string())?;
    for (c, col) in COLUMNS.iter().enumerate() {
        let cw = layout.col_widths[c];
        write!(w, "{} ", pad_cell(col.label, cw, col.alignment)).map_err(|e| e.to_string())?;
    }
    writeln!(w).map_err(|e| e.to_string())?;

    // Separator
    write!(w, "{:->width$}", "", width = layout.row_num_width + 2)
        .map_err(|e| e.to_string())?;
    for c in 0..COLUMN_COUNT {
        let cw = layout.col_widths[c];
        write!(w, "{}-", "-".repeat(cw)).map_err(|e| e.to_string())?;
    }
    writeln!(w).map_err(|e| e.to_string())?;

    // Rows
    for r in 0..limit {
        let row = &grid.rows()[r];
        let mark = if grid.row_error(r) { '!' } else { ' ' };
        write!(w, "{:>width$}{} ", r + 1, mark, width = layout.row_num_width)
            .map_err(|e| e.to_string())?;
        for (c, col) in COLUMNS.iter().enumerate() {
            let cw = layout.col_widths[c];
            write!(w, "{} ", pad_cell(row.cell(c), cw, col.alignment))
                .map_err(|e| e.to_string())?;
        }
        writeln!(w).map_err(|e| e.to_string())?;
    }

    if limit < num_rows {
        writeln!(w, "... ({} more rows)", num_rows - limit).map_err(|e| e.to_string())?;
    }

    Ok(())
}
