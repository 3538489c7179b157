use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};

use crate::chart_spec::dashboard_charts;
use crate::charts;
use crate::data_loader::{get_loader, resolve_extension, TableData};
use crate::dataset::Dataset;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const PREVIEW_ROWS: usize = 5;
const RELOAD_INTERVAL: Duration = Duration::from_secs(5);
const FEEDBACK_ACK: &str = "Thank you for your feedback!";
const FOOTER_TEXT: &str =
    "This business dashboard template is flexible and can be expanded upon based on your specific business needs.";

fn compare_cells(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(a_num), Ok(b_num)) => a_num.partial_cmp(&b_num).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.cmp(b),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Section {
    Preview,
    Feedback,
}

pub struct DashboardApp {
    pub dataset: Option<Dataset>,
    pub file_path: Option<PathBuf>,
    pub format_override: Option<String>,

    pub focus: Section,
    pub selected_row: usize,
    pub selected_column: usize,
    pub table_state: TableState,

    pub show_path_prompt: bool,
    pub path_input: String,
    pub load_error: Option<String>,

    pub editing_feedback: bool,
    pub feedback_input: String,
    pub feedback_acknowledged: bool,

    is_detail: bool,
    last_modified: Option<SystemTime>,
    last_reload_check: Instant,
}

impl DashboardApp {
    pub fn new(
        dataset: Option<Dataset>,
        file_path: Option<PathBuf>,
        format_override: Option<String>,
    ) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        let last_modified = file_path
            .as_ref()
            .and_then(|path| fs::metadata(path).ok())
            .and_then(|metadata| metadata.modified().ok());

        DashboardApp {
            dataset,
            file_path,
            format_override,

            focus: Section::Preview,
            selected_row: 0,
            selected_column: 0,
            table_state,

            show_path_prompt: false,
            path_input: String::new(),
            load_error: None,

            editing_feedback: false,
            feedback_input: String::new(),
            feedback_acknowledged: false,

            is_detail: false,
            last_modified,
            last_reload_check: Instant::now(),
        }
    }

    pub fn main_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<Option<DashboardApp>, Box<dyn Error>> {
        loop {
            self.draw_ui(terminal)?;

            if !self.is_detail {
                self.reload_if_modified();
            }

            if crossterm::event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if self.show_path_prompt {
                        match key.code {
                            KeyCode::Esc => {
                                self.show_path_prompt = false;
                                self.load_error = None;
                            }
                            KeyCode::Enter => {
                                self.open_entered_path();
                            }
                            KeyCode::Backspace => {
                                self.path_input.pop();
                            }
                            KeyCode::Char(c) => {
                                self.path_input.push(c);
                            }
                            _ => {}
                        }
                    } else if self.editing_feedback {
                        match key.code {
                            KeyCode::Esc => {
                                self.editing_feedback = false;
                            }
                            KeyCode::Enter => {
                                self.submit_feedback();
                            }
                            KeyCode::Backspace => {
                                self.feedback_input.pop();
                            }
                            KeyCode::Char(c) => {
                                self.feedback_input.push(c);
                            }
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Char('q') => {
                                return Ok(None);
                            }
                            KeyCode::Char('o') if !self.is_detail => {
                                self.path_input = self
                                    .file_path
                                    .as_ref()
                                    .map(|path| path.to_string_lossy().to_string())
                                    .unwrap_or_default();
                                self.show_path_prompt = true;
                            }
                            KeyCode::Char('f') if !self.is_detail && self.dataset.is_some() => {
                                self.focus = Section::Feedback;
                                self.editing_feedback = true;
                                self.feedback_acknowledged = false;
                            }
                            KeyCode::Tab if !self.is_detail && self.dataset.is_some() => {
                                self.cycle_focus();
                            }
                            KeyCode::Up if self.focus == Section::Preview => {
                                if self.selected_row > 0 {
                                    self.selected_row -= 1;
                                }
                                self.table_state.select(Some(self.selected_row));
                            }
                            KeyCode::Down if self.focus == Section::Preview => {
                                let num_rows = self.visible_rows();
                                if num_rows > 0 && self.selected_row < num_rows - 1 {
                                    self.selected_row += 1;
                                }
                                self.table_state.select(Some(self.selected_row));
                            }
                            KeyCode::Left if self.focus == Section::Preview => {
                                if self.selected_column > 0 {
                                    self.selected_column -= 1;
                                }
                            }
                            KeyCode::Right if self.focus == Section::Preview => {
                                let num_cols = self
                                    .dataset
                                    .as_ref()
                                    .map_or(0, |dataset| dataset.data.headers.len());
                                if num_cols > 0 && self.selected_column < num_cols - 1 {
                                    self.selected_column += 1;
                                }
                            }
                            KeyCode::Char('[') if self.focus == Section::Preview => {
                                self.sort_table(true);
                            }
                            KeyCode::Char(']') if self.focus == Section::Preview => {
                                self.sort_table(false);
                            }
                            KeyCode::Enter if !self.is_detail && self.focus == Section::Preview => {
                                if let Some(new_app) = self.detail_view() {
                                    return Ok(Some(new_app));
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    fn cycle_focus(&mut self) {
        let sections: Vec<Section> = Section::iter().collect();
        let index = sections.iter().position(|s| *s == self.focus).unwrap_or(0);
        self.focus = sections[(index + 1) % sections.len()];
    }

    fn visible_rows(&self) -> usize {
        match &self.dataset {
            Some(dataset) if self.is_detail => dataset.row_count(),
            Some(dataset) => dataset.row_count().min(PREVIEW_ROWS),
            None => 0,
        }
    }

    fn open_entered_path(&mut self) {
        let path = self.path_input.trim().to_string();
        if path.is_empty() {
            return;
        }

        let extension = resolve_extension(&path, self.format_override.as_deref());
        match get_loader(&extension).and_then(|loader| loader.load(&path)) {
            Ok(data) => {
                self.install_dataset(Dataset::new(data), Some(PathBuf::from(path)));
                self.show_path_prompt = false;
                self.load_error = None;
            }
            Err(e) => {
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn install_dataset(&mut self, dataset: Dataset, file_path: Option<PathBuf>) {
        self.selected_row = 0;
        self.selected_column = 0;
        self.table_state.select(Some(0));
        self.last_modified = file_path
            .as_ref()
            .and_then(|path| fs::metadata(path).ok())
            .and_then(|metadata| metadata.modified().ok());
        self.file_path = file_path;
        self.dataset = Some(dataset);
    }

    // Re-read a file-backed dataset when its mtime advances, at most once
    // per RELOAD_INTERVAL.
    fn reload_if_modified(&mut self) {
        if self.last_reload_check.elapsed() < RELOAD_INTERVAL {
            return;
        }
        self.last_reload_check = Instant::now();

        let path = match &self.file_path {
            Some(path) => path.clone(),
            None => return,
        };
        let modified = match fs::metadata(&path).and_then(|metadata| metadata.modified()) {
            Ok(modified) => modified,
            Err(_) => return,
        };

        match self.last_modified {
            Some(last) if modified > last => {
                let path_str = path.to_string_lossy().to_string();
                let extension = resolve_extension(&path_str, self.format_override.as_deref());
                match get_loader(&extension).and_then(|loader| loader.load(&path_str)) {
                    Ok(data) => {
                        self.install_dataset(Dataset::new(data), Some(path));
                        self.load_error = None;
                    }
                    Err(e) => {
                        self.last_modified = Some(modified);
                        self.load_error = Some(e.to_string());
                    }
                }
            }
            None => {
                self.last_modified = Some(modified);
            }
            _ => {}
        }
    }

    // The acknowledgment is the same for any content, including empty text;
    // the buffer is discarded on submit.
    fn submit_feedback(&mut self) {
        self.feedback_input.clear();
        self.editing_feedback = false;
        self.feedback_acknowledged = true;
    }

    fn detail_view(&self) -> Option<DashboardApp> {
        let dataset = self.dataset.as_ref()?;
        if dataset.row_count() == 0 {
            return None;
        }
        let selected_row = self.selected_row.min(dataset.row_count() - 1);

        let field_column = dataset.data.headers.clone();
        let value_column: Vec<String> = dataset
            .data
            .columns
            .iter()
            .map(|col| col[selected_row].clone())
            .collect();

        let detail_data = TableData::new(
            vec!["Field".to_string(), "Value".to_string()],
            vec![field_column, value_column],
        );

        let mut app = DashboardApp::new(Some(Dataset::new(detail_data)), None, None);
        app.is_detail = true;
        Some(app)
    }

    fn sort_table(&mut self, ascending: bool) {
        let col_idx = self.selected_column;
        let dataset = match &mut self.dataset {
            Some(dataset) => dataset,
            None => return,
        };
        let num_rows = if dataset.data.columns.is_empty() {
            0
        } else {
            dataset.data.columns[0].len()
        };
        if num_rows == 0 || col_idx >= dataset.data.columns.len() {
            return;
        }

        let mut indices: Vec<usize> = (0..num_rows).collect();

        indices.sort_by(|&i, &j| {
            let a = &dataset.data.columns[col_idx][i];
            let b = &dataset.data.columns[col_idx][j];
            let ord = compare_cells(a, b);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });

        for col in dataset.data.columns.iter_mut() {
            let reordered_col: Vec<String> = indices.iter().map(|&i| col[i].clone()).collect();
            *col = reordered_col;
        }

        self.selected_row = 0;
        self.table_state.select(Some(self.selected_row));
    }


    fn draw_ui<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|f| {
            let size = f.area();

            f.render_widget(Block::default(), size);

            if self.is_detail {
                self.render_detail(f, size);
                return;
            }

            if self.dataset.is_some() {
                self.render_dashboard(f, size);
            } else {
                self.render_upload_screen(f, size);
            }

            if self.show_path_prompt {
                self.render_path_prompt(f, size);
            }
        })?;
        Ok(())
    }

    fn render_dashboard(&mut self, f: &mut Frame, size: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(PREVIEW_ROWS as u16 + 3),
                Constraint::Min(12),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_header(f, chunks[0]);
        self.render_data_line(f, chunks[1]);
        self.render_preview(f, chunks[2]);
        self.render_charts(f, chunks[3]);
        self.render_feedback(f, chunks[4]);
        self.render_footer(f, chunks[5]);
    }

    fn render_upload_screen(&self, f: &mut Frame, size: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_header(f, chunks[0]);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::raw("No data loaded.")),
            Line::from(Span::styled(
                "Press o and enter the path to a CSV file to get started.",
                Style::default().fg(Color::Gray),
            )),
        ];
        if let Some(err) = &self.load_error {
            lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        let upload = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Upload Business Data "),
            );
        f.render_widget(upload, chunks[1]);

        self.render_footer(f, chunks[2]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Get insights into sales, customer demographics, and product performance.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Upload your data to get started!",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(Span::styled(
            " Business Dashboard ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(header, area);
    }

    fn render_data_line(&self, f: &mut Frame, area: Rect) {
        let name = self
            .file_path
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or_else(|| "(in-memory)".to_string());

        let mut spans = vec![
            Span::styled(format!("Data: {} ", name), Style::default().fg(Color::Green)),
            Span::styled(
                "(o: open, [/]: sort, Enter: row detail, f: feedback, q: quit)",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(err) = &self.load_error {
            spans.push(Span::styled(
                format!("  {}", err),
                Style::default().fg(Color::Red),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_preview(&mut self, f: &mut Frame, area: Rect) {
        let dataset = match &self.dataset {
            Some(dataset) => dataset,
            None => return,
        };

        let header_cells = dataset.data.headers.iter().enumerate().map(|(i, h)| {
            let style = if i == self.selected_column {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    .bg(Color::Blue)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            };
            Cell::from(h.clone()).style(style)
        });
        let header = Row::new(header_cells).height(1).bottom_margin(0);

        let num_rows = dataset.row_count().min(PREVIEW_ROWS);
        let rows = (0..num_rows).map(|row_idx| {
            let cells = dataset.data.columns.iter().enumerate().map(|(col_idx, col)| {
                let mut cell = Cell::from(col[row_idx].clone());
                if row_idx == self.selected_row && col_idx == self.selected_column {
                    cell = cell.style(Style::default().bg(Color::LightBlue));
                }
                cell
            });
            Row::new(cells).height(1).bottom_margin(0)
        });

        let widths = vec![Constraint::Length(15); dataset.data.headers.len()];

        let border_style = if self.focus == Section::Preview {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let table = Table::new(rows, &widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Data Preview "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("-> ")
            .column_spacing(2);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_charts(&self, f: &mut Frame, area: Rect) {
        let dataset = match &self.dataset {
            Some(dataset) => dataset,
            None => return,
        };

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(area);

        for (spec, panel) in dashboard_charts().iter().zip(panels.iter()) {
            if spec.missing_columns(dataset).is_empty() {
                charts::render_chart(f, *panel, spec, dataset);
            } else {
                charts::render_warning(f, *panel, spec);
            }
        }
    }

    fn render_feedback(&self, f: &mut Frame, area: Rect) {
        let border_style = if self.focus == Section::Feedback {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Feedback (Your Opinion Counts) ");

        let line = if self.editing_feedback {
            Line::from(vec![
                Span::raw("> "),
                Span::raw(self.feedback_input.clone()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        } else if self.feedback_acknowledged {
            Line::from(Span::styled(
                FEEDBACK_ACK,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "Press f to write feedback, Enter submits.",
                Style::default().fg(Color::DarkGray),
            ))
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let footer = Paragraph::new(FOOTER_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(footer, area);
    }

    fn render_path_prompt(&self, f: &mut Frame, size: Rect) {
        let popup_area = Self::centered_rect(60, 20, size);

        let block = Block::default()
            .title(" Open data file (Enter to load, Esc to cancel) ")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let inner_area = block.inner(popup_area);

        f.render_widget(Clear, popup_area);
        f.render_widget(block, popup_area);

        let mut lines = vec![Line::from(vec![
            Span::raw("Path: "),
            Span::raw(self.path_input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])];
        if let Some(err) = &self.load_error {
            lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        f.render_widget(Paragraph::new(lines), inner_area);
    }

    fn render_detail(&mut self, f: &mut Frame, size: Rect) {
        let dataset = match &self.dataset {
            Some(dataset) => dataset,
            None => return,
        };

        let header_cells = dataset.data.headers.iter().map(|h| {
            Cell::from(h.clone()).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(0);

        let num_rows = dataset.row_count();
        let rows = (0..num_rows).map(|row_idx| {
            let cells = dataset
                .data
                .columns
                .iter()
                .map(|col| Cell::from(col[row_idx].clone()));
            Row::new(cells).height(1).bottom_margin(0)
        });

        let widths = vec![Constraint::Length(20), Constraint::Min(10)];
        let table = Table::new(rows, &widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Row Detail (q to go back) "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("-> ")
            .column_spacing(2);

        f.render_stateful_widget(table, size, &mut self.table_state);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Percentage((100 - percent_y) / 2),
                    Constraint::Percentage(percent_y),
                    Constraint::Percentage((100 - percent_y) / 2),
                ]
                .as_ref(),
            )
            .split(r);
        let vertical_chunk = popup_layout[1];
        let horizontal_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                [
                    Constraint::Percentage((100 - percent_x) / 2),
                    Constraint::Percentage(percent_x),
                    Constraint::Percentage((100 - percent_x) / 2),
                ]
                .as_ref(),
            )
            .split(vertical_chunk);
        horizontal_layout[1]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn dataset(headers: &[&str], rows: &[&[&str]]) -> Dataset {
        let mut columns: Vec<Vec<String>> = headers.iter().map(|_| Vec::new()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                columns[i].push(cell.to_string());
            }
        }
        Dataset::new(TableData::new(
            headers.iter().map(|h| h.to_string()).collect(),
            columns,
        ))
    }

    fn business_dataset() -> Dataset {
        dataset(
            &["date", "amount", "region", "product"],
            &[
                &["2024-01-01", "120", "West", "Widget"],
                &["2024-01-02", "80", "East", "Gadget"],
                &["2024-01-03", "45.5", "West", "Widget"],
            ],
        )
    }

    fn render_text(app: &mut DashboardApp, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        app.draw_ui(&mut terminal).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_no_dataset_renders_header_and_upload_only() {
        let mut app = DashboardApp::new(None, None, None);
        let text = render_text(&mut app, 110, 32);

        assert!(text.contains("Business Dashboard"));
        assert!(text.contains("No data loaded."));
        assert!(text.contains("business dashboard template"));

        assert!(!text.contains("Data Preview"));
        assert!(!text.contains("Sales Over Time"));
        assert!(!text.contains("Please ensure"));
        assert!(!text.contains("Feedback"));
    }

    #[test]
    fn test_dashboard_renders_all_three_charts() {
        let mut app = DashboardApp::new(Some(business_dataset()), None, None);
        let text = render_text(&mut app, 120, 32);

        assert!(text.contains("Data Preview"));
        assert!(text.contains("Sales Over Time"));
        assert!(text.contains("Customer Segmentation"));
        assert!(text.contains("Top Products By Sales"));
        assert!(!text.contains("Please ensure"));
    }

    #[test]
    fn test_missing_amount_column_shows_warnings() {
        let data = dataset(
            &["date", "region", "product"],
            &[&["2024-01-01", "West", "Widget"]],
        );
        let mut app = DashboardApp::new(Some(data), None, None);
        let text = render_text(&mut app, 120, 32);

        // All three charts require the amount column
        assert_eq!(text.matches("Please ensure").count(), 3);
    }

    #[test]
    fn test_submit_feedback_fixed_ack_and_cleared_buffer() {
        let mut app = DashboardApp::new(Some(business_dataset()), None, None);

        app.feedback_input = "loved it".to_string();
        app.editing_feedback = true;
        app.submit_feedback();
        assert!(app.feedback_acknowledged);
        assert!(app.feedback_input.is_empty());
        assert!(!app.editing_feedback);

        // Same acknowledgment for empty text
        app.feedback_acknowledged = false;
        app.submit_feedback();
        assert!(app.feedback_acknowledged);

        let text = render_text(&mut app, 120, 32);
        assert!(text.contains(FEEDBACK_ACK));
    }

    #[test]
    fn test_detail_view_shows_selected_row_fields() {
        let mut app = DashboardApp::new(Some(business_dataset()), None, None);
        app.selected_row = 1;

        let mut detail = app.detail_view().unwrap();
        let detail_data = detail.dataset.as_ref().unwrap();
        assert_eq!(detail_data.data.headers, vec!["Field", "Value"]);
        assert_eq!(detail_data.data.columns[0][1], "amount");
        assert_eq!(detail_data.data.columns[1][1], "80");

        let text = render_text(&mut detail, 80, 24);
        assert!(text.contains("Row Detail"));
        assert!(text.contains("Gadget"));
    }

    #[test]
    fn test_detail_view_empty_dataset() {
        let app = DashboardApp::new(Some(dataset(&["date"], &[])), None, None);
        assert!(app.detail_view().is_none());
    }

    #[test]
    fn test_sort_table_numeric_descending() {
        let mut app = DashboardApp::new(
            Some(dataset(
                &["product", "amount"],
                &[&["A", "10"], &["B", "2"], &["C", "30"]],
            )),
            None,
            None,
        );
        app.selected_column = 1;
        app.sort_table(false);

        let data = &app.dataset.as_ref().unwrap().data;
        assert_eq!(data.columns[1], vec!["30", "10", "2"]);
        assert_eq!(data.columns[0], vec!["C", "A", "B"]);
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_cycle_focus() {
        let mut app = DashboardApp::new(Some(business_dataset()), None, None);
        assert_eq!(app.focus, Section::Preview);
        app.cycle_focus();
        assert_eq!(app.focus, Section::Feedback);
        app.cycle_focus();
        assert_eq!(app.focus, Section::Preview);
    }
}
