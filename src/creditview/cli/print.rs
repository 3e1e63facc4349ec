use crate::args::Layout;
use chrono::NaiveDate;
use colored::Colorize;
use creditview::api::{CmdMessage, MessageLevel};
use creditview::model::{Record, Status};
use creditview::pipeline::PageView;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const ID_WIDTH: usize = 14;
const VINTAGE_WIDTH: usize = 8;
const STATUS_WIDTH: usize = 8;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_page(page: &PageView, layout: Layout, today: NaiveDate) {
    print!("{}", render_page(page, layout, today));
}

pub fn render_page(page: &PageView, layout: Layout, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Dashboard".bold()));
    out.push_str(&format!(
        "{}\n\n",
        today.format("%A, %B %-d, %Y").to_string().dimmed()
    ));

    if !page.records.is_empty() {
        match layout {
            Layout::Table => render_table(&mut out, &page.records),
            Layout::Cards => render_cards(&mut out, &page.records),
        }
        out.push('\n');
    }

    out.push_str(&render_footer(page));
    out
}

fn render_table(out: &mut String, records: &[Record]) {
    let name_width = LINE_WIDTH - ID_WIDTH - VINTAGE_WIDTH - STATUS_WIDTH;
    let header = format!(
        "{}{}{}{}",
        pad("UNIC ID", ID_WIDTH),
        pad("Project Name", name_width),
        pad("Vintage", VINTAGE_WIDTH),
        "Status"
    );
    out.push_str(&format!("{}\n", header.bold()));

    for record in records {
        out.push_str(&format!(
            "{}{}{}{}\n",
            pad(&truncate_to_width(&record.id, ID_WIDTH), ID_WIDTH),
            pad(&truncate_to_width(&record.name, name_width), name_width),
            pad(&record.year.to_string(), VINTAGE_WIDTH),
            status_badge(record.status)
        ));
    }
}

fn render_cards(out: &mut String, records: &[Record]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}  {}\n",
            truncate_to_width(&record.name, LINE_WIDTH - STATUS_WIDTH - 2).bold(),
            status_badge(record.status)
        ));
        out.push_str(&format!("  Vintage: {}\n", record.year));
        out.push_str(&format!("  ID: {}\n", record.id));
    }
}

fn render_footer(page: &PageView) -> String {
    let previous = if page.has_previous { "‹ Previous" } else { "" };
    let next = if page.has_next { "Next ›" } else { "" };
    format!(
        "{} {} of {} {}  ({} credits)\n",
        previous.dimmed(),
        page.page_number,
        page.last_page,
        next.dimmed(),
        page.total
    )
}

fn status_badge(status: Status) -> String {
    match status {
        Status::Active => status.as_str().green().to_string(),
        Status::Retired => status.as_str().dimmed().to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() < max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(2) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use creditview::clock::SystemClock;
    use creditview::pipeline::{ViewOptions, ViewPipeline};

    fn page(records: Vec<Record>) -> PageView {
        ViewPipeline::new(records, ViewOptions::default(), SystemClock)
            .unwrap()
            .page_view()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn table_lists_records_with_header_and_footer() {
        colored::control::set_override(false);
        let view = page(vec![
            Record::new("UC-1", "Rimba Raya", 2018, Status::Active),
            Record::new("UC-2", "Kasigau Corridor", 2020, Status::Retired),
        ]);

        let out = render_page(&view, Layout::Table, today());

        assert!(out.contains("Saturday, October 17, 2026"));
        assert!(out.contains("UNIC ID"));
        assert!(out.contains("Rimba Raya"));
        assert!(out.contains("retired"));
        assert!(out.contains("1 of 1"));
        assert!(out.contains("(2 credits)"));
    }

    #[test]
    fn cards_show_vintage_and_id() {
        colored::control::set_override(false);
        let view = page(vec![Record::new("UC-9", "Peatland", 2021, Status::Active)]);

        let out = render_page(&view, Layout::Cards, today());

        assert!(out.contains("Peatland  active"));
        assert!(out.contains("  Vintage: 2021"));
        assert!(out.contains("  ID: UC-9"));
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(100);
        let cut = truncate_to_width(&long, 20);
        assert!(cut.width() < 20);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", 20), "short");
    }
}
