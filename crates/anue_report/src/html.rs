use anue_core::FeedPayload;

use crate::formatter::{format_window, FormattedRow};

const ACTIVE_STYLE: &str = "background-color: lightblue;";

/// The three display windows of one feed page. Each section owns a fixed
/// output file name so the navigation buttons can cross-link the documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top10,
    Mid11To30,
    Tail31To50,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Top10, Section::Mid11To30, Section::Tail31To50];

    /// `(start, count)` into the fetched item list.
    pub fn window(self) -> (usize, usize) {
        match self {
            Section::Top10 => (0, 10),
            Section::Mid11To30 => (10, 20),
            Section::Tail31To50 => (30, 20),
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Section::Top10 => "news_top10.html",
            Section::Mid11To30 => "news_11_30.html",
            Section::Tail31To50 => "news_31_50.html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Top10 => "第 1-10 條即時新聞",
            Section::Mid11To30 => "第 11-30 條即時新聞",
            Section::Tail31To50 => "第 31-50 條即時新聞",
        }
    }

    fn index(self) -> usize {
        match self {
            Section::Top10 => 0,
            Section::Mid11To30 => 1,
            Section::Tail31To50 => 2,
        }
    }
}

/// The three window tables, formatted once and shared by every rendered page.
pub struct SectionTables {
    tables: [String; 3],
}

impl SectionTables {
    pub fn build(payload: &FeedPayload) -> Self {
        let tables = Section::ALL.map(|section| {
            let (start, count) = section.window();
            table_html(&format_window(payload, start, count))
        });
        Self { tables }
    }

    fn table(&self, section: Section) -> &str {
        &self.tables[section.index()]
    }
}

/// Renders rows as a plain bordered table. Cell markup is emitted raw since
/// the cells embed their own links and line breaks.
pub fn table_html(rows: &[FormattedRow]) -> String {
    let mut out = String::from("<table border=\"1\">\n");
    out.push_str("  <thead>\n");
    out.push_str("    <tr><th>序號</th><th>標題</th><th>概要</th><th>關鍵字</th></tr>\n");
    out.push_str("  </thead>\n  <tbody>\n");
    for row in rows {
        out.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.position, row.title_cell, row.summary_cell, row.keyword_cell
        ));
    }
    out.push_str("  </tbody>\n</table>");
    out
}

/// Produces one self-contained HTML document. All three navigation buttons
/// appear, the active one highlighted; only the active section's container
/// holds a table, the other two stay empty.
pub fn render_page(tables: &SectionTables, active: Section) -> String {
    let mut body = String::new();
    for section in Section::ALL {
        let style = if section == active { ACTIVE_STYLE } else { "" };
        body.push_str(&format!(
            "    <button style=\"{}\" onclick=\"window.location.href='{}'\">{}</button>\n",
            style,
            section.file_name(),
            section.label()
        ));
    }
    for section in Section::ALL {
        let table = if section == active { tables.table(section) } else { "" };
        body.push_str(&format!("    <div>{}</div>\n", table));
    }

    format!(
        "<html>\n<head>\n    <meta charset=\"utf-8\">\n</head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(total: u64) -> FeedPayload {
        let data: Vec<_> = (1..=total)
            .map(|id| {
                json!({
                    "newsId": id,
                    "title": format!("headline {}", id),
                    "summary": format!("summary {}", id),
                    "publishAt": 1714521600 + id as i64,
                    "keyword": ["kw"],
                    "categoryName": "台股",
                    "categoryId": 827
                })
            })
            .collect();
        serde_json::from_value(json!({ "data": data, "total": total })).unwrap()
    }

    #[test]
    fn section_windows_cover_first_fifty() {
        assert_eq!(Section::Top10.window(), (0, 10));
        assert_eq!(Section::Mid11To30.window(), (10, 20));
        assert_eq!(Section::Tail31To50.window(), (30, 20));
    }

    #[test]
    fn only_active_container_holds_a_table() {
        let tables = SectionTables::build(&payload(50));
        let page = render_page(&tables, Section::Mid11To30);

        let divs: Vec<_> = page
            .lines()
            .filter(|line| line.trim_start().starts_with("<div>"))
            .collect();
        assert_eq!(divs.len(), 3);
        assert_eq!(divs[0].trim(), "<div></div>");
        assert!(divs[1].contains("<table"));
        assert_eq!(divs[2].trim(), "<div></div>");
        assert!(page.contains("headline 11"));
        assert!(!page.contains("headline 1<"));
    }

    #[test]
    fn active_button_is_highlighted() {
        let tables = SectionTables::build(&payload(50));
        let page = render_page(&tables, Section::Mid11To30);

        let buttons: Vec<_> = page
            .lines()
            .filter(|line| line.trim_start().starts_with("<button"))
            .collect();
        assert_eq!(buttons.len(), 3);
        assert!(buttons[0].contains("style=\"\""));
        assert!(buttons[1].contains(ACTIVE_STYLE));
        assert!(buttons[2].contains("style=\"\""));
    }

    #[test]
    fn buttons_link_fixed_file_names() {
        let tables = SectionTables::build(&payload(50));
        let page = render_page(&tables, Section::Top10);
        assert!(page.contains("window.location.href='news_top10.html'"));
        assert!(page.contains("window.location.href='news_11_30.html'"));
        assert!(page.contains("window.location.href='news_31_50.html'"));
        assert!(page.contains("<meta charset=\"utf-8\">"));
    }

    #[test]
    fn short_feed_renders_empty_later_sections() {
        let tables = SectionTables::build(&payload(5));
        let page = render_page(&tables, Section::Tail31To50);
        let table = tables.table(Section::Tail31To50);
        assert!(table.contains("<tbody>"));
        assert!(!table.contains("<td>"));
        assert!(page.contains("<table"));
    }
}
