pub mod formatter;
pub mod html;

pub use formatter::{format_window, FormattedRow};
pub use html::{render_page, Section, SectionTables};
