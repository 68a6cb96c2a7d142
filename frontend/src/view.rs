//! Pure mapping from a [`ListState`] to the rows the table shows.

use post_table_shared::PostRow;

use crate::{
    i18n::{current::post_table as t, fill_two},
    loader::ListState,
};

/// Number of columns every row spans.
pub const COLUMN_COUNT: usize = t::HEADERS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    NoResults,
}

impl Placeholder {
    pub fn message(self) -> &'static str {
        match self {
            Placeholder::Loading => t::LOADING,
            Placeholder::NoResults => t::NO_RESULTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// One cell spanning [`COLUMN_COUNT`] columns.
    Placeholder(Placeholder),
    Post(PostRow),
}

/// Body rows for `state`, in input order. Never empty.
pub fn table_rows(state: &ListState) -> Vec<TableRow> {
    match state {
        ListState::Loading => vec![TableRow::Placeholder(Placeholder::Loading)],
        ListState::Loaded(loaded) if loaded.results.is_empty() => {
            vec![TableRow::Placeholder(Placeholder::NoResults)]
        },
        ListState::Loaded(loaded) => loaded
            .results
            .iter()
            .map(|post| TableRow::Post(PostRow::from(post)))
            .collect(),
    }
}

/// Everything the table markup is built from: one header row, then `rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub caption: Option<String>,
    pub header: [&'static str; COLUMN_COUNT],
    pub rows: Vec<TableRow>,
}

impl TableModel {
    /// Columns a placeholder cell spans: the full header width.
    pub fn placeholder_colspan(&self) -> usize {
        self.header.len()
    }
}

pub fn table_model(state: &ListState) -> TableModel {
    TableModel {
        caption: caption(state),
        header: t::HEADERS,
        rows: table_rows(state),
    }
}

/// Caption text when the server holds more posts than this page shows.
pub fn caption(state: &ListState) -> Option<String> {
    let ListState::Loaded(loaded) = state else {
        return None;
    };
    let shown = loaded.results.len() as u64;
    loaded
        .total
        .filter(|total| shown > 0 && *total > shown)
        .map(|total| fill_two(t::CAPTION_TEMPLATE, shown, total))
}
