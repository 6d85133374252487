//! Quick filter, column sort and pagination over view rows.
//!
//! All of this is client-side: the API returns every row and the views only
//! ever page through what is already loaded.

use std::{cmp::Ordering, fmt::Debug};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort key of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        }
    }
}

pub trait GridColumn: Copy + PartialEq + Debug + 'static {
    /// Every column in display order. Also the CSV column order.
    fn all() -> &'static [Self];
    fn title(&self) -> &'static str;
    fn sortable(&self) -> bool {
        true
    }
}

pub trait GridRow {
    type Column: GridColumn;

    fn sort_value(&self, column: Self::Column) -> CellValue;

    /// Text shown for the cell; used by the quick filter and CSV export.
    fn cell_text(&self, column: Self::Column) -> String;

    fn matches_terms(&self, terms: &[String]) -> bool {
        if terms.is_empty() {
            return true;
        }
        let haystack: Vec<String> = Self::Column::all()
            .iter()
            .map(|column| self.cell_text(*column).to_lowercase())
            .collect();
        terms
            .iter()
            .all(|term| haystack.iter().any(|cell| cell.contains(term.as_str())))
    }
}

/// One page of rows after filtering and sorting.
#[derive(Debug)]
pub struct GridPage<'a, R> {
    pub rows: Vec<&'a R>,
    /// Zero-based, already clamped to `page_count`.
    pub page: usize,
    pub page_count: usize,
    /// Row count after filtering.
    pub total: usize,
    page_size: usize,
}

impl<R> GridPage<'_, R> {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// e.g. `11–20 of 23`, or `0–0 of 0` when nothing matches.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0–0 of 0".to_string();
        }
        let from = self.page * self.page_size + 1;
        let to = from + self.rows.len() - 1;
        format!("{}–{} of {}", from, to, self.total)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridState<C: GridColumn> {
    quick_filter: String,
    terms: Vec<String>,
    sort: Option<(C, SortDirection)>,
    page: usize,
    page_size: usize,
}

impl<C: GridColumn> GridState<C> {
    pub fn new(page_size: usize) -> Self {
        Self {
            quick_filter: String::new(),
            terms: Vec::new(),
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn set_quick_filter(&mut self, text: &str) {
        if self.quick_filter == text {
            return;
        }
        self.quick_filter = text.to_string();
        self.terms = text.split_whitespace().map(str::to_lowercase).collect();
        self.page = 0;
    }

    pub fn sort(&self) -> Option<(C, SortDirection)> {
        self.sort
    }

    /// Cycles the column through ascending, descending and unsorted.
    /// Sorting a different column starts again at ascending.
    pub fn toggle_sort(&mut self, column: C) {
        if !column.sortable() {
            return;
        }
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// All rows passing the quick filter, in sort order.
    pub fn visible_rows<'a, R: GridRow<Column = C>>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let mut visible: Vec<&R> = rows
            .iter()
            .filter(|row| row.matches_terms(&self.terms))
            .collect();
        if let Some((column, direction)) = self.sort {
            visible.sort_by(|a, b| {
                let ordering = a.sort_value(column).compare(&b.sort_value(column));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        visible
    }

    pub fn page<'a, R: GridRow<Column = C>>(&self, rows: &'a [R]) -> GridPage<'a, R> {
        let visible = self.visible_rows(rows);
        let total = visible.len();
        let page_count = total.div_ceil(self.page_size).max(1);
        let page = self.page.min(page_count - 1);
        let rows = visible
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect();
        GridPage {
            rows,
            page,
            page_count,
            total,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Column {
        Name,
        Price,
    }

    impl GridColumn for Column {
        fn all() -> &'static [Self] {
            &[Column::Name, Column::Price]
        }

        fn title(&self) -> &'static str {
            match self {
                Column::Name => "Name",
                Column::Price => "Price",
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    impl GridRow for Row {
        type Column = Column;

        fn sort_value(&self, column: Column) -> CellValue {
            match column {
                Column::Name => CellValue::Text(self.name.to_string()),
                Column::Price => CellValue::Number(self.price),
            }
        }

        fn cell_text(&self, column: Column) -> String {
            match column {
                Column::Name => self.name.to_string(),
                Column::Price => format!("${:.2}/kg", self.price),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "banana", price: 1.5 },
            Row { name: "Apple", price: 2.99 },
            Row { name: "cherry", price: 10.0 },
            Row { name: "blood orange", price: 2.99 },
        ]
    }

    fn names<'a>(rows: &[&'a Row]) -> Vec<&'a str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_no_filter_keeps_source_order() {
        let rows = rows();
        let state: GridState<Column> = GridState::new(10);
        assert_eq!(
            names(&state.visible_rows(&rows)),
            vec!["banana", "Apple", "cherry", "blood orange"]
        );
    }

    #[test]
    fn test_quick_filter_is_case_insensitive_and_needs_every_term() {
        let rows = rows();
        let mut state = GridState::new(10);
        state.set_quick_filter("AN");
        assert_eq!(
            names(&state.visible_rows(&rows)),
            vec!["banana", "blood orange"]
        );

        state.set_quick_filter("orange 2.99");
        assert_eq!(names(&state.visible_rows(&rows)), vec!["blood orange"]);

        state.set_quick_filter("orange 10.00");
        assert!(state.visible_rows(&rows).is_empty());
    }

    #[test]
    fn test_sort_cycle() {
        let rows = rows();
        let mut state = GridState::new(10);

        state.toggle_sort(Column::Name);
        assert_eq!(state.sort(), Some((Column::Name, SortDirection::Ascending)));
        assert_eq!(
            names(&state.visible_rows(&rows)),
            vec!["Apple", "banana", "blood orange", "cherry"]
        );

        state.toggle_sort(Column::Name);
        assert_eq!(
            names(&state.visible_rows(&rows)),
            vec!["cherry", "blood orange", "banana", "Apple"]
        );

        state.toggle_sort(Column::Name);
        assert_eq!(state.sort(), None);
    }

    #[test]
    fn test_numeric_sort_is_stable() {
        let rows = rows();
        let mut state = GridState::new(10);
        state.toggle_sort(Column::Price);
        assert_eq!(
            names(&state.visible_rows(&rows)),
            vec!["banana", "Apple", "blood orange", "cherry"]
        );
    }

    #[test]
    fn test_switching_sort_column_starts_ascending() {
        let mut state: GridState<Column> = GridState::new(10);
        state.toggle_sort(Column::Name);
        state.toggle_sort(Column::Name);
        state.toggle_sort(Column::Price);
        assert_eq!(
            state.sort(),
            Some((Column::Price, SortDirection::Ascending))
        );
    }

    #[test]
    fn test_pagination() {
        let rows = rows();
        let mut state = GridState::new(3);

        let first = state.page(&rows);
        assert_eq!(first.rows.len(), 3);
        assert_eq!(first.page_count, 2);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.range_label(), "1–3 of 4");

        state.set_page(1);
        let second = state.page(&rows);
        assert_eq!(names(&second.rows), vec!["blood orange"]);
        assert!(second.has_previous());
        assert!(!second.has_next());
        assert_eq!(second.range_label(), "4–4 of 4");
    }

    #[test]
    fn test_page_is_clamped_when_rows_shrink() {
        let rows = rows();
        let mut state = GridState::new(2);
        state.set_page(5);
        let page = state.page(&rows);
        assert_eq!(page.page, 1);
        assert_eq!(names(&page.rows), vec!["cherry", "blood orange"]);
    }

    #[test]
    fn test_filter_and_page_size_changes_reset_page() {
        let mut state: GridState<Column> = GridState::new(2);
        state.set_page(1);
        state.set_quick_filter("a");
        let rows = rows();
        assert_eq!(state.page(&rows).page, 0);

        state.set_page(1);
        state.set_page_size(25);
        assert_eq!(state.page(&rows).page, 0);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let rows: Vec<Row> = Vec::new();
        let state: GridState<Column> = GridState::new(10);
        let page = state.page(&rows);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.total, 0);
        assert!(!page.has_next());
        assert_eq!(page.range_label(), "0–0 of 0");
    }
}
