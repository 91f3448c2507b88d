use gtscore::kind::EntityKind;
use std::fmt;
use crate::app::route::Route;

/// What a row offers besides its cells.  Details and edit lead to other
/// pages; delete is handled by the owning view through its dialog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Details(Route),
    Edit(Route),
    Delete(EntityKind, i64),
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Details(_) => "Details",
            Action::Edit(_) => "Edit",
            Action::Delete(..) => "Delete",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub kind: EntityKind,
    pub id: i64,
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(kind: EntityKind, id: i64, cells: Vec<String>) -> Self {
        Self { kind, id, cells }
    }

    pub fn actions(&self) -> [Action; 3] {
        [
            Action::Details(Route::details(self.kind, self.id)),
            Action::Edit(Route::edit(self.kind, self.id)),
            Action::Delete(self.kind, self.id),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<&'static str>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    /// Columns padded to their widest cell, followed by the details link
    /// of each row.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.rows.is_empty() {
            return f.write_str("No data available");
        }
        let mut widths = self.columns.iter()
            .map(|column| column.chars().count())
            .collect::<Vec<_>>();
        for row in self.rows.iter() {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let line = |cells: Vec<&str>, link: &str| {
            let mut line = cells.iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!("{cell:<width$}", width = *width))
                .collect::<Vec<_>>()
                .join("  ");
            line.push_str("  ");
            line.push_str(link);
            line.trim_end().to_string()
        };
        write!(f, "{}", line(self.columns.clone(), ""))?;
        for row in self.rows.iter() {
            let link = Route::details(row.kind, row.id).to_string();
            let cells = row.cells.iter().map(String::as_str).collect();
            write!(f, "\n{}", line(cells, &link))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(Table::new(vec!["ID", "Title"], vec![]).to_string(), "No data available");
    }

    #[test]
    fn aligned() {
        let table = Table::new(vec!["ID", "Name"], vec![
            Row::new(EntityKind::Person, 1, vec!["1".into(), "Ada Lovelace".into()]),
            Row::new(EntityKind::Person, 12, vec!["12".into(), "Al".into()]),
        ]);
        assert_eq!(table.to_string(), "\
ID  Name
1   Ada Lovelace  /details/person/1
12  Al            /details/person/12");
    }

    #[test]
    fn actions() {
        let row = Row::new(EntityKind::Thesis, 12, vec![]);
        assert_eq!(row.actions(), [
            Action::Details(Route::Details(EntityKind::Thesis, 12)),
            Action::Edit(Route::Edit(EntityKind::Thesis, 12)),
            Action::Delete(EntityKind::Thesis, 12),
        ]);
        assert_eq!(row.actions().map(|a| a.label()), ["Details", "Edit", "Delete"]);
    }
}
