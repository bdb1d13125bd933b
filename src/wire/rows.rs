//! Whole-row access for query results whose columns are all agtype.

use postgres::{Row, SimpleQueryRow};

use crate::agtype::Agtype;
use crate::error::{AgtypeError, Result};

/// One result row, every column wrapped as [`Agtype`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeRow {
    columns: Vec<String>,
    values: Vec<Agtype>,
}

impl AgeRow {
    /// Pair column names with values. A row must have at least one column
    /// and the same number of names as values.
    pub fn new(columns: Vec<String>, values: Vec<Agtype>) -> Result<Self> {
        if values.is_empty() {
            return Err(AgtypeError::format("agtype row", "no columns"));
        }
        if columns.len() != values.len() {
            return Err(AgtypeError::format(
                "agtype row",
                format!("{} names for {} values", columns.len(), values.len()),
            ));
        }
        Ok(Self { columns, values })
    }

    /// Simple-protocol rows arrive as bare text, so no version byte is involved.
    pub fn from_simple_row(row: &SimpleQueryRow) -> Result<Self> {
        let columns = row.columns().iter().map(|c| c.name().to_string()).collect();
        let values = (0..row.len())
            .map(|i| Agtype::from(row.get(i).map(str::to_string)))
            .collect();
        Self::new(columns, values)
    }

    /// Extended-protocol rows go through the `FromSql` impl for each column.
    pub fn from_row(row: &Row) -> std::result::Result<Self, Box<dyn std::error::Error + Sync + Send>> {
        let columns = row.columns().iter().map(|c| c.name().to_string()).collect();
        let values = (0..row.len())
            .map(|i| row.try_get::<_, Agtype>(i))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(columns, values)?)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn get(&self, index: usize) -> Option<&Agtype> {
        self.values.get(index)
    }

    /// The first column with this name.
    pub fn by_name(&self, name: &str) -> Option<&Agtype> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|i| self.values.get(i))
    }

    pub fn into_values(self) -> Vec<Agtype> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> AgeRow {
        AgeRow::new(
            vec!["n".to_string(), "count".to_string()],
            vec![Agtype::new(r#"{"id": 1, "label": "A", "properties": {}}::vertex"#), Agtype::new("3")],
        )
        .unwrap()
    }

    #[rstest]
    fn test_ordinal_access(row: AgeRow) {
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
        assert_eq!(row.get(1).unwrap().get_long().unwrap(), 3);
        assert!(row.get(2).is_none());
    }

    #[rstest]
    fn test_name_lookup(row: AgeRow) {
        assert_eq!(row.by_name("n").unwrap().get_vertex().unwrap().label, "A");
        assert!(row.by_name("missing").is_none());
        assert_eq!(row.columns(), &["n".to_string(), "count".to_string()]);
    }

    #[rstest]
    fn test_empty_row_rejected() {
        assert!(AgeRow::new(vec![], vec![]).unwrap_err().is_format());
    }

    #[rstest]
    fn test_mismatched_names_rejected() {
        let err = AgeRow::new(vec!["a".to_string()], vec![Agtype::null(), Agtype::null()]).unwrap_err();
        assert_eq!(err, AgtypeError::format("agtype row", "1 names for 2 values"));
    }

    #[rstest]
    fn test_null_column_kept() {
        let row = AgeRow::new(vec!["x".to_string()], vec![Agtype::null()]).unwrap();
        assert!(row.get(0).unwrap().is_null());
        assert_eq!(row.into_values(), vec![Agtype::null()]);
    }
}
