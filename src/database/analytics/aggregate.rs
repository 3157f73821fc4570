use log::debug;
use rusqlite::types::Value;
use rusqlite::{Connection, Result, Row, params_from_iter};

const STUDENTS_TABLE: &str = "Students";

/// Columns of the `Students` table that may appear in an aggregate query.
///
/// Column names only ever come from this enum, never from caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    SemesterGpa,
    TotalScore,
    Course,
    SpecialtyCode,
    DisciplineCode,
    LanguageOfStudy,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::SemesterGpa => "semester_gpa",
            Column::TotalScore => "total_score",
            Column::Course => "course",
            Column::SpecialtyCode => "specialty_code",
            Column::DisciplineCode => "discipline_code",
            Column::LanguageOfStudy => "language_of_study",
        }
    }
}

/// COUNT/AVG/MAX/MIN of one column; the optional fields are `None` when `count` is zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateRow {
    pub count: i64,
    pub average: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl AggregateRow {
    fn from_row(row: &Row) -> Result<Self> {
        let count: i64 = row.get(0)?;
        if count == 0 {
            return Ok(AggregateRow {
                count,
                average: None,
                max: None,
                min: None,
            });
        }
        Ok(AggregateRow {
            count,
            average: row.get(1)?,
            max: row.get(2)?,
            min: row.get(3)?,
        })
    }
}

/// Aggregate over one column of `Students`, restricted by equality conditions.
///
/// Every condition value is sent to SQLite as a bound parameter.
#[derive(Debug, Clone)]
pub struct AggregateQuery {
    column: Column,
    conditions: Vec<(Column, Value)>,
}

impl AggregateQuery {
    pub fn over(column: Column) -> Self {
        AggregateQuery {
            column,
            conditions: Vec::new(),
        }
    }

    pub fn where_eq(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.conditions.push((column, value.into()));
        self
    }

    /// Adds the condition only when a value is present
    pub fn where_eq_opt<V: Into<Value>>(self, column: Column, value: Option<V>) -> Self {
        match value {
            Some(value) => self.where_eq(column, value),
            None => self,
        }
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Value> {
        self.conditions.iter().map(|(_, value)| value)
    }

    pub fn sql(&self) -> String {
        let column = self.column.as_str();
        let mut query = format!(
            "SELECT
                COUNT({column}) AS count,
                AVG({column}) AS average,
                MAX({column}) AS max_value,
                MIN({column}) AS min_value
            FROM {STUDENTS_TABLE}
            WHERE 1 = 1"
        );

        for (index, (condition, _)) in self.conditions.iter().enumerate() {
            query.push_str("\n            AND ");
            query.push_str(condition.as_str());
            query.push_str(&format!(" = ?{}", index + 1));
        }

        query
    }

    pub fn execute(&self, conn: &Connection) -> Result<AggregateRow> {
        let query = self.sql();
        debug!(
            "Aggregating {} with {} bound condition(s)",
            self.column.as_str(),
            self.conditions.len()
        );

        let mut stmt = conn.prepare(&query)?;
        stmt.query_row(params_from_iter(self.parameters()), AggregateRow::from_row)
    }
}
