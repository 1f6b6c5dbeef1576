use serde_json::{Map, Value};
use sqlx::{types::Json, Postgres, QueryBuilder};

/// A single constraint on one top-level document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Field equals the given JSON value exactly.
    Equals { field: String, value: Value },
    /// Field is a number within the bounds; `None` leaves that side open.
    /// Both bounds are inclusive.
    Range {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
    },
}

/// Conjunction of clauses. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<Clause>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn equals(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.clauses.push(Clause::Equals {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    /// Adds an equality clause unless the value is missing or empty.
    pub fn eq_if_present(self, field: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.equals(field, v),
            _ => self,
        }
    }

    /// Adds a range clause when at least one bound is supplied.
    pub fn range(mut self, field: &str, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.clauses.push(Clause::Range {
                field: field.to_string(),
                min,
                max,
            });
        }
        self
    }

    /// Evaluates the filter against a document body.
    pub fn matches(&self, document: &Map<String, Value>) -> bool {
        self.clauses.iter().all(|clause| match clause {
            Clause::Equals { field, value } => document.get(field) == Some(value),
            Clause::Range { field, min, max } => match document.get(field).and_then(Value::as_f64) {
                Some(n) => min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi),
                None => false,
            },
        })
    }

    /// Appends the clauses as `AND ...` conditions over the `body` JSONB column.
    /// Field names and values are always bound, never interpolated.
    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for clause in &self.clauses {
            match clause {
                Clause::Equals { field, value } => {
                    builder
                        .push(" AND body -> ")
                        .push_bind(field.clone())
                        .push(" = ")
                        .push_bind(Json(value.clone()));
                }
                Clause::Range { field, min, max } => {
                    builder
                        .push(" AND jsonb_typeof(body -> ")
                        .push_bind(field.clone())
                        .push(") = 'number'");
                    if let Some(min) = min {
                        builder
                            .push(" AND (body ->> ")
                            .push_bind(field.clone())
                            .push(")::double precision >= ")
                            .push_bind(*min);
                    }
                    if let Some(max) = max {
                        builder
                            .push(" AND (body ->> ")
                            .push_bind(field.clone())
                            .push(")::double precision <= ")
                            .push_bind(*max);
                    }
                }
            }
        }
    }
}
