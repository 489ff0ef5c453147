use crate::{Db, Record};

use indexmap::IndexMap;
use quill_core::{
    driver::Row,
    schema::{FieldDescriptor, RecordType},
    stmt::{self, Expr, ExprField, Limit, OrderBy, OrderByExpr, Returning, Value},
    Error, Result,
};

use std::{
    fmt,
    ops::{Bound, RangeBounds},
};

/// A lazy SELECT builder.
///
/// Clauses accumulate in any order without touching storage; the database
/// is only hit by one of the result modes (`records`, `dicts`, `tuples`,
/// `nth`, `slice`), each of which consumes the builder.
pub struct Select<'a> {
    db: &'a Db,
    record_type: &'a RecordType,
    tables: Vec<String>,
    fields: Option<Vec<ExprField>>,
    distinct: bool,
    filter: Option<Expr>,
    order_by: Vec<OrderByExpr>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl<'a> Select<'a> {
    pub(crate) fn new(db: &'a Db, record_type: &'a RecordType) -> Self {
        Self {
            db,
            record_type,
            tables: vec![record_type.name().to_string()],
            fields: None,
            distinct: false,
            filter: None,
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }

    /// Adds another source table to the FROM list.
    pub fn table(mut self, record_type: &RecordType) -> Self {
        self.tables.push(record_type.name().to_string());
        self
    }

    /// Restricts the projection to the given fields.
    pub fn select(mut self, fields: &[&FieldDescriptor]) -> Self {
        self.fields = Some(
            fields
                .iter()
                .map(|field| ExprField {
                    table: field.table().map(str::to_string),
                    name: field.name().to_string(),
                })
                .collect(),
        );
        self
    }

    /// `SELECT DISTINCT` over the given fields.
    pub fn distinct(mut self, fields: &[&FieldDescriptor]) -> Self {
        self.distinct = true;
        self.select(fields)
    }

    /// Adds a filter. Repeated calls AND together, in call order.
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(prior) => Expr::and(prior, expr),
            None => expr,
        });
        self
    }

    pub fn order_by(mut self, expr: impl Into<OrderByExpr>) -> Self {
        self.order_by.push(expr.into());
        self
    }

    /// Caps the row count. A limit of -1 means "no upper bound".
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    fn to_select(&self) -> stmt::Select {
        stmt::Select {
            from: self.tables.clone(),
            returning: match &self.fields {
                Some(fields) => Returning::Fields(fields.clone()),
                None => Returning::Star,
            },
            distinct: self.distinct,
            filter: self.filter.clone(),
            order_by: if self.order_by.is_empty() {
                None
            } else {
                Some(OrderBy {
                    exprs: self.order_by.clone(),
                })
            },
            limit: match (self.limit, self.offset) {
                (Some(limit), offset) => Some(Limit { limit, offset }),
                (None, Some(offset)) => Some(Limit {
                    limit: -1,
                    offset: Some(offset),
                }),
                (None, None) => None,
            },
        }
    }

    /// Consumes the builder into a statement tree, for nesting as a
    /// sub-query inside IN, EXISTS, or an assignment.
    pub fn into_select(self) -> stmt::Select {
        self.to_select()
    }

    /// `EXISTS (…)` over this query.
    pub fn exists(&self) -> Expr {
        Expr::exists(self.to_select())
    }

    /// `NOT EXISTS (…)` over this query.
    pub fn not_exists(&self) -> Expr {
        Expr::not_exists(self.to_select())
    }

    /// Renders the SQL text without touching storage.
    pub fn build(&self) -> String {
        Db::render(&self.to_select().into())
    }

    fn run(&self) -> Result<Vec<Row>> {
        Ok(self.db.exec(&self.to_select().into())?.rows)
    }

    /// Materializes every matching row as a typed record.
    ///
    /// Requires the full, unrestricted field set; combining a field subset
    /// with record materialization fails fast.
    pub fn records(self) -> Result<Vec<Record>> {
        if self.fields.is_some() {
            return Err(Error::invalid_statement(
                "record materialization requires the full field set",
            ));
        }

        if self.tables.len() > 1 {
            return Err(Error::invalid_statement(
                "record materialization requires a single source table",
            ));
        }

        let rows = self.run()?;

        rows.into_iter()
            .map(|row| Record::load(self.record_type, row))
            .collect()
    }

    /// Rows as field-name to value maps, honoring any field subset.
    pub fn dicts(self) -> Result<Vec<IndexMap<String, Value>>> {
        let names: Vec<String> = match &self.fields {
            Some(fields) => fields.iter().map(|field| field.name.clone()).collect(),
            None => self.record_type.field_names().map(str::to_string).collect(),
        };

        let rows = self.run()?;
        let mut ret = Vec::with_capacity(rows.len());

        for row in rows {
            if row.len() != names.len() {
                return Err(Error::invalid_statement(format!(
                    "row width {} does not match the {} selected fields",
                    row.len(),
                    names.len()
                )));
            }

            ret.push(names.iter().cloned().zip(row).collect());
        }

        Ok(ret)
    }

    /// Raw rows, columns in selection order.
    pub fn tuples(self) -> Result<Vec<Row>> {
        self.run()
    }

    /// The single record at `index`, counting from the first matching row.
    /// Sugar for `LIMIT 1 OFFSET index`; out of range is an error.
    pub fn nth(self, index: usize) -> Result<Record> {
        let table = self.record_type.name().to_string();

        let mut records = self.limit(1).offset(index as i64).records()?;
        records.pop().ok_or_else(|| Error::record_not_found(table))
    }

    /// The records in `range`, as LIMIT/OFFSET sugar: `a..b` becomes
    /// `LIMIT b-a OFFSET a`, and an open upper bound becomes `LIMIT -1`.
    pub fn slice(self, range: impl RangeBounds<usize>) -> Result<Vec<Record>> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };

        let limit = match range.end_bound() {
            Bound::Included(&end) => (end + 1).saturating_sub(start) as i64,
            Bound::Excluded(&end) => end.saturating_sub(start) as i64,
            Bound::Unbounded => -1,
        };

        self.limit(limit).offset(start as i64).records()
    }
}

impl fmt::Display for Select<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.build())
    }
}
