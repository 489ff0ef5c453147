/// LIMIT/OFFSET pair. A limit of -1 means "no upper bound", which is how
/// SQLite spells an offset without a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub limit: i64,
    pub offset: Option<i64>,
}

impl Limit {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            offset: None,
        }
    }

    pub fn with_offset(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset: Some(offset),
        }
    }
}
