use std::borrow::Cow;

/// Typed view of a single record field, as seen by filters and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    /// ISO 8601 date or datetime; ordered by the parsed instant.
    Date(&'a str),
    /// Optional field absent on this record.
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    pub fn opt_text(value: Option<&'a str>) -> Self {
        match value {
            Some(v) => FieldValue::text(v),
            None => FieldValue::Missing,
        }
    }

    pub fn opt_date(value: Option<&'a str>) -> Self {
        match value {
            Some(v) => FieldValue::Date(v),
            None => FieldValue::Missing,
        }
    }

    /// Text shown in a cell / compared by an equality filter.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s.as_ref())),
            FieldValue::Number(n) => Some(Cow::Owned(format_number(*n))),
            FieldValue::Date(s) => Some(Cow::Borrowed(s)),
            FieldValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A row that can be searched, filtered and sorted by the table view.
///
/// `field` must return the same kind of value for a given key on every record
/// (a column is either text, numeric or date), `Missing` aside.
pub trait TableRecord {
    /// Stable row identity, used as the `For` key in the UI.
    fn record_id(&self) -> String;

    /// Fields matched by the free-text search, optional ones already skipped.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a column / filter field. Unknown keys yield `Missing`.
    fn field(&self, key: &str) -> FieldValue<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_trailing_zero() {
        assert_eq!(FieldValue::Number(50.0).as_text().as_deref(), Some("50"));
        assert_eq!(FieldValue::Number(2.5).as_text().as_deref(), Some("2.5"));
        assert_eq!(FieldValue::Missing.as_text(), None);
    }
}
