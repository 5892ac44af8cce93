//! Concrete repository implementations.

pub mod villa;
pub mod villa_number;

use sqlx::{Postgres, QueryBuilder};

use villastay_core::error::AppError;
use villastay_core::result::AppResult;
use villastay_core::types::filter::{FilterField, FilterValue};

/// Append a `WHERE` clause for the given filters, binding each value.
/// Fields outside the allowlist are rejected before touching the SQL; an
/// empty filter slice appends nothing.
pub(crate) fn push_filters<'args>(
    builder: &mut QueryBuilder<'args, Postgres>,
    filters: &'args [FilterField],
    allowed: &[&str],
) -> AppResult<()> {
    for (i, filter) in filters.iter().enumerate() {
        if !allowed.contains(&filter.field.as_str()) {
            return Err(AppError::validation(format!(
                "Cannot filter on unknown field '{}'",
                filter.field
            )));
        }

        builder.push(if i == 0 { " WHERE " } else { " AND " });
        builder.push(&filter.field);
        builder.push(" ");
        builder.push(filter.op.as_sql());
        builder.push(" ");
        match &filter.value {
            FilterValue::String(s) => builder.push_bind(s.as_str()),
            FilterValue::Integer(i) => builder.push_bind(*i),
            FilterValue::Float(f) => builder.push_bind(*f),
            FilterValue::Boolean(b) => builder.push_bind(*b),
        };
    }

    Ok(())
}
