//! Decoding table rows into forcing records and reach parameters.
//!
//! Missing or blank numeric fields default to zero. A value that is present
//! but not a number, or a date that cannot be parsed, is an error carrying
//! the source and line of the record. No record is ever skipped silently.

use crate::columns::{
    ColumnDefinition, COL_AREA, COL_DATE, COL_EVAPOTRANSPIRATION, COL_PRECIPITATION,
    COL_REACH_ID, COL_TRACER_INIT, COL_UPSTREAM_TRACER,
};
use crate::dates::parse_date;
use crate::errors::{IoError, IoResult};
use crate::table::TableRow;
use reachmix_core::forcing::check_order;
use reachmix_core::{FloatValue, ForcingRecord, ReachId, ReachMixError, ReachParameters};
use tracing::{debug, warn};

/// Minimum number of reach records a reach table must hold.
pub const MIN_REACHES: usize = 2;

/// Numeric value of a column, zero when missing or blank.
fn number(row: &TableRow, column: &ColumnDefinition) -> IoResult<FloatValue> {
    match row.get(column.name) {
        None => Ok(0.0),
        Some(text) => text.parse().map_err(|_| IoError::InvalidNumber {
            column: column.name.to_string(),
            value: text.to_string(),
        }),
    }
}

/// Decode one forcing row.
///
/// A row without a date is rejected like a malformed date.
pub fn decode_forcing(row: &TableRow) -> IoResult<ForcingRecord> {
    let date = parse_date(row.get(COL_DATE.name).unwrap_or_default())?;
    Ok(ForcingRecord::new(
        date,
        number(row, &COL_PRECIPITATION)?,
        number(row, &COL_EVAPOTRANSPIRATION)?,
        number(row, &COL_UPSTREAM_TRACER)?,
    ))
}

/// Decode every forcing row, failing on the first bad record.
///
/// Dates must not decrease from one row to the next. An out-of-order row is
/// reported with its source and line like any other bad record.
pub fn decode_forcing_table(
    rows: &[TableRow],
    source_name: &str,
) -> IoResult<Vec<ForcingRecord>> {
    let mut records: Vec<ForcingRecord> = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let in_row = |e: IoError| e.in_record(source_name, row.line());
        let record = decode_forcing(row).map_err(in_row)?;
        let previous = records.last().map(|r| r.date);
        check_order(index, record.date, previous).map_err(|e| in_row(e.into()))?;
        records.push(record);
    }
    Ok(records)
}

/// A decoded reach row with its optional explicit identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachRecord {
    /// Raw identifier, when the row has one.
    pub label: Option<String>,
    pub parameters: ReachParameters,
}

pub fn decode_reach(row: &TableRow) -> IoResult<ReachRecord> {
    Ok(ReachRecord {
        label: row.get(COL_REACH_ID.name).map(str::to_string),
        parameters: ReachParameters::new(
            number(row, &COL_AREA)?,
            number(row, &COL_TRACER_INIT)?,
        ),
    })
}

/// Reaches A and B selected from a reach table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachPair {
    pub a: ReachParameters,
    pub b: ReachParameters,
}

/// Select reaches A and B from the rows of a reach table.
///
/// When any row carries a `reach_id`, reaches are chosen by identifier and
/// exactly one `A` and one `B` must be present. Rows with other identifiers
/// are ignored.
///
/// Without identifiers the first two rows are A and B, in that order. This is
/// kept for compatibility with reach tables that rely on row order.
///
/// Fewer than [`MIN_REACHES`] rows is a configuration error.
pub fn select_reaches(rows: &[TableRow], source_name: &str) -> IoResult<ReachPair> {
    if rows.len() < MIN_REACHES {
        return Err(ReachMixError::Configuration(format!(
            "{source_name} must define at least {MIN_REACHES} reaches (A and B), found {}",
            rows.len()
        ))
        .into());
    }

    let records = rows
        .iter()
        .map(|row| decode_reach(row).map_err(|e| e.in_record(source_name, row.line())))
        .collect::<IoResult<Vec<_>>>()?;

    if records.iter().any(|r| r.label.is_some()) {
        select_by_label(&records, source_name)
    } else {
        debug!(source = source_name, "no reach_id column, assigning A and B by row order");
        if records.len() > MIN_REACHES {
            warn!(
                source = source_name,
                ignored = records.len() - MIN_REACHES,
                "only the first two reaches are used"
            );
        }
        Ok(ReachPair {
            a: records[0].parameters.clone(),
            b: records[1].parameters.clone(),
        })
    }
}

fn select_by_label(records: &[ReachRecord], source_name: &str) -> IoResult<ReachPair> {
    let find = |id: ReachId| -> IoResult<ReachParameters> {
        let mut matches = records
            .iter()
            .filter(|r| r.label.as_deref().and_then(ReachId::parse) == Some(id));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record.parameters.clone()),
            (None, _) => Err(ReachMixError::Configuration(format!(
                "{source_name} has no reach with reach_id '{id}'"
            ))
            .into()),
            (Some(_), Some(_)) => Err(ReachMixError::Configuration(format!(
                "{source_name} has more than one reach with reach_id '{id}'"
            ))
            .into()),
        }
    };

    let pair = ReachPair {
        a: find(ReachId::A)?,
        b: find(ReachId::B)?,
    };

    let ignored = records
        .iter()
        .filter(|r| r.label.as_deref().and_then(ReachId::parse).is_none())
        .count();
    if ignored > 0 {
        warn!(source = source_name, ignored, "reaches without reach_id A or B are ignored");
    }
    Ok(pair)
}
