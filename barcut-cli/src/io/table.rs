use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use barcut::PlanError;
use barcut::entities::{CutRequirement, PartCuttingJob, PartRow, StockProfile, group_part_rows};
use calamine::{Reader, Xlsx, XlsxError, open_workbook};
use csv::{ReaderBuilder, Trim};
use log::debug;
use thiserror::Error;

use crate::config::{ColumnNames, PlanConfig};

/// Problems with tabular input, detected before anything is planned
#[derive(Error, Debug)]
pub enum TableError {
    #[error("missing column: {column:?}")]
    MissingColumn { column: String },

    #[error("at least one row is needed")]
    EmptyTable,

    /// `row` is the line number in the table, the header being line 1
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: PlanError,
    },

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Raw text cells of a table, the first row being the header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads the first sheet of a `.xlsx` file, or a `.csv` file
pub fn read_table(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let table = match extension.as_str() {
        "csv" => {
            let file = File::open(path)
                .with_context(|| format!("could not open table: {}", path.display()))?;
            read_csv(file).with_context(|| format!("could not parse csv: {}", path.display()))?
        }
        "xlsx" => read_xlsx(path)?,
        _ => bail!("unsupported table format: {extension:?}"),
    };
    debug!(
        "[TABLE] read {} rows with columns {:?} from {}",
        table.rows.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

pub fn read_csv(reader: impl Read) -> Result<Table, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.iter().map(str::to_owned).collect();
    let rows = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_owned).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    Ok(Table { headers, rows })
}

fn read_xlsx(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e: XlsxError| anyhow!("could not open workbook {}: {e}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("workbook has no sheets: {}", path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| anyhow!("could not read sheet {sheet_name:?}: {e}"))?;

    let mut rows = range.rows().map(|row| {
        row.iter()
            .map(|cell| cell.to_string().trim().to_owned())
            .collect::<Vec<_>>()
    });
    let headers = rows.next().unwrap_or_default();

    Ok(Table {
        headers,
        rows: rows.collect(),
    })
}

/// Turns a table into one job per distinct (description, stock length) pair.
/// Unusable length and kerf loss are not part of the table and come from the `config`.
pub fn table_to_jobs(
    table: &Table,
    config: &PlanConfig,
) -> Result<Vec<PartCuttingJob>, TableError> {
    let columns = ColumnIndices::locate(&table.headers, &config.columns)?;

    let mut part_rows = vec![];
    for (i, row) in table.rows.iter().enumerate() {
        //blank rows are left behind by table editors
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let part_row = columns
            .part_row(row, config)
            .map_err(|source| TableError::InvalidRow { row: i + 2, source })?;
        part_rows.push(part_row);
    }

    if part_rows.is_empty() {
        return Err(TableError::EmptyTable);
    }

    Ok(group_part_rows(part_rows)?)
}

struct ColumnIndices {
    description: usize,
    size: usize,
    quantity: usize,
    stock_length: usize,
}

impl ColumnIndices {
    fn locate(headers: &[String], names: &ColumnNames) -> Result<Self, TableError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| TableError::MissingColumn {
                    column: name.to_owned(),
                })
        };
        Ok(Self {
            description: find(&names.description)?,
            size: find(&names.size)?,
            quantity: find(&names.quantity)?,
            stock_length: find(&names.stock_length)?,
        })
    }

    fn part_row(&self, row: &[String], config: &PlanConfig) -> Result<PartRow, PlanError> {
        let cell = |idx: usize| row.get(idx).map(|c| c.trim()).unwrap_or("");

        let requirement = CutRequirement::parse(cell(self.quantity), cell(self.size))?;
        let stock_length = cell(self.stock_length)
            .parse::<f32>()
            .map_err(|_| PlanError::InvalidInput {
                reason: format!("stock length is not a number: {:?}", cell(self.stock_length)),
            })?;
        let stock = StockProfile::new(stock_length, config.unusable_length, config.kerf_loss)?;

        Ok(PartRow {
            description: cell(self.description).to_owned(),
            stock,
            quantity: requirement.quantity,
            size: requirement.size,
        })
    }
}
