//! Line-oriented inventory file: `name,unitPrice,quantity,expirationDate` per line.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    domain::Item,
    errors::{Result, ShopError},
};

use super::{LoadReport, StorageBackend};

const FIELD_COUNT: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";
const LEGACY_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
];
const LEGACY_DATE_FORMATS: &[&str] = &["%m/%d/%Y"];
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct FlatFileStorage {
    path: PathBuf,
}

impl FlatFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FlatFileStorage {
    fn load(&self) -> Result<LoadReport> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "inventory file missing, starting empty");
                return Ok(LoadReport::default());
            }
            Err(err) => {
                return Err(ShopError::Persistence(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };
        Ok(parse_records(&data))
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, render_records(items))?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            ShopError::Persistence(format!("failed to write {}: {}", self.path.display(), err))
        })?;
        debug!(path = %self.path.display(), count = items.len(), "inventory saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serializes items, one line each.
pub fn render_records(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{},{},{},{}\n",
            item.name,
            item.unit_price,
            item.quantity,
            item.expiration_date.format(DATE_FORMAT)
        ));
    }
    out
}

/// Parses file contents, skipping lines that cannot become a valid item.
pub fn parse_records(data: &str) -> LoadReport {
    let mut report = LoadReport::default();
    for (idx, line) in data.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(item) => {
                if report.items.iter().any(|existing| existing.matches_name(&item.name)) {
                    let message = format!("line {}: duplicate item `{}` skipped", line_no, item.name);
                    warn!("{}", message);
                    report.warnings.push(message);
                } else {
                    report.items.push(item);
                }
            }
            Err(reason) => {
                let message = format!("line {}: {}", line_no, reason);
                warn!("skipping inventory record, {}", message);
                report.warnings.push(message);
            }
        }
    }
    report
}

fn parse_line(line: &str) -> std::result::Result<Item, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }
    let price = Decimal::from_str(fields[1])
        .map_err(|_| format!("invalid unit price `{}`", fields[1]))?;
    let quantity = fields[2]
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity `{}`", fields[2]))?;
    let date = parse_date(fields[3]).ok_or_else(|| format!("invalid date `{}`", fields[3]))?;
    Item::new(fields[0], price, quantity, date).map_err(|err| err.to_string())
}

/// Accepts date-only values, and older values that carried a time of day.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    LEGACY_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            LEGACY_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
