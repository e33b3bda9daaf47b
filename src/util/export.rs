//! CSV and Excel export of in-memory tables.
//!
//! Anything exportable implements [`ExportRow`]; the header row comes from the row type, so
//! every exported file of a given kind has the same columns regardless of which fields happen
//! to be empty.

use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook};

use crate::{
    error::{Error, ExportError},
    model::{
        audit::AuditLogDto, billing::PaymentDto, hotel::HotelDto, ticket::TicketDto,
    },
    util::time::{format_datetime, format_optional},
};

pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A record that can be written as one row of a table
pub trait ExportRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

/// Render rows as CSV, header line first.
///
/// # Returns
/// - `Ok(String)` - CSV text with `\n` line endings
/// - `Err(Error::ExportError)` - `rows` is empty
pub fn export_to_csv<R: ExportRow>(rows: &[R]) -> Result<String, Error> {
    if rows.is_empty() {
        return Err(ExportError::NoData.into());
    }

    let mut csv_content = String::new();
    push_csv_line(&mut csv_content, R::headers().into_iter().map(str::to_string));

    for row in rows {
        push_csv_line(&mut csv_content, row.cells().into_iter());
    }

    Ok(csv_content)
}

fn push_csv_line(csv_content: &mut String, cells: impl Iterator<Item = String>) {
    for (index, value) in cells.enumerate() {
        if index > 0 {
            csv_content.push(',');
        }
        csv_content.push_str(&escape_csv(&value));
    }
    csv_content.push('\n');
}

/// Quote a value when it contains a delimiter, quote or line break, doubling inner quotes
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render rows as an XLSX workbook with a single sheet and a bold header row.
///
/// # Returns
/// - `Ok(Vec<u8>)` - The workbook file content
/// - `Err(Error::ExportError)` - `rows` is empty or the workbook could not be written
pub fn export_to_xlsx<R: ExportRow>(rows: &[R], sheet_name: &str) -> Result<Vec<u8>, Error> {
    if rows.is_empty() {
        return Err(ExportError::NoData.into());
    }

    build_workbook(rows, sheet_name).map_err(|e| ExportError::Xlsx(e).into())
}

fn build_workbook<R: ExportRow>(
    rows: &[R],
    sheet_name: &str,
) -> Result<Vec<u8>, rust_xlsxwriter::XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, header) in R::headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, (header.len() as f64 + 4.0).max(12.0))?;
    }

    for (index, row) in rows.iter().enumerate() {
        for (col, value) in row.cells().iter().enumerate() {
            worksheet.write_string(index as u32 + 1, col as u16, value)?;
        }
    }

    workbook.save_to_buffer()
}

/// File name for an export taken at `now`, e.g. `tickets_2024-01-15.csv`
pub fn export_filename(prefix: &str, extension: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.{}", prefix, now.format("%Y-%m-%d"), extension)
}

impl ExportRow for TicketDto {
    fn headers() -> Vec<&'static str> {
        vec![
            "Ticket",
            "Title",
            "Status",
            "Priority",
            "Category",
            "Room",
            "Reporter",
            "Assigned to",
            "Created",
            "SLA deadline",
            "Resolved",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.ticket_number.clone(),
            self.title.clone(),
            self.status.label().to_string(),
            self.priority.label().to_string(),
            self.category_name.clone().unwrap_or_default(),
            self.room_number.clone().unwrap_or_default(),
            self.reporter_name.clone().unwrap_or_default(),
            self.assigned_to_name.clone().unwrap_or_default(),
            format_datetime(&self.created_at),
            format_optional(self.sla_deadline.as_ref()),
            format_optional(self.resolved_at.as_ref()),
        ]
    }
}

impl ExportRow for PaymentDto {
    fn headers() -> Vec<&'static str> {
        vec!["Payment", "Hotel", "Plan", "Amount", "Currency", "Status", "Created", "Paid"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.hotel_name
                .clone()
                .unwrap_or_else(|| self.hotel_id.to_string()),
            self.plan_name.clone().unwrap_or_default(),
            format!("{:.2}", self.amount),
            self.currency.clone(),
            self.status.label().to_string(),
            format_datetime(&self.created_at),
            format_optional(self.paid_at.as_ref()),
        ]
    }
}

impl ExportRow for AuditLogDto {
    fn headers() -> Vec<&'static str> {
        vec!["Time", "User", "Action", "Entity", "Entity ID", "Details", "IP address"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format_datetime(&self.created_at),
            self.user_email.clone().unwrap_or_default(),
            self.action.clone(),
            self.entity_type.clone().unwrap_or_default(),
            self.entity_id.map(|id| id.to_string()).unwrap_or_default(),
            self.details.clone().unwrap_or_default(),
            self.ip_address.clone().unwrap_or_default(),
        ]
    }
}

impl ExportRow for HotelDto {
    fn headers() -> Vec<&'static str> {
        vec!["Hotel", "Name", "Address", "Contact email", "Phone", "Plan", "Active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.address.clone().unwrap_or_default(),
            self.contact_email.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.plan_name.clone().unwrap_or_default(),
            if self.active { "Yes" } else { "No" }.to_string(),
        ]
    }
}
