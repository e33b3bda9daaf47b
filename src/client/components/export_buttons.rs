use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFileCsv, FaFileExcel};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use hotelfix::{
    error::Error,
    util::export::{export_filename, export_to_csv, export_to_xlsx, ExportRow, CSV_MIME, XLSX_MIME},
};

use crate::client::{store::toast::Toasts, util::download};

#[derive(Clone, Copy)]
enum Format {
    Csv,
    Xlsx,
}

fn export<R: ExportRow>(rows: &[R], file_prefix: &str, format: Format) -> Result<String, Error> {
    let now = Utc::now().naive_utc();

    let (file_name, mime, bytes) = match format {
        Format::Csv => (
            export_filename(file_prefix, "csv", now),
            CSV_MIME,
            export_to_csv(rows)?.into_bytes(),
        ),
        Format::Xlsx => (
            export_filename(file_prefix, "xlsx", now),
            XLSX_MIME,
            export_to_xlsx(rows, file_prefix)?,
        ),
    };

    download(&file_name, mime, &bytes)?;

    Ok(file_name)
}

fn run<R: ExportRow>(rows: &[R], file_prefix: &str, format: Format, toasts: Toasts) {
    match export(rows, file_prefix, format) {
        Ok(file_name) => toasts.success(format!("Exported {}", file_name)),
        Err(e) => {
            tracing::warn!("Export failed: {}", e);
            toasts.error(e.to_string());
        }
    }
}

/// CSV and Excel download buttons for any exportable list
#[component]
pub fn ExportButtons<R: ExportRow + Clone + PartialEq + 'static>(
    rows: Vec<R>,
    #[props(into)] file_prefix: String,
) -> Element {
    let toasts = use_context::<Toasts>();
    let csv_rows = rows.clone();
    let csv_prefix = file_prefix.clone();

    rsx!(
        div { class: "flex gap-2",
            button {
                class: "btn btn-sm btn-outline",
                onclick: move |_| run(&csv_rows, &csv_prefix, Format::Csv, toasts),
                Icon { width: 16, height: 16, icon: FaFileCsv }
                "CSV"
            }
            button {
                class: "btn btn-sm btn-outline",
                onclick: move |_| run(&rows, &file_prefix, Format::Xlsx, toasts),
                Icon { width: 16, height: 16, icon: FaFileExcel }
                "Excel"
            }
        }
    )
}
