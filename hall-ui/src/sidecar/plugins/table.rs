use dioxus::prelude::*;
use hall_types::{AttachmentTable, SidecarPayload};

use super::json::JsonView;
use crate::interop::copy_text_to_clipboard;

pub fn table_to_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    std::iter::once(headers)
        .chain(rows.iter().map(Vec::as_slice))
        .map(|cells| {
            cells
                .iter()
                .map(|cell| csv_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_cell(cell: &str) -> String {
    if cell.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[component]
pub fn TableView(payload: SidecarPayload) -> Element {
    let sheet: AttachmentTable = match serde_json::from_value(payload.data.clone()) {
        Ok(sheet) => sheet,
        Err(e) => {
            dioxus_logger::tracing::debug!("table payload shown raw: {}", e);
            return rsx! { JsonView { payload } };
        }
    };

    let title = sheet
        .title
        .clone()
        .or_else(|| payload.title().map(ToString::to_string))
        .unwrap_or_else(|| "Bảng dữ liệu".to_string());
    let shape = format!("{} hàng × {} cột", sheet.rows.len(), sheet.headers.len());
    let csv = table_to_csv(&sheet.headers, &sheet.rows);

    rsx! {
        div {
            class: "plugin",
            div {
                class: "plugin-header",
                div {
                    h3 { class: "plugin-title", "{title}" }
                    span { class: "badge badge-secondary", "{shape}" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| copy_text_to_clipboard(&csv),
                    "Copy CSV"
                }
            }
            div {
                class: "plugin-body plugin-padded",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for (index, header) in sheet.headers.iter().enumerate() {
                                th { key: "{index}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for (row_index, row) in sheet.rows.iter().enumerate() {
                            tr {
                                key: "{row_index}",
                                for (cell_index, cell) in row.iter().enumerate() {
                                    td { key: "{cell_index}", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
