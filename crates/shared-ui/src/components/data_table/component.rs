use dioxus::prelude::*;

/// Table with a fixed header row. Renders `empty_message` when `is_empty` is set.
#[component]
pub fn DataTable(
    columns: Vec<String>,
    #[props(default = false)] is_empty: bool,
    #[props(default = "No records found".to_string())] empty_message: String,
    children: Element,
) -> Element {
    let span = columns.len().max(1);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for col in columns.iter() {
                            th { key: "{col}", "{col}" }
                        }
                    }
                }
                tbody {
                    if is_empty {
                        tr { class: "data-table-empty",
                            td { colspan: "{span}", "{empty_message}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        tr {
            class: if clickable { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
