use crate::auth::{use_api, use_auth};
use crate::notify;
use dioxus::prelude::*;
use shared_types::{AppErrorKind, CaseForm};
use shared_ui::{use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, PageHeader, TextField};
use std::collections::HashMap;

/// Date inputs of the form: (field name, label).
const DATE_FIELDS: [(&str, &str); 7] = [
    ("application_date", "Application Date"),
    ("appointment_date", "Appointment Date"),
    ("puc_expiry", "PUC Expiry"),
    ("insurance_expiry", "Insurance Expiry"),
    ("fitness_expiry", "Fitness Expiry"),
    ("tax_expiry", "Tax Expiry"),
    ("permit_expiry", "Permit Expiry"),
];

fn date_field(form: &mut CaseForm, key: &str) -> Option<&mut String> {
    match key {
        "application_date" => Some(&mut form.application_date),
        "appointment_date" => Some(&mut form.appointment_date),
        "puc_expiry" => Some(&mut form.puc_expiry),
        "insurance_expiry" => Some(&mut form.insurance_expiry),
        "fitness_expiry" => Some(&mut form.fitness_expiry),
        "tax_expiry" => Some(&mut form.tax_expiry),
        "permit_expiry" => Some(&mut form.permit_expiry),
        _ => None,
    }
}

fn date_value<'a>(form: &'a CaseForm, key: &str) -> &'a str {
    match key {
        "application_date" => &form.application_date,
        "appointment_date" => &form.appointment_date,
        "puc_expiry" => &form.puc_expiry,
        "insurance_expiry" => &form.insurance_expiry,
        "fitness_expiry" => &form.fitness_expiry,
        "tax_expiry" => &form.tax_expiry,
        "permit_expiry" => &form.permit_expiry,
        _ => "",
    }
}

/// New case form. `on_created` receives `(case_no, id)` of the saved case.
#[component]
pub fn CaseCreatePage(on_created: EventHandler<(String, String)>) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();
    let mut form = use_signal(CaseForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = match form.read().to_request() {
            Ok(req) => req,
            Err(e) => {
                field_errors.set(e.field_errors);
                return;
            }
        };
        field_errors.set(HashMap::new());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_case(&req).await {
                Ok(case) => {
                    notify::success(toast, "Case created successfully");
                    on_created.call((case.case_no, case.id));
                }
                Err(e) if e.kind == AppErrorKind::ValidationError => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => notify::api_error(toast, &mut auth, &e),
            }
            saving.set(false);
        });
    };

    let field_error = move |key: &str| field_errors.read().get(key).cloned().unwrap_or_default();
    let snapshot = form.read().clone();

    rsx! {
        div { class: "container",
            PageHeader { title: "New Case", subtitle: "Register a vehicle and its document dates" }
            Card {
                CardHeader { title: "Case details" }
                CardContent {
                    form { class: "case-form", onsubmit: submit,
                        TextField {
                            label: "Vehicle Number",
                            value: snapshot.vehicle_no.clone(),
                            placeholder: "MH12AB1234",
                            error: field_error("vehicle_no"),
                            on_input: move |v: String| form.write().vehicle_no = v,
                        }
                        div { class: "form-grid",
                            for (key, label) in DATE_FIELDS {
                                TextField {
                                    key: "{key}",
                                    label: label,
                                    input_type: "date",
                                    value: date_value(&snapshot, key).to_string(),
                                    error: field_error(key),
                                    on_input: move |v: String| {
                                        if let Some(slot) = date_field(&mut form.write(), key) {
                                            *slot = v;
                                        }
                                    },
                                }
                            }
                        }
                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                button_type: "submit",
                                busy: saving(),
                                busy_label: "Saving...",
                                "Create Case"
                            }
                        }
                    }
                }
            }
        }
    }
}
