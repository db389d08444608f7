pub mod assign_dialog;
pub mod create;
pub mod detail;
pub mod list;
pub mod own;

use shared_ui::BadgeVariant;

/// Badge colour for a case status as the server spells it.
pub fn status_variant(status: &str) -> BadgeVariant {
    match status.to_lowercase().as_str() {
        "created" => BadgeVariant::Info,
        "assigned" => BadgeVariant::Warning,
        "completed" | "closed" => BadgeVariant::Success,
        "rejected" | "cancelled" => BadgeVariant::Danger,
        _ => BadgeVariant::Neutral,
    }
}
