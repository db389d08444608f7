pub mod detail;
pub mod list;

use shared_types::VerificationTab;

/// Tab order on the verification page.
pub const TABS: [VerificationTab; 2] = [VerificationTab::Unverified, VerificationTab::Verified];

pub fn tab_title(tab: VerificationTab) -> &'static str {
    match tab {
        VerificationTab::Unverified => "Unverified",
        VerificationTab::Verified => "Verified",
    }
}

pub fn tab_at(index: usize) -> VerificationTab {
    TABS.get(index).copied().unwrap_or_default()
}
