//! Text shown by the console

use chrono::NaiveDate;
use vetcheck_core::{CheckupRecord, Species};

pub const MAIN_MENU: &str = "\nMAIN MENU:\n\
[1] New Animal Check-in\n\
[2] Check Animal Status\n\
[3] Discharge Animal\n\
[4] Exit System";

pub const EXIT_BANNER: &str = "
-----------------------------------------------------
    Thank you for using VetTech Solutions
-----------------------------------------------------
                SYSTEM EXITED";

pub fn banner(today: NaiveDate) -> String {
    format!("Veterinary Check-in System - {}", today.format("%d-%m-%Y"))
}

pub fn species_menu() -> String {
    let mut out = String::from("\nSelect Animal Species:");
    for (i, species) in Species::ALL.iter().enumerate() {
        out.push_str(&format!("\n[{}] {}", i + 1, species));
    }
    out
}

pub fn checkin_confirmation(id: i64) -> String {
    format!("\n\tCheck-up ID: {}\tPlease note for future processes.", id)
}

/// Record details, one `Label: value` line per column
pub fn record_details(record: &CheckupRecord) -> String {
    let id = record.id.map(|id| id.to_string()).unwrap_or_default();
    let lines = [
        ("Id", id),
        ("Species", record.species.clone()),
        ("Name", record.name.clone()),
        ("Owner", record.owner.clone()),
        ("Age", record.age.to_string()),
        ("Checkup Reason", record.checkup_reason.clone()),
    ];

    let mut out = String::from("\nANIMAL INFORMATION:");
    for (label, value) in lines {
        out.push_str(&format!("\n{}: {}", label, value));
    }
    out
}
