//! Main menu loop
//!
//! ## Logging Ownership
//!
//! Each menu action owns its boundary logging (`log_op_start!`,
//! `log_op_end!`, `log_op_error!`). The store reports its own details through
//! the injected diagnostics.

use super::prompt::{self, read_valid};
use super::render;
use super::{io_error, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::time::Instant;
use vetcheck_core::{log_op_end, log_op_error, log_op_start, CheckupRecord};
use vetcheck_store::CheckupStore;

const MENU_OPTIONS: &[i64] = &[1, 2, 3, 4];

pub const CHECKIN_FAILED: &str = "Check-in failed. Please verify the details and try again.";
pub const NOT_FOUND: &str = "Animal not found.";
pub const DISCHARGED: &str = "Animal successfully discharged.";
pub const DISCHARGE_FAILED: &str = "Discharge failed. Please check the animal ID.";
const CONFIRM_DISCHARGE: &str = "Are you sure you want to discharge this animal? (y/n): ";

enum Flow {
    Continue,
    Exit,
}

/// Interactive session over any line-based input and output
pub struct Console<'s, R, W> {
    store: &'s CheckupStore,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Console<'s, R, W> {
    pub fn new(store: &'s CheckupStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self, today: NaiveDate) -> Result<()> {
        self.say(&render::banner(today))?;

        loop {
            self.say(render::MAIN_MENU)?;
            let Some(choice) = self.ask("YOUR CHOICE: ", prompt::choice(MENU_OPTIONS))? else {
                return Ok(());
            };

            let flow = match choice {
                1 => self.new_checkup()?,
                2 => self.check_status()?,
                3 => self.discharge()?,
                _ => {
                    self.say(render::EXIT_BANNER)?;
                    Flow::Exit
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn new_checkup(&mut self) -> Result<Flow> {
        self.say(&render::species_menu())?;
        let Some(species) = self.ask("YOUR CHOICE: ", prompt::species)? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.ask("Pet Name: ", prompt::text)? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.ask("Pet Age: ", prompt::integer)? else {
            return Ok(Flow::Exit);
        };
        let Some(owner) = self.ask("Owner Name: ", prompt::text)? else {
            return Ok(Flow::Exit);
        };
        let Some(checkup_reason) = self.ask("Checkup Reason: ", prompt::text)? else {
            return Ok(Flow::Exit);
        };

        log_op_start!("new_checkup", species = species.as_str());
        let start = Instant::now();

        let mut record = CheckupRecord::new(species.as_str(), name, owner, age, checkup_reason);
        match self.store.try_add_record(&mut record) {
            Ok(id) => {
                self.say(&render::checkin_confirmation(id))?;
                log_op_end!(
                    "new_checkup",
                    duration_ms = start.elapsed().as_millis() as u64,
                    record_id = id
                );
            }
            Err(err) => {
                self.say(CHECKIN_FAILED)?;
                log_op_error!(
                    "new_checkup",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }

        Ok(Flow::Continue)
    }

    fn check_status(&mut self) -> Result<Flow> {
        let Some(id) = self.ask("Enter Animal ID: ", prompt::integer)? else {
            return Ok(Flow::Exit);
        };

        log_op_start!("check_status", record_id = id);
        let start = Instant::now();

        let found = match self.store.get_record(id) {
            Some(record) => {
                self.say(&render::record_details(&record))?;
                true
            }
            None => {
                self.say(NOT_FOUND)?;
                false
            }
        };

        log_op_end!(
            "check_status",
            duration_ms = start.elapsed().as_millis() as u64,
            found = found
        );
        Ok(Flow::Continue)
    }

    fn discharge(&mut self) -> Result<Flow> {
        let Some(id) = self.ask("Enter Animal ID: ", prompt::integer)? else {
            return Ok(Flow::Exit);
        };
        let Some(confirmed) = self.ask(CONFIRM_DISCHARGE, prompt::yes_no)? else {
            return Ok(Flow::Exit);
        };
        if !confirmed {
            return Ok(Flow::Continue);
        }

        log_op_start!("discharge", record_id = id);
        let start = Instant::now();

        let discharged = self.store.delete_record(id);
        self.say(if discharged { DISCHARGED } else { DISCHARGE_FAILED })?;

        log_op_end!(
            "discharge",
            duration_ms = start.elapsed().as_millis() as u64,
            discharged = discharged
        );
        Ok(Flow::Continue)
    }

    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
        read_valid(&mut self.input, &mut self.output, prompt, parse)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(|e| io_error("write_output", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;
    use tempfile::TempDir;
    use vetcheck_core::RecordingDiagnostics;
    use vetcheck_store::StoreConfig;

    fn setup_store() -> (TempDir, CheckupStore) {
        let dir = TempDir::new().unwrap();
        let store = CheckupStore::initialize(
            StoreConfig::new(dir.path().join("menu.db")),
            Arc::new(RecordingDiagnostics::new()),
        )
        .unwrap();
        (dir, store)
    }

    fn session(store: &CheckupStore, script: &str) -> String {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut console = Console::new(store, input, Vec::new());
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        console.run(today).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_checkin_then_status() {
        let (_dir, store) = setup_store();
        let shown = session(&store, "1\n2\nRex\n4\nAna\nvaccination\n2\n1\n4\n");

        assert!(shown.starts_with("Veterinary Check-in System - 31-01-2024"));
        assert!(shown.contains("Check-up ID: 1\t"));
        assert!(shown.contains("Species: Dog"));
        assert!(shown.contains("Checkup Reason: vaccination"));
        assert!(shown.ends_with("SYSTEM EXITED\n"));
    }

    #[test]
    fn test_failed_checkin_is_reported() {
        let (_dir, store) = setup_store();
        // Empty pet name passes the prompt but not record validation
        let shown = session(&store, "1\n1\n\n3\nJo\nfleas\n4\n");

        assert!(shown.contains(CHECKIN_FAILED));
        assert!(!shown.contains("Check-up ID"));
        assert!(store.get_record(1).is_none());
    }

    #[test]
    fn test_discharge_confirmed() {
        let (_dir, store) = setup_store();
        let mut record = CheckupRecord::new("Cat", "Tom", "Jo", 3, "fleas");
        let id = store.add_record(&mut record).unwrap();

        let shown = session(&store, &format!("3\n{}\nY\n2\n{}\n4\n", id, id));

        assert!(shown.contains(DISCHARGED));
        assert!(shown.contains(NOT_FOUND));
    }

    #[test]
    fn test_discharge_declined_keeps_record() {
        let (_dir, store) = setup_store();
        let mut record = CheckupRecord::new("Cat", "Tom", "Jo", 3, "fleas");
        let id = store.add_record(&mut record).unwrap();

        let shown = session(&store, &format!("3\n{}\nn\n4\n", id));

        assert!(!shown.contains(DISCHARGED));
        assert!(store.get_record(id).is_some());
    }

    #[test]
    fn test_discharge_unknown_id() {
        let (_dir, store) = setup_store();
        let shown = session(&store, "3\n9999\ny\n4\n");
        assert!(shown.contains(DISCHARGE_FAILED));
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let (_dir, store) = setup_store();
        let shown = session(&store, "9\nabc\n4\n");
        assert_eq!(shown.matches(prompt::INVALID_INPUT).count(), 2);
        assert!(shown.ends_with("SYSTEM EXITED\n"));
    }

    #[test]
    fn test_input_closed_mid_checkin() {
        let (_dir, store) = setup_store();
        let shown = session(&store, "1\n2\nRex\n");
        assert!(!shown.contains("Check-up ID"));
        assert!(store.get_record(1).is_none());
    }
}
