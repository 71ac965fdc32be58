// Property tests for the record validation rule:
// a record is insertable iff every field except `id` is truthy.

use proptest::prelude::*;
use vetcheck_core::{CheckupRecord, DiagnosticLevel, RecordingDiagnostics};

fn non_empty() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

fn non_zero_age() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..=40, -40i64..=-1]
}

fn valid_record() -> impl Strategy<Value = CheckupRecord> {
    (
        non_empty(),
        non_empty(),
        non_empty(),
        non_zero_age(),
        non_empty(),
    )
        .prop_map(|(species, name, owner, age, reason)| {
            CheckupRecord::new(species, name, owner, age, reason)
        })
}

proptest! {
    #[test]
    fn valid_records_always_pass(record in valid_record()) {
        let diagnostics = RecordingDiagnostics::new();
        prop_assert!(record.validate(&diagnostics));
        prop_assert!(diagnostics.entries().is_empty());
    }

    #[test]
    fn blanking_any_one_field_fails(record in valid_record(), field in 0usize..5) {
        let mut record = record;
        match field {
            0 => record.species.clear(),
            1 => record.name.clear(),
            2 => record.owner.clear(),
            3 => record.age = 0,
            _ => record.checkup_reason.clear(),
        }

        let diagnostics = RecordingDiagnostics::new();
        prop_assert!(!record.validate(&diagnostics));
        prop_assert_eq!(diagnostics.count(DiagnosticLevel::Warning), 1);
        prop_assert_eq!(record.missing_fields().len(), 1);
    }
}

#[test]
fn test_round_trip_example_record_is_valid() {
    let record = CheckupRecord::new("Dog", "Rex", "Ana", 4, "vaccination");
    assert!(record.check().is_ok());
}

#[test]
fn test_species_outside_menu_is_accepted() {
    // The model does not enforce the console's species list
    let record = CheckupRecord::new("Iguana", "Spike", "Lee", 2, "shedding");
    assert!(record.check().is_ok());
}
