// crates/shared-kernel/tests/modification_time.rs
use chrono::{Local, TimeZone};
use delete_old_files_shared_kernel::{FileName, ModificationTime};

#[test]
fn display_uses_second_precision() {
    let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    assert_eq!(ModificationTime::from(ts).to_string(), "2024-03-09 07:05:01");
}

#[test]
fn orders_chronologically() {
    let older = ModificationTime::from(Local.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap());
    let newer = ModificationTime::from(Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert!(older < newer);
}

#[test]
fn file_name_compares_with_str() {
    let name = FileName::from("a.log");
    assert!(name == *"a.log");
    assert_eq!(name.as_str(), "a.log");
    assert!(FileName::from("a.log") < FileName::from("b.log"));
}
