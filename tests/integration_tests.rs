use bikeshare_explorer::config::{City, CityCatalog};
use bikeshare_explorer::console::Console;
use bikeshare_explorer::error::ExplorerError;
use bikeshare_explorer::filters::Selection;
use bikeshare_explorer::loader::load_data;
use bikeshare_explorer::session;
use std::io::Cursor;
use std::path::PathBuf;

fn fixtures() -> CityCatalog {
    CityCatalog::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

fn run_session(script: &str) -> (anyhow::Result<()>, String) {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let result = session::run(&mut console, &fixtures());
    (result, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_washington_omits_demographics() {
    let (result, out) = run_session("washington\nall\nall\nno\nno\n");
    result.expect("session should finish");

    assert!(out.contains("The most common month of travel is: March with 1 trips."));
    assert!(out.contains(" - User Type Counts:"));
    assert!(out.contains("   Subscriber  2\n   Customer    1\n"));
    assert!(!out.contains("Gender"));
    assert!(!out.contains("birth year"));
    assert_eq!(out.matches("Would you like to restart?").count(), 1);
}

#[test]
fn test_chicago_full_run_with_pager_and_restart() {
    let script = "Chicago\nALL\nall\nyes\n3\nyes\nno\nyes\nwashington\nmarch\nsaturday\nno\nno\n";
    let (result, out) = run_session(script);
    result.expect("session should finish");

    assert!(out.contains("The most common month of travel is: January with 3 trips."));
    assert!(out.contains("The most common day of travel is: Friday with 2 trips."));
    assert!(out.contains("The most common start hour of travel is: 9 with 2 trips."));
    assert!(out.contains("The most common start station is: Wood St & Hubbard St with 2 trips."));
    assert!(out.contains(
        "The most common station combination is: Wood St & Hubbard St to Damen Ave & Chicago Ave with 2 trips."
    ));
    assert!(out.contains("   Male    6\n   Female  1\n"));
    assert!(out.contains(" - Earliest birth year: 1975\n"));
    assert!(out.contains(" - Most recent birth year: 1992\n"));
    assert!(out.contains(" - Most common birth year: 1992\n"));

    // two pages of three rows, Gender/Birth Year columns included
    assert_eq!(out.matches("Would you like to see 3 more rows?").count(), 2);
    assert!(out.contains("Gender  Birth Year"));

    // second round, washington saturdays in march
    assert!(out.contains("The most common start station is: Yuma St & Tenley Circle NW with 1 trips."));
    assert_eq!(out.matches("Hello! Let's explore some US bikeshare data!").count(), 2);
}

#[test]
fn test_invalid_answers_are_reprompted() {
    let (result, out) =
        run_session("seattle\nwashington\ndecember\nmay\nsomeday\ntuesday\nno\nno\n");
    result.expect("session should finish");

    assert!(out.contains("seattle is not a valid value. Please try again."));
    assert!(out.contains("december is not a valid value. Please try again."));
    assert!(out.contains("someday is not a valid value. Please try again."));
    assert!(out.contains("with 1 trips."));
}

#[test]
fn test_empty_selection_is_fatal() {
    // no January trips in the chicago fixture fall on a Monday
    let (result, out) = run_session("chicago\njanuary\nmonday\n");
    let err = result.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ExplorerError>(),
        Some(ExplorerError::EmptyColumn { .. })
    ));
    assert!(out.contains("Calculating The Most Frequent Times of Travel"));
    assert!(!out.contains("Would you like to restart?"));
}

#[test]
fn test_missing_city_file_is_fatal() {
    let catalog = CityCatalog::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    let err = load_data(&catalog, &Selection::whole(City::NewYorkCity)).unwrap_err();
    assert!(format!("{err:#}").contains("new_york_city.csv"));
}

#[test]
fn test_closed_input_ends_session() {
    let (result, _) = run_session("washington\nall\n");
    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ExplorerError>(),
        Some(&ExplorerError::InputClosed)
    );
}
