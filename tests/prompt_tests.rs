mod common;

use chrono::NaiveDate;
use common::*;
use rvisitcheck::errors::AppError;
use rvisitcheck::ui::prompt::{confirm, prompt_date, prompt_eins};
use std::io::Cursor;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 2).unwrap()
}

#[test]
fn test_blank_date_means_today() {
    let mut input = Cursor::new("\n");
    let mut output = Vec::new();

    let date = prompt_date(&mut input, &mut output, today()).unwrap();

    assert_eq!(date, today());
    assert!(String::from_utf8(output).unwrap().contains("02/09/2025"));
}

#[test]
fn test_invalid_date_asks_again() {
    let mut input = Cursor::new("31/02/2025\n05/09/2025\n");
    let mut output = Vec::new();

    let date = prompt_date(&mut input, &mut output, today()).unwrap();

    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
    assert!(
        String::from_utf8(output)
            .unwrap()
            .contains("Invalid date '31/02/2025'")
    );
}

#[test]
fn test_closed_input_cancels_date_prompt() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();

    let err = prompt_date(&mut input, &mut output, today()).unwrap_err();
    assert!(matches!(err, AppError::Cancelled(_)));
}

#[test]
fn test_prompt_eins_until_blank_line() {
    let qr = "https://www.fazenda.pr.gov.br/nfce/qrcode?p=41250999888777000166650010000123451234567890|2|1";
    let text = format!("{PADARIA}\nnot an ein\n11222333000181\n{qr}\n\n{MERCADO}\n");
    let mut input = Cursor::new(text);
    let mut output = Vec::new();

    let eins = prompt_eins(&mut input, &mut output).unwrap();

    assert_eq!(eins, vec![ein(PADARIA), ein(UNKNOWN)]);
    let shown = String::from_utf8(output).unwrap();
    assert!(shown.contains("already entered"));
    assert!(shown.contains("  2. 99.888.777/0001-66"));
}

#[test]
fn test_prompt_eins_stops_at_end_of_input() {
    let mut input = Cursor::new(format!("{FARMACIA}"));
    let mut output = Vec::new();

    let eins = prompt_eins(&mut input, &mut output).unwrap();
    assert_eq!(eins, vec![ein(FARMACIA)]);
}

#[test]
fn test_confirm_answers() {
    for (answer, expected) in [("y\n", true), ("Sim\n", true), ("s\n", true), ("n\n", false), ("\n", false), ("", false)] {
        let mut input = Cursor::new(answer);
        let mut output = Vec::new();
        assert_eq!(
            confirm(&mut input, &mut output, "Correct?").unwrap(),
            expected,
            "answer {:?}",
            answer
        );
    }
}
