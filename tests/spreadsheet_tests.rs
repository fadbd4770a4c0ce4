mod common;

use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use common::*;
use rust_xlsxwriter::Workbook;
use rvisitcheck::core::reconcile;
use rvisitcheck::models::{VisitSession, WeekdayCode};
use rvisitcheck::registry::Registry;
use rvisitcheck::report::{report_path, sheet_title, write_report};
use rvisitcheck::xlsx::{cell_text, read_all_sheets};
use std::path::Path;

fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).expect("open report");
    workbook.sheet_names()
}

#[test]
fn test_registry_load_reads_every_row() {
    let dir = temp_dir("registry_load");
    let path = dir.join("Estabelecimentos.xlsx");
    write_registry(&path, &sample_rows());

    let reg = Registry::load(&path).expect("load registry");

    assert_eq!(reg.len(), 5);
    assert_eq!(reg.rows()[0].name, "Padaria Sol");
    assert_eq!(reg.rows()[0].days.to_string(), "2,3");
    // lone day stored as a number cell
    assert_eq!(reg.rows()[1].days.to_string(), "3");
    assert!(reg.rows()[1].days.contains(WeekdayCode::new(3).unwrap()));
    // legacy punctuation is kept as written but still matches
    assert_eq!(reg.rows()[4].ein, LEGACY);
    assert!(reg.find(&ein("55.666.777/0001-22")).is_some());
    assert_eq!(reg.collectors(), vec!["Vitor".to_string(), "Moto".to_string()]);
}

#[test]
fn test_registry_skips_blank_rows() {
    let dir = temp_dir("registry_blank");
    let path = dir.join("Estabelecimentos.xlsx");
    let mut rows = sample_rows();
    rows.insert(2, [""; 6]);
    write_registry(&path, &rows);

    let reg = Registry::load(&path).expect("load registry");
    assert_eq!(reg.len(), 5);
    assert_eq!(reg.rows()[2].name, "Farmácia Estrela");
}

#[test]
fn test_registry_save_and_reload() {
    let dir = temp_dir("registry_save");
    let path = dir.join("Estabelecimentos.xlsx");
    write_registry(&path, &sample_rows());

    let mut reg = Registry::load(&path).expect("load registry");
    let row = reg.find_mut(&ein(FARMACIA)).unwrap();
    row.days.append(WeekdayCode::new(3).unwrap());
    row.collector = "Moto".into();
    reg.save().expect("save registry");

    let reloaded = Registry::load(&path).expect("reload registry");
    assert_eq!(reloaded.rows(), reg.rows());

    let farmacia = reloaded.find(&ein(FARMACIA)).unwrap();
    assert_eq!(farmacia.days.to_string(), "3,4,6");
    assert_eq!(farmacia.collector, "Moto");
}

/// Registry as operators keep it: a named first sheet with an extra column,
/// free text in Dias and a second worksheet.
fn write_annotated_registry(path: &Path) {
    let mut workbook = Workbook::new();

    let lista = workbook.add_worksheet().set_name("Lista").unwrap();
    for (c, h) in ["Região", "Estabelecimento", "CNPJ", "Coletor", "Dias", "Endereço", "Obs"]
        .iter()
        .enumerate()
    {
        lista.write(0, c as u16, *h).unwrap();
    }
    let rows = [
        ["Centro", "Padaria Sol", PADARIA, "Vitor", "2,3", "Rua A, 10", "abre 6h"],
        ["Centro", "Mercado Lua", MERCADO, "Vitor", "3 (manhã)", "Rua B, 20", ""],
        ["Bairro Alto", "Farmácia Estrela", FARMACIA, "Vitor", "4,6", "Rua C, 30", "fechada sáb"],
        ["Vila Nova", "Açougue Boi", ACOUGUE, "Moto", "3,5", "Rua D, 40", "portão azul"],
    ];
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                lista.write((r + 1) as u32, c as u16, *value).unwrap();
            }
        }
    }

    let coletores = workbook.add_worksheet().set_name("Coletores").unwrap();
    coletores.write(0, 0, "Nome").unwrap();
    coletores.write(0, 1, "Rota").unwrap();
    coletores.write(1, 0, "Vitor").unwrap();
    coletores.write(1, 1, 7).unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_registry_save_keeps_untouched_content() {
    let dir = temp_dir("registry_annotated");
    let path = dir.join("Estabelecimentos.xlsx");
    write_annotated_registry(&path);

    let mut reg = Registry::load(&path).expect("load registry");
    let tuesday = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
    let session = VisitSession::with_eins(
        "Vitor",
        tuesday,
        vec![ein(PADARIA), ein(FARMACIA), ein(ACOUGUE)],
    );
    let summary = reconcile(&mut reg, None, &session);
    assert!(summary.is_dirty());
    reg.append(establishment([
        "Jardim", "Bar Novo", UNKNOWN, "Vitor", "3", "Av. Brasil, 100",
    ]));
    reg.save().expect("save registry");

    assert_eq!(sheet_names(&path), vec!["Lista", "Coletores"]);

    let sheets = read_all_sheets(&path).expect("read registry");
    let lista = &sheets[0].cells;
    let cell = |r: usize, c: usize| cell_text(lista[r].get(c));

    assert_eq!(cell(0, 6), "Obs");
    assert_eq!(cell(1, 6), "abre 6h");
    // untouched row keeps its free text
    assert_eq!(cell(2, 4), "3 (manhã)");
    // patched rows: only Coletor and Dias change
    assert_eq!(cell(3, 4), "3,4,6");
    assert_eq!(cell(3, 6), "fechada sáb");
    assert_eq!(cell(4, 3), "Vitor");
    assert_eq!(cell(4, 4), "3,5");
    assert_eq!(cell(4, 6), "portão azul");
    // appended last
    assert_eq!(lista.len(), 6);
    assert_eq!(cell(5, 1), "Bar Novo");

    let coletores = &sheets[1].cells;
    assert_eq!(cell_text(coletores[1].first()), "Vitor");
    assert_eq!(coletores[1].get(1), Some(&Data::Float(7.0)));

    let reloaded = Registry::load(&path).expect("reload registry");
    assert_eq!(reloaded.rows(), reg.rows());
}

#[test]
fn test_report_keeps_foreign_sheets() {
    let dir = temp_dir("report_foreign");
    let path = dir.join("Vitor.xlsx");

    let mut workbook = Workbook::new();
    let notes = workbook.add_worksheet().set_name("Notas").unwrap();
    notes.write(0, 0, "Total").unwrap();
    notes.write(0, 1, 12).unwrap();
    workbook.save(&path).unwrap();

    let rows: Vec<_> = sample_rows().into_iter().map(establishment).collect();
    write_report(&path, "02-09", &rows[1..2]).expect("first report");
    write_report(&path, "09-09", &rows[4..5]).expect("second report");

    assert_eq!(sheet_names(&path), vec!["Notas", "02-09", "09-09"]);

    let sheets = read_all_sheets(&path).expect("read report");
    assert_eq!(sheets[0].cells[0].get(1), Some(&Data::Float(12.0)));
    // the earlier report sheet is rebuilt with the same content
    assert_eq!(cell_text(sheets[1].cells[0].first()), "Região");
    assert_eq!(cell_text(sheets[1].cells[1].get(1)), "Mercado Lua");
    assert_eq!(cell_text(sheets[1].cells[1].get(3)), "3");
}

#[test]
fn test_report_sheets_accumulate_per_date() {
    let dir = temp_dir("report_sheets");
    let path = dir.join("Vitor.xlsx");
    let rows: Vec<_> = sample_rows().into_iter().map(establishment).collect();

    write_report(&path, "02-09", &rows[1..2]).expect("first report");
    write_report(&path, "09-09", &rows[1..3]).expect("second report");
    assert_eq!(sheet_names(&path), vec!["02-09", "09-09"]);

    // same date again: replaced in place, not duplicated
    write_report(&path, "02-09", &rows[4..5]).expect("rerun report");
    assert_eq!(sheet_names(&path), vec!["02-09", "09-09"]);

    let sheets = read_all_sheets(&path).expect("read report");
    let first = &sheets[0].cells;
    assert_eq!(cell_text(first[0].first()), "Região");
    assert_eq!(first.len(), 2);
    assert_eq!(cell_text(first[1].get(1)), "Loja Antiga");

    let second = &sheets[1].cells;
    assert_eq!(second.len(), 3);
    assert_eq!(cell_text(second[1].get(1)), "Mercado Lua");
    assert_eq!(cell_text(second[2].get(1)), "Farmácia Estrela");
}

#[test]
fn test_empty_report_keeps_header() {
    let dir = temp_dir("report_empty");
    let path = dir.join("nested").join("Moto.xlsx");

    write_report(&path, "02-09", &[]).expect("empty report");

    let sheets = read_all_sheets(&path).expect("read report");
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].cells.len(), 1);
    assert_eq!(cell_text(sheets[0].cells[0].get(2)), "CNPJ");
}

#[test]
fn test_report_path_expands_year_and_month() {
    let date = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
    let path = report_path("/tmp/reports/{year}/{month}", "Vitor", date);
    assert_eq!(path, Path::new("/tmp/reports/2025/Setembro/Vitor.xlsx"));

    let path = report_path("/tmp/reports", "Ana/Bia", date);
    assert_eq!(path, Path::new("/tmp/reports/Ana_Bia.xlsx"));
}

#[test]
fn test_sheet_title_format() {
    let date = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
    assert_eq!(sheet_title(date, "%d-%m"), "02-09");
    // slashes are not allowed in sheet names
    assert_eq!(sheet_title(date, "%d/%m/%Y"), "02-09-2025");
}
