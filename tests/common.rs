#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::Workbook;
use rvisitcheck::errors::{AppError, AppResult};
use rvisitcheck::lookup::EinLookup;
use rvisitcheck::models::{Ein, Establishment, LookupRecord, VisitDays};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 02/09/2025 is a Tuesday: weekday code 3.
pub const TUESDAY: &str = "02/09/2025";

pub const PADARIA: &str = "11.222.333/0001-81";
pub const MERCADO: &str = "22.333.444/0001-90";
pub const FARMACIA: &str = "33.444.555/0001-00";
pub const ACOUGUE: &str = "44.555.666/0001-11";
pub const LEGACY: &str = "55666777/0001-22";
pub const UNKNOWN: &str = "99.888.777/0001-66";

pub fn rvc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rvisitcheck");
    // keep the real user config out of the tests
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rvisitcheck_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Registry rows: region, name, EIN, collector, days, address.
/// Mercado's days cell is written as a number, the way Excel stores a lone "3".
pub fn sample_rows() -> Vec<[&'static str; 6]> {
    vec![
        ["Centro", "Padaria Sol", PADARIA, "Vitor", "2,3", "Rua A, 10"],
        ["Centro", "Mercado Lua", MERCADO, "Vitor", "3", "Rua B, 20"],
        ["Bairro Alto", "Farmácia Estrela", FARMACIA, "Vitor", "4,6", "Rua C, 30"],
        ["Vila Nova", "Açougue Boi", ACOUGUE, "Moto", "3,5", "Rua D, 40"],
        ["Centro", "Loja Antiga", LEGACY, "Vitor", "3", "Rua E, 50"],
    ]
}

pub fn write_registry(path: &Path, rows: &[[&str; 6]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, h) in ["Região", "Estabelecimento", "CNPJ", "Coletor", "Dias", "Endereço"]
        .iter()
        .enumerate()
    {
        sheet.write(0, c as u16, *h).expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let (r, c) = ((r + 1) as u32, c as u16);
            match value.parse::<f64>() {
                Ok(n) if c == 4 => sheet.write(r, c, n).expect("write number"),
                _ => sheet.write(r, c, *value).expect("write text"),
            };
        }
    }

    workbook.save(path).expect("save registry fixture");
}

pub fn establishment(row: [&str; 6]) -> Establishment {
    Establishment {
        region: row[0].to_string(),
        name: row[1].to_string(),
        ein: row[2].to_string(),
        collector: row[3].to_string(),
        days: VisitDays::parse(row[4]),
        address: row[5].to_string(),
    }
}

pub fn ein(s: &str) -> Ein {
    Ein::from_digits(s).expect("valid EIN")
}

/// Lookup service answering from a fixed table.
#[derive(Default)]
pub struct StubLookup {
    pub records: HashMap<String, LookupRecord>,
    /// EIN digits answered with a transport error
    pub unreachable: HashSet<String>,
}

impl StubLookup {
    pub fn with(mut self, id: &str, name: &str) -> Self {
        let e = ein(id);
        self.records.insert(
            e.digits().to_string(),
            LookupRecord {
                region: "Jardim".into(),
                name: name.into(),
                ein: e,
                address: "Av. Brasil, 100".into(),
            },
        );
        self
    }

    pub fn unreachable_for(mut self, id: &str) -> Self {
        self.unreachable.insert(ein(id).digits().to_string());
        self
    }
}

impl EinLookup for StubLookup {
    fn lookup(&self, ein: &Ein) -> AppResult<Option<LookupRecord>> {
        if self.unreachable.contains(ein.digits()) {
            return Err(AppError::Other("connection reset by peer".into()));
        }
        Ok(self.records.get(ein.digits()).cloned())
    }
}
