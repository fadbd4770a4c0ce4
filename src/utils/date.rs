use chrono::NaiveDate;

/// Operator-facing date format.
pub const BR_FORMAT: &str = "%d/%m/%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Accepts DD/MM/YYYY (what operators type) or YYYY-MM-DD.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, BR_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

pub fn format_br(date: NaiveDate) -> String {
    date.format(BR_FORMAT).to_string()
}

/// Portuguese month name, as used in the reports folder tree.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}
