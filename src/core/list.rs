use crate::models::{Establishment, WeekdayCode};
use crate::registry::Registry;
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    /// Registry rows of `collector` (all when None) expected on `day` (any when None).
    pub fn filter<'a>(
        registry: &'a Registry,
        collector: Option<&str>,
        day: Option<WeekdayCode>,
    ) -> Vec<&'a Establishment> {
        registry
            .rows()
            .iter()
            .filter(|e| collector.is_none_or(|c| e.collector == c))
            .filter(|e| day.is_none_or(|d| e.days.contains(d)))
            .collect()
    }

    pub fn render(rows: &[&Establishment]) -> String {
        let mut table = Table::new(vec![
            Column::new("Região", 20),
            Column::new("Estabelecimento", 36),
            Column::new("CNPJ", 18),
            Column::new("Coletor", 14),
            Column::new("Dias", 13),
            Column::new("Endereço", 40),
        ]);

        for e in rows {
            table.add_row(vec![
                e.region.clone(),
                e.name.clone(),
                e.ein.clone(),
                e.collector.clone(),
                e.days.to_string(),
                e.address.clone(),
            ]);
        }

        table.render()
    }
}
