pub mod breakdown_table;
pub mod kpi_card;
pub mod select_field;
