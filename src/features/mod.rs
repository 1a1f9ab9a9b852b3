pub mod census_form;
pub mod regions;
pub mod residents;
