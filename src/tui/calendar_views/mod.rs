pub mod day_grid;
pub mod month_select;
pub mod year_select;
