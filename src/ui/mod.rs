pub mod day_grid;
pub mod selectors;
pub mod theme;
pub mod view_model;
