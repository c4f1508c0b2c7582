pub mod args;
pub mod curve_plot;
pub mod spin_plot;
pub mod viewer;
