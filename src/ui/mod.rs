pub mod corrections_table;
pub mod point_drag;
pub mod review_panel;
