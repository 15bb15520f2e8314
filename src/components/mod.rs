pub mod gauge;
pub mod history_panel;
pub mod notice;
pub mod risk_banner;
pub mod sidebar;
pub mod timeline_chart;
pub mod toggle_row;
pub mod years_picker;
