pub mod header;
pub mod history_panel;
pub mod image_section;
pub mod results;
pub mod site_section;
pub mod status_bar;
pub mod tabs;
pub mod text_section;
pub mod utils;
