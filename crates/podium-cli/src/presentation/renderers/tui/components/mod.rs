pub(crate) mod front_page;
pub(crate) mod progress;
pub(crate) mod section;
pub(crate) mod sidebar;
pub(crate) mod status_bar;
pub(crate) mod transcript;
