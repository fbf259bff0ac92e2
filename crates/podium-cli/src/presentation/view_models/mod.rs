pub mod common;
pub mod screen;

pub use common::StatusLevel;
pub use screen::{
    BlockViewModel, ControlsViewModel, FrontPageViewModel, ProgressViewModel, ScreenViewModel,
    SectionViewModel, SidebarEntryViewModel, SidebarViewModel, StatusBarViewModel,
    TranscriptEntryViewModel, TranscriptViewModel,
};
