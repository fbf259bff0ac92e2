pub mod presenters;
pub mod renderers;
pub mod view_models;
