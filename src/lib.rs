pub mod artifacts;
pub mod audio;
pub mod config;
pub mod form;
pub mod i18n;
pub mod narration;
pub mod predictor;
pub mod remedies;
pub mod server;
pub mod translation;
