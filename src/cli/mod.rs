pub mod convert;
pub mod info;
pub mod list;
pub mod shell;
pub mod ui;
