pub mod app;
pub mod article_list;
pub mod errors;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pager;
pub mod preview;
pub mod render;
pub mod runtime;
pub mod spinner;
pub mod terminal_guard;
pub mod theme;
