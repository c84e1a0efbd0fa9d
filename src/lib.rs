//! `Pages` - terminal slideshow presenter.
//!
//! This crate turns the `<page>` elements of a deck file into full-screen
//! slides navigable by keyboard or on-screen controls, themes them with a
//! generated stylesheet, and exports slide text to PDF through a pluggable
//! PDF library.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod export;
pub mod input;
pub mod navigator;
pub mod stylesheet;
pub mod types;
pub mod ui;
