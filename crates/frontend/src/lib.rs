//! Portfolio Web UI - Yew WASM frontend.
//!
//! This crate provides the client-rendered projects showcase: a grid of
//! project cards fetched from the backend, plus per-project detail pages.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
