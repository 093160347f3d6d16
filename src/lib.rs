//! heart-bubbles: rising heart-bubble particle animation for web canvases.
//!
//! This crate provides a WASM-based visual-effects component that renders a
//! field of heart-shaped bubbles which grow at the bottom of the surface,
//! rise, and burst, reacting to pointer position and viewport size.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::heart_bubbles::{HeartBubblesCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("heart-bubbles: logging initialized");
}

/// Main application component.
/// Fills the viewport with the animated bubble field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Heart Bubbles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-bubbles">
			<HeartBubblesCanvas fullscreen=true />
		</div>
	}
}
