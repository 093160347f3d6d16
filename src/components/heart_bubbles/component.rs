//! Leptos component wrapping the bubble field canvas.
//!
//! The component creates an HTML canvas element and wires up mouse event
//! handlers for pointer tracking. An animation loop runs via
//! `requestAnimationFrame`, advancing the simulation and redrawing each
//! frame; the pending frame handle is retained so teardown can cancel the
//! loop together with the resize subscription.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::BubbleFieldState;
use super::theme::Theme;

/// Bundles the simulation state with its visual configuration.
struct FieldContext {
	state: BubbleFieldState,
	theme: Theme,
}

/// Renders the rising heart-bubble animation on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize automatically with
/// the window. Explicit `width`/`height` override automatic sizing.
/// Bubbles burst early when the pointer comes within reach, and the
/// pointer is forgotten when it leaves the canvas.
#[component]
pub fn HeartBubblesCanvas(
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (context_init, animate_init, resize_cb_init, raf_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		raf_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Without a 2d context the widget stays inert.
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("heart-bubbles: 2d canvas context unavailable, animation disabled");
			return;
		};

		info!("heart-bubbles: field started at {}x{}", w, h);

		*context_init.borrow_mut() = Some(FieldContext {
			state: BubbleFieldState::new(w, h),
			theme: Theme::default(),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner, raf_inner) = (
			context_init.clone(),
			animate_init.clone(),
			raf_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.advance();
				render::render(&c.state, &ctx, &c.theme);
				c.state.prune();
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(handle) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_inner.set(Some(handle));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(Some(handle));
			}
		}
	});

	// The frame schedule and the resize subscription are released together
	// with the component; the mouse handlers below are view-attached and
	// dropped by the framework at the same boundary.
	// `on_cleanup` requires a `Send + Sync` closure, but the retained rAF
	// handle and `Closure`s are single-threaded `Rc`s. In the wasm32 CSR
	// target everything runs on one thread, so wrapping the captured state
	// in `SendWrapper` satisfies the bound without changing behavior.
	let cleanup_state = leptos::__reexports::send_wrapper::SendWrapper::new((
		animate.clone(),
		resize_cb.clone(),
		raf_handle.clone(),
	));
	on_cleanup(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		let (animate_cleanup, resize_cleanup, raf_cleanup) = &*cleanup_state;
		if let Some(handle) = raf_cleanup.take() {
			let _ = window.cancel_animation_frame(handle);
		}
		if let Some(cb) = resize_cleanup.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		animate_cleanup.borrow_mut().take();
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.set_pointer(x, y);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.clear_pointer();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="heart-bubbles-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
