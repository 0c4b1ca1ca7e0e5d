use slide_portfolio::input::{NavInput, NavKey};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, AddEventListenerOptions, Event, EventTarget, KeyboardEvent, TouchEvent, WheelEvent};

use super::Controller;

const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
}

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    if target
        .add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("could not listen for {kind}");
    }
    // Listeners live as long as the page.
    closure.forget();
}

fn first_touch_y(event: &TouchEvent, changed: bool) -> Option<f64> {
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch| f64::from(touch.client_y()))
}

/// Document-wide gestures that no single rendered element owns.
pub fn install(controller: &Controller) {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = win.document() else {
        return;
    };

    let wheel = controller.clone();
    listen(&document, "wheel", move |event| {
        if let Some(event) = event.dyn_ref::<WheelEvent>() {
            wheel.navigate(NavInput::Wheel {
                delta_y: event.delta_y(),
            });
        }
    });

    let touch_start = controller.clone();
    listen(&document, "touchstart", move |event| {
        if let Some(y) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| first_touch_y(event, false))
        {
            touch_start.navigate(NavInput::TouchStart { y });
        }
    });

    let touch_end = controller.clone();
    listen(&document, "touchend", move |event| {
        if let Some(y) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| first_touch_y(event, true))
        {
            touch_end.navigate(NavInput::TouchEnd { y });
        }
    });

    let keys = controller.clone();
    listen(&document, "keydown", move |event| {
        if let Some(key) = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|event| NavKey::from_key(&event.key()))
        {
            keys.navigate(NavInput::Key(key));
        }
    });

    let resize = controller.clone();
    listen(&win, "resize", move |_| {
        resize.with(|site| site.on_resize());
    });
}
