//! Page glue: control listeners, pointer and resize listeners, and the hover
//! label element.
//!
//! Handlers never touch the runner directly. They forward `InputEvent`s
//! through an `EventSink`, which the `export_game!` macro points at the
//! runner's input queue. Every element lookup is presence-checked; a missing
//! element only disables that one binding.

use glam::Vec2;
use orrery_engine::renderer::camera::client_to_ndc;
use orrery_engine::{ControlBinding, ControlKind, HoverLabel, InputEvent, Overlay};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, MouseEvent};

/// Where DOM handlers deliver input.
pub type EventSink = fn(InputEvent);

type Listener = Closure<dyn FnMut(Event)>;

/// Inline style of the hover label before any theme is applied.
const HOVER_LABEL_BASE_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("pointer-events", "none"),
    ("padding", "2px 8px"),
    ("border-radius", "4px"),
    ("font-size", "0.95em"),
    ("z-index", "10"),
    ("display", "none"),
];

pub const HOVER_LABEL_CLASS: &str = "planet-label";

/// Live listeners and overlay elements. Dropping this detaches nothing
/// explicitly, but frees the closures; keep it alive for the page lifetime.
#[derive(Default)]
pub struct DomBindings {
    document: Option<Document>,
    hover_label: Option<HtmlElement>,
    applied_revision: Option<u64>,
    listeners: Vec<Listener>,
}

impl DomBindings {
    /// Look up the container and every control, attach listeners, create the
    /// hover label and report the container's current size through `sink`.
    pub fn attach(container_id: &str, controls: &[ControlBinding], sink: EventSink) -> Self {
        let mut bindings = Self::default();
        let Some(window) = web_sys::window() else {
            log::warn!("dom: no window; page bindings disabled");
            return bindings;
        };
        let Some(document) = window.document() else {
            log::warn!("dom: no document; page bindings disabled");
            return bindings;
        };

        match document
            .get_element_by_id(container_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(container) => {
                bindings.attach_pointer(&container, sink);
                bindings.attach_resize(&window, container.clone(), sink);
                sink(container_size(&container));
            }
            None => log::debug!("dom: #{container_id} not found; pointer and resize input disabled"),
        }

        for binding in controls {
            bindings.attach_control(&document, binding, sink);
        }

        bindings.hover_label = create_hover_label(&document);
        bindings.document = Some(document);
        log::debug!("dom: {} listeners attached", bindings.listeners.len());
        bindings
    }

    fn listen(&mut self, target: &EventTarget, kind: &str, listener: Listener) {
        match target.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref()) {
            Ok(()) => self.listeners.push(listener),
            Err(err) => log::warn!("dom: could not listen for {kind}: {err:?}"),
        }
    }

    fn attach_pointer(&mut self, container: &HtmlElement, sink: EventSink) {
        let surface: Element = container.clone().into();
        let on_move = Closure::wrap(Box::new(move |event: Event| {
            if let Some((ndc, client)) = pointer_coords(&surface, &event) {
                sink(InputEvent::PointerMove { x: ndc.x, y: ndc.y, client_x: client.x, client_y: client.y });
            }
        }) as Box<dyn FnMut(Event)>);
        self.listen(container, "mousemove", on_move);

        let surface: Element = container.clone().into();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            if let Some((ndc, client)) = pointer_coords(&surface, &event) {
                sink(InputEvent::Click { x: ndc.x, y: ndc.y, client_x: client.x, client_y: client.y });
            }
        }) as Box<dyn FnMut(Event)>);
        self.listen(container, "click", on_click);
    }

    fn attach_resize(&mut self, window: &web_sys::Window, container: HtmlElement, sink: EventSink) {
        let on_resize = Closure::wrap(Box::new(move |_event: Event| {
            sink(container_size(&container));
        }) as Box<dyn FnMut(Event)>);
        self.listen(window, "resize", on_resize);
    }

    fn attach_control(&mut self, document: &Document, binding: &ControlBinding, sink: EventSink) {
        let Some(element) = document.get_element_by_id(&binding.element_id) else {
            log::debug!("dom: #{} not found; control skipped", binding.element_id);
            return;
        };
        let binding = binding.clone();

        match binding.kind {
            ControlKind::Slider => {
                let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
                    log::debug!("dom: #{} is not an <input>; control skipped", binding.element_id);
                    return;
                };
                let source = input.clone();
                let on_input = Closure::wrap(Box::new(move |_event: Event| {
                    let raw = source.value();
                    match binding.slider_event(&raw) {
                        Some(event) => sink(event),
                        None => log::debug!("dom: #{} value {raw:?} ignored", binding.element_id),
                    }
                }) as Box<dyn FnMut(Event)>);
                self.listen(&input, "input", on_input);
            }
            ControlKind::Button => {
                let on_click = Closure::wrap(Box::new(move |_event: Event| {
                    sink(binding.event(0.0));
                }) as Box<dyn FnMut(Event)>);
                self.listen(&element, "click", on_click);
            }
        }
    }

    /// Push overlay state into the page if it changed since the last call.
    pub fn apply_overlay(&mut self, overlay: &Overlay) {
        if self.applied_revision == Some(overlay.revision()) {
            return;
        }
        self.applied_revision = Some(overlay.revision());
        let Some(document) = &self.document else {
            return;
        };

        if let Some(label) = &self.hover_label {
            let style = label.style();
            let look = overlay.label_style();
            set_style(&style, "background", &look.background);
            set_style(&style, "color", &look.color);
            set_style(&style, "border", &look.border);
            match overlay.hover() {
                HoverLabel::Hidden => set_style(&style, "display", "none"),
                HoverLabel::Visible { text, at } => {
                    label.set_text_content(Some(text));
                    set_style(&style, "left", &format!("{}px", at.x));
                    set_style(&style, "top", &format!("{}px", at.y));
                    set_style(&style, "display", "block");
                }
            }
        }

        for (id, text) in overlay.texts() {
            match document.get_element_by_id(id) {
                Some(element) => element.set_text_content(Some(text)),
                None => log::debug!("dom: #{id} not found; text not applied"),
            }
        }

        if let Some(body) = document.body() {
            let classes = body.class_list();
            for (class, enabled) in overlay.body_classes() {
                if let Err(err) = classes.toggle_with_force(class, enabled) {
                    log::warn!("dom: could not toggle body class {class}: {err:?}");
                }
            }
        }
    }
}

fn set_style(style: &web_sys::CssStyleDeclaration, property: &str, value: &str) {
    if let Err(err) = style.set_property(property, value) {
        log::warn!("dom: could not set {property}: {err:?}");
    }
}

/// NDC over `surface` plus raw client pixels. `None` for a zero-sized surface.
fn pointer_coords(surface: &Element, event: &Event) -> Option<(Vec2, Vec2)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let rect = surface.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let client = Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32);
    let ndc = client_to_ndc(
        client,
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    );
    Some((ndc, client))
}

fn container_size(container: &HtmlElement) -> InputEvent {
    InputEvent::Resize {
        width: container.offset_width() as f32,
        height: container.offset_height() as f32,
    }
}

fn create_hover_label(document: &Document) -> Option<HtmlElement> {
    let label = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())?;
    label.set_class_name(HOVER_LABEL_CLASS);
    let style = label.style();
    for (property, value) in HOVER_LABEL_BASE_STYLE {
        set_style(&style, property, value);
    }
    let Some(body) = document.body() else {
        log::debug!("dom: no <body>; hover label disabled");
        return None;
    };
    if let Err(err) = body.append_child(&label) {
        log::warn!("dom: could not insert hover label: {err:?}");
        return None;
    }
    Some(label)
}
