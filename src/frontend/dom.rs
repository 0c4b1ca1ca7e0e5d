use js_sys::{Function, Reflect};
use slide_portfolio::{
    contact::SubmitState,
    renderer::{Display, Group, ListKind, Node, Pose, Renderer},
    theme::Theme,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

const SECTION_SELECTOR: &str = ".fullpage-section";
const NAV_DOT_SELECTOR: &str = ".nav-dot";
const SKILL_BAR_SELECTOR: &str = ".level-bar";
const FORM_INPUT_SELECTOR: &str = ".form-input";
const CONTACT_FORM_ID: &str = "contactForm";
const SUBMIT_BUTTON_SELECTOR: &str = "#contactForm .submit-button";
const THEME_TOGGLE_ID: &str = "darkModeToggle";
const LIGHT_MODE_CLASS: &str = "light-mode";

fn item_selector(list: ListKind) -> &'static str {
    match list {
        ListKind::Projects => "#projectsGrid .project-card",
        ListKind::Journey => ".journey-grid .journey-card",
    }
}

fn indicator_selector(list: ListKind) -> &'static str {
    match list {
        ListKind::Projects => ".page-indicators",
        ListKind::Journey => ".journey-indicators",
    }
}

fn locate(node: Node) -> Option<(&'static str, usize)> {
    let located = match node {
        Node::Section(index) => (SECTION_SELECTOR, index),
        Node::NavDot(index) => (NAV_DOT_SELECTOR, index),
        Node::SectionCounter => (".current-section", 0),
        Node::Item(list, index) => (item_selector(list), index),
        Node::PrevButton(ListKind::Projects) => (".prev-btn", 0),
        Node::PrevButton(ListKind::Journey) => (".journey-prev", 0),
        Node::NextButton(ListKind::Projects) => (".next-btn", 0),
        Node::NextButton(ListKind::Journey) => (".journey-next", 0),
        Node::RangeLabel(ListKind::Projects) => ("#currentRange", 0),
        Node::TotalLabel(ListKind::Projects) => ("#totalProjects", 0),
        Node::RangeLabel(ListKind::Journey) | Node::TotalLabel(ListKind::Journey) => return None,
        Node::SkillBar(index) => (SKILL_BAR_SELECTOR, index),
        Node::ThemeIcon => ("#darkModeToggle i", 0),
        Node::TypingText => (".typing-text", 0),
        Node::HeroTitle => (".hero-title", 0),
        Node::Loader => (".page-loader", 0),
    };
    Some(located)
}

fn group_selector(group: Group) -> &'static str {
    match group {
        Group::Sections => SECTION_SELECTOR,
        Group::NavDots => NAV_DOT_SELECTOR,
        Group::Items(list) => item_selector(list),
        Group::SkillBars => SKILL_BAR_SELECTOR,
    }
}

pub struct DomRenderer {
    document: Document,
}

impl DomRenderer {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn nth(&self, selector: &str, index: usize) -> Option<HtmlElement> {
        let index = u32::try_from(index).ok()?;
        self.document
            .query_selector_all(selector)
            .ok()?
            .item(index)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn element(&self, node: Node) -> Option<HtmlElement> {
        let (selector, index) = locate(node)?;
        self.nth(selector, index)
    }

    fn all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl Renderer for DomRenderer {
    fn count(&self, group: Group) -> usize {
        self.document
            .query_selector_all(group_selector(group))
            .map(|list| list.length() as usize)
            .unwrap_or(0)
    }

    fn has(&self, node: Node) -> bool {
        self.element(node).is_some()
    }

    fn set_class(&mut self, node: Node, class: &str, on: bool) {
        if let Some(element) = self.element(node) {
            let _ = element.class_list().toggle_with_force(class, on);
        }
    }

    fn reflow(&mut self, node: Node) {
        if let Some(element) = self.element(node) {
            let _ = element.offset_width();
        }
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if let Some(element) = self.element(node) {
            element.set_text_content(Some(text));
        }
    }

    fn display(&self, node: Node) -> Display {
        self.element(node)
            .and_then(|element| element.style().get_property_value("display").ok())
            .map(|value| Display::from_css(&value))
            .unwrap_or(Display::None)
    }

    fn set_display(&mut self, node: Node, display: Display) {
        if let Some(element) = self.element(node) {
            let _ = element.style().set_property("display", display.as_css());
        }
    }

    fn set_pose(&mut self, node: Node, pose: Pose) {
        let Some(element) = self.element(node) else {
            return;
        };
        let style = element.style();
        if let Some(transition) = pose.transition {
            let _ = style.set_property("transition", transition);
        }
        let _ = style.set_property("opacity", &pose.opacity.to_string());
        let _ = style.set_property("transform", &pose.transform());
    }

    fn set_disabled(&mut self, node: Node, disabled: bool) {
        if let Some(button) = self
            .element(node)
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(disabled);
        }
    }

    fn set_width(&mut self, node: Node, width: &str) {
        if let Some(element) = self.element(node) {
            let _ = element.style().set_property("width", width);
        }
    }

    fn target_width(&self, node: Node) -> Option<String> {
        let value = self
            .element(node)?
            .style()
            .get_property_value("--width")
            .ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    fn render_page_dots(&mut self, list: ListKind, pages: usize, active: usize) {
        let Some(container) = self.nth(indicator_selector(list), 0) else {
            return;
        };
        container.set_inner_html("");

        for page in 0..pages {
            let Ok(dot) = self.document.create_element("div") else {
                return;
            };
            dot.set_class_name(if page == active { "page-dot active" } else { "page-dot" });
            let _ = dot.set_attribute("data-page", &page.to_string());
            let _ = container.append_child(&dot);
        }
    }

    fn apply_theme(&mut self, theme: Theme, animated: bool) {
        if animated {
            apply_theme_with_transition(theme);
        } else {
            paint_theme(&self.document, theme);
        }
    }

    fn set_submit_state(&mut self, state: SubmitState) {
        let Some(button) = self.all(SUBMIT_BUTTON_SELECTOR).into_iter().next() else {
            return;
        };
        button.set_inner_html(&format!(
            "<span>{}</span> <i class=\"{}\"></i>",
            state.label(),
            state.icon_class()
        ));

        let style = button.style();
        let (background, color) = state.accent();
        match background {
            Some(value) => {
                let _ = style.set_property("background", value);
            }
            None => {
                let _ = style.remove_property("background");
            }
        }
        match color {
            Some(value) => {
                let _ = style.set_property("color", value);
            }
            None => {
                let _ = style.remove_property("color");
            }
        }
    }

    fn reset_form(&mut self) {
        if let Some(form) = self
            .document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
        for input in self.all(FORM_INPUT_SELECTOR) {
            let _ = input.set_attribute("data-filled", "false");
        }
    }
}

fn input_value(element: &HtmlElement) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

/// Named fields of the contact form, in document order.
pub fn form_fields() -> Vec<(String, String)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    DomRenderer::new(document)
        .all(FORM_INPUT_SELECTOR)
        .iter()
        .filter_map(|element| {
            let name = element.get_attribute("name")?;
            Some((name, input_value(element)?))
        })
        .collect()
}

pub fn paint_theme(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let _ = body
            .class_list()
            .toggle_with_force(LIGHT_MODE_CLASS, theme.is_light());
    }
    if let Ok(Some(icon)) = document.query_selector("#darkModeToggle i") {
        icon.set_class_name(theme.icon_class());
    }
    if let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let _ = toggle.set_attribute("aria-label", &theme.toggle_label());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if prefers_reduced_motion() {
        paint_theme(&document, theme);
        return;
    }

    let document_js: JsValue = document.clone().into();
    let start_view_transition = Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());

    let Some(start_view_transition) = start_view_transition else {
        paint_theme(&document, theme);
        return;
    };

    let callback = Closure::once_into_js(move || {
        if let Some(document) = window().and_then(|w| w.document()) {
            paint_theme(&document, theme);
        }
    });

    if start_view_transition.call1(&document_js, &callback).is_err() {
        paint_theme(&document, theme);
    }
}
