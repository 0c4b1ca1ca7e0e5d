mod content;
mod dom;
mod email;
mod events;
mod storage;
mod timers;

use std::{cell::RefCell, rc::Rc};

use slide_portfolio::{
    contact::{filled_flag, EmailSender, SubmitState},
    input::NavInput,
    navigator::counter_label,
    renderer::ListKind,
    theme::{read_stored_theme, Theme},
    Site, SiteConfig,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, Event, HtmlInputElement, HtmlTextAreaElement, MouseEvent,
};
use yew::prelude::*;

use content::{JOURNEY, OWNER, PROJECTS, SECTIONS, SKILLS, TAGLINE};
use dom::DomRenderer;
use email::EmailJsClient;
use storage::LocalStore;
use timers::WebScheduler;

const CONFIG_ELEMENT_ID: &str = "site-config";

type WebSite = Site<DomRenderer, WebScheduler, LocalStore>;
type SiteCell = RefCell<Option<WebSite>>;

/// Shared handle on the page controller. Every access goes through
/// `try_borrow_mut`, so an event that arrives while the site is busy is
/// dropped instead of panicking.
#[derive(Clone, Default)]
struct Controller {
    site: Rc<SiteCell>,
}

impl PartialEq for Controller {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.site, &other.site)
    }
}

impl Controller {
    fn with<T>(&self, f: impl FnOnce(&mut WebSite) -> T) -> Option<T> {
        let mut slot = self.site.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    }

    fn mount(&self) {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let site = Site::new(
            load_config(&document),
            DomRenderer::new(document),
            WebScheduler::new(Rc::downgrade(&self.site)),
            LocalStore::new(),
        );

        match self.site.try_borrow_mut() {
            Ok(mut slot) => *slot = Some(site),
            Err(_) => return,
        }
        self.with(|site| site.start());
        events::install(self);
        log::info!("portfolio controller mounted");
    }

    fn navigate(&self, input: NavInput) {
        let width = events::viewport_width();
        self.with(|site| site.handle(input, width));
    }

    fn jump(&self, section: usize) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            controller.navigate(NavInput::Jump(section));
        })
    }

    fn page_step(&self, list: ListKind, forward: bool) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |_| {
            controller.with(|site| {
                if forward {
                    site.next_page(list)
                } else {
                    site.prev_page(list)
                }
            });
        })
    }

    fn page_dot(&self, list: ListKind) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |event: MouseEvent| {
            let page = event
                .target_dyn_into::<Element>()
                .and_then(|dot| dot.get_attribute("data-page"))
                .and_then(|value| value.parse::<usize>().ok());
            if let Some(page) = page {
                controller.with(|site| site.show_page(list, page));
            }
        })
    }

    fn submit_contact(&self) {
        let fields = dom::form_fields();
        let Some((request, endpoint)) = self
            .with(|site| {
                site.begin_submit(fields)
                    .map(|request| (request, site.config().email.endpoint.clone()))
            })
            .flatten()
        else {
            return;
        };

        let controller = self.clone();
        spawn_local(async move {
            let outcome = EmailJsClient::new(endpoint).send(&request).await;
            controller.with(|site| site.finish_submit(outcome));
        });
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&raw).unwrap_or_else(|error| {
        log::warn!("{error}; using defaults");
        SiteConfig::default()
    })
}

fn mark_filled(event: &Event) {
    let Some(target) = event.target() else {
        return;
    };
    let (element, value): (Element, String) =
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            (input.clone().into(), input.value())
        } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
            (area.clone().into(), area.value())
        } else {
            return;
        };
    let _ = element.set_attribute("data-filled", filled_flag(&value));
}

fn nav_dots(controller: &Controller) -> Html {
    SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            html! {
                <button
                    type="button"
                    class={classes!("nav-dot", (index == 0).then_some("active"))}
                    data-section={index.to_string()}
                    aria-label={section.label}
                    onclick={controller.jump(index)}
                />
            }
        })
        .collect()
}

fn skills_section() -> Html {
    html! {
        <div class="skills-matrix">
            { for SKILLS.iter().map(|skill| html! {
                <div class="skill-row">
                    <span class="skill-name">{skill.name}</span>
                    <div class="skill-track">
                        <div class="level-bar" style={format!("--width: {}%;", skill.level)} />
                    </div>
                    <span class="skill-level">{format!("{}%", skill.level)}</span>
                </div>
            }) }
        </div>
    }
}

fn projects_section(controller: &Controller) -> Html {
    html! {
        <>
            <div id="projectsGrid" class="projects-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article class="project-card">
                        <h3>{project.title}</h3>
                        <p>{project.summary}</p>
                        <ul class="project-stack">
                            { for project.stack.iter().map(|tech| html! { <li>{*tech}</li> }) }
                        </ul>
                        <a class="project-link" href={project.link} target="_blank" rel="noopener noreferrer">
                            {"VIEW SOURCE"}
                        </a>
                    </article>
                }) }
            </div>
            <div class="pagination">
                <button type="button" class="page-btn prev-btn" onclick={controller.page_step(ListKind::Projects, false)}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <div class="page-indicators" onclick={controller.page_dot(ListKind::Projects)}></div>
                <button type="button" class="page-btn next-btn" onclick={controller.page_step(ListKind::Projects, true)}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <p class="project-count">
                <span id="currentRange">{"1-3"}</span>{" of "}<span id="totalProjects">{PROJECTS.len().to_string()}</span>
            </p>
        </>
    }
}

fn journey_section(controller: &Controller) -> Html {
    html! {
        <>
            <div class="journey-grid">
                { for JOURNEY.iter().map(|milestone| html! {
                    <article class="journey-card">
                        <span class="journey-period">{milestone.period}</span>
                        <div class="journey-body">
                            <h3>{milestone.title}</h3>
                            <p class="journey-place">{milestone.place}</p>
                            <p>{milestone.detail}</p>
                        </div>
                    </article>
                }) }
            </div>
            <div class="pagination">
                <button type="button" class="page-btn journey-prev" onclick={controller.page_step(ListKind::Journey, false)}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <div class="journey-indicators" onclick={controller.page_dot(ListKind::Journey)}></div>
                <button type="button" class="page-btn journey-next" onclick={controller.page_step(ListKind::Journey, true)}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </>
    }
}

fn contact_section(controller: &Controller) -> Html {
    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            controller.submit_contact();
        })
    };
    let oninput = Callback::from(|event: InputEvent| mark_filled(&event));
    let onblur = Callback::from(|event: FocusEvent| mark_filled(&event));
    let idle = SubmitState::Idle;

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
            <label class="form-field">
                <input class="form-input" type="text" name="from_name" required={true} data-filled="false"
                    oninput={oninput.clone()} onblur={onblur.clone()} />
                <span class="form-label">{"NAME"}</span>
            </label>
            <label class="form-field">
                <input class="form-input" type="email" name="reply_to" required={true} data-filled="false"
                    oninput={oninput.clone()} onblur={onblur.clone()} />
                <span class="form-label">{"EMAIL"}</span>
            </label>
            <label class="form-field">
                <textarea class="form-input" name="message" rows="4" required={true} data-filled="false"
                    oninput={oninput} onblur={onblur} />
                <span class="form-label">{"MESSAGE"}</span>
            </label>
            <button type="submit" class="submit-button">
                <span>{idle.label()}</span>{" "}<i class={idle.icon_class()}></i>
            </button>
        </form>
    }
}

#[function_component(App)]
fn app() -> Html {
    let controller = use_state(Controller::default);

    {
        let controller = (*controller).clone();
        use_effect_with((), move |_| {
            controller.mount();
            || ()
        });
    }

    let controller = &*controller;
    let theme = read_stored_theme(&LocalStore::new()).unwrap_or_default();
    let on_toggle = {
        let controller = controller.clone();
        Callback::from(move |_| {
            controller.with(|site| site.toggle_theme());
        })
    };

    html! {
        <>
            <div class="page-loader">
                <div class="loader-mark">{OWNER}</div>
            </div>

            <header class="site-header">
                <span class="brand">{OWNER}</span>
                <button id="darkModeToggle" class="theme-toggle" type="button" aria-label={theme.toggle_label()}
                    onclick={on_toggle}>
                    <i class={theme.icon_class()}></i>
                </button>
            </header>

            <nav class="section-nav" aria-label="Sections">
                { nav_dots(controller) }
                <p class="section-counter">
                    <span class="current-section">{counter_label(0)}</span>
                    {" / "}
                    <span class="total-sections">{counter_label(SECTIONS.len() - 1)}</span>
                </p>
            </nav>

            <main class="fullpage">
                <section id={SECTIONS[0].id} class="fullpage-section hero active">
                    <h1 class="hero-title">{OWNER}</h1>
                    <p class="hero-role"><span class="typing-text"></span><span class="cursor">{"_"}</span></p>
                    <p class="hero-tagline">{TAGLINE}</p>
                    <div class="hero-actions">
                        <a class="cta primary" href="#projects" data-scroll-to="3" onclick={controller.jump(3)}>
                            {"VIEW WORK"}
                        </a>
                        <a class="cta" href="#contact" data-scroll-to="5" onclick={controller.jump(5)}>
                            {"GET IN TOUCH"}
                        </a>
                    </div>
                </section>

                <section id={SECTIONS[1].id} class="fullpage-section about">
                    <h2>{"ABOUT"}</h2>
                    <p>
                        {"Engineer focused on systems that stay fast under load and interfaces that stay out of the way. "}
                        {"Most of my recent work is Rust: data pipelines, search, and WebAssembly front ends."}
                    </p>
                    <a class="cta" href="#skills" data-scroll-to="2" onclick={controller.jump(2)}>{"TECHNICAL MATRIX"}</a>
                </section>

                <section id={SECTIONS[2].id} class="fullpage-section skills">
                    <h2>{"TECHNICAL MATRIX"}</h2>
                    { skills_section() }
                </section>

                <section id={SECTIONS[3].id} class="fullpage-section projects">
                    <h2>{"PROJECTS"}</h2>
                    { projects_section(controller) }
                </section>

                <section id={SECTIONS[4].id} class="fullpage-section journey">
                    <h2>{"JOURNEY"}</h2>
                    { journey_section(controller) }
                </section>

                <section id={SECTIONS[5].id} class="fullpage-section contact">
                    <h2>{"CONTACT"}</h2>
                    { contact_section(controller) }
                </section>
            </main>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    if let Some(document) = window().and_then(|w| w.document()) {
        let theme: Theme = read_stored_theme(&LocalStore::new()).unwrap_or_default();
        dom::paint_theme(&document, theme);
    }

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
