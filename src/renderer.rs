//! The presentation surface the controller drives.
//!
//! Nodes that are absent from the page must be tolerated by implementations:
//! every mutation on a missing node is a silent no-op.

use crate::{contact::SubmitState, theme::Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Projects,
    Journey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Section(usize),
    NavDot(usize),
    SectionCounter,
    Item(ListKind, usize),
    PrevButton(ListKind),
    NextButton(ListKind),
    RangeLabel(ListKind),
    TotalLabel(ListKind),
    SkillBar(usize),
    ThemeIcon,
    TypingText,
    HeroTitle,
    Loader,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Sections,
    NavDots,
    Items(ListKind),
    SkillBars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }

    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "none" => Self::None,
            "flex" => Self::Flex,
            _ => Self::Block,
        }
    }
}

/// Inline opacity/offset pair an element is animated towards. `transition`
/// replaces the element's transition when set and leaves it untouched
/// otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_y_px: i32,
    pub transition: Option<&'static str>,
}

impl Pose {
    pub const fn hidden(offset_y_px: i32) -> Self {
        Self {
            opacity: 0.0,
            offset_y_px,
            transition: None,
        }
    }

    pub const fn settled(transition: &'static str) -> Self {
        Self {
            opacity: 1.0,
            offset_y_px: 0,
            transition: Some(transition),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset_y_px)
    }
}

pub trait Renderer {
    fn count(&self, group: Group) -> usize;
    fn has(&self, node: Node) -> bool;

    fn set_class(&mut self, node: Node, class: &str, on: bool);
    /// Forces a synchronous style recalculation so the next class change
    /// starts a new animation instead of being merged with the previous one.
    fn reflow(&mut self, node: Node);
    fn set_text(&mut self, node: Node, text: &str);

    fn display(&self, node: Node) -> Display;
    fn set_display(&mut self, node: Node, display: Display);
    fn set_pose(&mut self, node: Node, pose: Pose);
    fn set_disabled(&mut self, node: Node, disabled: bool);

    fn set_width(&mut self, node: Node, width: &str);
    /// Target width declared on the element through its `--width` property.
    fn target_width(&self, node: Node) -> Option<String>;

    /// Replaces the indicator dots of `list` with `pages` dots, `active` marked.
    fn render_page_dots(&mut self, list: ListKind, pages: usize, active: usize);

    fn apply_theme(&mut self, theme: Theme, animated: bool);
    fn set_submit_state(&mut self, state: SubmitState);
    fn reset_form(&mut self);
}
