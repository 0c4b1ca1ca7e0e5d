use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TOTAL_SECTIONS: usize = 6;
pub const DEFAULT_TRANSITION_MS: u32 = 800;
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_SKILLS_SECTION: usize = 2;
pub const DEFAULT_PROJECTS_SECTION: usize = 3;
pub const DEFAULT_PROJECTS_PAGE_SIZE: usize = 3;
pub const DEFAULT_JOURNEY_PAGE_SIZE: usize = 4;
pub const DEFAULT_LOADER_DELAY_MS: u32 = 2_000;
pub const DEFAULT_SUBMIT_RESET_MS: u32 = 3_000;
pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_EMAIL_SERVICE_ID: &str = "service_fqjp7qz";
pub const DEFAULT_EMAIL_TEMPLATE_ID: &str = "template_n90bkjs";
pub const DEFAULT_PHRASES: [&str; 4] = [
    "FULL-STACK ARCHITECT",
    "INTERFACE DESIGNER",
    "PROBLEM SOLVER",
    "SYSTEM ENGINEER",
];

const TOTAL_SECTIONS_BOUNDS: (usize, usize) = (1, 32);
const TRANSITION_MS_BOUNDS: (u32, u32) = (0, 10_000);
const MOBILE_BREAKPOINT_BOUNDS: (f64, f64) = (0.0, 4_096.0);
const SWIPE_THRESHOLD_BOUNDS: (f64, f64) = (1.0, 1_000.0);
const PAGE_SIZE_BOUNDS: (usize, usize) = (1, 48);
const LOADER_DELAY_MS_BOUNDS: (u32, u32) = (0, 30_000);
const SUBMIT_RESET_MS_BOUNDS: (u32, u32) = (0, 60_000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAIL_ENDPOINT.to_string(),
            service_id: DEFAULT_EMAIL_SERVICE_ID.to_string(),
            template_id: DEFAULT_EMAIL_TEMPLATE_ID.to_string(),
            public_key: String::new(),
        }
    }
}

/// Design constants of the page. Timings must mirror the stylesheet's
/// transition lengths or transient classes will appear to stick.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub total_sections: usize,
    pub transition_ms: u32,
    pub mobile_breakpoint: f64,
    pub swipe_threshold: f64,
    pub skills_section: usize,
    pub projects_section: usize,
    pub projects_page_size: usize,
    pub journey_page_size: usize,
    pub loader_delay_ms: u32,
    pub submit_reset_ms: u32,
    pub phrases: Vec<String>,
    pub email: EmailConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            total_sections: DEFAULT_TOTAL_SECTIONS,
            transition_ms: DEFAULT_TRANSITION_MS,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            skills_section: DEFAULT_SKILLS_SECTION,
            projects_section: DEFAULT_PROJECTS_SECTION,
            projects_page_size: DEFAULT_PROJECTS_PAGE_SIZE,
            journey_page_size: DEFAULT_JOURNEY_PAGE_SIZE,
            loader_delay_ms: DEFAULT_LOADER_DELAY_MS,
            submit_reset_ms: DEFAULT_SUBMIT_RESET_MS,
            phrases: DEFAULT_PHRASES.iter().map(ToString::to_string).collect(),
            email: EmailConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parses overrides embedded in the page. Missing keys keep their
    /// defaults; out-of-bounds values are replaced by the default.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    pub fn sanitized(self) -> Self {
        let total_sections =
            within(self.total_sections, TOTAL_SECTIONS_BOUNDS, DEFAULT_TOTAL_SECTIONS);
        let phrases: Vec<String> = self
            .phrases
            .into_iter()
            .map(|phrase| phrase.trim().to_string())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        Self {
            total_sections,
            transition_ms: within(self.transition_ms, TRANSITION_MS_BOUNDS, DEFAULT_TRANSITION_MS),
            mobile_breakpoint: within(
                self.mobile_breakpoint,
                MOBILE_BREAKPOINT_BOUNDS,
                DEFAULT_MOBILE_BREAKPOINT,
            ),
            swipe_threshold: within(
                self.swipe_threshold,
                SWIPE_THRESHOLD_BOUNDS,
                DEFAULT_SWIPE_THRESHOLD,
            ),
            skills_section: within(
                self.skills_section,
                (0, total_sections - 1),
                DEFAULT_SKILLS_SECTION.min(total_sections - 1),
            ),
            projects_section: within(
                self.projects_section,
                (0, total_sections - 1),
                DEFAULT_PROJECTS_SECTION.min(total_sections - 1),
            ),
            projects_page_size: within(
                self.projects_page_size,
                PAGE_SIZE_BOUNDS,
                DEFAULT_PROJECTS_PAGE_SIZE,
            ),
            journey_page_size: within(
                self.journey_page_size,
                PAGE_SIZE_BOUNDS,
                DEFAULT_JOURNEY_PAGE_SIZE,
            ),
            loader_delay_ms: within(
                self.loader_delay_ms,
                LOADER_DELAY_MS_BOUNDS,
                DEFAULT_LOADER_DELAY_MS,
            ),
            submit_reset_ms: within(
                self.submit_reset_ms,
                SUBMIT_RESET_MS_BOUNDS,
                DEFAULT_SUBMIT_RESET_MS,
            ),
            phrases: if phrases.is_empty() {
                DEFAULT_PHRASES.iter().map(ToString::to_string).collect()
            } else {
                phrases
            },
            email: self.email,
        }
    }
}

fn within<T: PartialOrd>(value: T, bounds: (T, T), default: T) -> T {
    if (bounds.0..=bounds.1).contains(&value) {
        value
    } else {
        default
    }
}
