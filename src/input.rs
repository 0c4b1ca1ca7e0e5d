#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavInput {
    Wheel { delta_y: f64 },
    TouchStart { y: f64 },
    TouchEnd { y: f64 },
    Key(NavKey),
    /// Nav dot or call-to-action button with a declared section.
    Jump(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    Jump(usize),
}

/// Turns raw device input into navigation intents. Scroll gestures are gated
/// on the viewport being wider than the mobile breakpoint, where the page
/// falls back to native scrolling.
#[derive(Debug)]
pub struct InputDispatcher {
    mobile_breakpoint: f64,
    swipe_threshold: f64,
    touch_start_y: f64,
}

impl InputDispatcher {
    pub fn new(mobile_breakpoint: f64, swipe_threshold: f64) -> Self {
        Self {
            mobile_breakpoint,
            swipe_threshold,
            touch_start_y: 0.0,
        }
    }

    pub fn interpret(&mut self, input: NavInput, viewport_width: f64, transitioning: bool) -> Option<Intent> {
        let gesture_blocked = transitioning || viewport_width <= self.mobile_breakpoint;

        match input {
            NavInput::Wheel { delta_y } => {
                if gesture_blocked {
                    return None;
                }
                Some(if delta_y > 0.0 {
                    Intent::Next
                } else {
                    Intent::Previous
                })
            }
            NavInput::TouchStart { y } => {
                self.touch_start_y = y;
                None
            }
            NavInput::TouchEnd { y } => {
                if gesture_blocked {
                    return None;
                }
                if self.touch_start_y - y > self.swipe_threshold {
                    Some(Intent::Next)
                } else if y - self.touch_start_y > self.swipe_threshold {
                    Some(Intent::Previous)
                } else {
                    None
                }
            }
            NavInput::Key(key) => {
                if transitioning {
                    return None;
                }
                Some(match key {
                    NavKey::Down => Intent::Next,
                    NavKey::Up => Intent::Previous,
                })
            }
            NavInput::Jump(index) => Some(Intent::Jump(index)),
        }
    }
}
