//! Scroll-driven section tracking and the click-through messages of the
//! floating guide widget.

use crate::constants::{CLICK_MESSAGE_SEC, SECTION_BREAKPOINTS, SECTION_MESSAGE_SEC};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Section for a scroll offset, both in pixels. The highest breakpoint
    /// reached (in viewport heights) wins.
    pub fn from_scroll(offset: f64, viewport_height: f64) -> Section {
        if !(viewport_height > 0.0) || !offset.is_finite() {
            return Section::Hero;
        }
        let screens = offset / viewport_height;
        let passed = SECTION_BREAKPOINTS
            .iter()
            .take_while(|b| screens >= f64::from(**b))
            .count();
        Section::ALL[passed]
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Welcome Aboard! 🚀",
            Section::About => "About Section 📚",
            Section::Skills => "Tech Arsenal 💪",
            Section::Projects => "Projects Showcase 🎯",
            Section::Contact => "Let's Connect! 🤝",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Section::Hero => {
                "I'm RoboGuide! Click me anytime for tips. Let's explore this amazing portfolio together!"
            }
            Section::About => {
                "Here you'll learn about Kareemulla's journey in Machine Learning and AI. Pretty impressive, right?"
            }
            Section::Skills => {
                "These are the technologies mastered! Hover over the skill bars to see them in action."
            }
            Section::Projects => {
                "Check out these amazing projects! Each one demonstrates real-world problem-solving."
            }
            Section::Contact => {
                "Ready to collaborate? These links will take you to GitHub, Kaggle, and email!"
            }
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Section::Hero => "Scroll down to discover more!",
            Section::About => "Click the robot avatar to see it spin!",
            Section::Skills => "Python and ML skills are top-tier!",
            Section::Projects => "Click the links to learn more!",
            Section::Contact => "Don't be shy, reach out!",
        }
    }
}

pub const CLICK_TITLE: &str = "RoboGuide Says:";

pub const CLICK_RESPONSES: [&str; 6] = [
    "Hey there! 👋 Keep exploring!",
    "You found me! 🎉 Click the sections above!",
    "Boop! 🤖 I'm here to help!",
    "Nice click! ⚡ Let's keep going!",
    "RoboGuide at your service! 🚀",
    "Beep boop! 💫 Loving the portfolio?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuideMessage {
    pub title: &'static str,
    pub body: &'static str,
    pub tip: &'static str,
}

/// Guide widget state. Times are in seconds on any monotonic clock.
#[derive(Clone, Debug, Default)]
pub struct GuideTracker {
    section: Section,
    clicks: u32,
    visible: bool,
    hide_at: Option<f64>,
}

impl GuideTracker {
    /// Fresh session: hero section, no clicks, greeting shown.
    pub fn new(now: f64) -> Self {
        let mut g = Self::default();
        g.show_for(now, SECTION_MESSAGE_SEC);
        g
    }

    #[inline]
    pub fn section(&self) -> Section {
        self.section
    }

    #[inline]
    pub fn click_count(&self) -> u32 {
        self.clicks
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the new section when the scroll crossed a breakpoint.
    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64, now: f64) -> Option<Section> {
        let next = Section::from_scroll(offset, viewport_height);
        if next == self.section {
            return None;
        }
        log::debug!("guide: {} -> {}", self.section.id(), next.id());
        self.section = next;
        self.show_for(now, SECTION_MESSAGE_SEC);
        Some(next)
    }

    pub fn on_click(&mut self, now: f64) {
        self.clicks = self.clicks.wrapping_add(1);
        self.show_for(now, CLICK_MESSAGE_SEC);
    }

    /// Close button.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.hide_at = None;
    }

    /// Apply the auto-hide deadline. Returns true when visibility changed.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.hide_at {
            Some(t) if now >= t => {
                self.hide_at = None;
                let changed = self.visible;
                self.visible = false;
                changed
            }
            _ => false,
        }
    }

    pub fn message(&self) -> GuideMessage {
        let tip = self.section.tip();
        if self.clicks > 0 {
            GuideMessage {
                title: CLICK_TITLE,
                body: click_response(self.clicks),
                tip,
            }
        } else {
            GuideMessage {
                title: self.section.title(),
                body: self.section.message(),
                tip,
            }
        }
    }

    fn show_for(&mut self, now: f64, secs: f64) {
        self.visible = true;
        self.hide_at = Some(now + secs);
    }
}

#[inline]
pub fn click_response(count: u32) -> &'static str {
    CLICK_RESPONSES[count as usize % CLICK_RESPONSES.len()]
}
