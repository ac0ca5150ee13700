#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which of the three panels is showing.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: Section,
}

impl UiState {
    /// Make `section` the only visible panel and active trigger.
    pub fn select(&mut self, section: Section) {
        self.active_section = section;
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}

/// The mutually exclusive panels of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Report,
    Recent,
    Predict,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Report, Self::Recent, Self::Predict];

    /// Value of the trigger button's `data-section` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Recent => "recent",
            Self::Predict => "predict",
        }
    }

    /// DOM id of the panel element.
    #[must_use]
    pub fn panel_id(self) -> &'static str {
        match self {
            Self::Report => "section-report",
            Self::Recent => "section-recent",
            Self::Predict => "section-predict",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Report => "Report a Hazard",
            Self::Recent => "Recent Hazards",
            Self::Predict => "Should I Avoid It?",
        }
    }
}
