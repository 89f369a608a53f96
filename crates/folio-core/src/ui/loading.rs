//! Intro loading screen phases.

/// `Intro -> Content -> Exiting -> Done`; never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadingPhase {
    /// Panels shown, text hidden.
    #[default]
    Intro,
    /// Name and tagline visible.
    Content,
    /// Panels sliding away.
    Exiting,
    /// Screen removed, page content fades in.
    Done,
}

impl LoadingPhase {
    pub fn next(self) -> Self {
        match self {
            LoadingPhase::Intro => LoadingPhase::Content,
            LoadingPhase::Content => LoadingPhase::Exiting,
            LoadingPhase::Exiting | LoadingPhase::Done => LoadingPhase::Done,
        }
    }

    /// Move forward to `phase`; earlier phases are ignored.
    pub fn advance_to(&mut self, phase: LoadingPhase) {
        if phase > *self {
            *self = phase;
        }
    }

    pub fn shows_content(self) -> bool {
        self >= LoadingPhase::Content
    }

    pub fn is_exiting(self) -> bool {
        self >= LoadingPhase::Exiting
    }

    pub fn is_done(self) -> bool {
        self == LoadingPhase::Done
    }
}
