use crate::game::GameMode;

/// A classified game action, from voice or pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SelectMode(GameMode),
    ReturnToDashboard,
    StartGame,
    NextQuestion,
    AnswerGiven(Answer),
}

/// An answer value as extracted from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Spoken count (quick-count)
    Number(u32),
    /// Index into the displayed options (memory)
    Option(usize),
}

/// UI pointer events. Most map onto the same intents as voice commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    SelectGame(GameMode),
    Start,
    Next,
    Back,
    /// Click on the displayed option at this index
    OptionClicked(usize),
    ToggleVoice,
    DismissNotice,
}

impl PointerEvent {
    /// The intent this click stands for, if any.
    ///
    /// `Next` is not gated here: the controller ignores it unless it is
    /// waiting for the next question.
    pub fn intent(&self) -> Option<Intent> {
        match self {
            PointerEvent::SelectGame(mode) => Some(Intent::SelectMode(*mode)),
            PointerEvent::Start => Some(Intent::StartGame),
            PointerEvent::Next => Some(Intent::NextQuestion),
            PointerEvent::Back => Some(Intent::ReturnToDashboard),
            PointerEvent::OptionClicked(index) => Some(Intent::AnswerGiven(Answer::Option(*index))),
            PointerEvent::ToggleVoice | PointerEvent::DismissNotice => None,
        }
    }
}
