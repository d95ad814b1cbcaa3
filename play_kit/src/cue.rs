/// Identifier of a tappable symbol (a colored button in the reference UI).
pub type SymbolId = u8;

/// Spoken prompts the games ask the host to voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    GetReady,
    Watch,
    YourTurn,
    Excellent,
    TryAgain,
}

impl Prompt {
    pub fn line(&self) -> &'static str {
        match self {
            Prompt::GetReady => "Get ready!",
            Prompt::Watch => "Watch the sequence closely",
            Prompt::YourTurn => "Now it's your turn!",
            Prompt::Excellent => "Excellent!",
            Prompt::TryAgain => "Oops! Try again",
        }
    }
}

/// A sound request emitted by a game core. The core never reads anything
/// back; playing (or dropping) the cue is entirely the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Per-symbol tone, played both during playback and on user taps.
    Symbol(SymbolId),
    Success,
    Failure,
    Prompt(Prompt),
}

/// Audio collaborator. Fire-and-forget.
pub trait AudioCue {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue. Default for tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCue;

impl AudioCue for NullCue {
    fn play(&mut self, _cue: Cue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_has_a_line() {
        let prompts = [
            Prompt::GetReady,
            Prompt::Watch,
            Prompt::YourTurn,
            Prompt::Excellent,
            Prompt::TryAgain,
        ];
        for prompt in prompts {
            assert!(!prompt.line().is_empty());
        }
    }

    #[test]
    fn null_cue_swallows_everything() {
        let mut sink = NullCue;
        sink.play(Cue::Symbol(3));
        sink.play(Cue::Prompt(Prompt::Excellent));
    }
}
