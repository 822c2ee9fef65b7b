//! Decision providers: who answers the engine's questions.
//!
//! The engine never reads input itself. When a choice is needed (take a
//! substitute? how many?) it asks a `DecisionProvider` and blocks until it
//! answers. Providers must answer within the bounds they are given; the
//! engine treats an out-of-range count as a contract violation.
//!
//! - `AlwaysDecline`: never substitutes
//! - `AlwaysAccept`: always substitutes, taking the maximum allowed
//! - `ScriptedDecisions`: replays queued answers, for tests and replays

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::Role;

/// Context for a question put to a decision provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Use one substitute before the defender reveals?
    UseSubstitute { role: Role, battle: usize },

    /// Final battle with several substitutes left: use any?
    FinalBattleSubstitutes { role: Role, max_allowed: usize },

    /// How many substitutes to use on the final battle.
    SubstituteCount { role: Role, min: usize, max: usize },
}

impl Prompt {
    /// The player being asked.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Prompt::UseSubstitute { role, .. }
            | Prompt::FinalBattleSubstitutes { role, .. }
            | Prompt::SubstituteCount { role, .. } => *role,
        }
    }
}

/// Answers yes/no and count questions for the engine.
pub trait DecisionProvider {
    fn ask_yes_no(&mut self, prompt: &Prompt) -> bool;

    /// Must return a value in `min..=max`.
    fn ask_count(&mut self, prompt: &Prompt, min: usize, max: usize) -> usize;
}

impl<D: DecisionProvider + ?Sized> DecisionProvider for &mut D {
    fn ask_yes_no(&mut self, prompt: &Prompt) -> bool {
        (**self).ask_yes_no(prompt)
    }

    fn ask_count(&mut self, prompt: &Prompt, min: usize, max: usize) -> usize {
        (**self).ask_count(prompt, min, max)
    }
}

/// Declines every substitution.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDecline;

impl DecisionProvider for AlwaysDecline {
    fn ask_yes_no(&mut self, _prompt: &Prompt) -> bool {
        false
    }

    fn ask_count(&mut self, _prompt: &Prompt, min: usize, _max: usize) -> usize {
        min
    }
}

/// Accepts every substitution and always asks for the most allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysAccept;

impl DecisionProvider for AlwaysAccept {
    fn ask_yes_no(&mut self, _prompt: &Prompt) -> bool {
        true
    }

    fn ask_count(&mut self, _prompt: &Prompt, _min: usize, max: usize) -> usize {
        max
    }
}

/// Replays scripted answers in order.
///
/// Once a queue runs dry, yes/no questions are declined and counts fall
/// back to the minimum. Every prompt is recorded so tests can check what
/// was asked.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    yes_no: VecDeque<bool>,
    counts: VecDeque<usize>,
    asked: Vec<Prompt>,
}

impl ScriptedDecisions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue yes/no answers.
    #[must_use]
    pub fn with_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.yes_no.extend(answers);
        self
    }

    /// Queue count answers. These are returned as given, unchecked.
    #[must_use]
    pub fn with_counts(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.counts.extend(counts);
        self
    }

    /// Prompts asked so far, in order.
    #[must_use]
    pub fn asked(&self) -> &[Prompt] {
        &self.asked
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn ask_yes_no(&mut self, prompt: &Prompt) -> bool {
        self.asked.push(prompt.clone());
        self.yes_no.pop_front().unwrap_or(false)
    }

    fn ask_count(&mut self, prompt: &Prompt, min: usize, _max: usize) -> usize {
        self.asked.push(prompt.clone());
        self.counts.pop_front().unwrap_or(min)
    }
}
