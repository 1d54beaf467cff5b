//! Quiz session state machine
//!
//! This module owns the full lifecycle of a quiz attempt: settings and
//! player identity, the transition into active play, per-question answer
//! recording, the race between player input and the countdown expiry, and
//! the transition into the finished state from which a summary and a
//! leaderboard entry are derived.
//!
//! All mutating operations are guarded rather than fallible: an operation
//! invoked in the wrong phase, or a second selection for the same
//! question, is rejected and leaves the state untouched. Together with
//! the stale-alarm guard in [`Session::receive_alarm`] this guarantees
//! exactly one [`AnswerRecord`] per question index.

use garde::Validate;
use serde::{Deserialize, Serialize};
use web_time::SystemTime;

use crate::{
    AlarmMessage,
    leaderboard::LeaderboardEntry,
    question::{Difficulty, Question},
    score::Summary,
};

/// Quiz configuration chosen on the entry screen
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    /// Identifier of the chosen trivia category, `None` for any category
    #[garde(skip)]
    pub category_id: Option<u32>,
    /// Human-readable label of the chosen category
    #[garde(length(min = 1))]
    pub category_name: String,
    /// Chosen difficulty
    #[garde(skip)]
    pub difficulty: Difficulty,
    /// Number of questions to play
    #[garde(range(min = crate::constants::session::MIN_QUESTION_COUNT, max = crate::constants::session::MAX_QUESTION_COUNT))]
    pub question_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category_id: None,
            category_name: "Any Category".to_string(),
            difficulty: Difficulty::Easy,
            question_count: crate::constants::session::DEFAULT_QUESTION_COUNT,
        }
    }
}

/// Visual theme preference, preserved across quiz attempts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Dark theme
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl Theme {
    /// Returns the opposite theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// The phase of the quiz lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No quiz in progress; settings may be edited
    #[default]
    Idle,
    /// A quiz is underway
    Active,
    /// The quiz completed and a summary is available
    Finished,
}

/// The recorded outcome of a single question
///
/// Exactly one record is appended per question index: either when the
/// player selects an answer, or when the question is closed out by a
/// timeout with no selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The question text as presented
    pub question_text: String,
    /// The correct answer
    pub correct_answer: String,
    /// What the player selected, `None` if the timer expired first
    pub selected_answer: Option<String>,
    /// Whether the selection matched the correct answer
    pub is_correct: bool,
}

/// Commands accepted by the session state machine
///
/// The two event producers (player input and the countdown) both reduce
/// to these commands, processed serially by [`Session::apply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Command {
    /// Begin a quiz with normalized questions
    Start(Vec<Question>),
    /// Record the player's answer for the current question
    SelectAnswer(String),
    /// Close out the current question and move to the next
    Advance,
    /// Complete the quiz and freeze the elapsed time
    Finish,
    /// Return to idle, keeping only cross-session identity
    Reset,
}

/// A single quiz attempt from settings confirmation to the results screen
///
/// There is one session per process. Only the session mutates its own
/// state; consumers dispatch commands and read snapshots through the
/// accessor methods.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    /// Name entered by the player, kept across resets
    player_name: String,
    /// Theme preference, kept across resets
    theme: Theme,
    /// Settings chosen for the next (or current) quiz
    settings: Settings,

    /// Current lifecycle phase
    phase: Phase,
    /// The fixed question list, set once at start
    questions: Vec<Question>,
    /// Index of the question currently being played
    current_index: usize,
    /// The selection for the current question, if any
    selected_answer: Option<String>,
    /// Points scored so far, one per correct answer
    score: u32,
    /// Number of correctly answered questions
    correct_count: u32,
    /// Number of wrong or timed-out questions
    wrong_count: u32,
    /// One record per closed-out question
    answers: Vec<AnswerRecord>,
    /// When the quiz started
    started_at: Option<SystemTime>,
    /// Whole seconds from start to finish, fixed at completion
    elapsed_seconds: u64,

    /// Whether an external request is outstanding
    busy: bool,
    /// The single user-facing error slot, overwritten by the latest attempt
    error: Option<String>,

    /// Final summary, computed once after finishing
    #[serde(skip)]
    summary: once_cell_serde::sync::OnceCell<Summary>,
}

impl Session {
    /// Creates a session for the given player with default settings
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Applies a command, returning whether it was accepted
    ///
    /// Rejected commands are no-ops; the state is never partially
    /// mutated.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start(questions) => self.start(questions),
            Command::SelectAnswer(answer) => self.select_answer(&answer),
            Command::Advance => self.advance(),
            Command::Finish => self.finish(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Begins a quiz with the given normalized questions
    ///
    /// Valid from `Idle` or `Finished` with a non-empty question list.
    /// Resets all per-attempt counters, clears the error slot and the
    /// busy flag, and records the start time.
    ///
    /// # Returns
    ///
    /// `true` if the quiz started, `false` if the list was empty or a
    /// quiz is already active
    pub fn start(&mut self, questions: Vec<Question>) -> bool {
        if questions.is_empty() || self.phase == Phase::Active {
            return false;
        }

        self.phase = Phase::Active;
        self.questions = questions;
        self.current_index = 0;
        self.selected_answer = None;
        self.score = 0;
        self.correct_count = 0;
        self.wrong_count = 0;
        self.answers = Vec::new();
        self.started_at = Some(SystemTime::now());
        self.elapsed_seconds = 0;
        self.busy = false;
        self.error = None;
        self.summary = once_cell_serde::sync::OnceCell::new();
        true
    }

    /// Records the player's answer for the current question
    ///
    /// At most one selection is accepted per question; once set, further
    /// selections are rejected until [`Session::advance`] moves on. The
    /// record is appended immediately, so a subsequent timeout cannot
    /// double-count the question.
    ///
    /// # Returns
    ///
    /// `true` if the answer was recorded, `false` if the session is not
    /// active or an answer was already selected
    pub fn select_answer(&mut self, answer: &str) -> bool {
        if self.phase != Phase::Active || self.selected_answer.is_some() {
            return false;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };

        let is_correct = answer == question.correct_answer;
        self.answers.push(AnswerRecord {
            question_text: question.prompt.clone(),
            correct_answer: question.correct_answer.clone(),
            selected_answer: Some(answer.to_owned()),
            is_correct,
        });
        if is_correct {
            self.score += 1;
            self.correct_count += 1;
        } else {
            self.wrong_count += 1;
        }
        self.selected_answer = Some(answer.to_owned());
        true
    }

    /// Closes out the current question and moves the cursor forward
    ///
    /// If no answer was selected (the countdown expired), a wrong record
    /// with no selection is appended first, so every question ends up
    /// with exactly one record. Advancing past the last question does not
    /// finish the quiz; the caller checks [`Session::is_complete`] and
    /// invokes [`Session::finish`].
    ///
    /// # Returns
    ///
    /// `true` if the cursor advanced, `false` outside the active phase
    /// or once all questions are closed out
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Active || self.current_index >= self.questions.len() {
            return false;
        }

        if self.selected_answer.is_none() {
            let question = &self.questions[self.current_index];
            self.answers.push(AnswerRecord {
                question_text: question.prompt.clone(),
                correct_answer: question.correct_answer.clone(),
                selected_answer: None,
                is_correct: false,
            });
            self.wrong_count += 1;
        }

        self.current_index += 1;
        self.selected_answer = None;
        true
    }

    /// Completes the quiz and freezes the elapsed time
    ///
    /// Valid only while active. The elapsed time is the whole number of
    /// seconds since the quiz started, rounded down.
    ///
    /// # Returns
    ///
    /// `true` if the quiz transitioned to `Finished`
    pub fn finish(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }

        self.elapsed_seconds = self
            .started_at
            .and_then(|started| started.elapsed().ok())
            .map_or(0, |elapsed| elapsed.as_secs());
        self.phase = Phase::Finished;
        true
    }

    /// Returns to idle, clearing all per-attempt state
    ///
    /// The player name and theme preference survive; everything else is
    /// restored to its initial value.
    pub fn reset(&mut self) {
        *self = Self {
            player_name: std::mem::take(&mut self.player_name),
            theme: self.theme,
            ..Self::default()
        };
    }

    /// Handles a countdown expiry scheduled for a specific question
    ///
    /// The alarm is dropped unless the session is still active, the
    /// expiry belongs to the question currently on screen, and no answer
    /// was selected in the meantime. This guard is what resolves the race
    /// between player input and the timer: a late or superseded expiry
    /// can never close a question twice.
    ///
    /// # Returns
    ///
    /// `true` if the alarm closed out the current question
    pub fn receive_alarm(&mut self, message: &AlarmMessage) -> bool {
        let AlarmMessage::TimeUp { question_index } = message;

        if self.phase != Phase::Active
            || *question_index != self.current_index
            || self.selected_answer.is_some()
        {
            return false;
        }
        self.advance()
    }

    /// Schedules the countdown expiry for the current question
    ///
    /// Called by the event loop whenever a question is presented. The
    /// scheduled message carries the question index so that stale
    /// expiries are rejected at dispatch time by
    /// [`Session::receive_alarm`].
    pub fn begin_question<S: FnMut(AlarmMessage, web_time::Duration)>(
        &self,
        mut schedule_message: S,
    ) {
        if self.phase == Phase::Active && self.current_index < self.questions.len() {
            schedule_message(
                AlarmMessage::TimeUp {
                    question_index: self.current_index,
                },
                web_time::Duration::from_secs(crate::constants::session::QUESTION_TIME_LIMIT),
            );
        }
    }

    /// The question currently being played, if any
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == Phase::Active {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    /// Whether every question has been closed out
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.current_index >= self.questions.len()
    }

    /// Whether the cursor is on the final question
    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 >= self.questions.len()
    }

    /// The final summary, available once the quiz has finished
    ///
    /// Computed on first access and cached for the lifetime of the
    /// finished session.
    pub fn summary(&self) -> Option<&Summary> {
        if self.phase != Phase::Finished {
            return None;
        }
        Some(self.summary.get_or_init(|| {
            Summary::from_results(
                self.score,
                self.questions.len() as u32,
                self.correct_count,
                self.wrong_count,
                self.elapsed_seconds,
            )
        }))
    }

    /// Builds the leaderboard entry for this finished quiz
    ///
    /// # Returns
    ///
    /// The entry to persist, or `None` while the quiz has not finished
    pub fn leaderboard_entry(&self) -> Option<LeaderboardEntry> {
        if self.phase != Phase::Finished {
            return None;
        }
        Some(LeaderboardEntry {
            player_name: self.player_name.clone(),
            score: self.score,
            total: self.questions.len() as u32,
            category_name: self.settings.category_name.clone(),
            difficulty: self.settings.difficulty,
            time_taken: self.elapsed_seconds,
            date: chrono::Utc::now(),
        })
    }

    /// Marks the start of an external request, rejecting duplicates
    ///
    /// # Returns
    ///
    /// `false` if a request is already outstanding
    pub fn begin_loading(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Marks the end of an external request
    pub fn finish_loading(&mut self) {
        self.busy = false;
    }

    /// Records a user-facing failure, replacing any previous one
    ///
    /// Also clears the busy flag, since a failed request is no longer
    /// outstanding.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.busy = false;
    }

    /// The latest user-facing error, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an external request is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Updates the player name
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    /// The player's name
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Replaces the settings; rejected while a quiz is active
    pub fn set_settings(&mut self, settings: Settings) -> bool {
        if self.phase == Phase::Active {
            return false;
        }
        self.settings = settings;
        true
    }

    /// The current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Flips the theme preference
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// The current theme preference
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The fixed question list for this attempt
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Index of the question currently being played
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The selection for the current question, if any
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// Points scored so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of correct answers so far
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Number of wrong or timed-out answers so far
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Records for every closed-out question, in order
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Whole seconds the finished quiz took
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }
}
