use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Hints and guesses are accepted.
    Playing,
    /// The last guess was correct and the answer is on display, waiting for the next movie.
    AnswerShown,
    /// A guess was wrong. Only a restart leaves this state.
    GameOver,
}

impl SessionState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_answer_shown(self) -> bool {
        !self.is_playing()
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Everything a player can do to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    StartNewGame,
    NextMovie,
    RevealHint,
    SubmitGuess(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action is not accepted in the current state.
    Ignored,
    Started,
    Hint(HintOutcome),
    Guess(GuessOutcome),
}

impl ActionOutcome {
    pub const fn has_update(&self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Started => true,
            Self::Hint(outcome) => outcome.has_update(),
            Self::Guess(_) => true,
        }
    }
}

/// One player's run of rounds, from a fresh start until a wrong guess.
#[derive(Clone, Debug)]
pub struct Session<R> {
    catalog: Catalog,
    rng: R,
    movie: Movie,
    grid: TitleGrid,
    hints: HintCounter,
    score: u32,
    rounds_won: u32,
    state: SessionState,
    last_guess: Option<GuessOutcome>,
}

impl<R: RandomSource> Session<R> {
    /// Creates a session and starts its first game.
    pub fn new(catalog: Catalog, mut rng: R) -> Self {
        let movie = catalog.pick(&mut rng).clone();
        let grid = TitleGrid::from_title(&movie.title);
        log::debug!("new session, grid side {}", grid.side());
        Self {
            catalog,
            rng,
            movie,
            grid,
            hints: HintCounter::new(),
            score: 0,
            rounds_won: 0,
            state: SessionState::Playing,
            last_guess: None,
        }
    }

    /// Hard reset: new movie, score back to zero. Accepted in every state.
    pub fn start_new_game(&mut self) {
        self.load_round();
        self.score = 0;
        self.rounds_won = 0;
        log::debug!("new game started");
    }

    /// Moves on to another movie after a correct guess, keeping the score. Returns `false` from any other
    /// state.
    pub fn next_movie(&mut self) -> bool {
        if self.state != SessionState::AnswerShown {
            log::debug!("next movie ignored in state {:?}", self.state);
            return false;
        }

        self.load_round();
        log::debug!("next movie, score carried over: {}", self.score);
        true
    }

    pub fn reveal_hint(&mut self) -> HintOutcome {
        if !self.state.is_playing() {
            log::debug!("hint ignored in state {:?}", self.state);
            return HintOutcome::NoChange;
        }

        reveal_hint(&mut self.grid, &mut self.hints, &mut self.rng)
    }

    /// Evaluates a guess for the current movie. Returns `None` when no guess is accepted.
    pub fn submit_guess(&mut self, guess: &str) -> Option<GuessOutcome> {
        if !self.state.is_playing() {
            log::debug!("guess ignored in state {:?}", self.state);
            return None;
        }

        let outcome = evaluate_guess(guess, &self.movie.title, self.hints.used(), self.score);
        if outcome.is_correct() {
            self.score = outcome.score();
            self.rounds_won += 1;
            self.state = SessionState::AnswerShown;
        } else {
            self.state = SessionState::GameOver;
        }
        log::debug!(
            "guess {:?} -> {:?}, score {}",
            guess,
            self.state,
            self.score
        );

        self.last_guess = Some(outcome.clone());
        Some(outcome)
    }

    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::StartNewGame => {
                self.start_new_game();
                ActionOutcome::Started
            }
            Action::NextMovie => {
                if self.next_movie() {
                    ActionOutcome::Started
                } else {
                    ActionOutcome::Ignored
                }
            }
            Action::RevealHint => match self.reveal_hint() {
                HintOutcome::NoChange => ActionOutcome::Ignored,
                outcome => ActionOutcome::Hint(outcome),
            },
            Action::SubmitGuess(guess) => self
                .submit_guess(&guess)
                .map_or(ActionOutcome::Ignored, ActionOutcome::Guess),
        }
    }

    fn load_round(&mut self) {
        self.movie = self.catalog.pick(&mut self.rng).clone();
        self.grid = TitleGrid::from_title(&self.movie.title);
        self.hints = HintCounter::new();
        self.state = SessionState::Playing;
        self.last_guess = None;
    }
}

impl<R> Session<R> {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn is_answer_shown(&self) -> bool {
        self.state.is_answer_shown()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn plot(&self) -> &str {
        &self.movie.plot
    }

    pub fn grid(&self) -> &TitleGrid {
        &self.grid
    }

    pub fn hints_used(&self) -> u8 {
        self.hints.used()
    }

    pub fn hints_remaining(&self) -> u8 {
        self.hints.remaining()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// The full title, once a guess has revealed it.
    pub fn answer(&self) -> Option<&str> {
        self.state
            .is_answer_shown()
            .then_some(self.movie.title.as_str())
    }

    pub fn last_guess(&self) -> Option<&GuessOutcome> {
        self.last_guess.as_ref()
    }

    /// Result message for the last guess of this round.
    pub fn message(&self) -> Option<String> {
        self.last_guess.as_ref().map(ToString::to_string)
    }
}

/// Applies `action` to `session` and hands back the resulting session.
pub fn transition<R: RandomSource>(
    mut session: Session<R>,
    action: Action,
) -> (Session<R>, ActionOutcome) {
    let outcome = session.apply(action);
    (session, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;
    use crate::rng::testing::ScriptedSource;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Movie::new("JAWS", "A giant man-eating shark terrorizes a beach town."),
            Movie::new("STAR WARS", "A farm boy joins a rebellion in space."),
        ])
        .unwrap()
    }

    fn session(picks: &[usize]) -> Session<ScriptedSource> {
        Session::new(catalog(), ScriptedSource::new(picks))
    }

    #[test]
    fn starts_playing_with_fresh_round() {
        let session = session(&[0]);

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.movie().title, "JAWS");
        assert_eq!(session.grid().side(), 2);
        assert_eq!(session.grid().revealed_count(), 0);
        assert_eq!(session.hints_used(), 0);
        assert_eq!(session.hints_remaining(), MAX_HINTS);
        assert_eq!(session.score(), 0);
        assert_eq!(session.answer(), None);
        assert_eq!(session.message(), None);
    }

    #[test]
    fn correct_guess_after_two_hints_earns_six() {
        let mut session = session(&[1, 0, 0]);

        assert!(session.reveal_hint().has_update());
        assert!(session.reveal_hint().has_update());
        let outcome = session.submit_guess("star wars").unwrap();

        assert_eq!(outcome, GuessOutcome::Correct { points: 6, total: 6 });
        assert_eq!(session.state(), SessionState::AnswerShown);
        assert_eq!(session.score(), 6);
        assert_eq!(session.answer(), Some("STAR WARS"));
        assert_eq!(
            session.message().as_deref(),
            Some("Correct! You earned 6 points. Your total score is 6.")
        );
    }

    #[test]
    fn incorrect_guess_ends_game_and_keeps_score() {
        let mut session = session(&[0, 0]);
        session.submit_guess(" jaws ").unwrap();
        assert!(session.next_movie());
        assert_eq!(session.score(), 10);

        let outcome = session.submit_guess("titanic").unwrap();

        assert!(!outcome.is_correct());
        assert!(session.is_game_over());
        assert!(session.is_answer_shown());
        assert_eq!(session.score(), 10);
        assert_eq!(session.answer(), Some("JAWS"));
    }

    #[test]
    fn actions_outside_playing_are_ignored() {
        let mut session = session(&[0]);
        session.submit_guess("nope").unwrap();
        let grid = session.grid().clone();

        assert_eq!(session.reveal_hint(), HintOutcome::NoChange);
        assert_eq!(session.submit_guess("jaws"), None);
        assert!(!session.next_movie());
        assert_eq!(session.grid(), &grid);
        assert!(session.is_game_over());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn next_movie_only_from_answer_shown() {
        let mut session = session(&[0, 0, 1]);
        assert!(!session.next_movie());

        session.reveal_hint();
        session.submit_guess("JAWS").unwrap();
        assert_eq!(session.score(), 8);
        assert!(session.next_movie());

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.movie().title, "STAR WARS");
        assert_eq!(session.hints_used(), 0);
        assert_eq!(session.grid().revealed_count(), 0);
        assert_eq!(session.score(), 8);
        assert_eq!(session.last_guess(), None);
    }

    #[test]
    fn restart_resets_score_from_any_state() {
        let mut session = session(&[0, 0, 1]);
        session.submit_guess("jaws").unwrap();
        session.next_movie();
        session.submit_guess("alien").unwrap();
        assert!(session.is_game_over());

        session.start_new_game();

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_won(), 0);
        assert_eq!(session.movie().title, "STAR WARS");
    }

    #[test]
    fn hints_stop_at_cap_within_session() {
        let mut session = Session::new(Catalog::builtin(), seeded_rng(3));

        let reveals = (0..6).filter(|_| session.reveal_hint().has_update()).count();

        assert_eq!(reveals, MAX_HINTS as usize);
        assert_eq!(session.hints_remaining(), 0);
        assert_eq!(session.grid().revealed_count(), MAX_HINTS as usize);
    }

    #[test]
    fn scores_accumulate_over_rounds() {
        let mut session = session(&[0, 0, 0, 0]);
        let mut expected = 0;

        for hints in 0..MAX_HINTS {
            for _ in 0..hints {
                session.reveal_hint();
            }
            expected += points_for_hints(hints);
            session.submit_guess("Jaws").unwrap();
            assert_eq!(session.score(), expected);
            session.next_movie();
        }

        assert_eq!(session.score(), 24);
        assert_eq!(session.rounds_won(), 3);
    }

    #[test]
    fn transition_threads_session_through_actions() {
        let session = session(&[0]);

        let (session, outcome) = transition(session, Action::NextMovie);
        assert_eq!(outcome, ActionOutcome::Ignored);
        assert!(!outcome.has_update());

        let (session, outcome) = transition(session, Action::RevealHint);
        assert!(matches!(outcome, ActionOutcome::Hint(HintOutcome::Revealed(_))));

        let (session, outcome) = transition(session, Action::SubmitGuess("JAWS".into()));
        assert_eq!(
            outcome,
            ActionOutcome::Guess(GuessOutcome::Correct { points: 8, total: 8 })
        );

        let (session, outcome) = transition(session, Action::RevealHint);
        assert_eq!(outcome, ActionOutcome::Ignored);

        let (session, outcome) = transition(session, Action::NextMovie);
        assert_eq!(outcome, ActionOutcome::Started);
        assert_eq!(session.score(), 8);

        let (session, outcome) = transition(session, Action::StartNewGame);
        assert_eq!(outcome, ActionOutcome::Started);
        assert_eq!(session.score(), 0);
    }
}
