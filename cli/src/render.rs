use std::fmt;

use cinescramble_core::{SessionState, SessionView, ViewCell};

pub(crate) const HOW_TO_PLAY: &str = "\
How to Play
  1. The grid stands for a movie title, and its plot is shown below it.
  2. Guess the title from the plot and the visible letters.
  3. You have 3 hints. Each hint reveals a random letter in the grid.
  4. Type `guess <title>` (or just the title) to submit a guess.
  5. Scoring:
       correct without hints: 10 points
       correct with 1 hint:    8 points
       correct with 2 hints:   6 points
       correct with 3 hints:   4 points
       incorrect:              0 points
  6. Guess right and you can move on with `next`.
  7. Guess wrong and the game ends; `new` starts over.
  8. Try to get the highest score possible!
Commands: hint, guess <title>, next, new, help, quit";

const HIDDEN: char = '_';
const BLANK: char = '.';

fn cell_char(cell: ViewCell) -> char {
    match cell {
        ViewCell::Blank => BLANK,
        ViewCell::Hidden => HIDDEN,
        ViewCell::Revealed(letter) => letter,
    }
}

/// Plain text rendering of a session, one block per command.
struct TextView<'a>(&'a SessionView);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "Score: {}", view.score)?;
        writeln!(f)?;

        match &view.answer {
            Some(answer) => {
                let letters: Vec<String> = answer
                    .chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(String::from)
                    .collect();
                writeln!(f, "  {}", letters.join(" "))?;
            }
            None => {
                for row in &view.grid {
                    let cells: Vec<String> =
                        row.iter().map(|&cell| cell_char(cell).into()).collect();
                    writeln!(f, "  {}", cells.join(" "))?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Plot: {}", view.plot)?;

        match view.state {
            SessionState::Playing => writeln!(f, "Hints left: {}", view.hints_remaining),
            SessionState::AnswerShown => {
                if let Some(message) = &view.message {
                    writeln!(f, "Result: {message}")?;
                }
                writeln!(f, "Type `next` for the next movie.")
            }
            SessionState::GameOver => {
                if let Some(message) = &view.message {
                    writeln!(f, "Result: {message}")?;
                }
                writeln!(f, "Game over. Type `new` to play again.")
            }
        }
    }
}

pub(crate) fn render_text(view: &SessionView) -> String {
    TextView(view).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinescramble_core::{Catalog, Movie, Session, seeded_rng};

    fn session(title: &str) -> Session<impl cinescramble_core::RandomSource> {
        let catalog = Catalog::new(vec![Movie::new(title, "A plot.")]).unwrap();
        Session::new(catalog, seeded_rng(1))
    }

    #[test]
    fn renders_hidden_grid_while_playing() {
        let session = session("ALIEN");

        let text = render_text(&session.view());

        assert_eq!(
            text,
            "Score: 0\n\n  _ _ _\n  _ _ .\n  . . .\n\nPlot: A plot.\nHints left: 3\n"
        );
    }

    #[test]
    fn renders_revealed_hint() {
        let mut session = session("UP");
        session.reveal_hint();

        let text = render_text(&session.view());

        assert!(text.contains("Hints left: 2"));
        assert!(text.contains("  U _\n") || text.contains("  _ P\n"), "{text}");
    }

    #[test]
    fn renders_answer_after_win() {
        let mut session = session("STAR WARS");
        session.submit_guess("star wars");

        let text = render_text(&session.view());

        assert!(text.contains("  S T A R W A R S\n"));
        assert!(text.contains("Result: Correct! You earned 10 points. Your total score is 10."));
        assert!(text.contains("Type `next`"));
    }

    #[test]
    fn renders_game_over() {
        let mut session = session("JAWS");
        session.submit_guess("orca");

        let text = render_text(&session.view());

        assert!(text.contains("Incorrect. The correct title was \"JAWS\"."));
        assert!(text.contains("Type `new` to play again."));
    }
}
