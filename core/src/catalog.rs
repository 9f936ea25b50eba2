use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub plot: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, plot: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            plot: plot.into(),
        }
    }
}

/// The list of movies a session draws from. Always non-empty, and every title has at least one letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    movies: Vec<Movie>,
}

/// On-disk shape of a catalog file, `{ "movies": [{ "title": ..., "plot": ... }] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogFile {
    pub movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        if movies.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        if let Some(index) = movies
            .iter()
            .position(|movie| strip_whitespace(&movie.title).next().is_none())
        {
            return Err(GameError::EmptyTitle { index });
        }
        Ok(Self { movies })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.movies)
    }

    /// The five movies the game ships with.
    pub fn builtin() -> Self {
        Self {
            movies: vec![
                Movie::new("JAWS", "A giant man-eating shark terrorizes a beach town."),
                Movie::new("ALIEN", "A deadly creature stalks the crew of a spaceship."),
                Movie::new(
                    "ROCKY",
                    "An underdog boxer gets a shot at the heavyweight title.",
                ),
                Movie::new("INCEPTION", "A thief enters people's dreams to plant ideas."),
                Movie::new(
                    "TITANIC",
                    "A love story unfolds during a doomed maiden voyage.",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Draws one movie uniformly at random.
    pub fn pick(&self, rng: &mut impl RandomSource) -> &Movie {
        let index = rng.pick_index(self.movies.len());
        log::debug!("picked movie #{} of {}", index, self.movies.len());
        &self.movies[index]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = GameError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Self::new(file.movies)
    }
}
