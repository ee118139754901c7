use crate::routes::Route;
use crate::types::Recipe;

/// Descriptions longer than this are cut on the card.
pub const SUMMARY_MAX_CHARS: usize = 120;

/// An action chosen on a card, carrying the recipe's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    View(String),
    Edit(String),
    Delete(String),
}

impl CardIntent {
    /// Where view and edit lead. Delete stays on the current page.
    pub fn route(&self) -> Option<Route> {
        match self {
            CardIntent::View(id) => Some(Route::Detail(id.clone())),
            CardIntent::Edit(id) => Some(Route::Edit(id.clone())),
            CardIntent::Delete(_) => None,
        }
    }
}

/// Summary of one recipe in the list. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    recipe: &'a Recipe,
}

impl<'a> Card<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self { recipe }
    }

    pub fn id(&self) -> &str {
        &self.recipe.id
    }

    pub fn title(&self) -> &str {
        &self.recipe.title
    }

    pub fn summary(&self) -> String {
        truncate(&self.recipe.description, SUMMARY_MAX_CHARS)
    }

    pub fn view(&self) -> CardIntent {
        CardIntent::View(self.recipe.id.clone())
    }

    pub fn edit(&self) -> CardIntent {
        CardIntent::Edit(self.recipe.id.clone())
    }

    pub fn delete(&self) -> CardIntent {
        CardIntent::Delete(self.recipe.id.clone())
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.recipe.title);
        let summary = self.summary();
        if !summary.is_empty() {
            out.push_str(&format!("  {}\n", summary));
        }
        out.push_str(&format!(
            "  {} min | {} servings\n",
            self.recipe.cooking_time, self.recipe.servings
        ));
        out.push_str(&format!("  [View] [Edit] [Delete]  id: {}\n", self.recipe.id));
        out
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
