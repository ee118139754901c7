use super::{DetailView, FormMode, FormView, ListView};
use crate::http::RecipeApi;
use crate::routes::Route;

pub const APP_NAME: &str = "Cookbook";

/// The view mounted for a route.
#[derive(Debug)]
pub enum Screen {
    List(ListView),
    Detail(DetailView),
    Form(FormView),
}

impl Screen {
    /// The route table: `/` → list, `/recipes/new` and `/recipes/:id/edit` →
    /// form, `/recipes/:id` → detail.
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::List => Screen::List(ListView::new()),
            Route::Detail(id) => Screen::Detail(DetailView::new(id.clone())),
            Route::New => Screen::Form(FormView::new(FormMode::Create)),
            Route::Edit(id) => Screen::Form(FormView::new(FormMode::Edit(id.clone()))),
        }
    }

    /// Run the view's initial fetch.
    pub async fn load(&mut self, api: &dyn RecipeApi) {
        match self {
            Screen::List(view) => view.load(api).await,
            Screen::Detail(view) => view.load(api).await,
            Screen::Form(view) => view.load(api).await,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Screen::List(view) => view.render(),
            Screen::Detail(view) => view.render(),
            Screen::Form(view) => view.render(),
        }
    }
}

/// Static chrome around every screen.
pub struct Shell;

impl Shell {
    /// Build and load the screen for `route`.
    pub async fn open(route: &Route, api: &dyn RecipeApi) -> Screen {
        tracing::debug!(route = %route, "opening route");
        let mut screen = Screen::for_route(route);
        screen.load(api).await;
        screen
    }

    /// Where the header's title link goes.
    pub fn home() -> Route {
        Route::List
    }

    /// Where the header's "Add Recipe" link goes.
    pub fn add_recipe() -> Route {
        Route::New
    }

    pub fn header() -> String {
        format!("== {} ==  [Add Recipe]\n", APP_NAME)
    }

    pub fn footer() -> String {
        format!("-- {} App. Recipes are stored on the configured backend. --\n", APP_NAME)
    }

    pub fn frame(body: &str) -> String {
        format!("{}\n{}\n{}", Self::header(), body.trim_end(), Self::footer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockRecipeApi;
    use crate::types::Recipe;
    use chrono::Utc;

    #[test]
    fn test_route_table() {
        assert!(matches!(Screen::for_route(&Route::List), Screen::List(_)));
        assert!(matches!(
            Screen::for_route(&Route::Detail("1".to_string())),
            Screen::Detail(_)
        ));
        match Screen::for_route(&Route::New) {
            Screen::Form(form) => assert_eq!(form.mode(), &FormMode::Create),
            other => panic!("unexpected screen {:?}", other),
        }
        match Screen::for_route(&Route::Edit("1".to_string())) {
            Screen::Form(form) => assert_eq!(form.mode(), &FormMode::Edit("1".to_string())),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_open_loads_and_frames() {
        let api = MockRecipeApi::new().with_recipes(vec![Recipe {
            id: "1".to_string(),
            title: "Pizza".to_string(),
            description: "Cheesy".to_string(),
            ingredients: vec!["dough".to_string()],
            instructions: "Bake".to_string(),
            cooking_time: 20,
            servings: 4,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }]);

        let screen = Shell::open(&Route::List, &api).await;
        let page = Shell::frame(&screen.render());

        assert!(page.starts_with(&Shell::header()));
        assert!(page.contains("Pizza"));
        assert!(page.ends_with(&Shell::footer()));
    }

    #[test]
    fn test_header_links() {
        assert_eq!(Shell::home().path(), "/");
        assert_eq!(Shell::add_recipe().path(), "/recipes/new");
    }
}
