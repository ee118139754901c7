use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cookbook_core::{
    DetailView, FormMode, FormStatus, FormView, RecipeClient, RecipeDraft, Route, Shell,
    DEFAULT_BASE_URL,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Cookbook CLI", long_about = None)]
struct Cli {
    /// API root of the recipe backend
    #[arg(long, global = true, env = "COOKBOOK_API_URL", default_value = DEFAULT_BASE_URL)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all recipes
    List,
    /// Show a single recipe
    Show { id: String },
    /// Delete a recipe
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Create a recipe
    Create(RecipeFields),
    /// Edit a recipe; only the given fields change
    Edit {
        id: String,
        #[command(flatten)]
        fields: RecipeFields,
    },
    /// Render any front-end path, e.g. `/recipes/42/edit`
    Open { path: String },
    /// Ping the backend health endpoint
    Health,
}

#[derive(Args, Debug, Default)]
struct RecipeFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Repeat for each ingredient; replaces the existing list
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    #[arg(long)]
    instructions: Option<String>,
    /// Minutes
    #[arg(long)]
    cooking_time: Option<String>,
    #[arg(long)]
    servings: Option<String>,
}

impl RecipeFields {
    /// Copy every provided field onto the draft.
    fn apply(&self, draft: &mut RecipeDraft) -> Result<()> {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(instructions) = &self.instructions {
            draft.instructions = instructions.clone();
        }
        if !self.ingredients.is_empty() {
            replace_ingredients(draft, &self.ingredients);
        }
        if let Some(raw) = &self.cooking_time {
            draft.set_cooking_time(raw)?;
        }
        if let Some(raw) = &self.servings {
            draft.set_servings(raw)?;
        }
        Ok(())
    }
}

fn replace_ingredients(draft: &mut RecipeDraft, ingredients: &[String]) {
    while draft.remove_ingredient(draft.ingredients().len() - 1) {}
    for (i, ingredient) in ingredients.iter().enumerate() {
        if i > 0 {
            draft.add_ingredient();
        }
        draft.set_ingredient(i, ingredient.as_str());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = RecipeClient::new(&cli.server)
        .with_context(|| format!("Invalid server URL {}", cli.server))?;

    match cli.command {
        Commands::List => open(&client, &Route::List).await,
        Commands::Show { id } => open(&client, &Route::Detail(id)).await,
        Commands::Open { path } => {
            let route = Route::parse(&path).with_context(|| format!("No page at {}", path))?;
            open(&client, &route).await
        }
        Commands::Delete { id, yes } => delete(&client, id, yes).await,
        Commands::Create(fields) => save(&client, FormMode::Create, &fields).await,
        Commands::Edit { id, fields } => save(&client, FormMode::Edit(id), &fields).await,
        Commands::Health => health(&client).await,
    }
}

/// Load the screen for `route` and print it inside the app chrome.
async fn open(client: &RecipeClient, route: &Route) -> Result<()> {
    let screen = Shell::open(route, client).await;
    println!("{}", Shell::frame(&screen.render()));
    Ok(())
}

async fn navigate(client: &RecipeClient, route: &Route) -> Result<()> {
    println!("-> {}", route);
    open(client, route).await
}

async fn delete(client: &RecipeClient, id: String, yes: bool) -> Result<()> {
    let mut view = DetailView::new(id);
    view.load(client).await;
    if view.recipe().is_none() {
        println!("{}", Shell::frame(&view.render()));
        bail!("Recipe {} could not be loaded", view.id());
    }

    let mut confirm = |prompt: &str| yes || ask(prompt);
    match view.delete(client, &mut confirm).await {
        Some(route) => navigate(client, &route).await,
        None => {
            println!("{}", Shell::frame(&view.render()));
            if let Some(notice) = view.notice() {
                bail!("{}", notice);
            }
            Ok(())
        }
    }
}

/// Yes/no question on stdin. Anything but `y`/`yes` declines.
fn ask(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

async fn save(client: &RecipeClient, mode: FormMode, fields: &RecipeFields) -> Result<()> {
    let mut form = FormView::new(mode);
    form.load(client).await;
    if form.status() == FormStatus::LoadFailed {
        println!("{}", Shell::frame(&form.render()));
        bail!("Recipe could not be loaded for editing");
    }

    fields.apply(form.draft_mut())?;

    match form.submit(client).await {
        Some(route) => navigate(client, &route).await,
        None => {
            println!("{}", Shell::frame(&form.render()));
            bail!("{}", form.error().unwrap_or("Recipe was not saved"));
        }
    }
}

async fn health(client: &RecipeClient) -> Result<()> {
    let status = client
        .health()
        .await
        .with_context(|| format!("Backend at {} is unreachable", client.base_url()))?;
    println!("{}", status);
    Ok(())
}
