pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::account::{
    application::service::AccountService,
    domain::repositories::user_repository::UserRepository,
    infrastructure::UserRepositoryImpl,
};
use modules::catalog::{
    application::service::CatalogService,
    domain::repositories::ingredient_type_repository::IngredientTypeRepository,
    infrastructure::persistence::IngredientTypeRepositoryImpl,
};
use modules::feeds::{FoodRegistryClient, NewsClient};
use modules::recipe::{
    application::{coordinator::RecomputeCoordinator, service::RecipeService},
    domain::{
        repositories::{
            ingredient_repository::IngredientRepository,
            instruction_repository::InstructionRepository, recipe_repository::RecipeRepository,
        },
        services::nutrition_engine::NutritionEngine,
    },
    infrastructure::{IngredientRepositoryImpl, InstructionRepositoryImpl, RecipeRepositoryImpl},
};
use modules::review::{
    domain::repositories::review_repository::ReviewRepository,
    infrastructure::persistence::ReviewRepositoryImpl,
};
use modules::scoring::{GeminiClient, ScoringOracle};
use shared::errors::AppResult;
use shared::Database;

/// The wired application services. Constructed once at process start; every
/// caller that mutates ingredients or reviews goes through `coordinator`.
pub struct AppServices {
    pub accounts: Arc<AccountService>,
    pub catalog: Arc<CatalogService>,
    pub recipes: Arc<RecipeService>,
    pub coordinator: Arc<RecomputeCoordinator>,
    pub food_registry: Arc<FoodRegistryClient>,
    pub news: Arc<NewsClient>,
}

/// Wire repositories and services over the given database and scoring
/// oracle.
///
/// The oracle is injected rather than constructed here so tests can pass a
/// deterministic implementation; [`bootstrap`] supplies the real Gemini
/// client.
pub fn build_services(
    database: Arc<Database>,
    oracle: Arc<dyn ScoringOracle>,
    food_registry: Arc<FoodRegistryClient>,
    news: Arc<NewsClient>,
) -> AppServices {
    let user_repo: Arc<dyn UserRepository> =
        Arc::new(UserRepositoryImpl::new(Arc::clone(&database)));
    let ingredient_type_repo: Arc<dyn IngredientTypeRepository> =
        Arc::new(IngredientTypeRepositoryImpl::new(Arc::clone(&database)));
    let recipe_repo: Arc<dyn RecipeRepository> =
        Arc::new(RecipeRepositoryImpl::new(Arc::clone(&database)));
    let ingredient_repo: Arc<dyn IngredientRepository> =
        Arc::new(IngredientRepositoryImpl::new(Arc::clone(&database)));
    let instruction_repo: Arc<dyn InstructionRepository> =
        Arc::new(InstructionRepositoryImpl::new(Arc::clone(&database)));
    let review_repo: Arc<dyn ReviewRepository> =
        Arc::new(ReviewRepositoryImpl::new(Arc::clone(&database)));

    let engine = NutritionEngine::new(oracle);
    let coordinator = Arc::new(RecomputeCoordinator::new(
        Arc::clone(&recipe_repo),
        Arc::clone(&ingredient_repo),
        Arc::clone(&ingredient_type_repo),
        Arc::clone(&review_repo),
        engine,
    ));

    let recipes = Arc::new(RecipeService::new(
        Arc::clone(&recipe_repo),
        Arc::clone(&ingredient_repo),
        Arc::clone(&instruction_repo),
        Arc::clone(&review_repo),
        Arc::clone(&coordinator),
    ));

    let accounts = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&recipe_repo),
    ));

    let catalog = Arc::new(CatalogService::new(Arc::clone(&ingredient_type_repo)));

    AppServices {
        accounts,
        catalog,
        recipes,
        coordinator,
        food_registry,
        news,
    }
}

/// Process startup: env, logging, database with migrations, external
/// clients, then the service graph.
pub fn bootstrap() -> AppResult<AppServices> {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();

    let database = Arc::new(Database::new()?);
    database.run_migrations()?;

    let oracle: Arc<dyn ScoringOracle> = Arc::new(GeminiClient::from_env()?);
    let food_registry = Arc::new(FoodRegistryClient::new()?);
    let news = Arc::new(NewsClient::from_env()?);

    Ok(build_services(database, oracle, food_registry, news))
}
