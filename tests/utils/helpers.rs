//! Service wiring over the in-memory fakes, mirroring `build_services`.

use std::sync::Arc;

use yum_lib::modules::account::application::service::AccountService;
use yum_lib::modules::catalog::application::service::CatalogService;
use yum_lib::modules::recipe::application::{
    coordinator::RecomputeCoordinator, service::RecipeService,
};
use yum_lib::modules::recipe::domain::services::nutrition_engine::NutritionEngine;
use yum_lib::modules::scoring::ScoringOracle;

use super::fakes::{
    FakeIngredientRepository, FakeIngredientTypeRepository, FakeInstructionRepository,
    FakeRecipeRepository, FakeReviewRepository, FakeUserRepository, InMemoryStore, ScriptedOracle,
};

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub oracle: Arc<ScriptedOracle>,
    pub accounts: AccountService,
    pub catalog: CatalogService,
    pub recipes: RecipeService,
    pub coordinator: Arc<RecomputeCoordinator>,
}

pub fn test_app(oracle: ScriptedOracle) -> TestApp {
    let store = Arc::new(InMemoryStore::default());
    let oracle = Arc::new(oracle);

    let recipe_repo = Arc::new(FakeRecipeRepository::new(Arc::clone(&store)));
    let ingredient_repo = Arc::new(FakeIngredientRepository::new(Arc::clone(&store)));
    let ingredient_type_repo = Arc::new(FakeIngredientTypeRepository::new(Arc::clone(&store)));
    let instruction_repo = Arc::new(FakeInstructionRepository::new(Arc::clone(&store)));
    let review_repo = Arc::new(FakeReviewRepository::new(Arc::clone(&store)));
    let user_repo = Arc::new(FakeUserRepository::new(Arc::clone(&store)));

    let engine = NutritionEngine::new(Arc::clone(&oracle) as Arc<dyn ScoringOracle>);
    let coordinator = Arc::new(RecomputeCoordinator::new(
        recipe_repo.clone(),
        ingredient_repo.clone(),
        ingredient_type_repo.clone(),
        review_repo.clone(),
        engine,
    ));

    let recipes = RecipeService::new(
        recipe_repo.clone(),
        ingredient_repo.clone(),
        instruction_repo.clone(),
        review_repo.clone(),
        Arc::clone(&coordinator),
    );

    let accounts = AccountService::new(user_repo.clone(), recipe_repo.clone());
    let catalog = CatalogService::new(ingredient_type_repo);

    TestApp {
        store,
        oracle,
        accounts,
        catalog,
        recipes,
        coordinator,
    }
}
