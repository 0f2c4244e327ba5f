//! Nutrition recompute pipeline: creation scoring, ingredient mutations,
//! fallback behavior, and the scoped-write guarantee.

mod utils;

use utils::factories::{admin_user, common_user, seed_ingredient_type};
use utils::fakes::ScriptedOracle;
use utils::helpers::test_app;

use yum_lib::modules::account::domain::entities::user::User;
use yum_lib::modules::catalog::domain::entities::ingredient_type::IngredientCategory;
use yum_lib::modules::recipe::domain::entities::recipe::Recipe;
use yum_lib::shared::errors::AppError;

async fn create_recipe(app: &utils::helpers::TestApp, owner: &User) -> Recipe {
    app.recipes
        .create_recipe(owner, "Arroz con pollo", "Plato tradicional", "almuerzo", 45, 4)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Creation

#[tokio::test]
async fn creation_scores_the_empty_ingredient_set_before_first_read() {
    let app = test_app(ScriptedOracle::with_replies(&["62"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;

    assert_eq!(recipe.nutritional_value, 62);
    assert_eq!(app.store.recipe(&recipe.id).nutritional_value, 62);
    assert!(app.oracle.last_prompt().unwrap().contains("Ingredientes: []"));
}

#[tokio::test]
async fn oracle_failure_at_creation_falls_back_to_fifty() {
    let app = test_app(ScriptedOracle::failing());
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;

    assert_eq!(recipe.nutritional_value, 50);
}

// ---------------------------------------------------------------------------
// Ingredient mutations

#[tokio::test]
async fn rice_recipe_is_scored_and_rescored_when_the_ingredient_goes_away() {
    let app = test_app(ScriptedOracle::with_replies(&[
        "70",
        "Score: 85 out of 100",
        "33",
    ]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);

    let ingredient = app
        .coordinator
        .add_ingredient(&owner, &recipe.id, &rice.id, 200.0, "g")
        .await
        .unwrap();

    assert_eq!(app.store.recipe(&recipe.id).nutritional_value, 85);
    let prompt = app.oracle.last_prompt().unwrap();
    assert!(prompt.contains("arroz"));
    assert!(prompt.contains("200 g"));

    app.coordinator
        .remove_ingredient(&owner, &ingredient.id)
        .await
        .unwrap();

    // Old score discarded, new one computed over the now-empty set
    assert_eq!(app.store.recipe(&recipe.id).nutritional_value, 33);
    assert!(app.oracle.last_prompt().unwrap().contains("Ingredientes: []"));
}

#[tokio::test]
async fn ingredient_update_changes_nutrition_and_nothing_else() {
    let app = test_app(ScriptedOracle::with_replies(&["70", "80", "91"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);
    let ingredient = app
        .coordinator
        .add_ingredient(&owner, &recipe.id, &rice.id, 200.0, "g")
        .await
        .unwrap();

    // Give media_score a value so "untouched" is observable
    let mut stored = app.store.recipe(&recipe.id);
    stored.media_score = 4.2;
    app.store.recipes.lock().unwrap().insert(recipe.id, stored);

    app.coordinator
        .update_ingredient(&owner, &ingredient.id, 350.0, "g")
        .await
        .unwrap();

    let after = app.store.recipe(&recipe.id);
    assert_eq!(after.nutritional_value, 91);
    assert_eq!(after.media_score, 4.2);
    assert_eq!(after.title, "Arroz con pollo");
    assert!(app.oracle.last_prompt().unwrap().contains("350 g"));
}

#[tokio::test]
async fn recipe_detail_update_never_touches_the_computed_fields() {
    let app = test_app(ScriptedOracle::with_replies(&["77"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;

    app.recipes
        .update_recipe(&owner, &recipe.id, Some("Arroz al horno"), None, None, None, Some(6))
        .await
        .unwrap();

    let after = app.store.recipe(&recipe.id);
    assert_eq!(after.title, "Arroz al horno");
    assert_eq!(after.portions, 6);
    assert_eq!(after.nutritional_value, 77);
    // Only the creation scoring ran
    assert_eq!(app.oracle.prompt_count(), 1);
}

#[tokio::test]
async fn rescoring_with_the_same_reply_is_idempotent() {
    let app = test_app(ScriptedOracle::always("68"));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);
    let ingredient = app
        .coordinator
        .add_ingredient(&owner, &recipe.id, &rice.id, 200.0, "g")
        .await
        .unwrap();

    app.coordinator
        .update_ingredient(&owner, &ingredient.id, 200.0, "g")
        .await
        .unwrap();
    let first = app.store.recipe(&recipe.id).nutritional_value;

    app.coordinator
        .update_ingredient(&owner, &ingredient.id, 200.0, "g")
        .await
        .unwrap();
    let second = app.store.recipe(&recipe.id).nutritional_value;

    assert_eq!(first, 68);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Races

#[tokio::test]
async fn later_edit_replaces_the_earlier_score() {
    let app = test_app(ScriptedOracle::with_replies(&["70", "80", "90"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);
    let ingredient = app
        .coordinator
        .add_ingredient(&owner, &recipe.id, &rice.id, 200.0, "g")
        .await
        .unwrap();
    assert_eq!(app.store.recipe(&recipe.id).nutritional_value, 80);

    app.coordinator
        .update_ingredient(&owner, &ingredient.id, 100.0, "g")
        .await
        .unwrap();
    assert_eq!(app.store.recipe(&recipe.id).nutritional_value, 90);
}

#[tokio::test]
async fn concurrent_edits_settle_on_one_of_the_computed_scores() {
    let app = test_app(ScriptedOracle::with_replies(&["70", "80", "55", "95"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);
    let ingredient = app
        .coordinator
        .add_ingredient(&owner, &recipe.id, &rice.id, 200.0, "g")
        .await
        .unwrap();

    // Each edit scores its own snapshot; whichever lands last wins
    let (a, b) = futures::join!(
        app.coordinator
            .update_ingredient(&owner, &ingredient.id, 100.0, "g"),
        app.coordinator
            .update_ingredient(&owner, &ingredient.id, 300.0, "g"),
    );
    a.unwrap();
    b.unwrap();

    let settled = app.store.recipe(&recipe.id).nutritional_value;
    assert!(settled == 55 || settled == 95, "got {}", settled);
}

// ---------------------------------------------------------------------------
// Triggers that must NOT recompute

#[tokio::test]
async fn instruction_changes_never_consult_the_oracle() {
    let app = test_app(ScriptedOracle::with_replies(&["70"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    app.recipes
        .add_instruction(&owner, &recipe.id, "Hervir", "Hervir el arroz", 1, 1)
        .await
        .unwrap();

    assert_eq!(app.oracle.prompt_count(), 1);
    assert_eq!(app.store.recipe(&recipe.id).nutritional_value, 70);
}

// ---------------------------------------------------------------------------
// Permissions

#[tokio::test]
async fn strangers_cannot_mutate_ingredients() {
    let app = test_app(ScriptedOracle::with_replies(&["70"]));
    let owner = common_user("ana");
    let stranger = common_user("eve");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);

    let result = app
        .coordinator
        .add_ingredient(&stranger, &recipe.id, &rice.id, 200.0, "g")
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    // The rejected mutation never reached the oracle
    assert_eq!(app.oracle.prompt_count(), 1);
}

#[tokio::test]
async fn admins_can_mutate_any_recipe() {
    let app = test_app(ScriptedOracle::with_replies(&["70", "88"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);

    app.coordinator
        .add_ingredient(&admin_user(), &recipe.id, &rice.id, 200.0, "g")
        .await
        .unwrap();

    assert_eq!(app.store.recipe(&recipe.id).nutritional_value, 88);
}

#[tokio::test]
async fn invalid_quantity_is_rejected_before_any_work() {
    let app = test_app(ScriptedOracle::with_replies(&["70"]));
    let owner = common_user("ana");

    let recipe = create_recipe(&app, &owner).await;
    let rice = seed_ingredient_type(&app.store, "arroz", IngredientCategory::Vegetal, None);

    let result = app
        .coordinator
        .add_ingredient(&owner, &recipe.id, &rice.id, -1.0, "g")
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert_eq!(app.oracle.prompt_count(), 1);
    assert!(app.store.ingredients.lock().unwrap().is_empty());
}
