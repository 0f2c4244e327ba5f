use std::sync::Arc;

use uuid::Uuid;

use crate::modules::account::domain::entities::user::User;
use crate::modules::catalog::domain::repositories::ingredient_type_repository::IngredientTypeRepository;
use crate::modules::recipe::domain::{
    entities::{ingredient::Ingredient, recipe::Recipe},
    repositories::{
        ingredient_repository::IngredientRepository, recipe_repository::RecipeRepository,
    },
    services::{nutrition_engine::NutritionEngine, review_aggregator},
    value_objects::scoring_snapshot::{ScoringSnapshot, SnapshotIngredient},
};
use crate::modules::review::domain::{
    entities::review::Review, repositories::review_repository::ReviewRepository,
};
use crate::shared::application::PostCommitQueue;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;

/// Keeps the two computed recipe fields consistent with the rows they are
/// derived from.
///
/// Every mutation that can invalidate `nutritional_value` or `media_score`
/// enters through a method on this type; there is no other dispatch
/// mechanism, so each recompute trigger is visible at its call site.
///
/// Ingredient mutations are scored against this request's view of the
/// ingredient list and committed together with the new score in one
/// transaction. Two concurrent edits to the same recipe each score their
/// own snapshot and the last commit wins; no lock is taken.
///
/// The media-score update after a new review is deferred onto the caller's
/// [`PostCommitQueue`], so it reads the review table only after the insert
/// committed and never runs when the enclosing unit of work fails.
pub struct RecomputeCoordinator {
    recipe_repo: Arc<dyn RecipeRepository>,
    ingredient_repo: Arc<dyn IngredientRepository>,
    ingredient_type_repo: Arc<dyn IngredientTypeRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    engine: NutritionEngine,
}

impl RecomputeCoordinator {
    pub fn new(
        recipe_repo: Arc<dyn RecipeRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        ingredient_type_repo: Arc<dyn IngredientTypeRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        engine: NutritionEngine,
    ) -> Self {
        Self {
            recipe_repo,
            ingredient_repo,
            ingredient_type_repo,
            review_repo,
            engine,
        }
    }

    /// First scoring of a freshly created recipe.
    ///
    /// The (typically empty) ingredient set is scored before the row is
    /// inserted, so the persisted recipe already carries its nutritional
    /// value by the time any reader can find it.
    pub async fn recipe_created(&self, mut recipe: Recipe) -> AppResult<Recipe> {
        let snapshot = ScoringSnapshot::without_ingredients(&recipe);
        let score = self.engine.compute(&snapshot).await;
        recipe.apply_nutrition(score);

        let saved = self.recipe_repo.insert(&recipe).await?;
        LogContext::recompute("nutritional_value", &saved.id, &score.to_string());
        Ok(saved)
    }

    /// Add an ingredient and rescore the recipe in one transaction.
    pub async fn add_ingredient(
        &self,
        actor: &User,
        recipe_id: &Uuid,
        ingredient_type_id: &Uuid,
        quantity: f64,
        unit: &str,
    ) -> AppResult<Ingredient> {
        Validator::validate_quantity(quantity)?;
        Validator::validate_unit(unit)?;

        let recipe = self.mutable_recipe(actor, recipe_id).await?;
        let tipo = self
            .ingredient_type_repo
            .find_by_id(ingredient_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Ingredient type {} not found", ingredient_type_id))
            })?;

        let ingredient = Ingredient::new(*recipe_id, *ingredient_type_id, quantity, unit.to_string());

        // Post-mutation view: the current rows plus the one being added
        let rows = self.ingredient_repo.list_with_types(recipe_id).await?;
        let mut items: Vec<SnapshotIngredient> =
            rows.iter().map(SnapshotIngredient::from_row).collect();
        items.push(SnapshotIngredient {
            name: tipo.name.clone(),
            quantity,
            unit: unit.to_string(),
            category: tipo.category,
            vitamins: tipo.vitamins.clone(),
            excesses: tipo.excesses.clone(),
        });

        let score = self.engine.compute(&ScoringSnapshot::new(&recipe, items)).await;

        let saved = self.ingredient_repo.insert_rescoring(&ingredient, score).await?;
        LogContext::recompute("nutritional_value", recipe_id, &score.to_string());
        Ok(saved)
    }

    /// Change an ingredient's quantity or unit and rescore in one
    /// transaction.
    pub async fn update_ingredient(
        &self,
        actor: &User,
        ingredient_id: &Uuid,
        quantity: f64,
        unit: &str,
    ) -> AppResult<Ingredient> {
        Validator::validate_quantity(quantity)?;
        Validator::validate_unit(unit)?;

        let mut ingredient = self
            .ingredient_repo
            .find_by_id(ingredient_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ingredient {} not found", ingredient_id)))?;
        let recipe = self.mutable_recipe(actor, &ingredient.recipe_id).await?;

        ingredient.quantity = quantity;
        ingredient.unit = unit.to_string();

        // Post-mutation view: current rows with the edited one substituted
        let rows = self.ingredient_repo.list_with_types(&recipe.id).await?;
        let items = rows
            .iter()
            .map(|row| {
                if row.ingredient.id == ingredient.id {
                    SnapshotIngredient {
                        name: row.type_name.clone(),
                        quantity,
                        unit: unit.to_string(),
                        category: row.category,
                        vitamins: row.vitamins.clone(),
                        excesses: row.excesses.clone(),
                    }
                } else {
                    SnapshotIngredient::from_row(row)
                }
            })
            .collect();

        let score = self.engine.compute(&ScoringSnapshot::new(&recipe, items)).await;

        let saved = self.ingredient_repo.update_rescoring(&ingredient, score).await?;
        LogContext::recompute("nutritional_value", &recipe.id, &score.to_string());
        Ok(saved)
    }

    /// Remove an ingredient and rescore the remaining set in one
    /// transaction.
    pub async fn remove_ingredient(
        &self,
        actor: &User,
        ingredient_id: &Uuid,
    ) -> AppResult<()> {
        let ingredient = self
            .ingredient_repo
            .find_by_id(ingredient_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ingredient {} not found", ingredient_id)))?;
        let recipe = self.mutable_recipe(actor, &ingredient.recipe_id).await?;

        // Post-mutation view: current rows minus the one being removed
        let rows = self.ingredient_repo.list_with_types(&recipe.id).await?;
        let items = rows
            .iter()
            .filter(|row| row.ingredient.id != *ingredient_id)
            .map(SnapshotIngredient::from_row)
            .collect();

        let score = self.engine.compute(&ScoringSnapshot::new(&recipe, items)).await;

        self.ingredient_repo
            .delete_rescoring(ingredient_id, &recipe.id, score)
            .await?;
        LogContext::recompute("nutritional_value", &recipe.id, &score.to_string());
        Ok(())
    }

    /// Insert a review and defer the media-score update until the caller's
    /// unit of work commits.
    ///
    /// The deferred callback re-reads the committed review scores, so it
    /// always observes the row this call inserted. When the insert fails the
    /// callback is never registered, and when the caller drops the queue
    /// without running it nothing is recomputed.
    pub async fn add_review(
        &self,
        actor: &User,
        recipe_id: &Uuid,
        score: i32,
        comment: Option<String>,
        post_commit: &mut PostCommitQueue,
    ) -> AppResult<Review> {
        Validator::validate_review_score(score)?;

        if self.recipe_repo.find_by_id(recipe_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Recipe {} not found", recipe_id)));
        }

        let review = Review::new(*recipe_id, actor.id, score, comment);
        let saved = self.review_repo.insert(&review).await?;

        let recipe_repo = Arc::clone(&self.recipe_repo);
        let review_repo = Arc::clone(&self.review_repo);
        let recipe_id = *recipe_id;
        post_commit.defer(move || async move {
            let scores = review_repo.scores_for_recipe(&recipe_id).await?;
            let media = review_aggregator::media_score(&scores);
            recipe_repo.apply_media_score(&recipe_id, media).await?;
            LogContext::recompute("media_score", &recipe_id, &media.to_string());
            Ok(())
        });

        Ok(saved)
    }

    async fn mutable_recipe(&self, actor: &User, recipe_id: &Uuid) -> AppResult<Recipe> {
        let recipe = self
            .recipe_repo
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", recipe_id)))?;

        if actor.is_admin() || recipe.is_owned_by(&actor.id) {
            Ok(recipe)
        } else {
            Err(AppError::Unauthorized(
                "Only the recipe owner can modify its ingredients".to_string(),
            ))
        }
    }
}
