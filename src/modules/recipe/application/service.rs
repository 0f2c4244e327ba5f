use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::coordinator::RecomputeCoordinator;
use crate::modules::account::domain::entities::user::User;
use crate::modules::recipe::domain::{
    entities::{instruction::Instruction, recipe::Recipe},
    repositories::{
        ingredient_repository::{IngredientRepository, IngredientWithType},
        instruction_repository::InstructionRepository,
        recipe_repository::{RecipeFilter, RecipeRepository},
    },
};
use crate::modules::review::domain::{
    entities::review::Review, repositories::review_repository::ReviewRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Everything a recipe page shows: the aggregate plus its related rows.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub ingredients: Vec<IngredientWithType>,
    pub instructions: Vec<Instruction>,
    pub reviews: Vec<Review>,
}

/// Recipe CRUD and queries.
///
/// Creation routes through the coordinator so the first nutrition score is
/// persisted with the row itself. Updates accept only the user-editable
/// fields; the computed columns are never part of the input. Ingredient and
/// review mutations live on [`RecomputeCoordinator`] directly.
pub struct RecipeService {
    recipe_repo: Arc<dyn RecipeRepository>,
    ingredient_repo: Arc<dyn IngredientRepository>,
    instruction_repo: Arc<dyn InstructionRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    coordinator: Arc<RecomputeCoordinator>,
}

impl RecipeService {
    pub fn new(
        recipe_repo: Arc<dyn RecipeRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        instruction_repo: Arc<dyn InstructionRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        coordinator: Arc<RecomputeCoordinator>,
    ) -> Self {
        Self {
            recipe_repo,
            ingredient_repo,
            instruction_repo,
            review_repo,
            coordinator,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_recipe(
        &self,
        actor: &User,
        title: &str,
        description: &str,
        category: &str,
        preparation_time_minutes: i32,
        portions: i32,
    ) -> AppResult<Recipe> {
        Validator::validate_recipe_title(title)?;
        Validator::validate_portions(portions)?;
        if preparation_time_minutes < 0 {
            return Err(AppError::ValidationError(
                "Preparation time cannot be negative".to_string(),
            ));
        }

        let recipe = Recipe::new(
            actor.id,
            title.trim().to_string(),
            description.to_string(),
            category.to_string(),
            preparation_time_minutes,
            portions,
        );

        self.coordinator.recipe_created(recipe).await
    }

    pub async fn get_recipe(&self, id: &Uuid) -> AppResult<Option<Recipe>> {
        self.recipe_repo.find_by_id(id).await
    }

    pub async fn recipe_detail(&self, id: &Uuid) -> AppResult<RecipeDetail> {
        let recipe = self
            .recipe_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", id)))?;

        let ingredients = self.ingredient_repo.list_with_types(id).await?;
        let instructions = self.instruction_repo.list_for_recipe(id).await?;
        let reviews = self.review_repo.list_for_recipe(id).await?;

        Ok(RecipeDetail {
            recipe,
            ingredients,
            instructions,
            reviews,
        })
    }

    pub async fn list_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        self.recipe_repo.list(filter).await
    }

    pub async fn recipes_for_user(&self, user_id: &Uuid) -> AppResult<Vec<Recipe>> {
        self.recipe_repo.list_for_user(user_id).await
    }

    /// Update the user-editable fields. Nothing here touches the computed
    /// columns and no recompute is triggered.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_recipe(
        &self,
        actor: &User,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
        preparation_time_minutes: Option<i32>,
        portions: Option<i32>,
    ) -> AppResult<Recipe> {
        let mut recipe = self.owned_recipe(actor, id).await?;

        if let Some(title) = title {
            Validator::validate_recipe_title(title)?;
            recipe.title = title.trim().to_string();
        }
        if let Some(description) = description {
            recipe.description = description.to_string();
        }
        if let Some(category) = category {
            recipe.category = category.to_string();
        }
        if let Some(minutes) = preparation_time_minutes {
            if minutes < 0 {
                return Err(AppError::ValidationError(
                    "Preparation time cannot be negative".to_string(),
                ));
            }
            recipe.preparation_time_minutes = minutes;
        }
        if let Some(portions) = portions {
            Validator::validate_portions(portions)?;
            recipe.portions = portions;
        }

        self.recipe_repo.update_details(&recipe).await
    }

    /// Delete the recipe and its dependent rows. No recompute is needed:
    /// the computed fields disappear with the row.
    pub async fn delete_recipe(&self, actor: &User, id: &Uuid) -> AppResult<()> {
        self.owned_recipe(actor, id).await?;
        self.recipe_repo.delete(id).await
    }

    pub async fn add_instruction(
        &self,
        actor: &User,
        recipe_id: &Uuid,
        title: &str,
        details: &str,
        complexity: i32,
        step_number: i32,
    ) -> AppResult<Instruction> {
        Validator::validate_instruction_complexity(complexity)?;
        self.owned_recipe(actor, recipe_id).await?;

        let instruction = Instruction::new(
            *recipe_id,
            title.to_string(),
            details.to_string(),
            complexity,
            step_number,
        );
        self.instruction_repo.insert(&instruction).await
    }

    pub async fn update_instruction(
        &self,
        actor: &User,
        instruction_id: &Uuid,
        title: Option<&str>,
        details: Option<&str>,
        complexity: Option<i32>,
        step_number: Option<i32>,
    ) -> AppResult<Instruction> {
        let mut instruction = self.find_instruction(instruction_id).await?;
        self.owned_recipe(actor, &instruction.recipe_id).await?;

        if let Some(title) = title {
            instruction.title = title.to_string();
        }
        if let Some(details) = details {
            instruction.details = details.to_string();
        }
        if let Some(complexity) = complexity {
            Validator::validate_instruction_complexity(complexity)?;
            instruction.complexity = complexity;
        }
        if let Some(step_number) = step_number {
            instruction.step_number = step_number;
        }

        self.instruction_repo.update(&instruction).await
    }

    pub async fn delete_instruction(&self, actor: &User, instruction_id: &Uuid) -> AppResult<()> {
        let instruction = self.find_instruction(instruction_id).await?;
        self.owned_recipe(actor, &instruction.recipe_id).await?;
        self.instruction_repo.delete(instruction_id).await
    }

    pub async fn reviews_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<Review>> {
        self.review_repo.list_for_recipe(recipe_id).await
    }

    async fn owned_recipe(&self, actor: &User, recipe_id: &Uuid) -> AppResult<Recipe> {
        let recipe = self
            .recipe_repo
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", recipe_id)))?;

        if actor.is_admin() || recipe.is_owned_by(&actor.id) {
            Ok(recipe)
        } else {
            Err(AppError::Unauthorized(
                "Only the recipe owner can modify it".to_string(),
            ))
        }
    }

    async fn find_instruction(&self, instruction_id: &Uuid) -> AppResult<Instruction> {
        self.instruction_repo
            .find_by_id(instruction_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Instruction {} not found", instruction_id))
            })
    }
}
