//! In-memory fakes for the repository traits and the scoring oracle.
//!
//! The suites exercise the coordinator and services without Postgres; the
//! fakes honor the same contracts the diesel implementations do, including
//! single-field writes for the computed columns and cascade deletes.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use yum_lib::modules::account::domain::{entities::user::User, repositories::user_repository::UserRepository};
use yum_lib::modules::catalog::domain::{
    entities::ingredient_type::IngredientType,
    repositories::ingredient_type_repository::IngredientTypeRepository,
};
use yum_lib::modules::recipe::domain::{
    entities::{ingredient::Ingredient, instruction::Instruction, recipe::Recipe},
    repositories::{
        ingredient_repository::{IngredientRepository, IngredientWithType},
        instruction_repository::InstructionRepository,
        recipe_repository::{RecipeFilter, RecipeRepository},
    },
};
use yum_lib::modules::review::domain::{
    entities::review::Review, repositories::review_repository::ReviewRepository,
};
use yum_lib::modules::scoring::ScoringOracle;
use yum_lib::shared::errors::{AppError, AppResult};

/// Backing tables shared by every fake repository, so cross-table behavior
/// (joins, cascades, rescoring writes) works like the real schema.
#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<HashMap<Uuid, User>>,
    pub recipes: Mutex<HashMap<Uuid, Recipe>>,
    pub ingredients: Mutex<HashMap<Uuid, Ingredient>>,
    pub ingredient_types: Mutex<HashMap<Uuid, IngredientType>>,
    pub instructions: Mutex<HashMap<Uuid, Instruction>>,
    pub reviews: Mutex<Vec<Review>>,
    pub favorites: Mutex<HashSet<(Uuid, Uuid)>>,

    /// Makes the next review insert fail, simulating a rolled-back
    /// transaction.
    pub fail_next_review_insert: AtomicBool,
    /// Number of `apply_media_score` writes observed.
    pub media_score_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn recipe(&self, id: &Uuid) -> Recipe {
        self.recipes.lock().unwrap().get(id).cloned().expect("recipe in store")
    }
}

// ---------------------------------------------------------------------------
// Recipes

pub struct FakeRecipeRepository {
    store: Arc<InMemoryStore>,
}

impl FakeRecipeRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecipeRepository for FakeRecipeRepository {
    async fn insert(&self, recipe: &Recipe) -> AppResult<Recipe> {
        self.store
            .recipes
            .lock()
            .unwrap()
            .insert(recipe.id, recipe.clone());
        Ok(recipe.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Recipe>> {
        Ok(self.store.recipes.lock().unwrap().get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Recipe>> {
        let recipes = self.store.recipes.lock().unwrap();
        Ok(ids.iter().filter_map(|id| recipes.get(id).cloned()).collect())
    }

    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let recipes = self.store.recipes.lock().unwrap();
        let ingredients = self.store.ingredients.lock().unwrap();

        let mut found: Vec<Recipe> = recipes
            .values()
            .filter(|r| {
                if let Some(title) = &filter.title_contains {
                    if !r.title.to_lowercase().contains(&title.to_lowercase()) {
                        return false;
                    }
                }
                if let Some(type_id) = &filter.ingredient_type_id {
                    let uses_type = ingredients
                        .values()
                        .any(|i| i.recipe_id == r.id && i.ingredient_type_id == *type_id);
                    if !uses_type {
                        return false;
                    }
                }
                if let Some(min) = filter.min_nutritional_value {
                    if r.nutritional_value < min {
                        return false;
                    }
                }
                if let Some(max) = filter.max_nutritional_value {
                    if r.nutritional_value > max {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn list_for_user(&self, user_id: &Uuid) -> AppResult<Vec<Recipe>> {
        let mut found: Vec<Recipe> = self
            .store
            .recipes
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn update_details(&self, recipe: &Recipe) -> AppResult<Recipe> {
        let mut recipes = self.store.recipes.lock().unwrap();
        let stored = recipes
            .get_mut(&recipe.id)
            .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", recipe.id)))?;

        // Only the user-editable columns, like the changeset-based update
        stored.title = recipe.title.clone();
        stored.description = recipe.description.clone();
        stored.category = recipe.category.clone();
        stored.preparation_time_minutes = recipe.preparation_time_minutes;
        stored.portions = recipe.portions;

        Ok(stored.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.store.recipes.lock().unwrap().remove(id);
        self.store
            .ingredients
            .lock()
            .unwrap()
            .retain(|_, i| i.recipe_id != *id);
        self.store
            .instructions
            .lock()
            .unwrap()
            .retain(|_, i| i.recipe_id != *id);
        self.store.reviews.lock().unwrap().retain(|r| r.recipe_id != *id);
        self.store
            .favorites
            .lock()
            .unwrap()
            .retain(|(_, recipe_id)| recipe_id != id);
        Ok(())
    }

    async fn apply_nutrition(&self, recipe_id: &Uuid, score: i32) -> AppResult<()> {
        let mut recipes = self.store.recipes.lock().unwrap();
        if let Some(r) = recipes.get_mut(recipe_id) {
            r.nutritional_value = score;
        }
        Ok(())
    }

    async fn apply_media_score(&self, recipe_id: &Uuid, score: f64) -> AppResult<()> {
        let mut recipes = self.store.recipes.lock().unwrap();
        if let Some(r) = recipes.get_mut(recipe_id) {
            r.media_score = score;
        }
        self.store.media_score_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Ingredients

pub struct FakeIngredientRepository {
    store: Arc<InMemoryStore>,
}

impl FakeIngredientRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    fn joined(&self, ingredient: &Ingredient) -> Option<IngredientWithType> {
        let types = self.store.ingredient_types.lock().unwrap();
        let tipo = types.get(&ingredient.ingredient_type_id)?;
        Some(IngredientWithType {
            ingredient: ingredient.clone(),
            type_name: tipo.name.clone(),
            category: tipo.category,
            vitamins: tipo.vitamins.clone(),
            excesses: tipo.excesses.clone(),
        })
    }
}

#[async_trait]
impl IngredientRepository for FakeIngredientRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Ingredient>> {
        Ok(self.store.ingredients.lock().unwrap().get(id).cloned())
    }

    async fn list_with_types(&self, recipe_id: &Uuid) -> AppResult<Vec<IngredientWithType>> {
        let ingredients: Vec<Ingredient> = self
            .store
            .ingredients
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.recipe_id == *recipe_id)
            .cloned()
            .collect();

        Ok(ingredients.iter().filter_map(|i| self.joined(i)).collect())
    }

    async fn insert_rescoring(
        &self,
        ingredient: &Ingredient,
        nutritional_value: i32,
    ) -> AppResult<Ingredient> {
        self.store
            .ingredients
            .lock()
            .unwrap()
            .insert(ingredient.id, ingredient.clone());
        if let Some(r) = self.store.recipes.lock().unwrap().get_mut(&ingredient.recipe_id) {
            r.nutritional_value = nutritional_value;
        }
        Ok(ingredient.clone())
    }

    async fn update_rescoring(
        &self,
        ingredient: &Ingredient,
        nutritional_value: i32,
    ) -> AppResult<Ingredient> {
        self.store
            .ingredients
            .lock()
            .unwrap()
            .insert(ingredient.id, ingredient.clone());
        if let Some(r) = self.store.recipes.lock().unwrap().get_mut(&ingredient.recipe_id) {
            r.nutritional_value = nutritional_value;
        }
        Ok(ingredient.clone())
    }

    async fn delete_rescoring(
        &self,
        ingredient_id: &Uuid,
        recipe_id: &Uuid,
        nutritional_value: i32,
    ) -> AppResult<()> {
        self.store.ingredients.lock().unwrap().remove(ingredient_id);
        if let Some(r) = self.store.recipes.lock().unwrap().get_mut(recipe_id) {
            r.nutritional_value = nutritional_value;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Instructions

pub struct FakeInstructionRepository {
    store: Arc<InMemoryStore>,
}

impl FakeInstructionRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InstructionRepository for FakeInstructionRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Instruction>> {
        Ok(self.store.instructions.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, instruction: &Instruction) -> AppResult<Instruction> {
        self.store
            .instructions
            .lock()
            .unwrap()
            .insert(instruction.id, instruction.clone());
        Ok(instruction.clone())
    }

    async fn update(&self, instruction: &Instruction) -> AppResult<Instruction> {
        self.store
            .instructions
            .lock()
            .unwrap()
            .insert(instruction.id, instruction.clone());
        Ok(instruction.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.store.instructions.lock().unwrap().remove(id);
        Ok(())
    }

    async fn list_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<Instruction>> {
        let mut found: Vec<Instruction> = self
            .store
            .instructions
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.recipe_id == *recipe_id)
            .cloned()
            .collect();
        found.sort_by_key(|i| i.step_number);
        Ok(found)
    }
}

// ---------------------------------------------------------------------------
// Reviews

pub struct FakeReviewRepository {
    store: Arc<InMemoryStore>,
}

impl FakeReviewRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewRepository for FakeReviewRepository {
    async fn insert(&self, review: &Review) -> AppResult<Review> {
        if self.store.fail_next_review_insert.swap(false, Ordering::SeqCst) {
            return Err(AppError::DatabaseError(
                "transaction rolled back".to_string(),
            ));
        }
        self.store.reviews.lock().unwrap().push(review.clone());
        Ok(review.clone())
    }

    async fn scores_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<i32>> {
        Ok(self
            .store
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.recipe_id == *recipe_id)
            .map(|r| r.score)
            .collect())
    }

    async fn list_for_recipe(&self, recipe_id: &Uuid) -> AppResult<Vec<Review>> {
        Ok(self
            .store
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.recipe_id == *recipe_id)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Users + favorites

pub struct FakeUserRepository {
    store: Arc<InMemoryStore>,
}

impl FakeUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        Ok(self.store.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn save(&self, user: &User) -> AppResult<User> {
        self.store.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn is_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<bool> {
        Ok(self
            .store
            .favorites
            .lock()
            .unwrap()
            .contains(&(*user_id, *recipe_id)))
    }

    async fn add_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<()> {
        self.store
            .favorites
            .lock()
            .unwrap()
            .insert((*user_id, *recipe_id));
        Ok(())
    }

    async fn remove_favorite(&self, user_id: &Uuid, recipe_id: &Uuid) -> AppResult<()> {
        self.store
            .favorites
            .lock()
            .unwrap()
            .remove(&(*user_id, *recipe_id));
        Ok(())
    }

    async fn favorite_recipe_ids(&self, user_id: &Uuid) -> AppResult<Vec<Uuid>> {
        Ok(self
            .store
            .favorites
            .lock()
            .unwrap()
            .iter()
            .filter(|(uid, _)| uid == user_id)
            .map(|(_, rid)| *rid)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Ingredient types

pub struct FakeIngredientTypeRepository {
    store: Arc<InMemoryStore>,
}

impl FakeIngredientTypeRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IngredientTypeRepository for FakeIngredientTypeRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<IngredientType>> {
        Ok(self.store.ingredient_types.lock().unwrap().get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<IngredientType>> {
        let lowered = IngredientType::normalize_name(name);
        Ok(self
            .store
            .ingredient_types
            .lock()
            .unwrap()
            .values()
            .find(|t| t.name == lowered)
            .cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<IngredientType>> {
        let mut all: Vec<IngredientType> = self
            .store
            .ingredient_types
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn save(&self, ingredient_type: &IngredientType) -> AppResult<IngredientType> {
        self.store
            .ingredient_types
            .lock()
            .unwrap()
            .insert(ingredient_type.id, ingredient_type.clone());
        Ok(ingredient_type.clone())
    }

    async fn update(&self, ingredient_type: &IngredientType) -> AppResult<IngredientType> {
        self.store
            .ingredient_types
            .lock()
            .unwrap()
            .insert(ingredient_type.id, ingredient_type.clone());
        Ok(ingredient_type.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.store.ingredient_types.lock().unwrap().remove(id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Scoring oracle

enum Script {
    /// Replies consumed in order; exhaustion is an oracle failure, so a test
    /// that under-provisions its script shows up as fallback scores.
    Sequence(VecDeque<String>),
    Always(String),
    Fail,
}

/// Deterministic [`ScoringOracle`] that records every prompt it is asked.
pub struct ScriptedOracle {
    script: Mutex<Script>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn with_replies(replies: &[&str]) -> Self {
        Self {
            script: Mutex::new(Script::Sequence(
                replies.iter().map(|r| r.to_string()).collect(),
            )),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: &str) -> Self {
        Self {
            script: Mutex::new(Script::Always(reply.to_string())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            script: Mutex::new(Script::Fail),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ScoringOracle for ScriptedOracle {
    async fn score(&self, prompt: &str) -> AppResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &mut *self.script.lock().unwrap() {
            Script::Sequence(queue) => queue.pop_front().ok_or_else(|| {
                AppError::ExternalServiceError("oracle script exhausted".to_string())
            }),
            Script::Always(reply) => Ok(reply.clone()),
            Script::Fail => Err(AppError::ExternalServiceError(
                "Request timeout".to_string(),
            )),
        }
    }
}
