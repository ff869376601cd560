#![allow(dead_code)]

use recipe_box_lib::{Category, KeyValueStore, MemoryStore, RecipeInput, StorageError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Wraps a `MemoryStore` and can be switched into a failing mode, the way a
/// full or disabled store behaves.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("read of '{}' refused", key)));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }
}

pub fn tea() -> RecipeInput {
    RecipeInput {
        name: "Tea".to_string(),
        category: Category::Breakfast,
        time: 5,
        servings: 1,
        ingredients: vec!["1 tea bag".to_string(), "1 cup water".to_string()],
        instructions: "Boil water\nSteep bag".to_string(),
        image_url: None,
    }
}

pub fn recipe_input(name: &str, category: Category, ingredients: &[&str]) -> RecipeInput {
    RecipeInput {
        name: name.to_string(),
        category,
        time: 20,
        servings: 2,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: "Cook it".to_string(),
        image_url: None,
    }
}
