//! Server-state refetching by query key.
//!
//! Every remote read is a [`Resource`] keyed by a [`QueryKey`]. The
//! [`QueryCache`] signal keeps one generation counter per key; mutations
//! bump the keys they affect and only resources watching those keys rerun.

use std::collections::HashMap;
use std::future::Future;

use api::{ApiClient, ApiError};
use dioxus::prelude::*;

use crate::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Meals,
    TotalMeals,
    MealsWithinDiet,
    MealsOutsideDiet,
    BestOnDietSequence,
    GamificationStatus,
    Profile,
}

/// Keys a meal create or update makes stale.
pub const MEAL_UPSERT: &[QueryKey] = &[
    QueryKey::Meals,
    QueryKey::TotalMeals,
    QueryKey::MealsWithinDiet,
    QueryKey::MealsOutsideDiet,
    QueryKey::BestOnDietSequence,
    QueryKey::GamificationStatus,
];

/// Keys a meal deletion makes stale.
pub const MEAL_DELETE: &[QueryKey] = &[
    QueryKey::Meals,
    QueryKey::TotalMeals,
    QueryKey::MealsWithinDiet,
    QueryKey::MealsOutsideDiet,
    QueryKey::BestOnDietSequence,
];

/// Generating a recipe spends a credit.
pub const RECIPE_GENERATION: &[QueryKey] = &[QueryKey::GamificationStatus];

/// Generation counter per query key. Missing keys are generation 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    generations: HashMap<QueryKey, u64>,
}

impl QueryCache {
    pub fn generation(&self, key: QueryKey) -> u64 {
        self.generations.get(&key).copied().unwrap_or(0)
    }

    pub fn invalidate(&mut self, keys: &[QueryKey]) {
        for key in keys {
            *self.generations.entry(*key).or_insert(0) += 1;
        }
    }
}

pub fn use_query_cache() -> Signal<QueryCache> {
    use_context::<Signal<QueryCache>>()
}

/// Mark `keys` stale; resources reading them refetch.
pub fn invalidate(cache: &mut Signal<QueryCache>, keys: &[QueryKey]) {
    tracing::debug!(?keys, "invalidating queries");
    cache.write().invalidate(keys);
}

/// Fetch through the session's client and refetch whenever `key` is
/// invalidated. Errors are reduced to their user-facing message.
pub fn use_api_query<T, F, Fut>(key: QueryKey, fetch: F) -> Resource<Result<T, String>>
where
    T: 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let session = use_session();
    let cache = use_query_cache();
    let generation = use_memo(move || cache.read().generation(key));

    use_resource(move || {
        // Subscribe to this key only
        let _ = generation();
        let request = fetch(session.client().clone());
        async move {
            request.await.map_err(|e| {
                tracing::warn!(?key, "query failed: {}", e);
                e.user_message()
            })
        }
    })
}
