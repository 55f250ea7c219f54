#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

use moodfood::kernel::error::LookupError;
use moodfood::model::{FoodRecommendation, Mood};
use moodfood::services::RecommendationLookup;
use moodfood::{Intensity, MoodStore};

pub fn mood(id: &str) -> Mood {
    Mood::new(id, id, "bg-accent", "*", "test mood")
}

pub fn item(id: &str, name: &str) -> FoodRecommendation {
    FoodRecommendation::simple(id, name)
}

/// Answers immediately with a fixed list and remembers what it was asked.
pub struct FixedLookup {
    items: Vec<FoodRecommendation>,
    pub seen: Mutex<Vec<(Vec<Mood>, Intensity)>>,
}

impl FixedLookup {
    pub fn new(items: Vec<FoodRecommendation>) -> Arc<Self> {
        Arc::new(Self { items, seen: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl RecommendationLookup for FixedLookup {
    async fn lookup(&self, moods: &[Mood], intensity: Intensity) -> Result<Vec<FoodRecommendation>, LookupError> {
        self.seen.lock().await.push((moods.to_vec(), intensity));
        Ok(self.items.clone())
    }
}

pub struct FailingLookup;

#[async_trait]
impl RecommendationLookup for FailingLookup {
    async fn lookup(&self, _moods: &[Mood], _intensity: Intensity) -> Result<Vec<FoodRecommendation>, LookupError> {
        Err(LookupError::Failed("backend unavailable".into()))
    }
}

pub type Reply = oneshot::Sender<Result<Vec<FoodRecommendation>, LookupError>>;

/// Each call waits on the next queued reply channel, so a test decides
/// when and how every in-flight lookup completes.
#[derive(Default)]
pub struct ScriptedLookup {
    pending: Mutex<VecDeque<oneshot::Receiver<Result<Vec<FoodRecommendation>, LookupError>>>>,
    calls: AtomicUsize,
}

impl ScriptedLookup {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn expect_call(&self) -> Reply {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendationLookup for ScriptedLookup {
    async fn lookup(&self, _moods: &[Mood], _intensity: Intensity) -> Result<Vec<FoodRecommendation>, LookupError> {
        let rx = self.pending.lock().await.pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(LookupError::Failed("reply dropped".into()))),
            None => Err(LookupError::Failed("unexpected call".into())),
        }
    }
}

/// Yields until `calls` lookups have been entered.
pub async fn wait_for_calls(lookup: &ScriptedLookup, calls: usize) {
    for _ in 0..1000 {
        if lookup.calls() >= calls {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("lookup was entered {} time(s), expected {}", lookup.calls(), calls);
}

pub async fn wait_until_loading(store: &MoodStore) {
    for _ in 0..1000 {
        if store.snapshot().await.is_loading() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("store never entered loading");
}

pub async fn wait_until_settled(store: &MoodStore) {
    for _ in 0..1000 {
        if !store.snapshot().await.is_loading() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("store never left loading");
}
