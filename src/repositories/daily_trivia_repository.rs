use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_document},
    options::ReturnDocument,
    Collection,
};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::DailyTriviaSet};

/// At most one stored trivia set per calendar-date key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DailyTriviaRepository: Send + Sync {
    async fn find_by_date(&self, date: &str) -> AppResult<Option<DailyTriviaSet>>;

    /// Stores `set` unless its date already has one. Returns the set that was
    /// already there, or `None` when `set` was inserted.
    async fn insert_if_absent(&self, set: DailyTriviaSet) -> AppResult<Option<DailyTriviaSet>>;
}

pub struct MongoDailyTriviaRepository {
    collection: Collection<DailyTriviaSet>,
}

impl MongoDailyTriviaRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.daily_trivia_collection);
        Self { collection }
    }
}

#[async_trait]
impl DailyTriviaRepository for MongoDailyTriviaRepository {
    async fn find_by_date(&self, date: &str) -> AppResult<Option<DailyTriviaSet>> {
        let set = self.collection.find_one(doc! { "_id": date }).await?;
        Ok(set)
    }

    async fn insert_if_absent(&self, set: DailyTriviaSet) -> AppResult<Option<DailyTriviaSet>> {
        let mut fields = to_document(&set)?;
        fields.remove("_id");

        // Upsert is atomic per _id, so concurrent first-of-day writers converge.
        let existing = self
            .collection
            .find_one_and_update(doc! { "_id": &set.date }, doc! { "$setOnInsert": fields })
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .await?;

        match &existing {
            Some(_) => log::info!("Trivia for {} was already stored; keeping it", set.date),
            None => log::info!("Stored trivia for {}", set.date),
        }
        Ok(existing)
    }
}
