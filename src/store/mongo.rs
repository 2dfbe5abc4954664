//! MongoDB quiz store
//!
//! Quizzes live in a single collection keyed by ObjectId. Every call is
//! bounded by the configured store deadline.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::StoreError;
use crate::models::{null_as_default, Question, Quiz, QuizId, QuizResult};
use crate::store::{with_deadline, QuizStore, StoreResult};

// == Stored Document ==
/// Quiz as persisted. New documents get an ObjectId `_id`; older ones may
/// carry any scalar there, so it is read as raw BSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Bson>,
    #[serde(default, deserialize_with = "null_as_default")]
    quiz_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    questions: Vec<Question>,
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<QuizResult>,
}

impl From<Quiz> for QuizDocument {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: None,
            quiz_title: quiz.quiz_title,
            questions: quiz.questions,
            results: quiz.results,
        }
    }
}

impl From<QuizDocument> for Quiz {
    fn from(document: QuizDocument) -> Self {
        Self {
            id: document.id.map(render_id),
            quiz_title: document.quiz_title,
            questions: document.questions,
            results: document.results,
        }
    }
}

fn render_id(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

// == Mongo Quiz Store ==
#[derive(Clone)]
pub struct MongoQuizStore {
    client: Client,
    collection: Collection<QuizDocument>,
    timeout: Duration,
}

impl MongoQuizStore {
    /// Connects using the Stable API v1 and the configured database and
    /// collection. Does not contact the server; call `ping` for that.
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        let client = Client::with_options(options)?;

        Ok(Self::from_client(
            client,
            &config.database,
            &config.collection,
            config.store_timeout(),
        ))
    }

    pub fn from_client(client: Client, database: &str, collection: &str, timeout: Duration) -> Self {
        let collection = client.database(database).collection::<QuizDocument>(collection);
        Self {
            client,
            collection,
            timeout,
        }
    }

    /// Closes pooled connections once every in-flight operation has finished.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl QuizStore for MongoQuizStore {
    async fn insert(&self, quiz: Quiz) -> StoreResult<QuizId> {
        with_deadline(self.timeout, async {
            let inserted = self.collection.insert_one(QuizDocument::from(quiz)).await?;
            inserted
                .inserted_id
                .as_object_id()
                .map(QuizId::from)
                .ok_or_else(|| {
                    StoreError::Backend(format!(
                        "store assigned a non-ObjectId identifier: {}",
                        inserted.inserted_id
                    ))
                })
        })
        .await
    }

    async fn find_all(&self) -> StoreResult<Vec<Quiz>> {
        with_deadline(self.timeout, async {
            let mut cursor = self.collection.find(doc! {}).await?;
            let mut quizzes = Vec::new();
            while cursor.advance().await? {
                match cursor.deserialize_current() {
                    Ok(document) => quizzes.push(Quiz::from(document)),
                    Err(err) => warn!("Skipping undecodable quiz document: {}", err),
                }
            }
            Ok::<_, StoreError>(quizzes)
        })
        .await
    }

    async fn find_by_id(&self, id: QuizId) -> StoreResult<Option<Quiz>> {
        with_deadline(self.timeout, async {
            let document = self
                .collection
                .find_one(doc! { "_id": id.object_id() })
                .await?;
            Ok::<_, StoreError>(document.map(Quiz::from))
        })
        .await
    }

    async fn update(&self, id: QuizId, quiz: Quiz) -> StoreResult<()> {
        with_deadline(self.timeout, async {
            let update = doc! {
                "$set": {
                    "quizTitle": quiz.quiz_title,
                    "questions": to_bson(&quiz.questions)?,
                    "results": to_bson(&quiz.results)?,
                }
            };
            let outcome = self
                .collection
                .update_one(doc! { "_id": id.object_id() }, update)
                .await?;
            debug!("Update of {} matched {} document(s)", id, outcome.matched_count);
            Ok::<_, StoreError>(())
        })
        .await
    }

    async fn delete(&self, id: QuizId) -> StoreResult<()> {
        with_deadline(self.timeout, async {
            let outcome = self
                .collection
                .delete_one(doc! { "_id": id.object_id() })
                .await?;
            debug!("Delete of {} removed {} document(s)", id, outcome.deleted_count);
            Ok::<_, StoreError>(())
        })
        .await
    }

    async fn push_result(
        &self,
        id: QuizId,
        result: QuizResult,
        question_count: usize,
    ) -> StoreResult<bool> {
        with_deadline(self.timeout, async {
            // Legacy documents may hold null instead of an empty array.
            let filter = doc! {
                "_id": id.object_id(),
                "$expr": {
                    "$eq": [
                        { "$size": { "$ifNull": ["$questions", []] } },
                        question_count as i64
                    ]
                },
            };
            let pipeline = vec![doc! {
                "$set": {
                    "results": {
                        "$concatArrays": [
                            { "$ifNull": ["$results", []] },
                            [ { "$literal": to_bson(&result)? } ]
                        ]
                    }
                }
            }];
            let outcome = self.collection.update_one(filter, pipeline).await?;
            Ok::<_, StoreError>(outcome.matched_count == 1)
        })
        .await
    }

    async fn ping(&self) -> StoreResult<()> {
        with_deadline(self.timeout, async {
            self.client
                .database("admin")
                .run_command(doc! { "ping": 1 })
                .await?;
            Ok::<_, StoreError>(())
        })
        .await
    }
}
