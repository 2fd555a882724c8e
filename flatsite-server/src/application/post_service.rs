use std::sync::Arc;

use tracing::instrument;

use crate::application::WriteLock;
use crate::data::store::DocumentStore;
use crate::domain::{error::DomainError, post::Post};

#[derive(Clone)]
pub struct PostService<S: DocumentStore + 'static> {
    store: Arc<S>,
    write_lock: WriteLock,
}

impl<S> PostService<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>, write_lock: WriteLock) -> Self {
        Self { store, write_lock }
    }

    /// First post whose id matches, by linear scan.
    pub async fn get_post(&self, id: u64) -> Result<Post, DomainError> {
        let document = self.store.load().await?;
        document
            .posts
            .into_iter()
            .find(|post| post.id == id)
            .ok_or(DomainError::PostNotFound(id))
    }

    /// All posts in storage order, or the trailing `limit` entries when a
    /// limit is given. Recency means append order, not timestamp order.
    pub async fn list_posts(&self, limit: Option<usize>) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.store.load().await?.posts;
        if let Some(limit) = limit {
            if limit < posts.len() {
                posts.drain(..posts.len() - limit);
            }
        }
        Ok(posts)
    }

    #[instrument(skip(self))]
    pub async fn create_post(
        &self,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.store.load().await?;
        let post = Post::new(
            document.posts.len() as u64 + 1,
            title,
            content,
            author,
        );
        document.posts.push(post.clone());
        self.store.save(&document).await?;

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::store::MemoryStore;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn service() -> (Arc<MemoryStore>, PostService<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let lock = Arc::new(Mutex::new(()));
        (Arc::clone(&store), PostService::new(store, lock))
    }

    async fn fill(service: &PostService<MemoryStore>, count: u64) {
        for n in 1..=count {
            service
                .create_post(format!("post {n}"), "body".into(), "ann".into())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids_from_one() {
        let (_, service) = service();
        for expected in 1..=4u64 {
            let post = service
                .create_post(format!("post {expected}"), "body".into(), "ann".into())
                .await
                .unwrap();
            assert_eq!(post.id, expected);
        }
    }

    #[tokio::test]
    async fn created_post_is_persisted() {
        let (store, service) = service();
        let post = service
            .create_post("Hello".into(), "First entry".into(), "Ann".into())
            .await
            .unwrap();

        let document = store.load().await.unwrap();
        assert_eq!(document.posts.len(), 1);
        assert_eq!(document.posts[0].id, post.id);
        assert_eq!(document.posts[0].title, "Hello");
    }

    #[tokio::test]
    async fn get_post_finds_the_matching_entry() {
        let (_, service) = service();
        fill(&service, 3).await;

        let post = service.get_post(2).await.unwrap();
        assert_eq!(post.title, "post 2");
    }

    #[tokio::test]
    async fn get_post_signals_not_found() {
        let (_, service) = service();
        fill(&service, 2).await;

        let err = service.get_post(7).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(7)));
    }

    #[tokio::test]
    async fn limit_takes_trailing_entries_in_storage_order() {
        let (_, service) = service();
        fill(&service, 5).await;

        let posts = service.list_posts(Some(3)).await.unwrap();
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn limit_beyond_length_returns_everything() {
        let (_, service) = service();
        fill(&service, 2).await;

        assert_eq!(service.list_posts(Some(10)).await.unwrap().len(), 2);
        assert_eq!(service.list_posts(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn concurrent_appends_keep_both_posts() {
        let (store, service) = service();

        let (a, b) = tokio::join!(
            service.create_post("first".into(), "body".into(), "ann".into()),
            service.create_post("second".into(), "body".into(), "ben".into()),
        );

        let mut ids = vec![a.unwrap().id, b.unwrap().id];
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.load().await.unwrap().posts.len(), 2);
    }
}
