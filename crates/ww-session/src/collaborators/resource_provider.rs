use crate::CollaboratorResult;

use async_trait::async_trait;
use ww_core::{Property, PropertyDraft};

/// Remote API that owns property records.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    async fn create_resource(
        &self,
        owner_id: &str,
        draft: &PropertyDraft,
    ) -> CollaboratorResult<Property>;
}
