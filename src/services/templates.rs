//! Template services: user-owned reusable workout definitions.

use crate::api::{TemplateDetail, TemplateId, TemplateInput, UserId};
use crate::db::repository::{RepositoryResult, TemplateRepository};
use crate::db::FullRepository;

pub async fn create_template(
    repo: &dyn FullRepository,
    user: UserId,
    input: &TemplateInput,
) -> RepositoryResult<TemplateDetail> {
    log::debug!("creating template '{}' for user {}", input.name, user);
    repo.create_template(user, input).await
}

pub async fn list_templates(
    repo: &dyn FullRepository,
    user: UserId,
) -> RepositoryResult<Vec<TemplateDetail>> {
    repo.list_templates(user).await
}

pub async fn get_template(
    repo: &dyn FullRepository,
    user: UserId,
    id: TemplateId,
) -> RepositoryResult<TemplateDetail> {
    repo.get_template(user, id).await
}

pub async fn delete_template(
    repo: &dyn FullRepository,
    user: UserId,
    id: TemplateId,
) -> RepositoryResult<()> {
    log::debug!("deleting template {} for user {}", id, user);
    repo.delete_template(user, id).await
}
