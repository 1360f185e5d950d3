//! Shared application state injected into every handler.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{
    AuthService, CommentService, FollowService, GroupService, PostService, UserService,
};
use crate::infrastructure::media::{FsMediaStore, MediaStore};
use crate::infrastructure::persistence::{
    PgCommentRepository, PgFollowRepository, PgGroupRepository, PgPostRepository,
    PgUserRepository,
};
use crate::utils::jwt::JwtCodec;

/// Services wired to their PostgreSQL repositories, plus what the
/// top-level router needs to serve media and render absolute URLs.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub group_service: Arc<GroupService<PgGroupRepository>>,
    pub post_service: Arc<PostService<PgPostRepository, PgGroupRepository>>,
    pub comment_service: Arc<CommentService<PgCommentRepository, PgPostRepository>>,
    pub follow_service: Arc<FollowService<PgFollowRepository, PgUserRepository>>,
    pub media: Arc<dyn MediaStore>,
    pub media_root: PathBuf,
    pub db: PgPool,
    /// Public origin without a trailing slash, e.g. `http://localhost:3000`.
    pub base_url: String,
}

impl AppState {
    /// Builds the repositories and services over one connection pool.
    pub fn new(
        db: PgPool,
        media_root: impl Into<PathBuf>,
        base_url: impl Into<String>,
        codec: JwtCodec,
    ) -> Self {
        let pool = Arc::new(db.clone());
        let media_root = media_root.into();

        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let group_repo = Arc::new(PgGroupRepository::new(pool.clone()));
        let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
        let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
        let follow_repo = Arc::new(PgFollowRepository::new(pool));

        let media: Arc<dyn MediaStore> = Arc::new(FsMediaStore::new(media_root.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(user_repo.clone(), codec)),
            user_service: Arc::new(UserService::new(user_repo.clone())),
            group_service: Arc::new(GroupService::new(group_repo.clone())),
            post_service: Arc::new(PostService::new(
                post_repo.clone(),
                group_repo,
                media.clone(),
            )),
            comment_service: Arc::new(CommentService::new(comment_repo, post_repo)),
            follow_service: Arc::new(FollowService::new(follow_repo, user_repo)),
            media,
            media_root,
            db,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}
