//! DTOs for posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::PostInput;
use crate::domain::entities::Post;
use crate::error::AppError;
use crate::utils::image_upload::ImageUpload;

/// Post as returned by the API.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub image: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub group: Option<i64>,
}

impl PostResponse {
    /// Renders a post; the stored image path becomes an absolute URL under
    /// `{base_url}/media/`.
    pub fn new(post: Post, base_url: &str) -> Self {
        Self {
            id: post.id,
            text: post.text,
            author: post.author,
            image: post.image.map(|path| media_url(base_url, &path)),
            pub_date: post.pub_date,
            group: post.group_id,
        }
    }
}

/// Absolute URL of a stored media file.
pub fn media_url(base_url: &str, path: &str) -> String {
    format!("{}/media/{}", base_url.trim_end_matches('/'), path)
}

/// JSON body for creating or updating a post.
///
/// Read-only fields (`id`, `author`, `pub_date`) are ignored if sent.
///
/// # `group` / `image` semantics
///
/// - **Absent** → leave unchanged
/// - **`null`** → clear
/// - **Value** → set (`image` is a `data:image/<ext>;base64,...` string)
#[derive(Debug, Default, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub group: Option<Option<i64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image: Option<Option<String>>,
}

impl PostPayload {
    /// Decodes the inline image, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on the `image` field if it is not a
    /// valid image data URI.
    pub fn into_input(self) -> Result<PostInput, AppError> {
        let image = match self.image {
            Some(Some(uri)) => Some(Some(ImageUpload::from_data_uri(&uri)?)),
            Some(None) => Some(None),
            None => None,
        };

        Ok(PostInput {
            text: self.text,
            group: self.group,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn test_response_renders_absolute_image_url() {
        let post = Post {
            id: 1,
            text: "hi".to_string(),
            pub_date: Utc::now(),
            author_id: 2,
            author: "leo".to_string(),
            group_id: Some(3),
            image: Some("posts/a.png".to_string()),
        };

        let body = serde_json::to_value(PostResponse::new(post, "http://localhost:3000")).unwrap();

        assert_eq!(body["author"], "leo");
        assert_eq!(body["group"], 3);
        assert_eq!(body["image"], "http://localhost:3000/media/posts/a.png");
    }

    #[test]
    fn test_payload_ignores_read_only_fields() {
        let payload: PostPayload =
            serde_json::from_value(json!({"text": "hi", "author": "someone", "id": 99})).unwrap();

        assert_eq!(payload.text.as_deref(), Some("hi"));
        assert!(payload.group.is_none());
    }

    #[test]
    fn test_payload_distinguishes_null_from_absent() {
        let payload: PostPayload =
            serde_json::from_value(json!({"group": null, "image": null})).unwrap();

        assert_eq!(payload.group, Some(None));
        assert_eq!(payload.image, Some(None));
    }

    #[test]
    fn test_payload_sets_group() {
        let payload: PostPayload = serde_json::from_value(json!({"group": 7})).unwrap();

        assert_eq!(payload.group, Some(Some(7)));
        assert!(payload.image.is_none());
    }

    #[test]
    fn test_into_input_decodes_data_uri() {
        let payload: PostPayload =
            serde_json::from_value(json!({"text": "hi", "image": PNG_URI})).unwrap();

        let input = payload.into_input().unwrap();
        let upload = input.image.flatten().unwrap();

        assert_eq!(upload.extension, "png");
    }

    #[test]
    fn test_into_input_rejects_plain_string_image() {
        let payload: PostPayload =
            serde_json::from_value(json!({"image": "not-an-image"})).unwrap();

        assert!(payload.into_input().is_err());
    }
}
