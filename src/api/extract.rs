//! Request extractors that reject with [`AppError`] instead of Axum's
//! plain-text rejections.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Request, multipart::MultipartError},
    http::{header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::dto::post::PostPayload;
use crate::application::services::PostInput;
use crate::error::AppError;
use crate::utils::image_upload::ImageUpload;

/// JSON body whose syntax and type errors become a 400 with a `body` detail.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Path parameters; a value that does not parse names no resource, so it is
/// a 404.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|e| AppError::not_found("Not found", json!({"path": e.body_text()})))
    }
}

/// Post write payload from either a JSON body or a `multipart/form-data` form.
///
/// Multipart parts: `text`, `group` (ID, empty for null) and `image` (a file,
/// or a data URI sent as a plain field).
#[derive(Debug)]
pub struct PostForm(pub PostInput);

impl<S> FromRequest<S> for PostForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Malformed multipart body", json!({"body": [e.body_text()]}))
            })?;
            return read_multipart(multipart).await.map(Self);
        }

        let JsonBody(payload) = JsonBody::<PostPayload>::from_request(req, state).await?;
        payload.into_input().map(Self)
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::bad_request("Malformed multipart body", json!({"body": [e.body_text()]}))
}

async fn read_multipart(mut multipart: Multipart) -> Result<PostInput, AppError> {
    let mut input = PostInput::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "text" => {
                input.text = Some(field.text().await.map_err(multipart_error)?);
            }
            "group" => {
                let raw = field.text().await.map_err(multipart_error)?;
                input.group = Some(parse_group(&raw)?);
            }
            "image" if field.file_name().is_some() => {
                let bytes = field.bytes().await.map_err(multipart_error)?;
                input.image = Some(if bytes.is_empty() {
                    None
                } else {
                    Some(ImageUpload::from_bytes(bytes.to_vec())?)
                });
            }
            "image" => {
                let raw = field.text().await.map_err(multipart_error)?;
                input.image = Some(if raw.is_empty() {
                    None
                } else {
                    Some(ImageUpload::from_data_uri(&raw)?)
                });
            }
            _ => {}
        }
    }

    Ok(input)
}

fn parse_group(raw: &str) -> Result<Option<i64>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Ok(None);
    }

    raw.parse::<i64>().map(Some).map_err(|_| {
        AppError::field(
            "group",
            format!("Incorrect type. Expected pk value, received \"{}\".", raw),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_parse_group() {
        assert_eq!(parse_group("").unwrap(), None);
        assert_eq!(parse_group("null").unwrap(), None);
        assert_eq!(parse_group(" 7 ").unwrap(), Some(7));
        assert!(parse_group("cats").is_err());
    }

    #[tokio::test]
    async fn test_post_form_from_json() {
        let req = Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text":"hi","group":null}"#))
            .unwrap();

        let PostForm(input) = PostForm::from_request(req, &()).await.unwrap();

        assert_eq!(input.text.as_deref(), Some("hi"));
        assert_eq!(input.group, Some(None));
        assert!(input.image.is_none());
    }

    #[tokio::test]
    async fn test_post_form_malformed_json() {
        let req = Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let err = PostForm::from_request(req, &()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_error_info().details.get("body").is_some());
    }

    #[tokio::test]
    async fn test_post_form_from_multipart() {
        let body = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"text\"\r\n\r\n\
            hello\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"group\"\r\n\r\n\
            3\r\n\
            --XYZ--\r\n";

        let req = Request::builder()
            .header(CONTENT_TYPE, "multipart/form-data; boundary=XYZ")
            .body(Body::from(body))
            .unwrap();

        let PostForm(input) = PostForm::from_request(req, &()).await.unwrap();

        assert_eq!(input.text.as_deref(), Some("hello"));
        assert_eq!(input.group, Some(Some(3)));
    }
}
