//! Wire-format mapping for the feed endpoint.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::remote::RemoteError;
use feedcask_core::FeedItem;

#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Wire representation of a feed item.
///
/// The endpoint calls the image field `image`; the rename to the domain's
/// `image_url` happens here and nowhere else.
#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem { id: item.id, description: item.description, location: item.location, image_url: item.image }
    }
}

/// Map a raw `(status, body)` pair into domain items.
///
/// Only status 200 is eligible for success; any other status is invalid
/// data regardless of the body. On 200, any decode failure (malformed JSON,
/// missing required field, invalid URL) is also invalid data. There is no
/// partial success: either every element decodes or the whole response is
/// rejected.
pub(crate) fn map(status: u16, body: &[u8]) -> Result<Vec<FeedItem>, RemoteError> {
    if status != 200 {
        return Err(RemoteError::InvalidData);
    }

    let root: Root = serde_json::from_slice(body).map_err(|_| RemoteError::InvalidData)?;
    Ok(root.items.into_iter().map(FeedItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "items": [
            {
                "id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6",
                "description": "a description",
                "location": "a location",
                "image": "https://a-url.com/image.png"
            },
            {
                "id": "BA298A85-6275-48D3-8315-9C8F7C1CD109",
                "image": "https://another-url.com/image.png"
            }
        ]
    }"#;

    #[test]
    fn test_map_delivers_items_on_200_with_well_formed_body() {
        let items = map(200, FIXTURE_JSON.as_bytes()).unwrap();

        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.id, "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6".parse::<Uuid>().unwrap());
        assert_eq!(first.description.as_deref(), Some("a description"));
        assert_eq!(first.location.as_deref(), Some("a location"));
        assert_eq!(first.image_url.as_str(), "https://a-url.com/image.png");

        let second = &items[1];
        assert_eq!(second.description, None);
        assert_eq!(second.location, None);
    }

    #[test]
    fn test_map_delivers_no_items_on_200_with_empty_list() {
        let items = map(200, br#"{"items": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_map_delivers_invalid_data_on_non_200_status() {
        for status in [199, 201, 300, 400, 500] {
            assert_eq!(map(status, FIXTURE_JSON.as_bytes()), Err(RemoteError::InvalidData));
        }
    }

    #[test]
    fn test_map_delivers_invalid_data_on_malformed_json() {
        assert_eq!(map(200, b"not json"), Err(RemoteError::InvalidData));
    }

    #[test]
    fn test_map_delivers_invalid_data_on_missing_image_field() {
        let body = br#"{"items": [{"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6"}]}"#;
        assert_eq!(map(200, body), Err(RemoteError::InvalidData));
    }

    #[test]
    fn test_map_delivers_invalid_data_on_invalid_image_url() {
        let body = br#"{"items": [{"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "image": "not a url"}]}"#;
        assert_eq!(map(200, body), Err(RemoteError::InvalidData));
    }

    #[test]
    fn test_map_rejects_whole_response_when_one_element_is_invalid() {
        let body = br#"{
            "items": [
                {"id": "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6", "image": "https://a-url.com/image.png"},
                {"id": "not-a-uuid", "image": "https://another-url.com/image.png"}
            ]
        }"#;
        assert_eq!(map(200, body), Err(RemoteError::InvalidData));
    }
}
