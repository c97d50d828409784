use reqwest::Client;
use serde_json::{Map, Value};

/// What the advice app knows about the user for one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum UserData {
    Found(Map<String, Value>),
    Missing,
}

/// Reads the snapshot from a fixed address. Every failure degrades to
/// `UserData::Missing` instead of failing the request.
#[derive(Clone)]
pub struct UserDataFetcher {
    client: Client,
    url: String,
}

impl UserDataFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> UserData {
        let body = match self.client.get(&self.url).send().await {
            Ok(response) => response.json::<Value>().await,
            Err(e) => Err(e),
        };

        match body {
            Ok(value) => classify(value),
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Failed to get user data");
                UserData::Missing
            }
        }
    }
}

fn classify(value: Value) -> UserData {
    match value {
        Value::Object(map) if map.contains_key("error") => UserData::Missing,
        Value::Object(map) => UserData::Found(map),
        Value::Null => UserData::Missing,
        other => {
            let mut map = Map::new();
            map.insert("User data".to_string(), other);
            UserData::Found(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_marker_means_missing() {
        assert_eq!(classify(json!({"error": "No user data found"})), UserData::Missing);
        assert_eq!(classify(Value::Null), UserData::Missing);
    }

    #[test]
    fn object_is_kept_as_is() {
        let data = classify(json!({"Age": 20, "Mind_Score": 6}));
        match data {
            UserData::Found(map) => assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Age", "Mind_Score"]),
            UserData::Missing => panic!("expected data"),
        }
    }

    #[test]
    fn non_object_is_wrapped() {
        let data = classify(json!([1, 2, 3]));
        assert_eq!(
            data,
            UserData::Found(json!({"User data": [1, 2, 3]}).as_object().cloned().unwrap())
        );
    }

    #[tokio::test]
    async fn unreachable_address_degrades() {
        let fetcher = UserDataFetcher::new("http://127.0.0.1:1/user-data");
        assert_eq!(fetcher.fetch().await, UserData::Missing);
    }
}
