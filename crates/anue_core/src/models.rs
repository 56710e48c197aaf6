use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One headline entry as delivered by the cnyes newslist API.
///
/// Fields the report pipeline does not read are captured in `extra` so a
/// snapshot of the payload round-trips without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(rename = "newsId")]
    pub news_id: u64,
    pub title: String,
    pub summary: Option<String>,
    #[serde(rename = "publishAt")]
    pub publish_at: i64,
    #[serde(default)]
    pub keyword: Vec<String>,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `items` envelope of one newslist response: the ordered entries plus
/// whatever pagination metadata the API sends alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPayload {
    pub data: Vec<FeedItem>,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}
