use contracts::domain::a003_quote::{QuoteRequest, QuotesData};
use contracts::shared::actions::ActionAck;

use crate::shared::api_utils::{get_json, post_json};

pub async fn get_quotes() -> Result<QuotesData, String> {
    get_json("/api/quotes").await
}

pub async fn request_quote(request: &QuoteRequest) -> Result<ActionAck, String> {
    post_json("/api/quotes/request", request).await
}
