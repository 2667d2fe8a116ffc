//! Health-profile product recommendation backed by an LLM completion service.

pub mod openai;

use std::{collections::HashSet, sync::Arc};

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

pub use openai::OpenAiClient;

use crate::error::RecommendError;

/// Number of product ids every reply must contain.
pub const PRODUCT_COUNT: usize = 5;

pub const SYSTEM_PROMPT: &str = "JSON만 출력하는 추천 엔진이다.";

/// Caller-supplied health information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub diseases: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_ids: Vec<i64>,
}

/// Chat-completion capability: returns the assistant message content.
pub trait CompletionClient: Send + Sync {
    fn complete<'a>(
        &'a self,
        system: &'a str,
        user: &'a str,
    ) -> BoxFuture<'a, Result<String, RecommendError>>;
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "없음".to_string()
    } else {
        items.join(", ")
    }
}

/// Render the user prompt for `profile`.
pub fn build_prompt(profile: &HealthProfile) -> String {
    format!(
        r#"
너는 헬스케어 쇼핑몰의 상품 추천 AI다.

[사용자 건강 정보]
- 질병: {diseases}
- 알레르기: {allergies}
- 목표: {goals}

[규칙]
1. 알레르기 성분이 포함될 가능성이 있는 상품은 제외
2. 건강 목표에 가장 적합한 상품을 우선 추천
3. **반드시 정확히 5개의 product_id를 반환**
4. product_id는 정수형
5. 중복 없이 선택
6. 아래 JSON 형식으로만 응답

[응답 형식]
{{"product_ids": [101, 102, 103, 104, 105]}}
"#,
        diseases = join_or_none(&profile.diseases),
        allergies = join_or_none(&profile.allergies),
        goals = join_or_none(&profile.goals),
    )
}

/// Validate a completion reply: a JSON object whose `product_ids` holds exactly
/// [`PRODUCT_COUNT`] distinct integers. A missing key counts as zero ids.
pub fn parse_product_ids(content: &str) -> Result<Vec<i64>, RecommendError> {
    let reply: Value = serde_json::from_str(content.trim())
        .map_err(|e| RecommendError::MalformedReply(e.to_string()))?;
    let Value::Object(map) = reply else {
        return Err(RecommendError::MalformedReply(
            "reply is not a JSON object".into(),
        ));
    };
    let raw = match map.get("product_ids") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => {
            return Err(RecommendError::MalformedReply(format!(
                "product_ids is not an array: {other}"
            )))
        }
    };

    let ids = raw
        .iter()
        .map(|value| {
            value
                .as_i64()
                .ok_or_else(|| RecommendError::NotAnInteger(value.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.len() != PRODUCT_COUNT {
        return Err(RecommendError::WrongCount(ids.len()));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(RecommendError::Duplicate(*dup));
    }
    Ok(ids)
}

/// Prompt → completion → validated product ids.
#[derive(Clone)]
pub struct Recommender {
    client: Arc<dyn CompletionClient>,
}

impl Recommender {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(
        diseases = profile.diseases.len(),
        allergies = profile.allergies.len(),
        goals = profile.goals.len()
    ))]
    pub async fn recommend(&self, profile: &HealthProfile) -> Result<Recommendation, RecommendError> {
        let prompt = build_prompt(profile);
        let content = self.client.complete(SYSTEM_PROMPT, &prompt).await?;
        match parse_product_ids(&content) {
            Ok(product_ids) => {
                info!(?product_ids, "recommendation ready");
                Ok(Recommendation { product_ids })
            }
            Err(err) => {
                warn!(error = %err, reply = %content, "rejected completion reply");
                Err(err)
            }
        }
    }
}
