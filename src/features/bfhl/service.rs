use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::task;

use crate::core::error::AppError;
use crate::features::ai::GeminiClient;
use crate::features::bfhl::dto::BfhlRequest;
use crate::features::bfhl::helpers::big_to_json;
use crate::features::math::{MathError, fibonacci, hcf, is_prime, lcm};

#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn answer_in_one_word(&self, question: &str) -> Result<String, AppError>;
}

#[async_trait]
impl AnswerProvider for GeminiClient {
    async fn answer_in_one_word(&self, question: &str) -> Result<String, AppError> {
        GeminiClient::ask_one_word(self, question).await
    }
}

pub struct BfhlService {
    answer_provider: Arc<dyn AnswerProvider>,
}

impl BfhlService {
    pub fn new(answer_provider: Arc<dyn AnswerProvider>) -> Self {
        Self { answer_provider }
    }

    pub async fn handle(&self, request: BfhlRequest) -> Result<Value, AppError> {
        tracing::debug!(operation = request.operation(), "handling bfhl request");

        match request {
            BfhlRequest::Fibonacci(count) => {
                run_blocking(move || {
                    let terms = fibonacci(count)
                        .iter()
                        .map(big_to_json)
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(Value::Array(terms))
                })
                .await
            }
            BfhlRequest::Prime(values) => {
                run_blocking(move || {
                    let primes: Vec<i64> =
                        values.into_iter().filter(|value| is_prime(*value)).collect();
                    Ok(json!(primes))
                })
                .await
            }
            BfhlRequest::Lcm(values) => {
                run_blocking(move || {
                    let result = lcm(&values).map_err(|err| math_error("lcm", err))?;
                    big_to_json(&result)
                })
                .await
            }
            BfhlRequest::Hcf(values) => hcf(&values)
                .map(|result| json!(result))
                .map_err(|err| math_error("hcf", err)),
            BfhlRequest::Ai(question) => {
                let answer = self.answer_provider.answer_in_one_word(&question).await?;
                Ok(json!(answer))
            }
        }
    }
}

/// Trial division and big-integer arithmetic stay off the async workers.
async fn run_blocking<F>(work: F) -> Result<Value, AppError>
where
    F: FnOnce() -> Result<Value, AppError> + Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .map_err(|err| AppError::internal(format!("number theory task failed: {err}")))?
}

fn math_error(key: &str, err: MathError) -> AppError {
    match err {
        MathError::EmptyInput => {
            AppError::bad_request(format!("{key} must be a non-empty array of integers"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    // Largest prime below 10^15; trial division takes long enough to observe.
    const SLOW_PRIME: i64 = 999_999_999_999_989;

    #[derive(Default)]
    struct RecordingProvider {
        questions: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AnswerProvider for RecordingProvider {
        async fn answer_in_one_word(&self, question: &str) -> Result<String, AppError> {
            self.questions.lock().await.push(question.to_string());
            Ok("Paris".to_string())
        }
    }

    fn service_with(provider: Arc<RecordingProvider>) -> BfhlService {
        BfhlService::new(provider)
    }

    #[tokio::test]
    async fn computes_number_theory_results() {
        let service = service_with(Arc::new(RecordingProvider::default()));

        let fib = service.handle(BfhlRequest::Fibonacci(5)).await.unwrap();
        assert_eq!(fib, json!([0, 1, 1, 2, 3]));

        let primes = service
            .handle(BfhlRequest::Prime(vec![4, 7, 10, 13, -7, 1]))
            .await
            .unwrap();
        assert_eq!(primes, json!([7, 13]));

        let lcm = service.handle(BfhlRequest::Lcm(vec![4, 6])).await.unwrap();
        assert_eq!(lcm, json!(12));

        let hcf = service.handle(BfhlRequest::Hcf(vec![12, 18])).await.unwrap();
        assert_eq!(hcf, json!(6));
    }

    #[tokio::test]
    async fn results_beyond_u64_are_exact() {
        let service = service_with(Arc::new(RecordingProvider::default()));

        let fib = service.handle(BfhlRequest::Fibonacci(95)).await.unwrap();
        let terms = fib.as_array().expect("array of terms");
        assert_eq!(terms.len(), 95);
        assert_eq!(terms[94].to_string(), "19740274219868223167");

        let lcm = service
            .handle(BfhlRequest::Lcm(vec![4_294_967_311, 4_294_967_291, 3]))
            .await
            .unwrap();
        assert_eq!(lcm.to_string(), "55340232349977673503");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn prime_filtering_does_not_block_the_runtime() {
        let service = Arc::new(service_with(Arc::new(RecordingProvider::default())));

        let slow_service = service.clone();
        let slow = tokio::spawn(async move {
            slow_service
                .handle(BfhlRequest::Prime(vec![SLOW_PRIME]))
                .await
        });
        task::yield_now().await;

        let fast = service.handle(BfhlRequest::Hcf(vec![12, 18])).await.unwrap();
        assert_eq!(fast, json!(6));
        assert!(
            !slow.is_finished(),
            "large prime check should still be running on the blocking pool"
        );

        let primes = slow.await.expect("join").expect("prime result");
        assert_eq!(primes, json!([SLOW_PRIME]));
    }

    #[tokio::test]
    async fn delegates_questions_to_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let service = service_with(provider.clone());

        let answer = service
            .handle(BfhlRequest::Ai("capital of France?".to_string()))
            .await
            .unwrap();

        assert_eq!(answer, json!("Paris"));
        let questions = provider.questions.lock().await.clone();
        assert_eq!(questions, vec!["capital of France?"]);
    }
}
