use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::EvaluateAnswerRequest, response::FeedbackResponse},
};

#[post("/api/evaluate-answer")]
pub async fn evaluate_answer(
    state: web::Data<AppState>,
    request: web::Json<EvaluateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let question = request.question.as_deref().unwrap_or_default();
    let feedback = state.quiz_service.evaluate_answer(question).await?;
    Ok(HttpResponse::Ok().json(FeedbackResponse { feedback }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{
        handlers::configure,
        services::model_service::MockModelGateway,
        test_utils::{
            fixtures::sample_quiz_json,
            test_helpers::{test_state, TempFile},
        },
    };

    async fn post_evaluation(quiz_contents: Option<&str>, body: Value) -> (StatusCode, Value) {
        let transcript = TempFile::with_contents("transcript.txt", "unused");
        let quiz = quiz_contents.map(|contents| TempFile::with_contents("quiz.txt", contents));
        let quiz_path = quiz
            .as_ref()
            .map(|file| file.path().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("no-such-quiz-file.txt"));

        let mut gateway = MockModelGateway::new();
        gateway.expect_complete().times(0);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(gateway, transcript.path(), &quiz_path)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/evaluate-answer")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_evaluate_answer_returns_feedback() {
        let (status, body) = post_evaluation(
            Some(&sample_quiz_json()),
            json!({ "question": "Q\n\nA\nB\n", "answer": "A" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "feedback": "The correct answer is B. Because B is correct." })
        );
    }

    #[actix_web::test]
    async fn test_evaluate_answer_unknown_question_is_empty() {
        let (status, body) = post_evaluation(
            Some(&sample_quiz_json()),
            json!({ "question": "Not in the quiz", "answer": "B" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "feedback": "" }));
    }

    #[actix_web::test]
    async fn test_evaluate_answer_missing_quiz_file() {
        let (status, body) = post_evaluation(None, json!({ "question": "Q" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Storage read error:"));
    }
}
