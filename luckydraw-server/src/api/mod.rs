//! HTTP surface of the wallet and the spin endpoint.
//!
//! - `GET /wallet-amount` - approved wallet balance
//! - `GET /lucky-draw` - board size and balance for the game page
//! - `POST /lucky-draw/spin` - settle one spin

use axum::{
    routing::{get, post},
    Router,
};
use luckydraw_game::DrawSettlement;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod handlers;

#[derive(Clone)]
pub struct AppState {
    settlement: Arc<DrawSettlement>,
}

impl AppState {
    pub fn new(settlement: Arc<DrawSettlement>) -> Self {
        Self { settlement }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/wallet-amount", get(handlers::wallet_amount))
        .route("/lucky-draw", get(handlers::lucky_draw))
        .route("/lucky-draw/spin", post(handlers::spin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use luckydraw_core::{
        Decimal, EntryStatus, GameConfig, Ledger, StaticDrawConfig, Storage,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app(balance: i64, winning_number: Option<i64>) -> (Router, Ledger) {
        let ledger = Ledger::new(Arc::new(Storage::in_memory().await.unwrap()));
        if balance != 0 {
            ledger
                .append_entry(Decimal::from(balance), EntryStatus::Approved)
                .await
                .unwrap();
        }

        let settlement = DrawSettlement::new(
            ledger.clone(),
            Arc::new(StaticDrawConfig::new(winning_number)),
            GameConfig::default(),
        )
        .unwrap();

        (router(AppState::new(Arc::new(settlement))), ledger)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn spin_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/lucky-draw/spin")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_wallet_amount_defaults_to_zero() {
        let (app, _) = test_app(0, Some(7)).await;

        let (status, body) = send(app, get_request("/wallet-amount")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn test_wallet_amount_sums_approved_entries() {
        let (app, ledger) = test_app(1000, Some(7)).await;
        ledger
            .append_entry(Decimal::new(-2525, 2), EntryStatus::Approved)
            .await
            .unwrap();
        ledger
            .append_entry(Decimal::from(300), EntryStatus::Pending)
            .await
            .unwrap();

        let (status, body) = send(app, get_request("/wallet-amount")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"].as_f64(), Some(974.75));
    }

    #[tokio::test]
    async fn test_lucky_draw_page_data() {
        let (app, _) = test_app(1000, Some(7)).await;

        let (status, body) = send(app, get_request("/lucky-draw")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["max_number"], 12);
        assert_eq!(body["wallet_amount"].as_f64(), Some(1000.0));
    }

    #[tokio::test]
    async fn test_winning_spin() {
        let (app, ledger) = test_app(1000, Some(7)).await;

        let (status, body) = send(
            app,
            spin_request(json!({ "chosen_number": 7, "bet_amount": 50 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["winning_number"], 7);
        assert_eq!(body["is_winner"], true);
        assert_eq!(body["bet_amount"].as_f64(), Some(50.0));
        assert_eq!(body["final_amount"].as_f64(), Some(100.0));
        assert_eq!(body["message"], "Congratulations! You won!");

        assert_eq!(ledger.get_balance().await.unwrap(), Decimal::from(1050));
    }

    #[tokio::test]
    async fn test_losing_spin() {
        let (app, ledger) = test_app(1000, Some(7)).await;

        let (status, body) = send(
            app,
            spin_request(json!({ "chosen_number": 3, "bet_amount": 50.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_winner"], false);
        assert_eq!(body["final_amount"].as_f64(), Some(0.0));
        assert_eq!(body["message"], "Sorry, try again!");

        assert_eq!(ledger.get_balance().await.unwrap(), Decimal::new(94950, 2));
    }

    #[tokio::test]
    async fn test_insufficient_balance() {
        let (app, ledger) = test_app(100, Some(7)).await;

        let (status, body) = send(
            app,
            spin_request(json!({ "chosen_number": 7, "bet_amount": 150 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Insufficient wallet balance");
        assert_eq!(ledger.entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_configuration_errors() {
        let (app, _) = test_app(1000, None).await;
        let (status, body) = send(
            app,
            spin_request(json!({ "chosen_number": 7, "bet_amount": 50 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "No winning number has been set. Please contact administrator."
        );

        let (app, ledger) = test_app(1000, Some(15)).await;
        let (status, body) = send(
            app,
            spin_request(json!({ "chosen_number": 7, "bet_amount": 50 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid winning number in database. Please contact administrator."
        );
        assert_eq!(ledger.entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_requests_are_unprocessable() {
        let bodies = [
            json!({ "chosen_number": 0, "bet_amount": 50 }),
            json!({ "chosen_number": 13, "bet_amount": 50 }),
            json!({ "chosen_number": 7, "bet_amount": 0 }),
            json!({ "chosen_number": 7, "bet_amount": -5 }),
            json!({ "chosen_number": 7.5, "bet_amount": 50 }),
            json!({ "chosen_number": "7", "bet_amount": 50 }),
            json!({ "chosen_number": 7, "bet_amount": "lots" }),
            json!({ "chosen_number": 7 }),
        ];

        for body in bodies {
            let (app, ledger) = test_app(1000, Some(7)).await;
            let (status, response) = send(app, spin_request(body.clone())).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
            assert!(response["error"].is_string());
            assert_eq!(ledger.entries().await.unwrap().len(), 1);
        }
    }
}
