//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::booking::{BookingError, QueryError};
use crate::domain::{ClockTime, NewTrain, Station, TrainId};
use crate::store::NewTicket;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trains", post(add_train))
        .route("/trains/passing", get(passing_trains))
        .route("/trains/:id/tickets", post(book_ticket))
        .route("/trains/:id/seats", get(available_seats))
        .route("/trains/:id/boarding", get(boarding_count))
        .route("/trains/:id/oldest", get(oldest_passenger))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Add a train.
async fn add_train(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddTrainResponse>), AppError> {
    let req: AddTrainRequest = parse_json(&body)?;

    let route = req
        .route
        .iter()
        .map(|s| parse_station("route", s))
        .collect::<Result<Vec<_>, _>>()?;
    let departure = parse_time("departure", &req.departure_time)?;

    let train_id = state
        .booking
        .add_train(NewTrain {
            route,
            departure,
            capacity: req.seats,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AddTrainResponse { train_id })))
}

/// Book a ticket on a train.
async fn book_ticket(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<(StatusCode, Json<TicketResponse>), AppError> {
    let req: BookTicketRequest = parse_json(&body)?;
    let from = parse_station("boarding", &req.from)?;
    let to = parse_station("destination", &req.to)?;

    let ticket = state
        .booking
        .book_ticket(
            TrainId(id),
            NewTicket {
                from,
                to,
                passengers: req.passengers,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TicketResponse {
            train_id: ticket.train_id(),
            from: ticket.from(),
            to: ticket.to(),
            passengers: ticket.passenger_count(),
        }),
    ))
}

/// Seats available between two stations.
async fn available_seats(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(req): Query<SeatAvailabilityQuery>,
) -> Result<Json<SeatAvailabilityResponse>, AppError> {
    let from = parse_station("boarding", &req.from)?;
    let to = parse_station("destination", &req.to)?;
    let train_id = TrainId(id);

    let available_seats = state.booking.available_seats(train_id, from, to).await?;

    Ok(Json(SeatAvailabilityResponse {
        train_id,
        from,
        to,
        available_seats,
    }))
}

/// Passengers boarding at a station.
async fn boarding_count(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(req): Query<BoardingQuery>,
) -> Result<Json<BoardingCountResponse>, AppError> {
    let station = parse_station("boarding", &req.station)?;
    let train_id = TrainId(id);

    let boarding_count = state.booking.boarding_count_at(train_id, station).await?;

    Ok(Json(BoardingCountResponse {
        train_id,
        station,
        boarding_count,
    }))
}

/// Oldest passenger on a train.
async fn oldest_passenger(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<OldestPassengerResponse>, AppError> {
    let train_id = TrainId(id);
    let oldest_age = state.booking.oldest_passenger_age(train_id).await?;

    Ok(Json(OldestPassengerResponse {
        train_id,
        oldest_age,
    }))
}

/// Trains passing a station within a time window.
async fn passing_trains(
    State(state): State<AppState>,
    Query(req): Query<PassingTrainsQuery>,
) -> Result<Json<PassingTrainsResponse>, AppError> {
    let station = parse_station("query", &req.station)?;
    let start = parse_time("start", &req.start)?;
    let end = parse_time("end", &req.end)?;

    let train_ids = state
        .booking
        .trains_through_station(station, start, end)
        .await;

    Ok(Json(PassingTrainsResponse { train_ids }))
}

/// Parse a JSON body, logging the raw body on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn parse_station(role: &str, value: &str) -> Result<Station, AppError> {
    Station::parse(value).map_err(|_| AppError::BadRequest {
        message: format!("Invalid {role} station: {value}"),
    })
}

fn parse_time(role: &str, value: &str) -> Result<ClockTime, AppError> {
    ClockTime::parse_hhmm(value).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {role} time {value:?}: {e}"),
    })
}

/// Application error type.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::Query(QueryError::TrainNotFound(_)) => AppError::NotFound {
                message: e.to_string(),
            },
            BookingError::Query(QueryError::StationNotOnRoute(_)) | BookingError::Invalid(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(value: serde_json::Value) -> Bytes {
        Bytes::from(value.to_string())
    }

    async fn add(state: &AppState, route: &[&str], departure: &str, seats: u32) -> u64 {
        let body = json(serde_json::json!({
            "route": route,
            "departure_time": departure,
            "seats": seats,
        }));
        let (status, Json(resp)) = add_train(State(state.clone()), body).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        resp.train_id.0
    }

    async fn book(state: &AppState, id: u64, from: &str, to: &str, ages: &[u32]) {
        let passengers: Vec<_> = ages
            .iter()
            .map(|a| serde_json::json!({ "age": a }))
            .collect();
        let body = json(serde_json::json!({
            "from": from,
            "to": to,
            "passengers": passengers,
        }));
        let (status, Json(resp)) = book_ticket(State(state.clone()), Path(id), body)
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(resp.passengers as usize, ages.len());
    }

    fn seats_query(from: &str, to: &str) -> Query<SeatAvailabilityQuery> {
        Query(SeatAvailabilityQuery {
            from: from.into(),
            to: to.into(),
        })
    }

    #[tokio::test]
    async fn health_check() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn add_train_and_query_seats() {
        let state = AppState::default();
        let id = add(&state, &["DELHI", "AGRA", "BHOPAL", "NAGPUR"], "10:00", 2).await;
        book(&state, id, "DELHI", "BHOPAL", &[30]).await;
        book(&state, id, "agra", "nagpur", &[40]).await;

        let Json(resp) =
            available_seats(State(state.clone()), Path(id), seats_query("DELHI", "NAGPUR"))
                .await
                .unwrap();
        assert_eq!(resp.available_seats, 0);

        let Json(resp) =
            available_seats(State(state.clone()), Path(id), seats_query("BHOPAL", "NAGPUR"))
                .await
                .unwrap();
        assert_eq!(
            resp,
            SeatAvailabilityResponse {
                train_id: TrainId(id),
                from: Station::Bhopal,
                to: Station::Nagpur,
                available_seats: 1,
            }
        );
    }

    #[tokio::test]
    async fn book_ticket_response() {
        let state = AppState::default();
        let id = add(&state, &["MUMBAI", "PUNE"], "06:00", 5).await;

        let body = json(serde_json::json!({
            "from": "MUMBAI",
            "to": "PUNE",
            "passengers": [{ "age": 10 }, { "age": 70 }],
        }));
        let (status, Json(resp)) = book_ticket(State(state.clone()), Path(id), body)
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            resp,
            TicketResponse {
                train_id: TrainId(id),
                from: Station::Mumbai,
                to: Station::Pune,
                passengers: 2,
            }
        );
    }

    #[tokio::test]
    async fn boarding_and_oldest_endpoints() {
        let state = AppState::default();
        let id = add(&state, &["MUMBAI", "PUNE", "HYDERABAD"], "06:00", 5).await;
        book(&state, id, "PUNE", "HYDERABAD", &[33, 58]).await;

        let Json(resp) = boarding_count(
            State(state.clone()),
            Path(id),
            Query(BoardingQuery {
                station: "PUNE".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.boarding_count, 2);

        let Json(resp) = oldest_passenger(State(state.clone()), Path(id))
            .await
            .unwrap();
        assert_eq!(resp.oldest_age, 58);
    }

    #[tokio::test]
    async fn passing_trains_endpoint() {
        let state = AppState::default();
        let a = add(&state, &["DELHI", "AGRA"], "08:00", 5).await;
        let _b = add(&state, &["MUMBAI", "PUNE"], "08:00", 5).await;
        let c = add(&state, &["KANPUR", "AGRA"], "08:30", 5).await;

        let Json(resp) = passing_trains(
            State(state.clone()),
            Query(PassingTrainsQuery {
                station: "AGRA".into(),
                start: "09:00".into(),
                end: "09:30".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.train_ids, vec![TrainId(a), TrainId(c)]);
    }

    #[tokio::test]
    async fn unknown_train_is_not_found() {
        let state = AppState::default();

        let err = oldest_passenger(State(state.clone()), Path(77))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::NotFound {
                message: "train 77 not found".into()
            }
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn station_not_on_route_is_bad_request() {
        let state = AppState::default();
        let id = add(&state, &["DELHI", "AGRA"], "08:00", 5).await;

        let err = boarding_count(
            State(state.clone()),
            Path(id),
            Query(BoardingQuery {
                station: "CHENNAI".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(
            err,
            AppError::BadRequest {
                message: "train does not pass through station CHENNAI".into()
            }
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_inputs_are_bad_requests() {
        let state = AppState::default();

        let err = add_train(State(state.clone()), Bytes::from_static(b"{not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let body = json(serde_json::json!({
            "route": ["DELHI", "ATLANTIS"],
            "departure_time": "10:00",
            "seats": 3,
        }));
        let err = add_train(State(state.clone()), body).await.unwrap_err();
        assert_eq!(
            err,
            AppError::BadRequest {
                message: "Invalid route station: ATLANTIS".into()
            }
        );

        let body = json(serde_json::json!({
            "route": ["DELHI", "AGRA"],
            "departure_time": "10:00:30",
            "seats": 3,
        }));
        let err = add_train(State(state.clone()), body).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let body = json(serde_json::json!({
            "route": ["DELHI", "AGRA"],
            "departure_time": "10:00",
            "seats": 0,
        }));
        let err = add_train(State(state.clone()), body).await.unwrap_err();
        assert_eq!(
            err,
            AppError::BadRequest {
                message: "train must have at least one seat".into()
            }
        );
    }

    #[tokio::test]
    async fn router_builds() {
        let _router = create_router(AppState::default());
    }
}
