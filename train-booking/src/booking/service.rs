//! Booking service.

use tracing::{debug, info};

use crate::domain::{ClockTime, NewTrain, Station, Ticket, TrainId};
use crate::ledger;
use crate::schedule;
use crate::store::{NewTicket, TrainStore};

use super::error::BookingError;

/// Entry point for creating trains, booking tickets and running queries.
///
/// Each query takes one snapshot of the train (or of all trains) from the
/// store and computes its answer from that snapshot alone.
#[derive(Debug, Clone)]
pub struct BookingService<S> {
    store: S,
}

impl<S: TrainStore> BookingService<S> {
    /// Create a service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a train and return its assigned id.
    pub async fn add_train(&self, params: NewTrain) -> Result<TrainId, BookingError> {
        let train = self.store.create_train(params).await?;
        info!(
            train = %train.id(),
            origin = %train.route().origin(),
            terminus = %train.route().terminus(),
            departure = %train.departure(),
            seats = train.capacity(),
            "added train"
        );
        Ok(train.id())
    }

    /// Book a ticket on a train.
    pub async fn book_ticket(
        &self,
        id: TrainId,
        ticket: NewTicket,
    ) -> Result<Ticket, BookingError> {
        Ok(self.store.add_ticket(id, ticket).await?)
    }

    /// Seats free for the whole journey from `from` to `to` on train `id`.
    ///
    /// See [`ledger::available_seats`].
    pub async fn available_seats(
        &self,
        id: TrainId,
        from: Station,
        to: Station,
    ) -> Result<i64, BookingError> {
        let train = self.store.get_train_by_id(id).await?;
        let seats = ledger::available_seats(&train, from, to)?;
        debug!(train = %id, %from, %to, seats, "computed seat availability");
        Ok(seats)
    }

    /// Passengers boarding train `id` at `station`.
    pub async fn boarding_count_at(
        &self,
        id: TrainId,
        station: Station,
    ) -> Result<u32, BookingError> {
        let train = self.store.get_train_by_id(id).await?;
        let count = ledger::boarding_count_at(&train, station)?;
        debug!(train = %id, %station, count, "computed boarding count");
        Ok(count)
    }

    /// Age of the oldest passenger on train `id`, or 0 if none.
    pub async fn oldest_passenger_age(&self, id: TrainId) -> Result<u32, BookingError> {
        let train = self.store.get_train_by_id(id).await?;
        let age = ledger::oldest_passenger_age(&train);
        debug!(train = %id, age, "computed oldest passenger age");
        Ok(age)
    }

    /// Ids of trains reaching `station` between `start` and `end` inclusive.
    pub async fn trains_through_station(
        &self,
        station: Station,
        start: ClockTime,
        end: ClockTime,
    ) -> Vec<TrainId> {
        let trains = self.store.get_all_trains().await;
        let ids = schedule::trains_through_station_in_window(
            trains.iter().map(|t| t.as_ref()),
            station,
            start,
            end,
        );
        debug!(%station, %start, %end, matched = ids.len(), "searched trains in window");
        ids
    }
}
