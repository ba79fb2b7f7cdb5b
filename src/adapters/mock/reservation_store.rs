use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::reservation::Reservation;
use crate::ports::reservation_store::{ReservationStore as ReservationStoreTrait, Result};

/// ReservationStoreのインメモリ実装
///
/// 挿入順を保ったVecで、予約待ち行列の順序性をそのまま表す。
pub struct ReservationStore {
    reservations: Mutex<Vec<Reservation>>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: Mutex::new(Vec::new()),
        }
    }
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationStoreTrait for ReservationStore {
    async fn load(&self) -> Result<Vec<Reservation>> {
        Ok(self.reservations.lock().unwrap().clone())
    }

    async fn save(&self, reservations: &[Reservation]) -> Result<()> {
        *self.reservations.lock().unwrap() = reservations.to_vec();
        Ok(())
    }
}
