use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::reservation::Reservation;
use crate::ports::reservation_store::{ReservationStore as ReservationStoreTrait, Result};

use super::records::{RESERVATION_HEADERS, ReservationRecord, read_records, write_records};

/// ReservationStoreの表形式ファイル実装
///
/// 行の並びがそのまま予約待ち行列の挿入順となるため、
/// 読み書きとも順序を保つ。
pub struct ReservationStore {
    path: PathBuf,
}

impl ReservationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReservationStoreTrait for ReservationStore {
    async fn load(&self) -> Result<Vec<Reservation>> {
        let records: Vec<ReservationRecord> = read_records(&self.path).await?;
        Ok(records.into_iter().map(Reservation::from).collect())
    }

    async fn save(&self, reservations: &[Reservation]) -> Result<()> {
        let records: Vec<ReservationRecord> = reservations
            .iter()
            .map(ReservationRecord::from)
            .collect();
        write_records(&self.path, RESERVATION_HEADERS, &records).await
    }
}
