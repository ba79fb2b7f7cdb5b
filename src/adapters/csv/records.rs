use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::book::Book;
use crate::domain::borrow::Borrow;
use crate::domain::member::Member;
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::domain::value_objects::{BookId, BorrowId, MemberId, ReservationId};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 真偽値をリテラル文字列 "True" / "False" として読み書きする
///
/// 表形式ファイルの互換性要件。serdeの既定（"true"/"false"）とは
/// 異なるため、該当フィールドのみ差し替える。
mod python_bool {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &bool,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<bool, D::Error> {
        match String::deserialize(deserializer)?.as_str() {
            "True" => Ok(true),
            "False" => Ok(false),
            other => Err(D::Error::custom(format!(
                "invalid availability flag: {}",
                other
            ))),
        }
    }
}

// ============================================================================
// 行レコード（永続表現）
// ============================================================================

/// books.dat の1行
#[derive(Debug, Serialize, Deserialize)]
pub struct BookRecord {
    pub book_id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(with = "python_bool")]
    pub available: bool,
}

pub(super) const BOOK_HEADERS: &[&str] = &["book_id", "title", "author", "isbn", "available"];

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            book_id: book.id.value(),
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            available: book.available,
        }
    }
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self {
            id: BookId::from_uuid(record.book_id),
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            available: record.available,
        }
    }
}

/// members.dat の1行
///
/// 借用中書籍・予約の一覧は導出値であるため列を持たない。
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberRecord {
    pub member_id: Uuid,
    pub name: String,
    pub contact: String,
}

pub(super) const MEMBER_HEADERS: &[&str] = &["member_id", "name", "contact"];

impl From<&Member> for MemberRecord {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.id.value(),
            name: member.name.clone(),
            contact: member.contact.clone(),
        }
    }
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Self {
            id: MemberId::from_uuid(record.member_id),
            name: record.name,
            contact: record.contact,
        }
    }
}

/// borrows.dat の1行
#[derive(Debug, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub borrow_id: Uuid,
    pub member_id: Uuid,
    pub book_id: Uuid,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

pub(super) const BORROW_HEADERS: &[&str] = &[
    "borrow_id",
    "member_id",
    "book_id",
    "borrow_date",
    "due_date",
];

impl From<&Borrow> for BorrowRecord {
    fn from(borrow: &Borrow) -> Self {
        Self {
            borrow_id: borrow.id.value(),
            member_id: borrow.member_id.value(),
            book_id: borrow.book_id.value(),
            borrow_date: borrow.borrow_date,
            due_date: borrow.due_date,
        }
    }
}

impl From<BorrowRecord> for Borrow {
    fn from(record: BorrowRecord) -> Self {
        Self {
            id: BorrowId::from_uuid(record.borrow_id),
            member_id: MemberId::from_uuid(record.member_id),
            book_id: BookId::from_uuid(record.book_id),
            borrow_date: record.borrow_date,
            due_date: record.due_date,
        }
    }
}

/// reservations.dat の1行
#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub reservation_id: Uuid,
    pub member_id: Uuid,
    pub book_id: Uuid,
    pub reservation_date: NaiveDate,
    pub status: ReservationStatus,
}

pub(super) const RESERVATION_HEADERS: &[&str] = &[
    "reservation_id",
    "member_id",
    "book_id",
    "reservation_date",
    "status",
];

impl From<&Reservation> for ReservationRecord {
    fn from(reservation: &Reservation) -> Self {
        Self {
            reservation_id: reservation.id.value(),
            member_id: reservation.member_id.value(),
            book_id: reservation.book_id.value(),
            reservation_date: reservation.reservation_date,
            status: reservation.status,
        }
    }
}

impl From<ReservationRecord> for Reservation {
    fn from(record: ReservationRecord) -> Self {
        Self {
            id: ReservationId::from_uuid(record.reservation_id),
            member_id: MemberId::from_uuid(record.member_id),
            book_id: BookId::from_uuid(record.book_id),
            reservation_date: record.reservation_date,
            status: record.status,
        }
    }
}

// ============================================================================
// ファイル読み書き
// ============================================================================

/// 表形式ファイルからコレクション全体を読み込む
///
/// ファイルが存在しない場合は警告を出して空を返す（初回起動）。
/// それ以外の読み込みエラーは呼び出し側へ伝播する。
pub(super) async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("record file {} not found, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// 表形式ファイルへコレクション全体を書き直す
///
/// ヘッダー行は空のコレクションでも必ず書く。一時ファイルに
/// 書き切ってからrenameで置き換え、書きかけの状態を残さない。
pub(super) async fn write_records<T: Serialize>(
    path: &Path,
    headers: &[&str],
    records: &[T],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;

    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
