use serde::{Deserialize, Serialize};

use super::MemberId;
use super::commands::UpdateMember;

/// Member集約 - 図書館の会員
///
/// 借用中書籍や予約の一覧はMember側に保持しない。正となる
/// Borrow/Reservationコレクションへの索引として導出する
/// （[`crate::domain::borrow::borrowed_book_ids`]、
/// [`crate::domain::reservation::reservation_ids_for_member`]）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub contact: String,
}

/// 純粋関数：会員を登録する
pub fn register_member(name: String, contact: String) -> Member {
    Member {
        id: MemberId::new(),
        name,
        contact,
    }
}

/// 純粋関数：会員情報を更新する
///
/// コマンドで指定されたフィールドのみ適用する。
pub fn apply_member_update(member: &Member, cmd: &UpdateMember) -> Member {
    Member {
        name: cmd.name.clone().unwrap_or_else(|| member.name.clone()),
        contact: cmd.contact.clone().unwrap_or_else(|| member.contact.clone()),
        ..member.clone()
    }
}

/// 純粋関数：会員名の部分一致検索
///
/// 大文字小文字を区別せず、元の並び順を保って返す。
pub fn search_by_name<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let query = query.to_lowercase();
    members
        .iter()
        .filter(|member| member.name.to_lowercase().contains(&query))
        .collect()
}
