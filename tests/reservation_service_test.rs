mod common;

use common::{day, seed_book, seed_member, test_context};
use rusty_library_circulation::application::lending::borrow_book;
use rusty_library_circulation::application::reservation::{
    ReservationError, book_summary, cancel_reservation, reserve_book,
};
use rusty_library_circulation::domain::commands::{BorrowBook, CancelReservation, ReserveBook};
use rusty_library_circulation::domain::reservation::ReservationStatus;
use rusty_library_circulation::domain::value_objects::{BookId, MemberId, ReservationId};
use rusty_library_circulation::ports::reservation_store::ReservationStore;

// ============================================================================
// 予約
// ============================================================================

#[tokio::test]
async fn test_reserve_available_book_is_rejected() {
    let ctx = test_context();
    let book_id = seed_book(&ctx.deps, "Dune").await;
    let member_id = seed_member(&ctx.deps, "Alice").await;

    let result = reserve_book(
        &ctx.deps,
        ReserveBook {
            member_id,
            book_id,
            reservation_date: day("2024-03-01"),
        },
    )
    .await;

    assert!(matches!(result, Err(ReservationError::BookStillAvailable)));
    // 拒否された操作は予約を作らない
    assert!(ctx.deps.reservation_store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reserve_fails_for_unknown_member() {
    let ctx = test_context();
    let book_id = seed_book(&ctx.deps, "Dune").await;

    let result = reserve_book(
        &ctx.deps,
        ReserveBook {
            member_id: MemberId::new(),
            book_id,
            reservation_date: day("2024-03-01"),
        },
    )
    .await;

    assert!(matches!(result, Err(ReservationError::MemberNotFound)));
}

#[tokio::test]
async fn test_reserve_fails_for_unknown_book() {
    let ctx = test_context();
    let member_id = seed_member(&ctx.deps, "Alice").await;

    let result = reserve_book(
        &ctx.deps,
        ReserveBook {
            member_id,
            book_id: BookId::new(),
            reservation_date: day("2024-03-01"),
        },
    )
    .await;

    assert!(matches!(result, Err(ReservationError::BookNotFound)));
}

#[tokio::test]
async fn test_reserve_borrowed_book_starts_pending() {
    let ctx = test_context();
    let book_id = seed_book(&ctx.deps, "Dune").await;
    let alice = seed_member(&ctx.deps, "Alice").await;
    let bob = seed_member(&ctx.deps, "Bob").await;

    borrow_book(
        &ctx.deps,
        BorrowBook {
            member_id: alice,
            book_id,
            borrow_date: day("2024-03-01"),
        },
    )
    .await
    .unwrap();

    let reservation_id = reserve_book(
        &ctx.deps,
        ReserveBook {
            member_id: bob,
            book_id,
            reservation_date: day("2024-03-02"),
        },
    )
    .await
    .unwrap();

    let reservations = ctx.deps.reservation_store.load().await.unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, reservation_id);
    assert_eq!(reservations[0].status, ReservationStatus::Pending);
}

// ============================================================================
// 取り消し
// ============================================================================

#[tokio::test]
async fn test_cancel_reservation_removes_record() {
    let ctx = test_context();
    let book_id = seed_book(&ctx.deps, "Dune").await;
    let alice = seed_member(&ctx.deps, "Alice").await;
    let bob = seed_member(&ctx.deps, "Bob").await;

    borrow_book(
        &ctx.deps,
        BorrowBook {
            member_id: alice,
            book_id,
            borrow_date: day("2024-03-01"),
        },
    )
    .await
    .unwrap();
    let reservation_id = reserve_book(
        &ctx.deps,
        ReserveBook {
            member_id: bob,
            book_id,
            reservation_date: day("2024-03-02"),
        },
    )
    .await
    .unwrap();

    cancel_reservation(&ctx.deps, CancelReservation { reservation_id })
        .await
        .unwrap();

    assert!(ctx.deps.reservation_store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_fails_for_unknown_reservation() {
    let ctx = test_context();

    let result = cancel_reservation(
        &ctx.deps,
        CancelReservation {
            reservation_id: ReservationId::new(),
        },
    )
    .await;

    assert!(matches!(result, Err(ReservationError::ReservationNotFound)));
}

// ============================================================================
// 概況
// ============================================================================

#[tokio::test]
async fn test_summary_counts_availability() {
    let ctx = test_context();
    let dune = seed_book(&ctx.deps, "Dune").await;
    seed_book(&ctx.deps, "Emma").await;
    let alice = seed_member(&ctx.deps, "Alice").await;

    borrow_book(
        &ctx.deps,
        BorrowBook {
            member_id: alice,
            book_id: dune,
            borrow_date: day("2024-03-01"),
        },
    )
    .await
    .unwrap();

    let summary = book_summary(&ctx.deps).await.unwrap();
    assert_eq!(summary.total_books, 2);
    assert_eq!(summary.available_books, 1);
    assert_eq!(summary.unavailable_books, 1);
    assert!(summary.queues.is_empty());
}

#[tokio::test]
async fn test_summary_queue_lists_members_in_reservation_order() {
    let ctx = test_context();
    let book_id = seed_book(&ctx.deps, "Dune").await;
    let alice = seed_member(&ctx.deps, "Alice").await;
    let bob = seed_member(&ctx.deps, "Bob").await;
    let carol = seed_member(&ctx.deps, "Carol").await;

    borrow_book(
        &ctx.deps,
        BorrowBook {
            member_id: alice,
            book_id,
            borrow_date: day("2024-03-01"),
        },
    )
    .await
    .unwrap();

    reserve_book(
        &ctx.deps,
        ReserveBook {
            member_id: bob,
            book_id,
            reservation_date: day("2024-03-02"),
        },
    )
    .await
    .unwrap();
    reserve_book(
        &ctx.deps,
        ReserveBook {
            member_id: carol,
            book_id,
            reservation_date: day("2024-03-03"),
        },
    )
    .await
    .unwrap();

    let summary = book_summary(&ctx.deps).await.unwrap();
    assert_eq!(summary.queues.len(), 1);

    let queue = &summary.queues[0];
    assert_eq!(queue.title, "Dune");
    assert_eq!(queue.entries.len(), 2);
    assert_eq!(queue.entries[0].member_id, bob);
    assert_eq!(queue.entries[1].member_id, carol);
}

#[tokio::test]
async fn test_summary_queue_order_ignores_reservation_dates() {
    let ctx = test_context();
    let book_id = seed_book(&ctx.deps, "Dune").await;
    let alice = seed_member(&ctx.deps, "Alice").await;
    let bob = seed_member(&ctx.deps, "Bob").await;
    let carol = seed_member(&ctx.deps, "Carol").await;
    let dave = seed_member(&ctx.deps, "Dave").await;

    borrow_book(
        &ctx.deps,
        BorrowBook {
            member_id: alice,
            book_id,
            borrow_date: day("2024-03-01"),
        },
    )
    .await
    .unwrap();

    // 日付を逆順に与えても作成順で並ぶ
    for (member_id, date) in [
        (bob, "2024-03-09"),
        (carol, "2024-03-05"),
        (dave, "2024-03-02"),
    ] {
        reserve_book(
            &ctx.deps,
            ReserveBook {
                member_id,
                book_id,
                reservation_date: day(date),
            },
        )
        .await
        .unwrap();
    }

    let summary = book_summary(&ctx.deps).await.unwrap();
    let entries = &summary.queues[0].entries;
    assert_eq!(entries[0].member_id, bob);
    assert_eq!(entries[1].member_id, carol);
    assert_eq!(entries[2].member_id, dave);
}

#[tokio::test]
async fn test_summary_groups_books_by_first_reservation() {
    let ctx = test_context();
    let dune = seed_book(&ctx.deps, "Dune").await;
    let emma = seed_book(&ctx.deps, "Emma").await;
    let alice = seed_member(&ctx.deps, "Alice").await;
    let bob = seed_member(&ctx.deps, "Bob").await;
    let carol = seed_member(&ctx.deps, "Carol").await;

    for book_id in [dune, emma] {
        borrow_book(
            &ctx.deps,
            BorrowBook {
                member_id: alice,
                book_id,
                borrow_date: day("2024-03-01"),
            },
        )
        .await
        .unwrap();
    }

    // Emmaへの予約が先、Duneへの予約が後
    for (member_id, book_id, date) in [
        (bob, emma, "2024-03-02"),
        (carol, dune, "2024-03-03"),
        (carol, emma, "2024-03-04"),
    ] {
        reserve_book(
            &ctx.deps,
            ReserveBook {
                member_id,
                book_id,
                reservation_date: day(date),
            },
        )
        .await
        .unwrap();
    }

    let summary = book_summary(&ctx.deps).await.unwrap();
    assert_eq!(summary.queues.len(), 2);
    assert_eq!(summary.queues[0].title, "Emma");
    assert_eq!(summary.queues[0].entries.len(), 2);
    assert_eq!(summary.queues[1].title, "Dune");
    assert_eq!(summary.queues[1].entries.len(), 1);
}
