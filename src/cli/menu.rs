use std::io::Write;

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use uuid::Uuid;

use crate::application::{ServiceDependencies, catalog, lending, reservation};
use crate::domain::commands::*;
use crate::domain::value_objects::*;

type Input = Lines<BufReader<Stdin>>;

/// プロンプトを表示して1行読む
///
/// 入力が閉じられた場合は空文字列を返す（選択肢0と同様に扱われ、
/// ループは自然に終了へ向かう）。
async fn prompt(input: &mut Input, message: &str) -> std::io::Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;
    Ok(input
        .next_line()
        .await?
        .unwrap_or_default()
        .trim()
        .to_string())
}

/// 空入力を「変更なし」として扱う
fn optional(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// ID入力のパース
fn parse_id(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value).ok()
}

/// テキストメニューの入口
///
/// 職員用と会員用の2つのロールメニュー。不正な選択はエラー終了
/// せず再表示し、0で各ループを抜ける。操作の失敗はメッセージを
/// 表示して継続する。
pub async fn run(deps: &ServiceDependencies) -> std::io::Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!();
        println!("Library Management System");
        println!("1. Staff application");
        println!("2. Customer application");
        println!("0. Exit");
        let choice = prompt(&mut input, "Enter your choice: ").await?;

        match choice.as_str() {
            "1" => staff_menu(deps, &mut input).await?,
            "2" => customer_menu(deps, &mut input).await?,
            "0" | "" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

// ============================================================================
// 職員メニュー
// ============================================================================

async fn staff_menu(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    loop {
        println!();
        println!("Staff Application");
        println!("1. Search books");
        println!("2. Create book");
        println!("3. Edit book");
        println!("4. Delete book");
        println!("5. Create member");
        println!("6. Edit member");
        println!("7. Delete member");
        println!("8. Search members");
        println!("9. Create reservation");
        println!("10. Delete reservation");
        println!("11. Borrow book");
        println!("12. Return book");
        println!("13. Book summary");
        println!("0. Exit");
        let choice = prompt(input, "Enter your choice: ").await?;

        match choice.as_str() {
            "1" => search_books(deps, input).await?,
            "2" => create_book(deps, input).await?,
            "3" => edit_book(deps, input).await?,
            "4" => delete_book(deps, input).await?,
            "5" => create_member(deps, input).await?,
            "6" => edit_member(deps, input).await?,
            "7" => delete_member(deps, input).await?,
            "8" => search_members(deps, input).await?,
            "9" => create_reservation(deps, input).await?,
            "10" => delete_reservation(deps, input).await?,
            "11" => borrow_book(deps, input).await?,
            "12" => return_book(deps, input).await?,
            "13" => book_summary(deps).await,
            "0" | "" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

// ============================================================================
// 会員メニュー
// ============================================================================

async fn customer_menu(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    loop {
        println!();
        println!("Customer Application");
        println!("1. Search books");
        println!("2. Make reservation");
        println!("0. Exit");
        let choice = prompt(input, "Enter your choice: ").await?;

        match choice.as_str() {
            "1" => search_books(deps, input).await?,
            "2" => create_reservation(deps, input).await?,
            "0" | "" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

// ============================================================================
// 操作（アプリケーション層への薄い委譲）
// ============================================================================

async fn search_books(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let query = prompt(input, "Enter search query: ").await?;

    match catalog::search_books(deps, &query).await {
        Ok(results) if results.is_empty() => println!("No matching books found."),
        Ok(results) => {
            println!();
            println!("Search results:");
            for book in results {
                println!(
                    "ID: {}, Title: {}, Author: {}, Available: {}",
                    book.id.value(),
                    book.title,
                    book.author,
                    book.available
                );
            }
        }
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn create_book(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let title = prompt(input, "Enter book title: ").await?;
    let author = prompt(input, "Enter author name: ").await?;
    let isbn = prompt(input, "Enter ISBN: ").await?;

    match catalog::add_book(deps, AddBook { title, author, isbn }).await {
        Ok(book_id) => println!("New book created successfully (ID: {}).", book_id.value()),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn edit_book(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let id = prompt(input, "Enter book ID: ").await?;
    let Some(id) = parse_id(&id) else {
        println!("Invalid book ID.");
        return Ok(());
    };

    let title = prompt(input, "Enter new title (or leave blank): ").await?;
    let author = prompt(input, "Enter new author (or leave blank): ").await?;
    let isbn = prompt(input, "Enter new ISBN (or leave blank): ").await?;

    let cmd = UpdateBook {
        book_id: BookId::from_uuid(id),
        title: optional(title),
        author: optional(author),
        isbn: optional(isbn),
    };

    match catalog::update_book(deps, cmd).await {
        Ok(()) => println!("Book updated successfully."),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn delete_book(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let id = prompt(input, "Enter book ID to delete: ").await?;
    let Some(id) = parse_id(&id) else {
        println!("Invalid book ID.");
        return Ok(());
    };

    match catalog::remove_book(deps, BookId::from_uuid(id)).await {
        Ok(()) => println!("Book deleted successfully."),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn create_member(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let name = prompt(input, "Enter member name: ").await?;
    let contact = prompt(input, "Enter member contact: ").await?;

    match catalog::register_member(deps, RegisterMember { name, contact }).await {
        Ok(member_id) => println!(
            "New member created successfully (ID: {}).",
            member_id.value()
        ),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn edit_member(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let id = prompt(input, "Enter member ID: ").await?;
    let Some(id) = parse_id(&id) else {
        println!("Invalid member ID.");
        return Ok(());
    };

    let name = prompt(input, "Enter new name (or leave blank): ").await?;
    let contact = prompt(input, "Enter new contact (or leave blank): ").await?;

    let cmd = UpdateMember {
        member_id: MemberId::from_uuid(id),
        name: optional(name),
        contact: optional(contact),
    };

    match catalog::update_member(deps, cmd).await {
        Ok(()) => println!("Member updated successfully."),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn delete_member(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let id = prompt(input, "Enter member ID to delete: ").await?;
    let Some(id) = parse_id(&id) else {
        println!("Invalid member ID.");
        return Ok(());
    };

    match catalog::remove_member(deps, MemberId::from_uuid(id)).await {
        Ok(()) => println!("Member deleted successfully."),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn search_members(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let query = prompt(input, "Enter member name: ").await?;

    match catalog::search_members(deps, &query).await {
        Ok(results) if results.is_empty() => println!("No matching members found."),
        Ok(results) => {
            println!();
            println!("Member search results:");
            for member in results {
                println!(
                    "ID: {}, Name: {}, Contact: {}",
                    member.id.value(),
                    member.name,
                    member.contact
                );
            }
        }
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn create_reservation(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let member_id = prompt(input, "Enter member ID: ").await?;
    let Some(member_id) = parse_id(&member_id) else {
        println!("Invalid member ID.");
        return Ok(());
    };
    let book_id = prompt(input, "Enter book ID: ").await?;
    let Some(book_id) = parse_id(&book_id) else {
        println!("Invalid book ID.");
        return Ok(());
    };

    let cmd = ReserveBook {
        member_id: MemberId::from_uuid(member_id),
        book_id: BookId::from_uuid(book_id),
        reservation_date: Local::now().date_naive(),
    };

    match reservation::reserve_book(deps, cmd).await {
        Ok(reservation_id) => println!(
            "Reservation made successfully (ID: {}).",
            reservation_id.value()
        ),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn delete_reservation(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let id = prompt(input, "Enter reservation ID: ").await?;
    let Some(id) = parse_id(&id) else {
        println!("Invalid reservation ID.");
        return Ok(());
    };

    let cmd = CancelReservation {
        reservation_id: ReservationId::from_uuid(id),
    };

    match reservation::cancel_reservation(deps, cmd).await {
        Ok(()) => println!("Reservation deleted successfully."),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn borrow_book(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let member_id = prompt(input, "Enter member ID: ").await?;
    let Some(member_id) = parse_id(&member_id) else {
        println!("Invalid member ID.");
        return Ok(());
    };
    let book_id = prompt(input, "Enter book ID: ").await?;
    let Some(book_id) = parse_id(&book_id) else {
        println!("Invalid book ID.");
        return Ok(());
    };

    let cmd = BorrowBook {
        member_id: MemberId::from_uuid(member_id),
        book_id: BookId::from_uuid(book_id),
        borrow_date: Local::now().date_naive(),
    };

    match lending::borrow_book(deps, cmd).await {
        Ok(borrow_id) => println!(
            "Book borrowed successfully (borrow ID: {}).",
            borrow_id.value()
        ),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn return_book(deps: &ServiceDependencies, input: &mut Input) -> std::io::Result<()> {
    let id = prompt(input, "Enter borrow ID: ").await?;
    let Some(id) = parse_id(&id) else {
        println!("Invalid borrow ID.");
        return Ok(());
    };

    let cmd = ReturnBook {
        borrow_id: BorrowId::from_uuid(id),
    };

    match lending::return_book(deps, cmd).await {
        Ok(()) => println!("Book returned successfully."),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

async fn book_summary(deps: &ServiceDependencies) {
    let summary = match reservation::book_summary(deps).await {
        Ok(summary) => summary,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    println!();
    println!("Book Summary:");
    println!("Total books: {}", summary.total_books);
    println!("Available books: {}", summary.available_books);
    println!("Unavailable books: {}", summary.unavailable_books);
    println!();
    println!("Reservation queues:");
    for queue in &summary.queues {
        println!("{} by {}:", queue.title, queue.author);
        for entry in &queue.entries {
            println!("  - {} ({})", entry.member_name, entry.reserved_on);
        }
    }
}
