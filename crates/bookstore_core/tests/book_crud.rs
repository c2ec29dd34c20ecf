use bookstore_core::{
    AuthorRepository, BookRepository, BookService, BookShortDto, CommentRepository,
    ConnectionPool, EntityKind, NewAuthor, NewBook, NewComment, NewUser, RepoError,
    SqliteAuthorRepository, SqliteBookRepository, SqliteCommentRepository, SqliteUserRepository,
    UserRepository,
};

struct Store {
    authors: SqliteAuthorRepository,
    books: SqliteBookRepository,
    users: SqliteUserRepository,
    comments: SqliteCommentRepository,
}

fn store() -> Store {
    let pool = ConnectionPool::in_memory().unwrap();
    Store {
        authors: SqliteAuthorRepository::new(pool.clone()),
        books: SqliteBookRepository::new(pool.clone()),
        users: SqliteUserRepository::new(pool.clone()),
        comments: SqliteCommentRepository::new(pool),
    }
}

#[test]
fn create_returns_short_form() {
    let store = store();
    let author = store
        .authors
        .create_author(&NewAuthor::new("Author 1"))
        .unwrap();

    let created = store
        .books
        .create_book(&NewBook::new("Book 1", author.author_id))
        .unwrap();
    assert_eq!(
        created,
        BookShortDto {
            book_id: created.book_id,
            book_title: "Book 1".to_string(),
            author_id: author.author_id,
        }
    );
    assert!(created.book_id > 0);
}

#[test]
fn create_with_unknown_author_is_a_constraint_error() {
    let store = store();

    let err = store
        .books
        .create_book(&NewBook::new("Orphan", 404))
        .unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)), "got {err:?}");
    assert!(store.books.get_all_books().unwrap().is_empty());
}

#[test]
fn get_by_id_embeds_author_and_comments_with_users() {
    let store = store();
    let author = store
        .authors
        .create_author(&NewAuthor::new("Author 1"))
        .unwrap();
    let book = store
        .books
        .create_book(&NewBook::new("Book 1", author.author_id))
        .unwrap();
    let john = store.users.create_user(&NewUser::new("John")).unwrap();
    let jane = store.users.create_user(&NewUser::new("Jane")).unwrap();
    store
        .comments
        .create_comment(&NewComment::new("Comment 1", john.user_id, book.book_id))
        .unwrap();
    store
        .comments
        .create_comment(&NewComment::new("Comment 2", jane.user_id, book.book_id))
        .unwrap();

    let loaded = store.books.get_book_by_id(book.book_id).unwrap().unwrap();
    assert_eq!(loaded.book_title, "Book 1");

    let embedded_author = loaded.author.as_ref().expect("author is embedded");
    assert_eq!(embedded_author.author_id, author.author_id);
    assert_eq!(embedded_author.author_name, "Author 1");
    assert!(embedded_author.books.is_empty());

    assert_eq!(loaded.comments.len(), 2);
    assert_eq!(loaded.comments[0].text, "Comment 1");
    assert_eq!(
        loaded.comments[0].user.as_ref().map(|user| user.user_name.as_str()),
        Some("John")
    );
    assert_eq!(
        loaded.comments[1].user.as_ref().map(|user| user.user_id),
        Some(jane.user_id)
    );
    assert!(loaded.comments[0].book.is_none());
}

#[test]
fn get_all_lists_books_once_with_empty_comment_lists() {
    let store = store();
    let author = store
        .authors
        .create_author(&NewAuthor::new("Author 1"))
        .unwrap();
    let commented = store
        .books
        .create_book(&NewBook::new("Commented", author.author_id))
        .unwrap();
    store
        .books
        .create_book(&NewBook::new("Silent", author.author_id))
        .unwrap();
    let user = store.users.create_user(&NewUser::new("Reader")).unwrap();
    for text in ["one", "two", "three"] {
        store
            .comments
            .create_comment(&NewComment::new(text, user.user_id, commented.book_id))
            .unwrap();
    }

    let all = store.books.get_all_books().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].book_title, "Commented");
    assert_eq!(all[0].comments.len(), 3);
    assert_eq!(all[1].book_title, "Silent");
    assert!(all[1].comments.is_empty());
    assert!(all.iter().all(|book| book.author.is_some()));
}

#[test]
fn get_by_missing_id_returns_none() {
    let store = store();
    assert!(store.books.get_book_by_id(1).unwrap().is_none());
}

#[test]
fn delete_missing_book_returns_not_found() {
    let store = store();

    let err = store.books.delete_book(66).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(EntityKind::Book, 66)));
    assert_eq!(err.to_string(), "Book with id = 66 not found");
}

#[test]
fn delete_book_then_author_succeeds() {
    let store = store();
    let author = store
        .authors
        .create_author(&NewAuthor::new("Author 1"))
        .unwrap();
    let book = store
        .books
        .create_book(&NewBook::new("Book 1", author.author_id))
        .unwrap();

    store.books.delete_book(book.book_id).unwrap();
    assert!(store.books.get_book_by_id(book.book_id).unwrap().is_none());
    store.authors.delete_author(author.author_id).unwrap();
}

#[test]
fn service_delegates_to_repository() {
    let store = store();
    let author = store
        .authors
        .create_author(&NewAuthor::new("Author 1"))
        .unwrap();
    let service = BookService::new(store.books.clone());

    let created = service
        .create_book(&NewBook::new("Via service", author.author_id))
        .unwrap();
    let loaded = service.get_book_by_id(created.book_id).unwrap().unwrap();
    assert_eq!(loaded.book_title, "Via service");
    assert_eq!(service.get_all_books().unwrap().len(), 1);
    service.delete_book(created.book_id).unwrap();
    assert!(service.get_all_books().unwrap().is_empty());
}
