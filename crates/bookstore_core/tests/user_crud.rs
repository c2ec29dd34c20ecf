use bookstore_core::{
    AuthorRepository, BookRepository, CommentRepository, ConnectionPool, EntityKind, NewAuthor,
    NewBook, NewComment, NewUser, RepoError, SqliteAuthorRepository, SqliteBookRepository,
    SqliteCommentRepository, SqliteUserRepository, UserRepository, UserService,
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

fn seed_book(store: &Store, title: &str) -> i64 {
    let author = store
        .authors
        .create_author(&NewAuthor::new(format!("Author of {title}")))
        .unwrap();
    store
        .books
        .create_book(&NewBook::new(title, author.author_id))
        .unwrap()
        .book_id
}

#[test]
fn create_returns_user_with_empty_collections() {
    let store = store();

    let john = store.users.create_user(&NewUser::new("John")).unwrap();
    assert!(john.user_id > 0);
    assert_eq!(john.user_name, "John");
    assert!(john.comments.is_empty());
    assert!(john.reviewed_books.is_empty());
}

#[test]
fn get_by_id_lists_comments_and_reviewed_books() {
    let store = store();
    let book_id = seed_book(&store, "Book 1");
    let john = store.users.create_user(&NewUser::new("John")).unwrap();
    let comment = store
        .comments
        .create_comment(&NewComment::new("Comment 1", john.user_id, book_id))
        .unwrap();

    let loaded = store.users.get_user_by_id(john.user_id).unwrap().unwrap();
    assert_eq!(loaded.user_name, "John");
    assert_eq!(loaded.comments.len(), 1);
    assert_eq!(loaded.comments[0].comment_id, comment.comment_id);
    assert_eq!(loaded.comments[0].text, "Comment 1");
    assert_eq!(loaded.reviewed_books.len(), 1);
    assert_eq!(loaded.reviewed_books[0].book_id, book_id);
    assert_eq!(loaded.reviewed_books[0].book_title, "Book 1");
}

#[test]
fn reviewed_books_follow_each_comment() {
    let store = store();
    let first_book = seed_book(&store, "Book 1");
    let second_book = seed_book(&store, "Book 2");
    let john = store.users.create_user(&NewUser::new("John")).unwrap();
    for (text, book_id) in [
        ("first take", first_book),
        ("second take", first_book),
        ("other book", second_book),
    ] {
        store
            .comments
            .create_comment(&NewComment::new(text, john.user_id, book_id))
            .unwrap();
    }

    let loaded = store.users.get_user_by_id(john.user_id).unwrap().unwrap();
    assert_eq!(loaded.comments.len(), 3);
    let reviewed: Vec<_> = loaded
        .reviewed_books
        .iter()
        .map(|book| book.book_id)
        .collect();
    assert_eq!(reviewed, vec![first_book, first_book, second_book]);
}

#[test]
fn get_all_keeps_silent_users() {
    let store = store();
    let book_id = seed_book(&store, "Book 1");
    let talker = store.users.create_user(&NewUser::new("Talker")).unwrap();
    store.users.create_user(&NewUser::new("Lurker")).unwrap();
    store
        .comments
        .create_comment(&NewComment::new("hello", talker.user_id, book_id))
        .unwrap();

    let all = store.users.get_all_users().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].user_name, "Talker");
    assert_eq!(all[0].comments.len(), 1);
    assert_eq!(all[1].user_name, "Lurker");
    assert!(all[1].comments.is_empty());
    assert!(all[1].reviewed_books.is_empty());
}

#[test]
fn delete_missing_user_returns_not_found() {
    let store = store();

    let err = store.users.delete_user(66).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(EntityKind::User, 66)));
    assert_eq!(err.to_string(), "User with id = 66 not found");
}

#[test]
fn delete_user_with_comments_is_a_constraint_error() {
    let store = store();
    let book_id = seed_book(&store, "Book 1");
    let john = store.users.create_user(&NewUser::new("John")).unwrap();
    store
        .comments
        .create_comment(&NewComment::new("keep me", john.user_id, book_id))
        .unwrap();

    let err = store.users.delete_user(john.user_id).unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)), "got {err:?}");
}

#[test]
fn service_delegates_to_repository() {
    let store = store();
    let service = UserService::new(store.users.clone());

    let created = service.create_user(&NewUser::new("Via service")).unwrap();
    assert_eq!(
        service.get_user_by_id(created.user_id).unwrap(),
        Some(created.clone())
    );
    service.delete_user(created.user_id).unwrap();
    assert!(service.get_user_by_id(created.user_id).unwrap().is_none());
    assert!(service.get_all_users().unwrap().is_empty());
}
