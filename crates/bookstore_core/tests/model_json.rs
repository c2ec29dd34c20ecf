use bookstore_core::{
    AuthorDto, AuthorInput, BookDto, BookInput, CommentDto, CommentInput, NewAuthor, NewBook,
    NewComment, NewUser, UserDto, UserInput, ValidationError,
};
use serde_json::json;

#[test]
fn author_serializes_camel_case_with_nested_books() {
    let mut author = AuthorDto::new(1, "Author 1");
    author.books.push(BookDto::new(2, "Book 1"));

    let value = serde_json::to_value(&author).unwrap();
    assert_eq!(
        value,
        json!({
            "authorId": 1,
            "authorName": "Author 1",
            "books": [{ "bookId": 2, "bookTitle": "Book 1", "comments": [] }]
        })
    );
}

#[test]
fn user_serializes_reviewed_books_key() {
    let user = UserDto::new(3, "John");
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(
        value,
        json!({ "userId": 3, "userName": "John", "comments": [], "reviewedBooks": [] })
    );
}

#[test]
fn comment_omits_absent_user_and_book() {
    let comment = CommentDto::new(4, "nice");
    let value = serde_json::to_value(&comment).unwrap();
    assert_eq!(value, json!({ "commentId": 4, "text": "nice" }));
}

#[test]
fn author_input_validates_name() {
    let input: AuthorInput = serde_json::from_str(r#"{"authorName":"Author 1"}"#).unwrap();
    assert_eq!(input.validate().unwrap(), NewAuthor::new("Author 1"));

    let blank: AuthorInput = serde_json::from_str(r#"{"authorName":"   "}"#).unwrap();
    let err = blank.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Author must have a non-null and non-empty authorName"
    );

    let missing: AuthorInput = serde_json::from_str("{}").unwrap();
    assert!(matches!(
        missing.validate(),
        Err(ValidationError::BlankField { .. })
    ));
}

#[test]
fn book_input_requires_title_then_positive_author() {
    let valid: BookInput =
        serde_json::from_value(json!({ "bookTitle": "Book 1", "authorId": 1 })).unwrap();
    assert_eq!(valid.validate().unwrap(), NewBook::new("Book 1", 1));

    let no_title: BookInput = serde_json::from_value(json!({ "authorId": 0 })).unwrap();
    assert_eq!(
        no_title.validate().unwrap_err().to_string(),
        "Book must have a non-null and non-empty bookTitle"
    );

    let zero_author: BookInput =
        serde_json::from_value(json!({ "bookTitle": "Book 1", "authorId": 0 })).unwrap();
    assert_eq!(
        zero_author.validate().unwrap_err().to_string(),
        "Book must have a positive authorId"
    );
}

#[test]
fn user_input_accepts_name_and_user_name() {
    let by_name: UserInput = serde_json::from_value(json!({ "name": "John" })).unwrap();
    assert_eq!(by_name.validate().unwrap(), NewUser::new("John"));

    let by_alias: UserInput = serde_json::from_value(json!({ "userName": "Jane" })).unwrap();
    assert_eq!(by_alias.validate().unwrap(), NewUser::new("Jane"));

    let empty: UserInput = serde_json::from_value(json!({ "name": "" })).unwrap();
    assert_eq!(
        empty.validate().unwrap_err().to_string(),
        "User must have a non-null and non-empty userName"
    );
}

#[test]
fn comment_input_checks_fields_in_order() {
    let valid: CommentInput =
        serde_json::from_value(json!({ "text": "hi", "userId": 1, "bookId": 2 })).unwrap();
    assert_eq!(valid.validate().unwrap(), NewComment::new("hi", 1, 2));

    let bad_user: CommentInput =
        serde_json::from_value(json!({ "text": "hi", "userId": -1, "bookId": 0 })).unwrap();
    assert_eq!(
        bad_user.validate().unwrap_err().to_string(),
        "Comment must have a positive userId"
    );

    let bad_book: CommentInput =
        serde_json::from_value(json!({ "text": "hi", "userId": 1 })).unwrap();
    assert_eq!(
        bad_book.validate().unwrap_err().to_string(),
        "Comment must have a positive bookId"
    );

    let no_text: CommentInput = serde_json::from_value(json!({ "userId": 1, "bookId": 2 })).unwrap();
    assert_eq!(
        no_text.validate().unwrap_err().to_string(),
        "Comment must have a non-null and non-empty text"
    );
}
