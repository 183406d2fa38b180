use bookcase_core::{Book, BookValidationError};

#[test]
fn book_new_keeps_fields_verbatim() {
    let book = Book::new("  1984 ", "George Orwell", "", -500);

    assert_eq!(book.title, "  1984 ");
    assert_eq!(book.author, "George Orwell");
    assert_eq!(book.genre, "");
    assert_eq!(book.year, -500);
}

#[test]
fn with_year_text_parses_integer_years() {
    let book = Book::with_year_text("Libro Antiguo", "Autor Desconocido", "Historia", "-500")
        .unwrap();
    assert_eq!(book.year, -500);
}

#[test]
fn with_year_text_rejects_non_integer_year() {
    let err = Book::with_year_text("Libro Erróneo", "Autor Erróneo", "Error", "año").unwrap_err();
    assert_eq!(
        err,
        BookValidationError::NonIntegerYear {
            value: "año".to_string()
        }
    );
    assert!(err.to_string().contains("year must be an integer"));
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::new(
        "Cien años de soledad",
        "Gabriel García Márquez",
        "Novela",
        1967,
    );

    let json = serde_json::to_value(&book).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(json["title"], "Cien años de soledad");
    assert_eq!(json["author"], "Gabriel García Márquez");
    assert_eq!(json["genre"], "Novela");
    assert_eq!(json["year"], 1967);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn deserialize_rejects_missing_key() {
    let value = serde_json::json!({
        "title": "Don Quijote de la Mancha",
        "author": "Miguel de Cervantes",
        "year": 1605
    });

    let err = serde_json::from_value::<Book>(value).unwrap_err();
    assert!(err.to_string().contains("genre"), "unexpected error: {err}");
}

#[test]
fn deserialize_rejects_non_integer_year() {
    for year in [serde_json::json!("1605"), serde_json::json!(1605.5)] {
        let value = serde_json::json!({
            "title": "Don Quijote de la Mancha",
            "author": "Miguel de Cervantes",
            "genre": "Novela",
            "year": year
        });
        assert!(serde_json::from_value::<Book>(value).is_err());
    }
}

#[test]
fn deserialize_ignores_unknown_keys() {
    let value = serde_json::json!({
        "title": "1984",
        "author": "George Orwell",
        "genre": "Distopía",
        "year": 1949,
        "isbn": "978-0451524935"
    });

    let book: Book = serde_json::from_value(value).unwrap();
    assert_eq!(book, Book::new("1984", "George Orwell", "Distopía", 1949));
}
