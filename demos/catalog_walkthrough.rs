//! Walk through the life of a small library catalog.
//!
//! Run with `RUST_LOG=library_catalog=debug` to see the catalog's own log events.

use library_catalog::{Book, CatalogError, InvariantChecks, Library, LibraryConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = LibraryConfig::new("Biblioteca Popular", 12)
        .with_invariant_checks(InvariantChecks::Always);
    let mut library = Library::with_config(config)?;

    library.add_book(Book::new(7, "Rayuela", "Julio Cortázar", 600, 2)?)?;
    library.add_book(Book::new(3, "El Aleph", "Jorge Luis Borges", 146, 3)?)?;
    library.add_book(Book::new(5, "Ficciones", "Jorge Luis Borges", 203, 1)?)?;
    library.add_book(
        Book::builder(9)
            .title("Historia universal de la infamia")
            .author("Jorge Luis Borges")
            .pages(140)
            .copies(2)
            .build()?,
    )?;
    println!("{library}\n");

    match library.add_book(Book::new(3, "Otro libro", "Anónimo", 10, 1)?) {
        Err(CatalogError::DuplicateId(id)) => println!("Rejected duplicate id {id}"),
        other => println!("Unexpected: {other:?}"),
    }
    match library.add_book(Book::new(11, "Bestiario", "Julio Cortázar", 160, 9)?) {
        Err(err) => println!("Rejected: {err}"),
        Ok(()) => println!("Unexpectedly accepted"),
    }

    let probe = library.probe(5);
    println!(
        "Lookup of id 5 took {} comparisons over {} books",
        probe.comparisons,
        library.len()
    );

    println!("Lent Ficciones, {} left", library.lend_book(5)?);
    if let Err(err) = library.lend_book(5) {
        println!("Second loan failed: {err}");
    }
    println!("Returned Ficciones, {} on the shelf", library.return_book(5)?);

    let wordiest = library.most_words_in_title()?;
    println!(
        "Most words in title: {} ({} words)",
        wordiest.title(),
        Library::count_words(wordiest.title())
    );

    let removed = library.delete_books_with_author("Jorge Luis Borges")?;
    println!("Removed {removed} books by Borges\n");
    println!("{library}");

    Ok(())
}
