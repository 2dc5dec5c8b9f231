use std::io::Write;

use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::model::Record;

/// Print every record, one per line, in insertion order.
pub fn print_all<W: Write>(book: &AddressBook, out: &mut W) -> BookResult<()> {
    for (_, record) in book {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Walk through the address book operations, writing results to `out`.
pub fn run_demo<W: Write>(out: &mut W) -> BookResult<()> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    print_all(&book, out)?;

    let john = book.find_mut("John").ok_or_else(|| BookError::ContactNotFound {
        name: "John".into(),
    })?;
    john.edit_phone("1234567890", "1112223333")?;
    writeln!(out, "{}", john)?;

    if let Some(phone) = john.find_phone("5555555555") {
        writeln!(out, "{}: {}", john.name(), phone)?;
    }

    book.delete("Jane", out)?;
    Ok(())
}
