use std::io::Write;

use tracing::Level;

use crate::bucket_map::FixedBucketMap;
use crate::error::Error;
use crate::fibonacci::Memo;
use crate::options::MapOptions;

pub mod reader;

/// Commands understood by the phonebook shell. `reader::read_shell_line`
/// parses a line of text and calls the matching method.
pub trait Phonebook {
    fn put(&mut self, key: &str, value: &str) -> Result<(), Error>;

    fn get(&mut self, key: &str) -> Result<(), Error>;

    fn delete(&mut self, key: &str) -> Result<(), Error>;

    /// Lists every non-empty bucket.
    fn dump(&mut self) -> Result<(), Error>;

    fn stats(&mut self) -> Result<(), Error>;

    /// Starts over with an empty book, keeping the current options.
    fn new_book(&mut self) -> Result<(), Error>;

    /// Reports the current options.
    fn options(&mut self) -> Result<(), Error>;

    /// Changes one option. The book is rebuilt empty with the new options,
    /// since a table is never resized once built.
    fn set_option(&mut self, name: &str, value: &str) -> Result<(), Error>;

    fn fib(&mut self, n: usize) -> Result<(), Error>;

    /// Always returns `Err(Error::Quit)`.
    fn quit(&mut self) -> Result<(), Error>;
}

/// A phonebook of string keys and values that writes its answers to `out`.
pub struct Shell<W> {
    book: FixedBucketMap<String, String>,
    options: MapOptions,
    memo: Memo,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(options: MapOptions, out: W) -> Result<Shell<W>, Error> {
        Ok(Shell {
            book: FixedBucketMap::with_options(options)?,
            options,
            memo: Memo::new(),
            out,
        })
    }

    pub fn book(&self) -> &FixedBucketMap<String, String> {
        &self.book
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> Phonebook for Shell<W> {
    fn put(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let placement = self.book.put(key.to_string(), value.to_string());
        let verb = if placement.is_update() { "updated" } else { "stored" };
        writeln!(self.out, "{verb} {key} in bucket {}", placement.bucket())?;
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<(), Error> {
        match self.book.get(&key.to_string()) {
            Some(value) => writeln!(self.out, "{key}: {value}")?,
            None => writeln!(self.out, "There is no such value: {key}")?,
        }
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), Error> {
        match self.book.delete(&key.to_string()) {
            Some(value) => writeln!(self.out, "deleted {key}: {value}")?,
            None => writeln!(self.out, "nothing deleted for {key}")?,
        }
        Ok(())
    }

    fn dump(&mut self) -> Result<(), Error> {
        write!(self.out, "{}", self.book)?;
        Ok(())
    }

    fn stats(&mut self) -> Result<(), Error> {
        writeln!(
            self.out,
            "{} entries in {}/{} buckets",
            self.book.len(),
            self.book.occupied_buckets(),
            self.book.bucket_count()
        )?;
        writeln!(self.out, "{}", self.book.stats())?;
        Ok(())
    }

    fn new_book(&mut self) -> Result<(), Error> {
        self.book.clear();
        Ok(())
    }

    fn options(&mut self) -> Result<(), Error> {
        writeln!(self.out, "{}", self.options)?;
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let mut options = self.options;
        let changed = options.set_option(name, value)?;
        self.book = FixedBucketMap::with_options(options)?;
        self.options = options;
        tracing::event!(Level::INFO, option = changed, %value, "Rebuilt book");
        Ok(())
    }

    fn fib(&mut self, n: usize) -> Result<(), Error> {
        let term = self.memo.get(n)?;
        writeln!(self.out, "fib {n} = {term}")?;
        Ok(())
    }

    fn quit(&mut self) -> Result<(), Error> {
        Err(Error::Quit)
    }
}
