//! Запись сведений о выполненной операции.
//!
//! Запись ограничивается одной форматированной строкой в выходной поток;
//! это заглушка на месте настоящего хранилища.
//!
//! # Пример
//!
//! ```
//! use dataops_rs::recorder::OperationRecord;
//!
//! let record = OperationRecord::new('A', 5, 15);
//! assert_eq!(
//!     record.to_string(),
//!     "Updating database with operation: A, Input: 5, Output: 15"
//! );
//! ```

use std::fmt;
use std::io::{self, Write};

/// Сведения об одной выполненной операции.
///
/// Значение живёт от выполнения операции до записи и не сохраняется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    /// Односимвольный код операции.
    pub operation: char,
    /// Входное число.
    pub input: i64,
    /// Результат операции.
    pub output: i64,
}

impl OperationRecord {
    /// Создаёт запись об операции.
    #[must_use]
    pub const fn new(operation: char, input: i64, output: i64) -> Self {
        Self {
            operation,
            input,
            output,
        }
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Updating database with operation: {}, Input: {}, Output: {}",
            self.operation, self.input, self.output
        )
    }
}

/// Писатель записей поверх выходного потока.
pub struct Recorder<W> {
    sink: W,
}

impl<W: Write> Recorder<W> {
    /// Создаёт писатель поверх выходного потока.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Записывает одну запись об операции и сбрасывает поток.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`io::Error`] при ошибке записи в поток.
    pub fn record(&mut self, record: &OperationRecord) -> io::Result<()> {
        writeln!(self.sink, "{record}")?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_writes_line() {
        let mut sink = Vec::new();
        let mut recorder = Recorder::new(&mut sink);

        recorder.record(&OperationRecord::new('A', 5, 15)).unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "Updating database with operation: A, Input: 5, Output: 15\n"
        );
    }

    #[test]
    fn record_appends_lines() {
        let mut sink = Vec::new();
        let mut recorder = Recorder::new(&mut sink);

        recorder.record(&OperationRecord::new('A', 5, 15)).unwrap();
        recorder.record(&OperationRecord::new('S', 5, 0)).unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("Updating database with operation: S, Input: 5, Output: 0\n"));
    }

    #[test]
    fn display_negative_numbers() {
        let record = OperationRecord::new('S', -5, -10);
        assert_eq!(
            record.to_string(),
            "Updating database with operation: S, Input: -5, Output: -10"
        );
    }

    #[test]
    fn eq_and_clone() {
        let a = OperationRecord::new('A', 1, 11);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
