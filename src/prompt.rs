//! Чтение и разбор пользовательского ввода.
//!
//! # Пример
//!
//! ```
//! use dataops_rs::prompt::parse_number;
//!
//! assert_eq!(parse_number("42").unwrap(), 42);
//! assert_eq!(parse_number("-7").unwrap(), -7);
//! assert!(parse_number("abc").is_err());
//! ```

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use thiserror::Error;

/// Ошибка разбора числа из строки ввода.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number '{input}': {source}")]
pub struct NumberError {
    /// Исходная строка ввода.
    pub input: String,
    /// Причина из стандартного разборщика чисел.
    #[source]
    pub source: ParseIntError,
}

/// Печатает приглашение и читает одну строку ввода.
///
/// Приглашение выводится без перевода строки, поток сбрасывается до
/// чтения. Возвращаемая строка очищена от краевых пробелов; на конце
/// потока возвращается пустая строка.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Разбирает строку как целое число `i64`.
///
/// # Ошибки
///
/// Возвращает [`NumberError`] для строк, не являющихся целым числом.
pub fn parse_number(input: &str) -> Result<i64, NumberError> {
    input.parse().map_err(|source| NumberError {
        input: input.to_string(),
        source,
    })
}
