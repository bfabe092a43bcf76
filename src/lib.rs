//! # dataops_rs
//!
//! Интерактивная консольная программа операций над числами.
//!
//! Поддерживает:
//! - Две фиксированные операции: прибавление 10 (код `A`) и вычитание 5 (код `S`)
//! - Выбор операции односимвольным кодом без учёта регистра
//! - Запись сведений о выполненной операции в выходной поток
//!
//! # Пример использования
//!
//! ```
//! use dataops_rs::operation::Operation;
//!
//! assert_eq!(Operation::Addition.apply(5), 15);
//! assert_eq!(Operation::Subtraction.apply(5), 0);
//! ```

pub mod operation;
pub mod prompt;
pub mod recorder;

use std::io::{self, BufRead, Write};

use crate::operation::Operation;
use crate::recorder::{OperationRecord, Recorder};

/// Текст приветствия.
const WELCOME: &str = "Welcome to Data Operation Program";
/// Приглашение выбора операции.
const OPERATION_PROMPT: &str = "Enter operation type (A for Addition, S for Subtraction): ";
/// Приглашение ввода числа.
const NUMBER_PROMPT: &str = "Enter a number: ";

/// Запускает один цикл диалога на стандартных потоках ввода-вывода.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&mut stdin.lock(), &mut stdout.lock())
}

/// Проводит один цикл диалога: выбор операции, ввод числа, результат, запись.
///
/// Число читается и разбирается до проверки кода операции. Ошибки
/// пользовательского ввода печатаются в выходной поток и завершают цикл
/// без выполнения операции; результатом вызова они не считаются.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
///
/// # Примеры
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("A\n5\n");
/// let mut output = Vec::new();
/// dataops_rs::session(&mut input, &mut output).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Result: 15"));
/// ```
pub fn session<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{WELCOME}")?;

    let selector = prompt::ask(input, out, OPERATION_PROMPT)?;
    let line = prompt::ask(input, out, NUMBER_PROMPT)?;

    let number = match prompt::parse_number(&line) {
        Ok(number) => number,
        Err(e) => {
            log::warn!("{e}");
            writeln!(out, "Error: {e}")?;
            return Ok(());
        }
    };

    let op = match Operation::from_selector(&selector) {
        Ok(op) => op,
        Err(e) => {
            log::warn!("{e}");
            writeln!(out, "Invalid operation type.")?;
            return Ok(());
        }
    };

    let output = op.apply(number);
    log::debug!("{}: {number} -> {output}", op.name());

    writeln!(out, "Result: {output}")?;

    let mut recorder = Recorder::new(&mut *out);
    recorder.record(&OperationRecord::new(op.code(), number, output))?;

    Ok(())
}
