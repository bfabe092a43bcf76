//! Операции над числами: выбор по коду и применение.
//!
//! Набор операций закрытый: два варианта, каждый задаёт чистое
//! преобразование целого числа.
//!
//! # Примеры
//!
//! ```
//! use dataops_rs::operation::Operation;
//!
//! assert_eq!(Operation::Addition.apply(5), 15);
//! assert_eq!(Operation::Subtraction.apply(5), 0);
//!
//! let op = Operation::from_selector("a").unwrap();
//! assert_eq!(op, Operation::Addition);
//! ```

use thiserror::Error;

/// Ошибка выбора операции: код не входит в набор.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation code '{found}'")]
pub struct SelectorError {
    /// Введённый пользователем код.
    pub found: String,
}

/// Вид операции над входным числом.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Прибавляет 10 к входному числу.
    Addition,
    /// Вычитает 5 из входного числа.
    Subtraction,
}

impl Operation {
    /// Выбирает операцию по односимвольному коду без учёта регистра.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`SelectorError`], если код не равен `A` или `S`.
    pub fn from_selector(selector: &str) -> Result<Self, SelectorError> {
        match selector.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::Addition),
            "S" => Ok(Self::Subtraction),
            _ => Err(SelectorError {
                found: selector.to_string(),
            }),
        }
    }

    /// Применяет операцию к входному числу.
    ///
    /// Преобразование тотально: переполнение не проверяется,
    /// арифметика заворачивается (wrapping).
    #[must_use]
    pub const fn apply(self, input: i64) -> i64 {
        match self {
            Self::Addition => input.wrapping_add(10),
            Self::Subtraction => input.wrapping_sub(5),
        }
    }

    /// Нормализованный односимвольный код операции (`A` или `S`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Addition => 'A',
            Self::Subtraction => 'S',
        }
    }

    /// Имя операции для диагностики.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
        }
    }
}
