use std::any::Any;

use easylist_error::{ErrorExt, StatusCode};
use thiserror::Error;

pub type ListResult<T> = Result<T, ListError>;

/// Ошибки операций над [`IndexedList`](crate::IndexedList) и его
/// представлениями.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Индекс вне допустимых границ. Также возвращается поиском с
    /// обязательным совпадением, если ни один элемент не подошёл; в этом
    /// случае `index == -1`.
    #[error("Index out of bounds: {index} for length {len}")]
    IndexOutOfBounds { index: isize, len: usize },

    #[error("List is empty")]
    ListIsEmpty,

    /// Нарушено условие `0 <= start <= end <= len` или число элементов не
    /// совпадает с размером диапазона.
    #[error("Invalid start or end index [{start}, {end}): {reason}")]
    InvalidRange {
        start: isize,
        end: isize,
        reason: String,
    },

    #[error("New length must be non-negative: {requested}")]
    NegativeLength { requested: isize },
}

impl ListError {
    /// Ошибка поиска, не нашедшего ни одного подходящего элемента.
    pub(crate) fn no_match(len: usize) -> Self {
        Self::IndexOutOfBounds { index: -1, len }
    }

    pub(crate) fn range_out_of_bounds(
        start: isize,
        end: isize,
        len: usize,
    ) -> Self {
        Self::InvalidRange {
            start,
            end,
            reason: format!("out of bounds for length {len}"),
        }
    }

    pub(crate) fn count_mismatch(
        start: isize,
        end: isize,
        actual: usize,
    ) -> Self {
        Self::InvalidRange {
            start,
            end,
            reason: format!("expected {} elements, got {actual}", end - start),
        }
    }
}

impl ErrorExt for ListError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::IndexOutOfBounds { .. } => StatusCode::IndexOutOfBounds,
            Self::ListIsEmpty => StatusCode::ListIsEmpty,
            Self::InvalidRange { .. } => StatusCode::InvalidRange,
            Self::NegativeLength { .. } => StatusCode::NegativeLength,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
