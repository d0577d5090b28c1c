//! Проверки индексов и диапазонов, общие для `IndexedList` и `Sublist`.
//!
//! Индексы принимаются со знаком (`isize`), чтобы отрицательные позиции были
//! представимы и отклонялись ошибкой, а не переполнением.

use std::ops::Range;

use crate::error::{ListError, ListResult};

/// Индекс существующего элемента: `0 <= index < len`.
pub(crate) fn element_index(
    index: isize,
    len: usize,
) -> ListResult<usize> {
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => {
            tracing::trace!(index, len, "index rejected");
            Err(ListError::IndexOutOfBounds { index, len })
        }
    }
}

/// Позиция вставки: `0 <= index <= len` (вставка в конец разрешена).
pub(crate) fn insert_index(
    index: isize,
    len: usize,
) -> ListResult<usize> {
    match usize::try_from(index) {
        Ok(i) if i <= len => Ok(i),
        _ => {
            tracing::trace!(index, len, "insert position rejected");
            Err(ListError::IndexOutOfBounds { index, len })
        }
    }
}

/// Полуоткрытый диапазон: `0 <= start <= end <= len`.
pub(crate) fn range(
    start: isize,
    end: isize,
    len: usize,
) -> ListResult<Range<usize>> {
    match (usize::try_from(start), usize::try_from(end)) {
        (Ok(s), Ok(e)) if s <= e && e <= len => Ok(s..e),
        _ => {
            tracing::trace!(start, end, len, "range rejected");
            Err(ListError::range_out_of_bounds(start, end, len))
        }
    }
}
