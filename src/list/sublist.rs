use std::{fmt, slice};

use super::bounds;
use crate::{error::ListResult, IndexedList};

/// Живое представление диапазона `[start, end)` списка.
///
/// `Sublist` заимствует буфер исходного [`IndexedList`] на запись: любые
/// изменения через представление сразу видны в исходном списке, а сам список
/// недоступен, пока представление живо.
///
/// Поддерживаемые операции:
/// - чтение и запись по индексу относительно начала представления;
/// - [`clear`](Sublist::clear): удаляет элементы окна из исходного списка;
/// - [`sublist`](Sublist::sublist): вложенное представление.
///
/// Для независимой копии используйте [`to_list`](Sublist::to_list) или
/// [`IndexedList::get_range`].
pub struct Sublist<'a, E> {
    items: &'a mut Vec<E>,
    start: usize,
    /// Число элементов буфера после окна. Конец окна вычисляется как
    /// `items.len() - tail`, поэтому он остаётся корректным после `clear`
    /// вложенного представления.
    tail: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<'a, E> Sublist<'a, E> {
    pub(crate) fn new(
        items: &'a mut Vec<E>,
        start: usize,
        end: usize,
    ) -> Self {
        let tail = items.len() - end;
        Self { items, start, tail }
    }

    fn end(&self) -> usize {
        self.items.len() - self.tail
    }

    pub fn len(&self) -> usize {
        self.end() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Элемент по индексу относительно начала представления.
    pub fn get(
        &self,
        index: isize,
    ) -> ListResult<&E> {
        let i = bounds::element_index(index, self.len())?;
        Ok(&self.items[self.start + i])
    }

    /// Записывает значение; изменение видно в исходном списке.
    pub fn set(
        &mut self,
        index: isize,
        value: E,
    ) -> ListResult<()> {
        let i = bounds::element_index(index, self.len())?;
        self.items[self.start + i] = value;
        Ok(())
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items[self.start..self.end()]
    }

    pub fn as_mut_slice(&mut self) -> &mut [E] {
        let end = self.end();
        &mut self.items[self.start..end]
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.as_slice().iter()
    }

    /// Удаляет все элементы окна из исходного списка. Последующие элементы
    /// сдвигаются влево, длина источника уменьшается на `len()`.
    pub fn clear(&mut self) {
        let end = self.end();
        self.items.drain(self.start..end);
    }

    /// Вложенное живое представление `[start, end)` относительно начала
    /// текущего окна.
    pub fn sublist(
        &mut self,
        start: isize,
        end: isize,
    ) -> ListResult<Sublist<'_, E>> {
        let range = bounds::range(start, end, self.len())?;
        let base = self.start;
        Ok(Sublist::new(
            &mut *self.items,
            base + range.start,
            base + range.end,
        ))
    }

    /// Независимая копия окна.
    pub fn to_list(&self) -> IndexedList<E>
    where
        E: Clone,
    {
        IndexedList::from(self.as_slice().to_vec())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для Sublist
////////////////////////////////////////////////////////////////////////////////

impl<E: fmt::Debug> fmt::Debug for Sublist<'_, E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'s, E> IntoIterator for &'s Sublist<'_, E> {
    type Item = &'s E;
    type IntoIter = slice::Iter<'s, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::{IndexedList, ListError};

    fn digits() -> IndexedList<u32> {
        (0..10).collect()
    }

    /// Тест проверяет, что запись через представление видна в источнике.
    #[test]
    fn test_set_through_view_is_visible() {
        let mut list = digits();
        {
            let mut view = list.sublist(2, 5).unwrap();
            assert_eq!(view.len(), 3);
            assert_eq!(view.get(0), Ok(&2));
            view.set(1, 30).unwrap();
            view.as_mut_slice()[2] = 40;
        }
        assert_eq!(list.as_slice(), &[0, 1, 2, 30, 40, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_view_indices_are_relative() {
        let mut list = digits();
        let view = list.sublist(7, 10).unwrap();
        assert_eq!(view.get(2), Ok(&9));
        assert_eq!(
            view.get(3),
            Err(ListError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(view.get(-1).is_err());
    }

    /// Тест проверяет, что `clear` удаляет ровно окно из исходного списка.
    #[test]
    fn test_clear_removes_window_from_source() {
        let mut list = digits();
        let mut view = list.sublist(3, 6).unwrap();
        view.clear();
        assert!(view.is_empty());
        assert_eq!(list.len(), 7);
        assert_eq!(list.as_slice(), &[0, 1, 2, 6, 7, 8, 9]);
    }

    /// Тест проверяет, что внешнее окно остаётся согласованным после очистки
    /// вложенного.
    #[test]
    fn test_nested_clear_keeps_parent_consistent() {
        let mut list = digits();
        {
            let mut outer = list.sublist(2, 8).unwrap();
            outer.sublist(1, 3).unwrap().clear();
            assert_eq!(outer.len(), 4);
            assert_eq!(outer.as_slice(), &[2, 5, 6, 7]);
            outer.set(3, 70).unwrap();
        }
        assert_eq!(list.as_slice(), &[0, 1, 2, 5, 6, 70, 8, 9]);
    }

    #[test]
    fn test_nested_range_is_checked_against_view() {
        let mut list = digits();
        let mut view = list.sublist(0, 4).unwrap();
        assert!(matches!(
            view.sublist(2, 5),
            Err(ListError::InvalidRange { start: 2, end: 5, .. })
        ));
    }

    #[test]
    fn test_to_list_is_a_copy() {
        let mut list = digits();
        let mut copy = list.sublist(0, 3).unwrap().to_list();
        copy.set(0, 100).unwrap();
        assert_eq!(list.get(0), Ok(&0));
        assert_eq!(format!("{:?}", list.sublist(0, 3).unwrap()), "[0, 1, 2]");
    }
}
