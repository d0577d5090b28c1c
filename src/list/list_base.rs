//! `IndexedList`: упорядоченный список с доступом по индексу и набором
//! удобных операций: проверяемый доступ, поиск, срезы, фильтрация и
//! изменение диапазонов.
//!
//! Все операции синхронны и либо выполняются полностью, либо возвращают
//! [`ListError`] без изменения списка. Операции поиска с «мягким» результатом
//! (`index_of`, `first_or_none`, `remove` и т.п.) сообщают об отсутствии через
//! `Option`/`bool` и никогда не возвращают ошибку.

use std::{
    fmt,
    ops::Range,
    slice, vec,
};

use serde::{Deserialize, Serialize};

use super::{bounds, Sublist};
use crate::error::{ListError, ListResult};

/// Динамический список элементов одного типа с индексами `[0, len)`.
///
/// Индексы на входе знаковые (`isize`): отрицательная позиция представима и
/// отклоняется ошибкой [`ListError::IndexOutOfBounds`]. Индексы, которые
/// возвращают операции поиска, всегда валидны и имеют тип `usize`.
///
/// Ограничения на `E` задаются на уровне методов: `PartialEq` для поиска по
/// значению, `Clone` для операций, возвращающих копии, `Default` для
/// [`set_length`](IndexedList::set_length), `Display` для
/// [`to_list_string`](IndexedList::to_list_string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexedList<E> {
    items: Vec<E>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<E> IndexedList<E> {
    /// Создаёт пустой список.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Все элементы списка в виде среза.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, E> {
        self.items.iter_mut()
    }

    pub fn into_vec(self) -> Vec<E> {
        self.items
    }

    /// Возвращает элемент по индексу.
    ///
    /// # Ошибки
    /// [`ListError::IndexOutOfBounds`], если `index < 0 || index >= len`.
    pub fn get(
        &self,
        index: isize,
    ) -> ListResult<&E> {
        let i = bounds::element_index(index, self.len())?;
        Ok(&self.items[i])
    }

    pub fn get_mut(
        &mut self,
        index: isize,
    ) -> ListResult<&mut E> {
        let i = bounds::element_index(index, self.len())?;
        Ok(&mut self.items[i])
    }

    /// Заменяет элемент по индексу.
    ///
    /// # Ошибки
    /// [`ListError::IndexOutOfBounds`], если `index < 0 || index >= len`.
    pub fn set(
        &mut self,
        index: isize,
        value: E,
    ) -> ListResult<()> {
        let i = bounds::element_index(index, self.len())?;
        self.items[i] = value;
        Ok(())
    }

    /// Первый элемент; [`ListError::ListIsEmpty`] для пустого списка.
    pub fn first(&self) -> ListResult<&E> {
        self.items.first().ok_or(ListError::ListIsEmpty)
    }

    pub fn set_first(
        &mut self,
        value: E,
    ) -> ListResult<()> {
        let slot = self.items.first_mut().ok_or(ListError::ListIsEmpty)?;
        *slot = value;
        Ok(())
    }

    /// Последний элемент; [`ListError::ListIsEmpty`] для пустого списка.
    pub fn last(&self) -> ListResult<&E> {
        self.items.last().ok_or(ListError::ListIsEmpty)
    }

    pub fn set_last(
        &mut self,
        value: E,
    ) -> ListResult<()> {
        let slot = self.items.last_mut().ok_or(ListError::ListIsEmpty)?;
        *slot = value;
        Ok(())
    }

    /// Добавляет элемент в конец списка.
    pub fn add(
        &mut self,
        item: E,
    ) {
        self.items.push(item);
    }

    /// Добавляет все элементы в конец списка, сохраняя их порядок.
    pub fn add_all<I>(
        &mut self,
        items: I,
    ) where
        I: IntoIterator<Item = E>,
    {
        self.items.extend(items);
    }

    /// Вставляет элемент перед позицией `index`. `index == len` означает
    /// вставку в конец.
    ///
    /// # Ошибки
    /// [`ListError::IndexOutOfBounds`], если `index < 0 || index > len`.
    pub fn insert(
        &mut self,
        index: isize,
        element: E,
    ) -> ListResult<()> {
        let i = bounds::insert_index(index, self.len())?;
        self.items.insert(i, element);
        Ok(())
    }

    /// Вставляет элементы перед позицией `index`, сохраняя их взаимный
    /// порядок. Проверка позиции такая же, как у [`insert`](Self::insert).
    pub fn insert_all<I>(
        &mut self,
        index: isize,
        elements: I,
    ) -> ListResult<()>
    where
        I: IntoIterator<Item = E>,
    {
        let i = bounds::insert_index(index, self.len())?;
        self.items.splice(i..i, elements);
        Ok(())
    }

    /// Перезаписывает `elements.len()` подряд идущих позиций, начиная с
    /// `index`.
    ///
    /// # Ошибки
    /// [`ListError::IndexOutOfBounds`], если `index < 0` или
    /// `index + elements.len() > len`. При ошибке список не меняется.
    pub fn set_all<I>(
        &mut self,
        index: isize,
        elements: I,
    ) -> ListResult<()>
    where
        I: IntoIterator<Item = E>,
    {
        let elements: Vec<E> = elements.into_iter().collect();
        let len = self.len();
        let start = match usize::try_from(index) {
            Ok(s) if s.checked_add(elements.len()).is_some_and(|end| end <= len) => s,
            _ => {
                tracing::trace!(index, count = elements.len(), len, "set_all rejected");
                return Err(ListError::IndexOutOfBounds { index, len });
            }
        };
        for (slot, value) in self.items[start..].iter_mut().zip(elements) {
            *slot = value;
        }
        Ok(())
    }

    /// Удаляет и возвращает элемент по индексу.
    ///
    /// # Ошибки
    /// [`ListError::IndexOutOfBounds`], если `index < 0 || index >= len`.
    pub fn remove_at(
        &mut self,
        index: isize,
    ) -> ListResult<E> {
        let i = bounds::element_index(index, self.len())?;
        Ok(self.items.remove(i))
    }

    /// Удаляет и возвращает последний элемент.
    ///
    /// Для пустого списка возвращает [`ListError::ListIsEmpty`], как и
    /// остальные операции над первым/последним элементом.
    pub fn remove_last(&mut self) -> ListResult<E> {
        self.items.pop().ok_or(ListError::ListIsEmpty)
    }

    /// Удаляет и возвращает первый элемент, удовлетворяющий предикату.
    ///
    /// # Ошибки
    /// [`ListError::IndexOutOfBounds`] с `index == -1`, если совпадений нет.
    pub fn remove_where<P>(
        &mut self,
        predicate: P,
    ) -> ListResult<E>
    where
        P: FnMut(&E) -> bool,
    {
        let i = self.index_where(predicate)?;
        Ok(self.items.remove(i))
    }

    /// Оставляет только элементы, удовлетворяющие предикату.
    pub fn retain_where<P>(
        &mut self,
        predicate: P,
    ) where
        P: FnMut(&E) -> bool,
    {
        let before = self.len();
        self.items.retain(predicate);
        tracing::debug!(before, after = self.len(), "retain_where");
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Индекс первого элемента, удовлетворяющего предикату.
    ///
    /// В отличие от [`index_of`](Self::index_of), отсутствие совпадения
    /// считается ошибкой: [`ListError::IndexOutOfBounds`] с `index == -1`.
    pub fn index_where<P>(
        &self,
        predicate: P,
    ) -> ListResult<usize>
    where
        P: FnMut(&E) -> bool,
    {
        self.items
            .iter()
            .position(predicate)
            .ok_or_else(|| self.no_match("index_where"))
    }

    /// Индекс последнего элемента, удовлетворяющего предикату.
    ///
    /// Просматривает список от конца до индекса 0 включительно.
    pub fn last_index_where<P>(
        &self,
        predicate: P,
    ) -> ListResult<usize>
    where
        P: FnMut(&E) -> bool,
    {
        self.items
            .iter()
            .rposition(predicate)
            .ok_or_else(|| self.no_match("last_index_where"))
    }

    /// Все индексы элементов, удовлетворяющих предикату, по возрастанию.
    pub fn indices_where<P>(
        &self,
        mut predicate: P,
    ) -> Vec<usize>
    where
        P: FnMut(&E) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| predicate(item).then_some(i))
            .collect()
    }

    pub fn any<P>(
        &self,
        predicate: P,
    ) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        self.items.iter().any(predicate)
    }

    pub fn first_or_none<P>(
        &self,
        mut predicate: P,
    ) -> Option<&E>
    where
        P: FnMut(&E) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn last_or_none<P>(
        &self,
        mut predicate: P,
    ) -> Option<&E>
    where
        P: FnMut(&E) -> bool,
    {
        self.items.iter().rev().find(|item| predicate(item))
    }

    /// Живое представление диапазона `[start, end)`.
    ///
    /// Изменения через [`Sublist`] видны в этом списке; `clear` на
    /// представлении удаляет диапазон из списка.
    ///
    /// # Ошибки
    /// [`ListError::InvalidRange`], если не выполнено
    /// `0 <= start <= end <= len`.
    pub fn sublist(
        &mut self,
        start: isize,
        end: isize,
    ) -> ListResult<Sublist<'_, E>> {
        let Range { start: s, end: e } = bounds::range(start, end, self.len())?;
        Ok(Sublist::new(&mut self.items, s, e))
    }

    /// Перезаписывает диапазон `[start, end)` элементами `elements`.
    ///
    /// # Ошибки
    /// [`ListError::InvalidRange`], если диапазон некорректен или число
    /// элементов не равно `end - start`. При ошибке список не меняется.
    pub fn set_range<I>(
        &mut self,
        start: isize,
        end: isize,
        elements: I,
    ) -> ListResult<()>
    where
        I: IntoIterator<Item = E>,
    {
        let range = bounds::range(start, end, self.len())?;
        let elements: Vec<E> = elements.into_iter().collect();
        if elements.len() != range.len() {
            tracing::trace!(start, end, count = elements.len(), "set_range rejected");
            return Err(ListError::count_mismatch(start, end, elements.len()));
        }
        for (slot, value) in self.items[range].iter_mut().zip(elements) {
            *slot = value;
        }
        Ok(())
    }

    /// Удаляет диапазон `[start, end)`, сдвигая последующие элементы влево.
    pub fn remove_range(
        &mut self,
        start: isize,
        end: isize,
    ) -> ListResult<()> {
        let mut window = self.sublist(start, end)?;
        let removed = window.len();
        window.clear();
        tracing::debug!(start, end, removed, "remove_range");
        Ok(())
    }

    fn no_match(
        &self,
        operation: &'static str,
    ) -> ListError {
        tracing::trace!(operation, len = self.len(), "no element matched");
        ListError::no_match(self.len())
    }
}

impl<E: Default> IndexedList<E> {
    /// Устанавливает длину списка.
    ///
    /// При увеличении добавляет `new_length - len` значений `E::default()`
    /// (для `IndexedList<Option<T>>` это `None`), при уменьшении отбрасывает
    /// хвост `[new_length, len)`.
    ///
    /// # Ошибки
    /// [`ListError::NegativeLength`], если `new_length < 0`.
    pub fn set_length(
        &mut self,
        new_length: isize,
    ) -> ListResult<()> {
        let Ok(target) = usize::try_from(new_length) else {
            tracing::trace!(new_length, "negative length rejected");
            return Err(ListError::NegativeLength {
                requested: new_length,
            });
        };
        let current = self.len();
        self.items.resize_with(target, E::default);
        tracing::debug!(from = current, to = target, "set_length");
        Ok(())
    }
}

impl<E: PartialEq> IndexedList<E> {
    /// Индекс первого элемента, равного `element`, или `None`.
    pub fn index_of(
        &self,
        element: &E,
    ) -> Option<usize> {
        self.items.iter().position(|item| item == element)
    }

    /// Индекс последнего элемента, равного `element`, или `None`.
    pub fn last_index_of(
        &self,
        element: &E,
    ) -> Option<usize> {
        self.items.iter().rposition(|item| item == element)
    }

    pub fn contains(
        &self,
        element: &E,
    ) -> bool {
        self.items.contains(element)
    }

    /// Удаляет первое вхождение `value`. Возвращает `true`, если элемент был
    /// удалён.
    pub fn remove(
        &mut self,
        value: &E,
    ) -> bool {
        match self.index_of(value) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }
}

impl<E: Clone> IndexedList<E> {
    /// Новый список с элементами в обратном порядке. Исходный список не
    /// меняется.
    pub fn reversed(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Новый список из элементов, удовлетворяющих предикату, в исходном
    /// порядке.
    pub fn filtered<P>(
        &self,
        mut predicate: P,
    ) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Независимая копия диапазона `[start, end)`.
    ///
    /// # Ошибки
    /// [`ListError::InvalidRange`], если не выполнено
    /// `0 <= start <= end <= len`.
    pub fn get_range(
        &self,
        start: isize,
        end: isize,
    ) -> ListResult<Self> {
        let range = bounds::range(start, end, self.len())?;
        Ok(Self::from(self.items[range].to_vec()))
    }

    /// Конкатенация: элементы `self`, затем элементы `other`. Оба операнда
    /// остаются без изменений.
    pub fn plus(
        &self,
        other: &Self,
    ) -> Self {
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend_from_slice(&self.items);
        items.extend_from_slice(&other.items);
        Self { items }
    }

    /// Заполняет диапазон `[start, end)` копиями `value`.
    ///
    /// # Ошибки
    /// [`ListError::InvalidRange`], если не выполнено
    /// `0 <= start <= end <= len`.
    pub fn fill_with_item(
        &mut self,
        value: E,
        start: isize,
        end: isize,
    ) -> ListResult<()> {
        let range = bounds::range(start, end, self.len())?;
        self.items[range].fill(value);
        Ok(())
    }
}

impl<E: fmt::Display> IndexedList<E> {
    /// Строковое представление вида `[a, b, c]`.
    pub fn to_list_string(&self) -> String {
        self.to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для IndexedList
////////////////////////////////////////////////////////////////////////////////

impl<E> Default for IndexedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for IndexedList<E> {
    fn from(items: Vec<E>) -> Self {
        Self { items }
    }
}

impl<E> From<IndexedList<E>> for Vec<E> {
    fn from(list: IndexedList<E>) -> Self {
        list.items
    }
}

impl<E> AsRef<[E]> for IndexedList<E> {
    fn as_ref(&self) -> &[E] {
        &self.items
    }
}

impl<E> FromIterator<E> for IndexedList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for IndexedList<E> {
    fn extend<I: IntoIterator<Item = E>>(
        &mut self,
        iter: I,
    ) {
        self.items.extend(iter);
    }
}

impl<E> IntoIterator for IndexedList<E> {
    type Item = E;
    type IntoIter = vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a IndexedList<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, E> IntoIterator for &'a mut IndexedList<E> {
    type Item = &'a mut E;
    type IntoIter = slice::IterMut<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<E: fmt::Display> fmt::Display for IndexedList<E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
